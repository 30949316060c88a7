use core::ops::{BitAnd, BitOr, Not};

use voxlogic_geom::Vec3;

/// Cube face, numbered by its bit in a [`FaceMask`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    NegZ = 0,
    NegX = 1,
    PosZ = 2,
    PosX = 3,
    NegY = 4,
    PosY = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::NegZ,
        Face::NegX,
        Face::PosZ,
        Face::PosX,
        Face::NegY,
        Face::PosY,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    #[inline]
    pub fn bit(self) -> u8 {
        1 << self as u8
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::NegZ => Face::PosZ,
            Face::NegX => Face::PosX,
            Face::PosZ => Face::NegZ,
            Face::PosX => Face::NegX,
            Face::NegY => Face::PosY,
            Face::PosY => Face::NegY,
        }
    }

    /// Grid step `(dx, dy, dz)` when leaving through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::NegZ => (0, 0, -1),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::PosX => (1, 0, 0),
            Face::NegY => (0, -1, 0),
            Face::PosY => (0, 1, 0),
        }
    }

    /// Axis index, 0 = x, 1 = y, 2 = z.
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Face::NegX | Face::PosX => 0,
            Face::NegY | Face::PosY => 1,
            Face::NegZ | Face::PosZ => 2,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Face::PosX | Face::PosY | Face::PosZ)
    }

    /// Face pointing along `axis` in the given direction.
    #[inline]
    pub fn from_axis(axis: usize, positive: bool) -> Face {
        match (axis, positive) {
            (0, false) => Face::NegX,
            (0, true) => Face::PosX,
            (1, false) => Face::NegY,
            (1, true) => Face::PosY,
            (_, false) => Face::NegZ,
            (_, true) => Face::PosZ,
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }
}

/// Six-bit set of faces; bit `i` is `Face::from_index(i)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FaceMask(u8);

impl FaceMask {
    pub const EMPTY: FaceMask = FaceMask(0);
    pub const ALL: FaceMask = FaceMask(0x3F);
    /// The four faces of the horizontal plane (bits 0..4).
    pub const PLANAR: FaceMask = FaceMask(0x0F);

    /// Builds a mask from raw bits; bits above the sixth are dropped.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        FaceMask(bits & 0x3F)
    }

    pub fn from_faces(faces: &[Face]) -> Self {
        faces.iter().fold(FaceMask::EMPTY, |m, f| m.with(*f))
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn get(self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    #[inline]
    pub fn set(&mut self, face: Face, on: bool) {
        if on {
            self.0 |= face.bit();
        } else {
            self.0 &= !face.bit();
        }
    }

    #[inline]
    pub fn with(mut self, face: Face) -> Self {
        self.set(face, true);
        self
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.get(*f))
    }
}

impl BitOr for FaceMask {
    type Output = FaceMask;
    fn bitor(self, rhs: FaceMask) -> FaceMask {
        FaceMask(self.0 | rhs.0)
    }
}

impl BitAnd for FaceMask {
    type Output = FaceMask;
    fn bitand(self, rhs: FaceMask) -> FaceMask {
        FaceMask(self.0 & rhs.0)
    }
}

impl Not for FaceMask {
    type Output = FaceMask;
    fn not(self) -> FaceMask {
        FaceMask(!self.0 & 0x3F)
    }
}
