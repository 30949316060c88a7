use serde::{Deserialize, Serialize};
use voxlogic_geom::{Mat4, Vec3};

use crate::CHUNK_WIDTH;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Linear index in a cube of `size` chunks per edge, x outermost.
    #[inline]
    pub fn index_in(self, size: usize) -> Option<usize> {
        let n = size as i32;
        let inside = |v: i32| (0..n).contains(&v);
        if inside(self.cx) && inside(self.cy) && inside(self.cz) {
            Some(((self.cx * n + self.cy) * n + self.cz) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index_in(index: usize, size: usize) -> Self {
        let n = size;
        Self::new(
            (index / (n * n)) as i32,
            ((index / n) % n) as i32,
            (index % n) as i32,
        )
    }

    /// World-space position of the chunk's minimum corner.
    #[inline]
    pub fn origin(self) -> Vec3 {
        Vec3::new(
            self.cx as f32 * CHUNK_WIDTH,
            self.cy as f32 * CHUNK_WIDTH,
            self.cz as f32 * CHUNK_WIDTH,
        )
    }

    /// Model matrix placing chunk-local mesh coordinates in the world.
    #[inline]
    pub fn model_matrix(self) -> Mat4 {
        Mat4::translation(self.origin())
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
