use serde::{Deserialize, Serialize};
use voxlogic_geom::orientation_index;

use crate::face::FaceMask;

/// Circuit element kinds. The discriminant is the kind id used by model files.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    Wire = 0,
    Bridge = 1,
    Connect4 = 2,
    Connect3 = 3,
    SingleL = 4,
    DoubleL = 5,
    Diode = 6,
    Not = 7,
    And = 8,
    Or = 9,
    Xor = 10,
    Constant = 11,
    Connect3Bidirectional = 12,
    ColorOutput = 13,
}

impl GateKind {
    pub const COUNT: usize = 14;

    pub const ALL: [GateKind; GateKind::COUNT] = [
        GateKind::Wire,
        GateKind::Bridge,
        GateKind::Connect4,
        GateKind::Connect3,
        GateKind::SingleL,
        GateKind::DoubleL,
        GateKind::Diode,
        GateKind::Not,
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Constant,
        GateKind::Connect3Bidirectional,
        GateKind::ColorOutput,
    ];

    #[inline]
    pub fn id(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_id(id: usize) -> Option<GateKind> {
        GateKind::ALL.get(id).copied()
    }

    /// Next kind in id order, wrapping after the last.
    #[inline]
    pub fn next(self) -> GateKind {
        GateKind::ALL[(self.id() + 1) % GateKind::COUNT]
    }

    pub fn name(self) -> &'static str {
        match self {
            GateKind::Wire => "wire",
            GateKind::Bridge => "bridge",
            GateKind::Connect4 => "connect4",
            GateKind::Connect3 => "connect3",
            GateKind::SingleL => "single_l",
            GateKind::DoubleL => "double_l",
            GateKind::Diode => "diode",
            GateKind::Not => "not",
            GateKind::And => "and",
            GateKind::Or => "or",
            GateKind::Xor => "xor",
            GateKind::Constant => "constant",
            GateKind::Connect3Bidirectional => "connect3_bidirectional",
            GateKind::ColorOutput => "color_output",
        }
    }
}

/// Quarter-turn counts about +Z (roll), +X (pitch) and +Y (yaw), each kept in `0..4`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    roll: u8,
    pitch: u8,
    yaw: u8,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation::new(0, 0, 0);

    #[inline]
    pub const fn new(roll: u8, pitch: u8, yaw: u8) -> Self {
        Self {
            roll: roll & 3,
            pitch: pitch & 3,
            yaw: yaw & 3,
        }
    }

    #[inline]
    pub const fn roll(self) -> u8 {
        self.roll
    }

    #[inline]
    pub const fn pitch(self) -> u8 {
        self.pitch
    }

    #[inline]
    pub const fn yaw(self) -> u8 {
        self.yaw
    }

    /// Index into the shared 64-entry rotation table.
    #[inline]
    pub const fn index(self) -> usize {
        orientation_index(self.roll, self.pitch, self.yaw)
    }

    #[inline]
    pub fn turned_roll(self) -> Self {
        Self::new(self.roll + 1, self.pitch, self.yaw)
    }

    #[inline]
    pub fn turned_pitch(self) -> Self {
        Self::new(self.roll, self.pitch + 1, self.yaw)
    }

    #[inline]
    pub fn turned_yaw(self) -> Self {
        Self::new(self.roll, self.pitch, self.yaw + 1)
    }

    /// All 64 orientations in search order: roll outermost, then pitch, then yaw.
    pub fn search_order() -> impl Iterator<Item = Orientation> {
        (0..4u8).flat_map(|roll| {
            (0..4u8).flat_map(move |pitch| (0..4u8).map(move |yaw| Orientation::new(roll, pitch, yaw)))
        })
    }
}

/// Per-block circuit state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Logic {
    pub kind: GateKind,
    pub orientation: Orientation,
    /// World-space faces currently receiving a signal.
    pub input: FaceMask,
    /// World-space faces currently driving a signal.
    pub output: FaceMask,
    /// Re-run orientation search when the gate is edited.
    pub auto_orient: bool,
    /// Rotation-table index applied when this block's model was last selected.
    pub transform: Option<u8>,
}

impl Logic {
    pub fn new(kind: GateKind) -> Self {
        Self {
            kind,
            orientation: Orientation::IDENTITY,
            input: FaceMask::EMPTY,
            output: FaceMask::EMPTY,
            auto_orient: false,
            transform: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_auto_orient(mut self, on: bool) -> Self {
        self.auto_orient = on;
        self
    }
}
