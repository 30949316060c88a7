use crate::color::Color;
use crate::logic::Logic;

/// Handle to a model in the mesher's model store.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u32);

/// One grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub active: bool,
    pub color: Color,
    /// Custom geometry drawn instead of a cube; never occludes its neighbors.
    pub model: Option<ModelId>,
    pub logic: Option<Logic>,
}

impl Block {
    pub const AIR: Block = Block {
        active: false,
        color: Color::CLEAR,
        model: None,
        logic: None,
    };

    #[inline]
    pub const fn solid(color: Color) -> Self {
        Block {
            active: true,
            color,
            model: None,
            logic: None,
        }
    }

    /// Active block drawn with `model`.
    #[inline]
    pub const fn with_model(model: ModelId) -> Self {
        Block {
            active: true,
            color: Color::GATE,
            model: Some(model),
            logic: None,
        }
    }

    /// Active block carrying a logic component; its model is chosen by the simulation.
    #[inline]
    pub const fn with_logic(logic: Logic) -> Self {
        Block {
            active: true,
            color: Color::GATE,
            model: None,
            logic: Some(logic),
        }
    }

    /// Grid-file cell: active iff the color is not all zero.
    #[inline]
    pub const fn from_color(color: Color) -> Self {
        if color.is_clear() {
            Block::AIR
        } else {
            Block::solid(color)
        }
    }

    #[inline]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// True if this block hides the touching face of an active neighbor.
    #[inline]
    pub fn occludes(&self) -> bool {
        self.active && self.model.is_none()
    }
}
