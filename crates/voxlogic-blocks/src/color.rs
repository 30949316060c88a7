use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. The all-zero value marks an empty cell in grid files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CLEAR: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Default body color for model and logic blocks.
    pub const GATE: Color = Color::rgb(90, 90, 90);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn is_clear(self) -> bool {
        u32::from_le_bytes(self.to_bytes()) == 0
    }

    /// RGB channels scaled to `[0, 1]`; alpha is not carried into meshes.
    #[inline]
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Clears the low six bits of each color channel, used for the floor checkerboard.
    #[inline]
    pub const fn darkened(self) -> Self {
        Self::new(self.r & !63, self.g & !63, self.b & !63, self.a)
    }
}
