//! Block values, colors, faces and the per-block logic component.
#![forbid(unsafe_code)]

pub mod color;
pub mod face;
pub mod logic;
pub mod types;

pub use color::Color;
pub use face::{Face, FaceMask};
pub use logic::{GateKind, Logic, Orientation};
pub use types::{Block, ModelId};
