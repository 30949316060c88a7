//! Circuit simulation: gate truth tables, face rotation, gate models and the tick engine.
#![forbid(unsafe_code)]

mod engine;
mod models;
mod orient;
mod rotate;
mod tables;

pub use engine::{SimulationEngine, TickStats};
pub use models::{GateModels, procedural_grid};
pub use orient::{auto_orient, best_orientation};
pub use rotate::{pitch, roll, rotate_face, rotate_inputs, rotate_outputs, yaw};
pub use tables::{input_faces, output_faces, truth, truth_table};
