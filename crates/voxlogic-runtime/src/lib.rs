//! Background simulation thread and parallel chunk remeshing.
#![forbid(unsafe_code)]

mod logic_thread;
mod remesh;

pub use logic_thread::{LogicOptions, LogicThread, TickReport};
pub use remesh::{RemeshPool, remesh_dirty};
