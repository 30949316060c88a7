//! Chunked voxel grid: fixed-size chunks, the world that owns them and precomputed neighbor handles.
#![forbid(unsafe_code)]

mod chunk_coord;
mod grid;
mod mesh;
mod neighbors;
mod world;

pub use chunk_coord::ChunkCoord;
pub use grid::{BlockGrid, Chunk, local_coords, local_index};
pub use mesh::{Mesh, Primitive};
pub use neighbors::{BlockRef, NeighborTable};
pub use world::{World, fill_world};

pub const LOG_CHUNK_SIZE: usize = 4;
/// Blocks per chunk edge.
pub const CHUNK_SIZE: usize = 1 << LOG_CHUNK_SIZE;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
/// Edge length of one block in world units.
pub const BLOCK_WIDTH: f32 = 0.05;
pub const CHUNK_WIDTH: f32 = CHUNK_SIZE as f32 * BLOCK_WIDTH;
/// Chunks per world edge.
pub const WORLD_SIZE: usize = 6;
pub const WORLD_BLOCKS: usize = WORLD_SIZE * CHUNK_SIZE;
