//! CPU meshing crate: naive and greedy chunk meshers, model instancing and chunk culling.
#![forbid(unsafe_code)]

mod greedy;
mod instance;
mod mesh_build;
mod model;
mod naive;
mod visibility;

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;
use voxlogic_blocks::Block;
use voxlogic_chunk::{BlockGrid, Chunk, Mesh, World};
use voxlogic_geom::Vec3;

pub use greedy::mesh_greedy;
pub use mesh_build::MeshBuild;
pub use model::{Model, ModelStore, rotate_grid};
pub use naive::mesh_naive;
pub use visibility::{clip_corners_visible, is_visible};

/// Position floats emitted for a fully exposed plain cube: 6 faces, 2 triangles each.
pub const CUBE_FLOATS: usize = 6 * 2 * 3 * 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshMode {
    Naive,
    #[default]
    Greedy,
}

/// Upper bound on the position floats any mesher emits for `grid`: the model's point
/// count for model blocks, [`CUBE_FLOATS`] for every other active block.
pub fn count_chunk_size(grid: &BlockGrid, store: &ModelStore) -> usize {
    grid.blocks()
        .iter()
        .filter(|b| b.active)
        .map(|b| match b.model {
            Some(id) => store.get(id).map_or(0, Model::point_count),
            None => CUBE_FLOATS,
        })
        .sum()
}

/// Meshes `grid` into a fresh buffer with the chosen algorithm.
pub fn render_grid(
    grid: &BlockGrid,
    store: &ModelStore,
    mode: MeshMode,
    offset: Vec3,
    scale: f32,
) -> Mesh {
    let budget = count_chunk_size(grid, store);
    if budget == 0 {
        return Mesh::EMPTY;
    }
    let mut out = MeshBuild::with_capacity(budget);
    match mode {
        MeshMode::Naive => mesh_naive(grid, store, offset, scale, &mut out),
        MeshMode::Greedy => mesh_greedy(grid, store, offset, scale, &mut out),
    }
    debug_assert!(out.float_count() <= budget);
    out.into_mesh()
}

/// Chunk remeshing front end: a mesh mode plus the shared, read-only model store.
#[derive(Clone)]
pub struct Mesher {
    pub mode: MeshMode,
    models: Arc<ModelStore>,
}

impl Mesher {
    pub fn new(mode: MeshMode, models: Arc<ModelStore>) -> Self {
        Self { mode, models }
    }

    #[inline]
    pub fn models(&self) -> &ModelStore {
        &self.models
    }

    /// Chunk-local mesh; place it in the world with the chunk's model matrix.
    pub fn build_chunk_mesh(&self, chunk: &Chunk) -> Mesh {
        let t0 = Instant::now();
        let mesh = render_grid(&chunk.blocks, &self.models, self.mode, Vec3::ZERO, 1.0);
        let c = chunk.coord;
        log::debug!(
            target: "perf",
            "ms={:.3} mesh_chunk mode={:?} coord=({}, {}, {}) tris={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            self.mode,
            c.cx,
            c.cy,
            c.cz,
            mesh.triangle_count()
        );
        mesh
    }

    /// Regenerates `chunk`'s mesh, replacing the previous one, and clears its dirty flag.
    pub fn render_chunk(&self, chunk: &mut Chunk) {
        let mesh = self.build_chunk_mesh(chunk);
        chunk.replace_mesh(mesh);
    }

    /// Replaces one block and remeshes its chunk before returning. Neighbor wiring is
    /// unaffected. Returns the previous block, or `None` outside the world.
    pub fn set_block(
        &self,
        world: &mut World,
        x: i32,
        y: i32,
        z: i32,
        block: Block,
    ) -> Option<Block> {
        let r = world.block_ref(x, y, z)?;
        let old = world.replace(r, block);
        let chunk = &mut world.chunks_mut()[r.chunk()];
        self.render_chunk(chunk);
        Some(old)
    }

    /// Remeshes every dirty chunk on the calling thread; returns how many were rebuilt.
    pub fn remesh_dirty(&self, world: &mut World) -> usize {
        let t0 = Instant::now();
        let mut n = 0;
        for chunk in world.chunks_mut().iter_mut().filter(|c| c.dirty) {
            self.render_chunk(chunk);
            n += 1;
        }
        if n > 0 {
            log::info!(
                target: "perf",
                "ms={} remesh_dirty chunks={} mode={:?}",
                t0.elapsed().as_millis(),
                n,
                self.mode
            );
        }
        n
    }
}
