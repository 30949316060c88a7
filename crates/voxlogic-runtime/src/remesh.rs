use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use voxlogic_chunk::World;
use voxlogic_mesh_cpu::Mesher;

/// Remeshes every dirty chunk in parallel on the current rayon pool and clears the
/// flags. Returns how many chunks were rebuilt.
pub fn remesh_dirty(world: &mut World, mesher: &Mesher) -> usize {
    let t0 = Instant::now();
    let n: usize = world
        .chunks_mut()
        .par_iter_mut()
        .filter(|c| c.dirty)
        .map(|c| {
            mesher.render_chunk(c);
            1
        })
        .sum();
    if n > 0 {
        log::info!(
            target: "perf",
            "ms={} remesh_dirty_par chunks={} mode={:?}",
            t0.elapsed().as_millis(),
            n,
            mesher.mode
        );
    }
    n
}

/// Dedicated worker pool for chunk meshing.
pub struct RemeshPool {
    pool: ThreadPool,
}

impl RemeshPool {
    pub fn new(threads: usize) -> Self {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("voxlogic-mesh-{i}"))
            .build()
            .expect("mesh pool");
        Self { pool }
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn remesh_dirty(&self, world: &mut World, mesher: &Mesher) -> usize {
        self.pool.install(|| remesh_dirty(world, mesher))
    }
}
