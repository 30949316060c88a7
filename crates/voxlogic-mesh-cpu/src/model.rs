use std::hash::BuildHasher;
use std::path::Path;

use hashbrown::HashMap;
use hashbrown::hash_map::DefaultHashBuilder;
use voxlogic_blocks::ModelId;
use voxlogic_chunk::{BlockGrid, CHUNK_SIZE, Mesh};
use voxlogic_geom::Vec3;

use crate::MeshBuild;
use crate::greedy::mesh_greedy;

/// Custom block geometry: a chunk-shaped grid and its prerendered triangles.
#[derive(Clone, Debug)]
pub struct Model {
    grid: BlockGrid,
    mesh: Mesh,
}

impl Model {
    /// Renders `grid` at unit scale. Model blocks inside it must already be in `store`.
    pub fn build(grid: BlockGrid, store: &ModelStore) -> Self {
        let mut out = MeshBuild::default();
        mesh_greedy(&grid, store, Vec3::ZERO, 1.0, &mut out);
        Self {
            grid,
            mesh: out.into_mesh(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// This model's grid turned `turns` quarter turns about +Y.
    pub fn rotated(&self, turns: u8) -> BlockGrid {
        rotate_grid(&self.grid, turns)
    }

    /// Position floats this model adds to a chunk mesh per instance.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.mesh.float_count()
    }
}

/// Contents of `grid` turned `turns` quarter turns about +Y.
pub fn rotate_grid(grid: &BlockGrid, turns: u8) -> BlockGrid {
    let last = CHUNK_SIZE - 1;
    let mut out = BlockGrid::new();
    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let (sx, sz) = match turns & 3 {
                    0 => (x, z),
                    1 => (last - z, x),
                    2 => (last - x, last - z),
                    _ => (z, last - x),
                };
                out.set(x, y, z, *grid.get(sx, y, sz));
            }
        }
    }
    out
}

/// Arena of models addressed by [`ModelId`]; identical grids share one entry.
#[derive(Default)]
pub struct ModelStore {
    models: Vec<Model>,
    by_hash: HashMap<u64, Vec<ModelId>>,
    hasher: DefaultHashBuilder,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Builds and stores a model for `grid`, or returns the id of an identical one.
    pub fn insert(&mut self, grid: BlockGrid) -> ModelId {
        let h = self.hasher.hash_one(&grid);
        if let Some(ids) = self.by_hash.get(&h) {
            for id in ids {
                if self.models[id.0 as usize].grid == grid {
                    return *id;
                }
            }
        }
        let model = Model::build(grid, self);
        let id = ModelId(self.models.len() as u32);
        self.models.push(model);
        self.by_hash.entry(h).or_default().push(id);
        id
    }

    /// Stores the quarter-turn variant of an existing model.
    pub fn insert_rotated(&mut self, id: ModelId, turns: u8) -> Option<ModelId> {
        let grid = self.get(id)?.rotated(turns);
        Some(self.insert(grid))
    }

    /// Reads a grid file and stores it as a model.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<ModelId, voxlogic_io::RleError> {
        let grid = voxlogic_io::load_grid(path)?;
        Ok(self.insert(grid))
    }
}
