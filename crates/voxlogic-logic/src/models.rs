use std::path::Path;

use voxlogic_blocks::{Block, Color, Face, FaceMask, GateKind, ModelId};
use voxlogic_chunk::{BlockGrid, CHUNK_SIZE};
use voxlogic_mesh_cpu::ModelStore;

use crate::tables::{input_faces, output_faces, truth};

const BASE: Color = Color::rgb(128, 128, 128);
const BODY: Color = Color::rgb(72, 72, 96);
const POWERED: Color = Color::rgb(230, 40, 30);
const UNPOWERED: Color = Color::rgb(96, 24, 24);
const LAMP_ON: Color = Color::rgb(255, 220, 64);
const LAMP_OFF: Color = Color::rgb(64, 56, 32);

/// Model for every `(kind, canonical input)` pair.
#[derive(Clone, Debug)]
pub struct GateModels {
    ids: Vec<[ModelId; 64]>,
}

impl GateModels {
    /// Builds all gate models into `store`.
    ///
    /// With a `models_dir`, `models_dir/<kind id>/<input bits>` grid files replace the
    /// procedural geometry. Input bits are written high to low; for states without
    /// vertical inputs the four-digit planar name is accepted as well. Files that fail
    /// to load are logged and fall back to procedural geometry.
    pub fn build(store: &mut ModelStore, models_dir: Option<&Path>) -> Self {
        let mut loaded = 0usize;
        let mut ids = Vec::with_capacity(GateKind::COUNT);
        for kind in GateKind::ALL {
            let mut row = [ModelId(0); 64];
            for (n, slot) in row.iter_mut().enumerate() {
                let input = FaceMask::new(n as u8);
                let from_file = models_dir.and_then(|dir| load_model(store, dir, kind, input));
                *slot = match from_file {
                    Some(id) => {
                        loaded += 1;
                        id
                    }
                    None => store.insert(procedural_grid(kind, input)),
                };
            }
            ids.push(row);
        }
        log::info!(
            target: "logic",
            "gate models ready: {} from files, {} unique models",
            loaded,
            store.len()
        );
        Self { ids }
    }

    #[inline]
    pub fn get(&self, kind: GateKind, input: FaceMask) -> ModelId {
        self.ids[kind.id()][input.bits() as usize]
    }
}

fn model_paths(dir: &Path, kind: GateKind, input: FaceMask) -> Vec<std::path::PathBuf> {
    let kind_dir = dir.join(kind.id().to_string());
    let bits = input.bits();
    let mut out = vec![kind_dir.join(format!("{bits:06b}"))];
    if bits < 16 {
        out.push(kind_dir.join(format!("{bits:04b}")));
    }
    out
}

fn load_model(store: &mut ModelStore, dir: &Path, kind: GateKind, input: FaceMask) -> Option<ModelId> {
    let path = model_paths(dir, kind, input).into_iter().find(|p| p.is_file())?;
    match store.load(&path) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("failed to load gate model: {}", e);
            None
        }
    }
}

fn fill(grid: &mut BlockGrid, lo: [usize; 3], hi: [usize; 3], color: Color) {
    for x in lo[0]..hi[0] {
        for y in lo[1]..hi[1] {
            for z in lo[2]..hi[2] {
                grid.set(x, y, z, Block::solid(color));
            }
        }
    }
}

/// Default gate geometry: a base plate, a center post and one strip per arm, lit
/// where the arm carries a signal.
pub fn procedural_grid(kind: GateKind, input: FaceMask) -> BlockGrid {
    const LO: usize = 6;
    const HI: usize = 10;
    const TOP: usize = 3;
    let n = CHUNK_SIZE;
    let mut grid = BlockGrid::new();
    fill(&mut grid, [0, 0, 0], [n, 1, n], BASE);

    let input = input & input_faces(kind);
    let output = truth(kind, input);
    if kind == GateKind::ColorOutput {
        let lamp = if input.is_empty() {
            LAMP_OFF
        } else {
            LAMP_ON
        };
        fill(&mut grid, [3, 1, 3], [13, 11, 13], lamp);
        return grid;
    }

    let body = if kind.id() >= GateKind::Diode.id() && kind != GateKind::Connect3Bidirectional {
        BODY
    } else if (input | output).is_empty() {
        UNPOWERED
    } else {
        POWERED
    };
    fill(&mut grid, [LO, 1, LO], [HI, TOP, HI], body);

    for face in (input_faces(kind) | output_faces(kind)).faces() {
        let color = if input.get(face) || output.get(face) {
            POWERED
        } else {
            UNPOWERED
        };
        let (lo, hi) = match face {
            Face::NegZ => ([LO, 1, 0], [HI, TOP, LO]),
            Face::PosZ => ([LO, 1, HI], [HI, TOP, n]),
            Face::NegX => ([0, 1, LO], [LO, TOP, HI]),
            Face::PosX => ([HI, 1, LO], [n, TOP, HI]),
            Face::PosY => ([LO, TOP, LO], [HI, n, HI]),
            // the base plate already reaches the bottom face
            Face::NegY => continue,
        };
        fill(&mut grid, lo, hi, color);
    }
    grid
}
