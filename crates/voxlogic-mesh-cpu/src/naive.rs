use voxlogic_blocks::Face;
use voxlogic_chunk::{BLOCK_WIDTH, BlockGrid, CHUNK_SIZE};
use voxlogic_geom::Vec3;

use crate::instance::instance_model;
use crate::{MeshBuild, ModelStore};

/// One quad per exposed cube face. A face is hidden only by an in-grid neighbor that is
/// active and has no model; faces on the grid boundary are always emitted.
pub fn mesh_naive(
    grid: &BlockGrid,
    store: &ModelStore,
    offset: Vec3,
    scale: f32,
    out: &mut MeshBuild,
) {
    let bw = BLOCK_WIDTH * scale;
    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let block = grid.get(x, y, z);
                if !block.active {
                    continue;
                }
                let origin = offset + Vec3::new(x as f32, y as f32, z as f32) * bw;
                if block.has_model() {
                    instance_model(store, block, origin, scale, out);
                    continue;
                }
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    let hidden = grid
                        .get_checked(x as i32 + dx, y as i32 + dy, z as i32 + dz)
                        .is_some_and(|n| n.occludes());
                    if hidden {
                        continue;
                    }
                    let mut plane = origin;
                    if face.is_positive() {
                        let a = face.axis();
                        plane.set_axis(a, origin.axis(a) + bw);
                    }
                    out.add_face_rect(face, plane, bw, bw, block.color);
                }
            }
        }
    }
}
