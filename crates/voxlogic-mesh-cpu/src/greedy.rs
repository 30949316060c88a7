use voxlogic_blocks::{Color, Face};
use voxlogic_chunk::{BLOCK_WIDTH, BlockGrid, CHUNK_SIZE};
use voxlogic_geom::Vec3;

use crate::instance::instance_model;
use crate::{MeshBuild, ModelStore};

type FaceMask2D = [[Option<Color>; CHUNK_SIZE]; CHUNK_SIZE];

/// Greedy mesher: per axis, direction and slice, collects exposed face colors into a
/// 2-D mask and covers it with maximal same-color rectangles. Model blocks are left out
/// of the masks and instanced afterwards.
pub fn mesh_greedy(
    grid: &BlockGrid,
    store: &ModelStore,
    offset: Vec3,
    scale: f32,
    out: &mut MeshBuild,
) {
    let bw = BLOCK_WIDTH * scale;
    let mut mask: FaceMask2D = [[None; CHUNK_SIZE]; CHUNK_SIZE];
    let mut has_models = false;

    for axis1 in 0..3 {
        let axis2 = (axis1 + 1) % 3;
        let axis3 = (axis1 + 2) % 3;
        for positive in [false, true] {
            let face = Face::from_axis(axis1, positive);
            for slice in 0..CHUNK_SIZE {
                let mut any = false;
                for a in 0..CHUNK_SIZE {
                    for b in 0..CHUNK_SIZE {
                        mask[b][a] = None;
                        let mut pos = [0usize; 3];
                        pos[axis1] = slice;
                        pos[axis2] = a;
                        pos[axis3] = b;
                        let v = grid.get(pos[0], pos[1], pos[2]);
                        if !v.active {
                            continue;
                        }
                        if v.has_model() {
                            has_models = true;
                            continue;
                        }
                        let has_next = if positive {
                            slice + 1 < CHUNK_SIZE
                        } else {
                            slice > 0
                        };
                        let covered = has_next && {
                            let mut n = pos;
                            if positive {
                                n[axis1] += 1;
                            } else {
                                n[axis1] -= 1;
                            }
                            grid.get(n[0], n[1], n[2]).occludes()
                        };
                        if !covered {
                            mask[b][a] = Some(v.color);
                            any = true;
                        }
                    }
                }
                if !any {
                    continue;
                }
                let mut plane = offset;
                let depth = slice as f32 * bw + if positive { bw } else { 0.0 };
                plane.set_axis(axis1, offset.axis(axis1) + depth);
                emit_rects(&mut mask, face, plane, bw, out);
            }
        }
    }

    if has_models {
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                for z in 0..CHUNK_SIZE {
                    let block = grid.get(x, y, z);
                    if block.active && block.has_model() {
                        let origin = offset + Vec3::new(x as f32, y as f32, z as f32) * bw;
                        instance_model(store, block, origin, scale, out);
                    }
                }
            }
        }
    }
}

/// Rows `j` run along the third axis, columns `i` along the second.
fn emit_rects(mask: &mut FaceMask2D, face: Face, plane: Vec3, bw: f32, out: &mut MeshBuild) {
    let axis2 = (face.axis() + 1) % 3;
    let axis3 = (face.axis() + 2) % 3;
    for j in 0..CHUNK_SIZE {
        let mut i = 0;
        while i < CHUNK_SIZE {
            let Some(color) = mask[j][i] else {
                i += 1;
                continue;
            };
            let mut w = 1;
            while i + w < CHUNK_SIZE && mask[j][i + w] == Some(color) {
                w += 1;
            }
            let mut h = 1;
            'grow: while j + h < CHUNK_SIZE {
                for k in 0..w {
                    if mask[j + h][i + k] != Some(color) {
                        break 'grow;
                    }
                }
                h += 1;
            }

            let mut origin = plane;
            origin.set_axis(axis2, plane.axis(axis2) + i as f32 * bw);
            origin.set_axis(axis3, plane.axis(axis3) + j as f32 * bw);
            out.add_face_rect(face, origin, w as f32 * bw, h as f32 * bw, color);

            for row in &mut mask[j..j + h] {
                for cell in &mut row[i..i + w] {
                    *cell = None;
                }
            }
            i += w;
        }
    }
}
