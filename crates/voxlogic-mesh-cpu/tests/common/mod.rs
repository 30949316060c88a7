#![allow(dead_code)]

use voxlogic_chunk::Mesh;

/// Total triangle area.
pub fn tri_area_sum(mesh: &Mesh) -> f32 {
    area_by_face(mesh).iter().sum()
}

/// Triangle area bucketed by normal direction, in `Face` index order
/// (-z, -x, +z, +x, -y, +y).
pub fn area_by_face(mesh: &Mesh) -> [f32; 6] {
    let mut out = [0.0f32; 6];
    let pos = &mesh.positions;
    for t in (0..pos.len()).step_by(9) {
        let a = [pos[t], pos[t + 1], pos[t + 2]];
        let b = [pos[t + 3], pos[t + 4], pos[t + 5]];
        let c = [pos[t + 6], pos[t + 7], pos[t + 8]];
        let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let cross = [
            ab[1] * ac[2] - ab[2] * ac[1],
            ab[2] * ac[0] - ab[0] * ac[2],
            ab[0] * ac[1] - ab[1] * ac[0],
        ];
        let area = 0.5 * (cross[0].powi(2) + cross[1].powi(2) + cross[2].powi(2)).sqrt();
        let n = [mesh.normals[t], mesh.normals[t + 1], mesh.normals[t + 2]];
        out[face_slot(n)] += area;
    }
    out
}

fn face_slot(n: [f32; 3]) -> usize {
    let axis = (0..3)
        .max_by(|&i, &j| n[i].abs().total_cmp(&n[j].abs()))
        .unwrap_or(0);
    let positive = n[axis] > 0.0;
    match (axis, positive) {
        (2, false) => 0,
        (0, false) => 1,
        (2, true) => 2,
        (0, true) => 3,
        (1, false) => 4,
        _ => 5,
    }
}

/// True if every triangle's winding agrees with its stored normal.
pub fn windings_match_normals(mesh: &Mesh) -> bool {
    let pos = &mesh.positions;
    (0..pos.len()).step_by(9).all(|t| {
        let ab = [pos[t + 3] - pos[t], pos[t + 4] - pos[t + 1], pos[t + 5] - pos[t + 2]];
        let ac = [pos[t + 6] - pos[t], pos[t + 7] - pos[t + 1], pos[t + 8] - pos[t + 2]];
        let cross = [
            ab[1] * ac[2] - ab[2] * ac[1],
            ab[2] * ac[0] - ab[0] * ac[2],
            ab[0] * ac[1] - ab[1] * ac[0],
        ];
        let n = [mesh.normals[t], mesh.normals[t + 1], mesh.normals[t + 2]];
        cross[0] * n[0] + cross[1] * n[1] + cross[2] * n[2] > 0.0
    })
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
