use voxlogic_blocks::Face;
use voxlogic_chunk::{BLOCK_WIDTH, World};
use voxlogic_geom::Vec3;

/// Result of a selection ray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// First active block along the ray.
    pub hit: Option<(i32, i32, i32)>,
    /// In-world cell the ray passed through just before `hit`; where a new block goes.
    pub previous: Option<(i32, i32, i32)>,
    /// Face of `hit` the ray entered through.
    pub face: Option<Face>,
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

#[inline]
fn step_of(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Walks the block grid from `origin` (world units) along `direction` for at most
/// `radius` blocks and reports the first active block. Cells outside the world are
/// passed through.
pub fn select_block(world: &World, origin: Vec3, direction: Vec3, radius: f32) -> Selection {
    let mut sel = Selection::default();
    let len = direction.length();
    if len < 1e-6 {
        return sel;
    }
    let d = direction / len;
    let p = origin / BLOCK_WIDTH;

    let mut v = [p.x.floor() as i32, p.y.floor() as i32, p.z.floor() as i32];
    let step = [step_of(d.x), step_of(d.y), step_of(d.z)];
    let mut t_max = [0.0f32; 3];
    let mut t_delta = [f32::MAX; 3];
    for a in 0..3 {
        let inv = inv_or_max(d.axis(a));
        let frac = p.axis(a) - p.axis(a).floor();
        t_max[a] = match step[a] {
            1 => (1.0 - frac) * inv,
            -1 => frac * inv,
            _ => f32::MAX,
        };
        if step[a] != 0 {
            t_delta[a] = inv;
        }
    }

    let mut prev = v;
    let mut entered: Option<usize> = None;
    let max_steps = radius.max(0.0) as usize * 3 + 3;
    for _ in 0..max_steps {
        if world.block(v[0], v[1], v[2]).is_some_and(|b| b.active) {
            sel.hit = Some((v[0], v[1], v[2]));
            if let Some(a) = entered {
                sel.face = Some(Face::from_axis(a, step[a] < 0));
                if world.block_ref(prev[0], prev[1], prev[2]).is_some() {
                    sel.previous = Some((prev[0], prev[1], prev[2]));
                }
            }
            return sel;
        }
        let a = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] { 0 } else { 2 }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };
        if t_max[a] > radius {
            break;
        }
        prev = v;
        v[a] += step[a];
        t_max[a] += t_delta[a];
        entered = Some(a);
    }
    sel
}
