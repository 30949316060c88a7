use core::ops::Mul;
use std::sync::OnceLock;

use crate::{Vec3, Vec4};

/// 4x4 matrix acting on column vectors, stored row-major (`m[row][col]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

/// `(cos, sin)` of `turns` quarter turns, exact.
#[inline]
fn quarter(turns: u8) -> (f32, f32) {
    match turns & 3 {
        0 => (1.0, 0.0),
        1 => (0.0, 1.0),
        2 => (-1.0, 0.0),
        _ => (0.0, -1.0),
    }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn translation(t: Vec3) -> Self {
        let mut out = Mat4::IDENTITY;
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }

    pub fn scale(s: f32) -> Self {
        let mut out = Mat4::IDENTITY;
        out.m[0][0] = s;
        out.m[1][1] = s;
        out.m[2][2] = s;
        out
    }

    /// `turns` positive quarter turns about +X.
    pub fn quarter_x(turns: u8) -> Self {
        let (c, s) = quarter(turns);
        Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `turns` positive quarter turns about +Y.
    pub fn quarter_y(turns: u8) -> Self {
        let (c, s) = quarter(turns);
        Mat4::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `turns` positive quarter turns about +Z.
    pub fn quarter_z(turns: u8) -> Self {
        let (c, s) = quarter(turns);
        Mat4::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Roll is applied first, then pitch, then yaw.
    pub fn orientation(roll: u8, pitch: u8, yaw: u8) -> Self {
        Mat4::quarter_y(yaw) * Mat4::quarter_x(pitch) * Mat4::quarter_z(roll)
    }

    /// Conjugates `self` so it acts about `center` instead of the origin.
    pub fn about(self, center: Vec3) -> Self {
        Mat4::translation(center) * self * Mat4::translation(-center)
    }

    /// Right-handed perspective projection with clip-space depth in `[-w, w]`.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy * 0.5).tan();
        let nf = 1.0 / (near - far);
        Mat4::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) * nf, 2.0 * far * near * nf],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);
        Mat4::from_rows([
            [s.x, s.y, s.z, -s.dot(eye)],
            [u.x, u.y, u.z, -u.dot(eye)],
            [-f.x, -f.y, -f.z, f.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let r = |i: usize| {
            self.m[i][0] * v.x + self.m[i][1] * v.y + self.m[i][2] * v.z + self.m[i][3] * v.w
        };
        Vec4::new(r(0), r(1), r(2), r(3))
    }

    /// Affine point transform (w = 1, no perspective divide).
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let v = self.transform(Vec4::point(p));
        Vec3::new(v.x, v.y, v.z)
    }

    /// Direction transform (w = 0); translation is ignored.
    #[inline]
    pub fn transform_vector(&self, d: Vec3) -> Vec3 {
        let v = self.transform(Vec4::new(d.x, d.y, d.z, 0.0));
        Vec3::new(v.x, v.y, v.z)
    }

    pub fn transpose(&self) -> Self {
        let mut out = Mat4::IDENTITY;
        for r in 0..4 {
            for c in 0..4 {
                out.m[r][c] = self.m[c][r];
            }
        }
        out
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Mat4 { m: out }
    }
}

/// Index of an orientation in [`rotation_table`]; each component is taken modulo 4.
#[inline]
pub const fn orientation_index(roll: u8, pitch: u8, yaw: u8) -> usize {
    ((roll & 3) | ((pitch & 3) << 2) | ((yaw & 3) << 4)) as usize
}

/// All 64 roll/pitch/yaw quarter-turn combinations, built on first use.
pub fn rotation_table() -> &'static [Mat4; 64] {
    static TABLE: OnceLock<[Mat4; 64]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [Mat4::IDENTITY; 64];
        for yaw in 0..4u8 {
            for pitch in 0..4u8 {
                for roll in 0..4u8 {
                    table[orientation_index(roll, pitch, yaw)] =
                        Mat4::orientation(roll, pitch, yaw);
                }
            }
        }
        table
    })
}
