use voxlogic_blocks::{Color, Face};
use voxlogic_chunk::Mesh;
use voxlogic_geom::{Mat4, Vec3};

/// Growable non-indexed triangle buffer.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<f32>,
}

impl MeshBuild {
    /// Pre-reserves room for `n_floats` position floats (and matching normals/colors).
    pub fn with_capacity(n_floats: usize) -> Self {
        Self {
            pos: Vec::with_capacity(n_floats),
            norm: Vec::with_capacity(n_floats),
            col: Vec::with_capacity(n_floats),
        }
    }

    #[inline]
    pub fn float_count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    fn push_vertex(&mut self, p: Vec3, n: Vec3, rgb: [f32; 3]) {
        self.pos.extend_from_slice(&[p.x, p.y, p.z]);
        self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        self.col.extend_from_slice(&rgb);
    }

    /// Appends quad `a b c d` as two triangles wound counter-clockwise about `n`.
    pub fn add_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, n: Vec3, color: Color) {
        let mut vs = [a, b, c, d];
        if (vs[1] - vs[0]).cross(vs[2] - vs[0]).dot(n) < 0.0 {
            vs.swap(1, 3);
        }
        let rgb = color.to_rgb_f32();
        for i in [0, 1, 2, 0, 2, 3] {
            self.push_vertex(vs[i], n, rgb);
        }
    }

    /// Axis-aligned rectangle on the plane of `face` through `origin`, spanning `du` along
    /// the next axis after the face's and `dv` along the one after that.
    pub fn add_face_rect(&mut self, face: Face, origin: Vec3, du: f32, dv: f32, color: Color) {
        let a1 = face.axis();
        let mut u = Vec3::ZERO;
        let mut v = Vec3::ZERO;
        u.set_axis((a1 + 1) % 3, du);
        v.set_axis((a1 + 2) % 3, dv);
        self.add_quad(origin, origin + u, origin + u + v, origin + v, face.normal(), color);
    }

    /// Copies a prebuilt mesh, placing positions with `transform` and turning normals by `rotation`.
    pub fn add_instance(&mut self, mesh: &Mesh, transform: &Mat4, rotation: &Mat4) {
        for ((p, n), c) in mesh
            .positions
            .chunks_exact(3)
            .zip(mesh.normals.chunks_exact(3))
            .zip(mesh.colors.chunks_exact(3))
        {
            let p = transform.transform_point(Vec3::new(p[0], p[1], p[2]));
            let n = rotation.transform_vector(Vec3::new(n[0], n[1], n[2]));
            self.push_vertex(p, n, [c[0], c[1], c[2]]);
        }
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::from_triangles(self.pos, self.norm, self.col)
    }
}
