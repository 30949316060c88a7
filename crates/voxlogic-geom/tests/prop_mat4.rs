use proptest::prelude::*;
use voxlogic_geom::{Mat4, Vec3, rotation_table};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (-1e3f32..1e3, -1e3f32..1e3, -1e3f32..1e3).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Quarter-turn rotations preserve length.
    #[test]
    fn rotations_preserve_length(v in arb_vec3(), idx in 0usize..64) {
        let r = rotation_table()[idx];
        let out = r.transform_vector(v);
        prop_assert!(approx(out.length(), v.length(), 1e-3 * (1.0 + v.length())));
    }

    // Transpose of a rotation is its inverse.
    #[test]
    fn rotation_transpose_inverts(v in arb_vec3(), idx in 0usize..64) {
        let r = rotation_table()[idx];
        let back = r.transpose().transform_vector(r.transform_vector(v));
        prop_assert!(vapprox(back, v, 1e-3));
    }

    // Matrix product is associative for affine transforms.
    #[test]
    fn product_associative(t in arb_vec3(), s in 0.01f32..10.0, turns in 0u8..4, p in arb_vec3()) {
        let a = Mat4::translation(t);
        let b = Mat4::scale(s);
        let c = Mat4::quarter_x(turns);
        let lhs = ((a * b) * c).transform_point(p);
        let rhs = (a * (b * c)).transform_point(p);
        prop_assert!(vapprox(lhs, rhs, 1e-2));
    }
}
