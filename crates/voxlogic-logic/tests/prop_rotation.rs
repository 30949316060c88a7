use proptest::prelude::*;
use voxlogic_blocks::{Face, FaceMask, Orientation};
use voxlogic_geom::rotation_table;
use voxlogic_logic::{pitch, roll, rotate_face, rotate_inputs, rotate_outputs, yaw};

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    (0..4u8, 0..4u8, 0..4u8).prop_map(|(r, p, y)| Orientation::new(r, p, y))
}

fn arb_mask() -> impl Strategy<Value = FaceMask> {
    (0..64u8).prop_map(FaceMask::new)
}

proptest! {
    #[test]
    fn four_quarter_turns_are_identity(mask in arb_mask()) {
        for turn in [yaw, pitch, roll] {
            let mut m = mask;
            for _ in 0..4 {
                m = turn(m, 1);
            }
            prop_assert_eq!(m, mask);
        }
    }

    #[test]
    fn inputs_undo_outputs(mask in arb_mask(), o in arb_orientation()) {
        prop_assert_eq!(rotate_inputs(rotate_outputs(mask, o), o), mask);
        prop_assert_eq!(rotate_outputs(rotate_inputs(mask, o), o), mask);
    }

    #[test]
    fn rotation_preserves_face_count(mask in arb_mask(), o in arb_orientation()) {
        prop_assert_eq!(rotate_outputs(mask, o).count(), mask.count());
    }
}

#[test]
fn single_turn_cycles() {
    let m = |f: Face| FaceMask::new(f.bit());
    assert_eq!(yaw(m(Face::PosX), 1), m(Face::NegZ));
    assert_eq!(yaw(m(Face::NegZ), 1), m(Face::NegX));
    assert_eq!(yaw(m(Face::PosY), 1), m(Face::PosY));
    assert_eq!(pitch(m(Face::PosY), 1), m(Face::PosZ));
    assert_eq!(pitch(m(Face::PosZ), 1), m(Face::NegY));
    assert_eq!(roll(m(Face::PosX), 1), m(Face::PosY));
    assert_eq!(roll(m(Face::NegY), 1), m(Face::PosX));
}

#[test]
fn planar_yaw_is_a_left_rotate_of_the_low_bits() {
    for bits in 0..16u8 {
        for turns in 0..4u8 {
            let expect = ((bits << turns) | (bits >> ((4 - turns) % 4))) & 0xF;
            let expect = if turns == 0 { bits } else { expect };
            assert_eq!(yaw(FaceMask::new(bits), turns).bits(), expect);
        }
    }
}

#[test]
fn face_rotation_matches_matrix_table() {
    let table = rotation_table();
    for o in Orientation::search_order() {
        let mat = table[o.index()];
        for face in Face::ALL {
            let n = mat.transform_vector(face.normal());
            let expect = rotate_face(face, o).normal();
            assert!((n - expect).length() < 1e-5, "{o:?} {face:?}");
            assert_eq!(
                rotate_outputs(FaceMask::new(face.bit()), o),
                FaceMask::new(rotate_face(face, o).bit())
            );
        }
    }
}

#[test]
fn roll_applies_before_yaw() {
    // roll carries +x up to +y, where yaw no longer moves it
    let o = Orientation::new(1, 0, 1);
    assert_eq!(rotate_face(Face::PosX, o), Face::PosY);
    // yaw first would have sent +x to -z, which roll leaves alone
    assert_ne!(rotate_face(Face::PosX, o), Face::NegZ);
}
