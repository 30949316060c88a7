use voxlogic_blocks::{Face, FaceMask, Orientation};

/// Face cycles of one positive quarter turn about +Y, +X and +Z.
const YAW: [Face; 4] = [Face::PosX, Face::NegZ, Face::NegX, Face::PosZ];
const PITCH: [Face; 4] = [Face::PosY, Face::PosZ, Face::NegY, Face::NegZ];
const ROLL: [Face; 4] = [Face::PosX, Face::PosY, Face::NegX, Face::NegY];

#[inline]
fn turn_face(face: Face, cycle: &[Face; 4], turns: u8) -> Face {
    match cycle.iter().position(|f| *f == face) {
        Some(p) => cycle[(p + turns as usize) % 4],
        None => face,
    }
}

fn turn_mask(mask: FaceMask, cycle: &[Face; 4], turns: u8) -> FaceMask {
    if turns & 3 == 0 {
        return mask;
    }
    mask.faces()
        .fold(FaceMask::EMPTY, |m, f| m.with(turn_face(f, cycle, turns)))
}

/// `turns` quarter turns about +Y.
pub fn yaw(mask: FaceMask, turns: u8) -> FaceMask {
    turn_mask(mask, &YAW, turns)
}

/// `turns` quarter turns about +X.
pub fn pitch(mask: FaceMask, turns: u8) -> FaceMask {
    turn_mask(mask, &PITCH, turns)
}

/// `turns` quarter turns about +Z.
pub fn roll(mask: FaceMask, turns: u8) -> FaceMask {
    turn_mask(mask, &ROLL, turns)
}

/// Where canonical face `face` points once the block is turned to `o`.
pub fn rotate_face(face: Face, o: Orientation) -> Face {
    let f = turn_face(face, &ROLL, o.roll());
    let f = turn_face(f, &PITCH, o.pitch());
    turn_face(f, &YAW, o.yaw())
}

/// Canonical to world: roll, then pitch, then yaw.
pub fn rotate_outputs(mask: FaceMask, o: Orientation) -> FaceMask {
    yaw(pitch(roll(mask, o.roll()), o.pitch()), o.yaw())
}

/// World to canonical; undoes [`rotate_outputs`].
pub fn rotate_inputs(mask: FaceMask, o: Orientation) -> FaceMask {
    let inv = |t: u8| (4 - t) & 3;
    roll(pitch(yaw(mask, inv(o.yaw())), inv(o.pitch())), inv(o.roll()))
}
