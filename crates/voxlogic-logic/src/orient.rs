use voxlogic_blocks::{Face, FaceMask, Orientation};
use voxlogic_chunk::{BlockRef, World};

use crate::rotate::rotate_outputs;
use crate::tables::{input_faces, output_faces};

/// World faces the neighbors expect this block to read from and drive.
fn targets(world: &World, r: BlockRef) -> (FaceMask, FaceMask) {
    let mut want_in = FaceMask::EMPTY;
    let mut want_out = FaceMask::EMPTY;
    for face in Face::ALL {
        let Some(n) = world.neighbor_block(r, face).and_then(|b| b.logic) else {
            continue;
        };
        let back = face.opposite();
        want_in.set(face, rotate_outputs(output_faces(n.kind), n.orientation).get(back));
        want_out.set(face, rotate_outputs(input_faces(n.kind), n.orientation).get(back));
    }
    (want_in, want_out)
}

fn agreement(a: FaceMask, b: FaceMask) -> u32 {
    (!FaceMask::new(a.bits() ^ b.bits())).count()
}

/// Orientation whose rotated faces best match the neighbors' wiring; `None` if the
/// block has no logic. Ties keep the earliest in [`Orientation::search_order`].
pub fn best_orientation(world: &World, r: BlockRef) -> Option<Orientation> {
    let logic = world.get(r).logic?;
    let (want_in, want_out) = targets(world, r);
    let ins = input_faces(logic.kind);
    let outs = output_faces(logic.kind);

    let mut best = Orientation::IDENTITY;
    let mut best_score = None;
    for o in Orientation::search_order() {
        let score = agreement(rotate_outputs(ins, o), want_in)
            + agreement(rotate_outputs(outs, o), want_out);
        if best_score.is_none_or(|s| score > s) {
            best = o;
            best_score = Some(score);
        }
    }
    Some(best)
}

/// Turns the block at `r` to [`best_orientation`]. Returns true if it changed.
pub fn auto_orient(world: &mut World, r: BlockRef) -> bool {
    let Some(best) = best_orientation(world, r) else {
        return false;
    };
    let Some(logic) = world.get_mut(r).logic.as_mut() else {
        return false;
    };
    if logic.orientation == best {
        return false;
    }
    logic.orientation = best;
    world.mark_dirty(r);
    true
}
