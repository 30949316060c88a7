//! Player-facing world edits: placing and removing blocks, gate editing and ray selection.
#![forbid(unsafe_code)]

mod select;

pub use select::{Selection, select_block};

use voxlogic_blocks::{Block, Color, GateKind, Logic, ModelId, Orientation};
use voxlogic_chunk::{BlockRef, World};
use voxlogic_mesh_cpu::Mesher;

pub type BlockPos = (i32, i32, i32);

/// Places a solid block of `color`; returns the block it replaced.
pub fn place_block(world: &mut World, mesher: &Mesher, pos: BlockPos, color: Color) -> Option<Block> {
    let old = mesher.set_block(world, pos.0, pos.1, pos.2, Block::solid(color))?;
    log::info!(target: "events", "place_block pos={:?} color={:?}", pos, color);
    Some(old)
}

/// Places a block drawn with `model`.
pub fn place_model(world: &mut World, mesher: &Mesher, pos: BlockPos, model: ModelId) -> Option<Block> {
    let old = mesher.set_block(world, pos.0, pos.1, pos.2, Block::with_model(model))?;
    log::info!(target: "events", "place_model pos={:?} model={}", pos, model.0);
    Some(old)
}

/// Clears a cell, dropping any logic component it held.
pub fn remove_block(world: &mut World, mesher: &Mesher, pos: BlockPos) -> Option<Block> {
    let old = mesher.set_block(world, pos.0, pos.1, pos.2, Block::AIR)?;
    log::info!(target: "events", "remove_block pos={:?} had_logic={}", pos, old.logic.is_some());
    Some(old)
}

fn remesh(world: &mut World, mesher: &Mesher, r: BlockRef) {
    world.mark_dirty(r);
    mesher.render_chunk(&mut world.chunks_mut()[r.chunk()]);
}

/// Gives an active block a wire component with auto-orient on, or advances its gate
/// kind. Re-orients when auto-orient is set. Returns the resulting kind.
pub fn cycle_gate(world: &mut World, mesher: &Mesher, pos: BlockPos) -> Option<GateKind> {
    let r = world.block_ref(pos.0, pos.1, pos.2)?;
    let block = world.get_mut(r);
    if !block.active {
        return None;
    }
    let logic = match block.logic.as_mut() {
        Some(l) => {
            l.kind = l.kind.next();
            *l
        }
        None => *block
            .logic
            .insert(Logic::new(GateKind::Wire).with_auto_orient(true)),
    };
    if logic.auto_orient {
        voxlogic_logic::auto_orient(world, r);
    }
    remesh(world, mesher, r);
    log::info!(target: "events", "cycle_gate pos={:?} kind={}", pos, logic.kind.name());
    Some(logic.kind)
}

fn turn(
    world: &mut World,
    mesher: &Mesher,
    pos: BlockPos,
    axis: &str,
    f: fn(Orientation) -> Orientation,
) -> Option<Orientation> {
    let r = world.block_ref(pos.0, pos.1, pos.2)?;
    let logic = world.get_mut(r).logic.as_mut()?;
    logic.orientation = f(logic.orientation);
    logic.auto_orient = false;
    let o = logic.orientation;
    remesh(world, mesher, r);
    log::info!(target: "events", "turn_{} pos={:?} orientation={:?}", axis, pos, o);
    Some(o)
}

/// One quarter turn about +Z; turns auto-orient off.
pub fn turn_roll(world: &mut World, mesher: &Mesher, pos: BlockPos) -> Option<Orientation> {
    turn(world, mesher, pos, "roll", Orientation::turned_roll)
}

/// One quarter turn about +X; turns auto-orient off.
pub fn turn_pitch(world: &mut World, mesher: &Mesher, pos: BlockPos) -> Option<Orientation> {
    turn(world, mesher, pos, "pitch", Orientation::turned_pitch)
}

/// One quarter turn about +Y; turns auto-orient off.
pub fn turn_yaw(world: &mut World, mesher: &Mesher, pos: BlockPos) -> Option<Orientation> {
    turn(world, mesher, pos, "yaw", Orientation::turned_yaw)
}
