use voxlogic_blocks::Block;
use voxlogic_chunk::{CHUNK_SIZE, CHUNK_WIDTH};
use voxlogic_geom::{Mat4, Vec3, rotation_table};

use crate::{MeshBuild, ModelStore};

/// Appends `block`'s model at `origin`, shrunk to one block of the current scale and
/// turned about its center by the block's cached logic transform.
pub(crate) fn instance_model(
    store: &ModelStore,
    block: &Block,
    origin: Vec3,
    scale: f32,
    out: &mut MeshBuild,
) {
    let Some(model) = block.model.and_then(|id| store.get(id)) else {
        log::warn!("block references unknown model {:?}", block.model);
        return;
    };
    let rotation = block
        .logic
        .and_then(|l| l.transform)
        .map_or(Mat4::IDENTITY, |t| rotation_table()[t as usize & 63]);
    let center = Vec3::splat(CHUNK_WIDTH * 0.5);
    let transform = Mat4::translation(origin)
        * Mat4::scale(scale / CHUNK_SIZE as f32)
        * rotation.about(center);
    out.add_instance(model.mesh(), &transform, &rotation);
}
