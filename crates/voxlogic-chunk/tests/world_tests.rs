use voxlogic_blocks::{Block, Color, Face, GateKind, Logic};
use voxlogic_chunk::{
    BlockGrid, CHUNK_SIZE, CHUNK_WIDTH, Chunk, ChunkCoord, Mesh, NeighborTable, WORLD_BLOCKS,
    World, fill_world,
};
use voxlogic_geom::Vec3;

#[test]
fn neighbors_cross_chunk_boundaries() {
    let world = World::with_size(2);
    let r = world.block_ref(15, 3, 4).unwrap();
    let east = world.neighbor(r, Face::PosX).unwrap();
    assert_ne!(east.chunk(), r.chunk());
    assert_eq!(world.position(east), (16, 3, 4));
    let back = world.neighbor(east, Face::NegX).unwrap();
    assert_eq!(back, r);
}

#[test]
fn neighbors_are_none_at_world_boundary() {
    let world = World::with_size(2);
    let corner = world.block_ref(0, 0, 0).unwrap();
    assert_eq!(world.neighbor(corner, Face::NegX), None);
    assert_eq!(world.neighbor(corner, Face::NegY), None);
    assert_eq!(world.neighbor(corner, Face::NegZ), None);
    assert!(world.neighbor(corner, Face::PosY).is_some());
    let far = world.block_ref(31, 31, 31).unwrap();
    for f in [Face::PosX, Face::PosY, Face::PosZ] {
        assert_eq!(world.neighbor(far, f), None);
    }
}

#[test]
fn every_neighbor_link_is_symmetric() {
    let table = NeighborTable::build(1);
    let world = World::with_size(1);
    for r in world.refs() {
        for f in Face::ALL {
            if let Some(n) = table.neighbor(r, f) {
                assert_eq!(table.neighbor(n, f.opposite()), Some(r));
                let (x, y, z) = world.position(r);
                let (dx, dy, dz) = f.delta();
                assert_eq!(world.position(n), (x + dx, y + dy, z + dz));
            }
        }
    }
}

#[test]
fn world_block_is_bounds_checked() {
    let world = World::with_size(1);
    assert!(world.block(0, 0, 0).is_some());
    assert!(world.block(-1, 0, 0).is_none());
    assert!(world.block(0, 16, 0).is_none());
    assert_eq!(World::new().block_extent(), WORLD_BLOCKS as i32);
}

#[test]
fn replace_keeps_wiring_and_marks_dirty() {
    let mut world = World::with_size(2);
    let r = world.block_ref(16, 0, 0).unwrap();
    let before = *world.neighbor_block(r, Face::NegX).unwrap();
    let old = world
        .replace_block(15, 0, 0, Block::with_logic(Logic::new(GateKind::Wire)))
        .unwrap();
    assert_eq!(old, before);
    assert!(world.neighbor_block(r, Face::NegX).unwrap().logic.is_some());
    assert_eq!(world.dirty_count(), 1);
    assert!(world.chunk(ChunkCoord::new(0, 0, 0)).unwrap().dirty);
    assert_eq!(world.logic_refs().len(), 1);
    assert!(world.replace_block(32, 0, 0, Block::AIR).is_none());
}

#[test]
fn fill_world_builds_floor_and_rim() {
    let mut world = World::with_size(2);
    fill_world(&mut world);
    let floor = 32 * 32;
    let rim = 32 + 32 - 1;
    let active = world
        .chunks()
        .iter()
        .map(|c| c.blocks.active_count())
        .sum::<usize>();
    assert_eq!(active, floor + rim);
    assert_eq!(world.block(1, 0, 0).unwrap().color, Color::WHITE);
    assert_eq!(world.block(0, 0, 0).unwrap().color, Color::WHITE.darkened());
    assert!(world.block(0, 1, 9).unwrap().active);
    assert!(world.block(9, 1, 0).unwrap().active);
    assert!(!world.block(9, 1, 9).unwrap().active);
    assert!(!world.block(0, 2, 0).unwrap().active);
    // only the bottom row of chunks is touched
    assert_eq!(world.dirty_count(), 4);
}

#[test]
fn chunk_set_and_mesh_replace() {
    let mut chunk = Chunk::standalone();
    assert!(chunk.mesh.is_empty());
    chunk.set(1, 2, 3, Block::solid(Color::BLACK));
    assert!(chunk.dirty);
    assert!(chunk.get(1, 2, 3).active);
    chunk.replace_mesh(Mesh::from_triangles(vec![0.0; 9], vec![0.0; 9], vec![0.0; 9]));
    assert!(!chunk.dirty);
    assert_eq!(chunk.mesh.vertex_count, 3);
    assert_eq!(chunk.mesh.indices, None);
}

#[test]
fn grid_checked_access_and_from_blocks() {
    let grid = BlockGrid::new();
    assert!(grid.get_checked(CHUNK_SIZE as i32, 0, 0).is_none());
    assert!(grid.get_checked(0, 0, 0).is_some());
    assert!(!grid.has_active());
    assert!(BlockGrid::from_blocks(vec![Block::AIR; 10]).is_none());
}

#[test]
fn chunk_origin_uses_chunk_width() {
    let c = ChunkCoord::new(1, 2, 3);
    assert_eq!(c.origin(), Vec3::new(CHUNK_WIDTH, 2.0 * CHUNK_WIDTH, 3.0 * CHUNK_WIDTH));
    let p = c.model_matrix().transform_point(Vec3::ZERO);
    assert_eq!(p, c.origin());
    assert!(Mesh::from_triangles(Vec::new(), Vec::new(), Vec::new()) == Mesh::EMPTY);
}
