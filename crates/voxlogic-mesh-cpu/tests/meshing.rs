mod common;

use std::sync::Arc;

use common::{approx, area_by_face, tri_area_sum, windings_match_normals};
use voxlogic_blocks::{Block, Color, GateKind, Logic, Orientation};
use voxlogic_chunk::{BLOCK_WIDTH, BlockGrid, CHUNK_SIZE, CHUNK_WIDTH, Mesh, World};
use voxlogic_geom::Vec3;
use voxlogic_mesh_cpu::{
    CUBE_FLOATS, MeshMode, Mesher, ModelStore, count_chunk_size, render_grid, rotate_grid,
};

const MODES: [MeshMode; 2] = [MeshMode::Naive, MeshMode::Greedy];
const RED: Color = Color::rgb(200, 10, 10);

fn render(grid: &BlockGrid, store: &ModelStore, mode: MeshMode) -> Mesh {
    render_grid(grid, store, mode, Vec3::ZERO, 1.0)
}

/// Grid whose contents fill the lower half of the cell along +x, as a model.
fn half_slab() -> BlockGrid {
    let mut g = BlockGrid::new();
    for x in 0..CHUNK_SIZE / 2 {
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                g.set(x, y, z, Block::solid(Color::rgb(0, 0, 255)));
            }
        }
    }
    g
}

fn bounds(mesh: &Mesh) -> (Vec3, Vec3) {
    let mut lo = Vec3::splat(f32::MAX);
    let mut hi = Vec3::splat(f32::MIN);
    for p in mesh.positions.chunks_exact(3) {
        for a in 0..3 {
            lo.set_axis(a, lo.axis(a).min(p[a]));
            hi.set_axis(a, hi.axis(a).max(p[a]));
        }
    }
    (lo, hi)
}

#[test]
fn empty_grid_gives_empty_sentinel() {
    let store = ModelStore::new();
    for mode in MODES {
        let mesh = render(&BlockGrid::new(), &store, mode);
        assert_eq!(mesh, Mesh::EMPTY);
        assert!(mesh.is_empty());
    }
}

#[test]
fn single_block_has_six_faces_in_both_modes() {
    let store = ModelStore::new();
    let mut grid = BlockGrid::new();
    grid.set(4, 5, 6, Block::solid(RED));
    let bw = BLOCK_WIDTH;
    for mode in MODES {
        let mesh = render(&grid, &store, mode);
        assert_eq!(mesh.triangle_count(), 12, "{mode:?}");
        assert_eq!(mesh.float_count(), CUBE_FLOATS);
        assert_eq!(mesh.indices, None);
        for a in area_by_face(&mesh) {
            assert!(approx(a, bw * bw, 1e-7));
        }
        assert!(windings_match_normals(&mesh));
        let (lo, hi) = bounds(&mesh);
        assert!(approx(lo.x, 4.0 * bw, 1e-6) && approx(hi.x, 5.0 * bw, 1e-6));
        assert!(approx(lo.y, 5.0 * bw, 1e-6) && approx(hi.z, 7.0 * bw, 1e-6));
        let c = &mesh.colors[..3];
        assert!(approx(c[0], 200.0 / 255.0, 1e-6));
    }
}

#[test]
fn two_block_row_hides_shared_face_and_greedy_merges() {
    let store = ModelStore::new();
    let mut grid = BlockGrid::new();
    grid.set(3, 3, 3, Block::solid(RED));
    grid.set(4, 3, 3, Block::solid(RED));
    let bw = BLOCK_WIDTH;

    let naive = render(&grid, &store, MeshMode::Naive);
    let greedy = render(&grid, &store, MeshMode::Greedy);
    // 10 exposed unit faces, two triangles each
    assert_eq!(naive.triangle_count(), 20);
    // 2 end caps plus 4 merged long faces
    assert_eq!(greedy.triangle_count(), 12);

    for mesh in [&naive, &greedy] {
        // nothing drawn on the shared plane x = 4 * bw
        for (p, n) in mesh.positions.chunks_exact(9).zip(mesh.normals.chunks_exact(9)) {
            let on_shared = (0..3).all(|v| approx(p[v * 3], 4.0 * bw, 1e-6));
            assert!(!(on_shared && n[0] != 0.0));
        }
        assert!(approx(tri_area_sum(mesh), 10.0 * bw * bw, 1e-6));
        assert!(windings_match_normals(mesh));
    }
}

#[test]
fn different_colors_are_not_merged() {
    let store = ModelStore::new();
    let mut grid = BlockGrid::new();
    grid.set(3, 3, 3, Block::solid(RED));
    grid.set(4, 3, 3, Block::solid(Color::rgb(0, 200, 0)));
    let greedy = render(&grid, &store, MeshMode::Greedy);
    assert_eq!(greedy.triangle_count(), 20);
}

#[test]
fn model_neighbors_never_occlude() {
    let mut store = ModelStore::new();
    let slab = store.insert(half_slab());
    let mut grid = BlockGrid::new();
    grid.set(3, 3, 3, Block::solid(RED));
    grid.set(4, 3, 3, Block::with_model(slab));
    let model_tris = store.get(slab).unwrap().mesh().triangle_count();
    for mode in MODES {
        let mesh = render(&grid, &store, mode);
        assert_eq!(mesh.triangle_count(), 12 + model_tris, "{mode:?}");
    }
}

#[test]
fn chunk_size_counts_cubes_and_model_points() {
    let mut store = ModelStore::new();
    let slab = store.insert(half_slab());
    let model_points = store.get(slab).unwrap().point_count();
    assert!(model_points > 0);

    let mut grid = BlockGrid::new();
    assert_eq!(count_chunk_size(&grid, &store), 0);
    grid.set(0, 0, 0, Block::solid(RED));
    grid.set(5, 0, 0, Block::solid(RED));
    grid.set(9, 9, 9, Block::with_model(slab));
    assert_eq!(count_chunk_size(&grid, &store), 2 * 108 + model_points);
    for mode in MODES {
        assert!(render(&grid, &store, mode).float_count() <= count_chunk_size(&grid, &store));
    }
}

#[test]
fn model_instances_fit_their_cell() {
    let mut store = ModelStore::new();
    let slab = store.insert(half_slab());
    let mut grid = BlockGrid::new();
    grid.set(2, 0, 7, Block::with_model(slab));
    let bw = BLOCK_WIDTH;
    let mesh = render(&grid, &store, MeshMode::Greedy);
    let (lo, hi) = bounds(&mesh);
    assert!(approx(lo.x, 2.0 * bw, 1e-6));
    // the slab covers half the cell along x
    assert!(approx(hi.x, 2.5 * bw, 1e-6));
    assert!(approx(lo.z, 7.0 * bw, 1e-6) && approx(hi.z, 8.0 * bw, 1e-6));
    assert!(approx(tri_area_sum(&mesh), 4.0 * bw * bw * 0.5 + 2.0 * bw * bw, 1e-6));
}

#[test]
fn logic_transform_turns_model_about_block_center() {
    let mut store = ModelStore::new();
    let slab = store.insert(half_slab());
    let mut logic = Logic::new(GateKind::Wire).with_orientation(Orientation::new(0, 0, 1));
    logic.transform = Some(logic.orientation.index() as u8);
    let block = Block {
        model: Some(slab),
        ..Block::with_logic(logic)
    };
    let mut grid = BlockGrid::new();
    grid.set(0, 0, 0, block);
    let bw = BLOCK_WIDTH;
    let mesh = render(&grid, &store, MeshMode::Naive);
    let (lo, hi) = bounds(&mesh);
    // yaw carries the -x half to the +z half
    assert!(approx(lo.x, 0.0, 1e-6) && approx(hi.x, bw, 1e-6));
    assert!(approx(lo.z, 0.5 * bw, 1e-6) && approx(hi.z, bw, 1e-6));
    assert!(windings_match_normals(&mesh));
}

#[test]
fn nested_models_scale_down_again() {
    let mut store = ModelStore::new();
    let inner = store.insert(half_slab());
    let mut outer = BlockGrid::new();
    outer.set(0, 0, 0, Block::with_model(inner));
    let outer_id = store.insert(outer);
    let (lo, hi) = bounds(store.get(outer_id).unwrap().mesh());
    // inner slab occupies half of one block of the outer model
    assert!(approx(lo.x, 0.0, 1e-6));
    assert!(approx(hi.x, 0.5 * BLOCK_WIDTH, 1e-6));

    let mut grid = BlockGrid::new();
    grid.set(1, 0, 0, Block::with_model(outer_id));
    let (lo, hi) = bounds(&render(&grid, &store, MeshMode::Greedy));
    let sub = BLOCK_WIDTH / CHUNK_SIZE as f32;
    assert!(approx(lo.x, BLOCK_WIDTH, 1e-6));
    assert!(approx(hi.x, BLOCK_WIDTH + 0.5 * sub, 1e-6));
}

#[test]
fn model_store_deduplicates_grids() {
    let mut store = ModelStore::new();
    let a = store.insert(half_slab());
    let b = store.insert(half_slab());
    assert_eq!(a, b);
    assert_eq!(store.len(), 1);
    let r = store.insert_rotated(a, 2).unwrap();
    assert_ne!(r, a);
    assert_eq!(store.insert_rotated(a, 4), Some(a));
}

#[test]
fn rotate_grid_quarter_turn_moves_plus_x_to_minus_z() {
    let mut g = BlockGrid::new();
    g.set(15, 2, 7, Block::solid(RED));
    let r = rotate_grid(&g, 1);
    assert!(r.get(7, 2, 0).active);
    assert_eq!(r.active_count(), 1);
    let back = rotate_grid(&rotate_grid(&rotate_grid(&r, 1), 1), 1);
    assert_eq!(back, g);
}

#[test]
fn set_block_remeshes_synchronously() {
    let mesher = Mesher::new(MeshMode::Greedy, Arc::new(ModelStore::new()));
    let mut world = World::with_size(2);
    let old = mesher.set_block(&mut world, 17, 1, 2, Block::solid(RED)).unwrap();
    assert_eq!(old, Block::AIR);
    let chunk = &world.chunks()[world.block_ref(17, 1, 2).unwrap().chunk()];
    assert!(!chunk.dirty);
    assert_eq!(chunk.mesh.triangle_count(), 12);
    // chunk-local positions
    let (lo, _) = bounds(&chunk.mesh);
    assert!(approx(lo.x, BLOCK_WIDTH, 1e-6));
    assert!(lo.x < CHUNK_WIDTH);
    assert_eq!(world.dirty_count(), 0);
    assert!(mesher.set_block(&mut world, -1, 0, 0, Block::AIR).is_none());

    mesher.set_block(&mut world, 17, 1, 2, Block::AIR);
    let chunk = &world.chunks()[world.block_ref(17, 1, 2).unwrap().chunk()];
    assert!(chunk.mesh.is_empty());
}

#[test]
fn remesh_dirty_clears_flags() {
    let mesher = Mesher::new(MeshMode::Naive, Arc::new(ModelStore::new()));
    let mut world = World::with_size(2);
    voxlogic_chunk::fill_world(&mut world);
    assert_eq!(mesher.remesh_dirty(&mut world), 4);
    assert_eq!(world.dirty_count(), 0);
    assert_eq!(mesher.remesh_dirty(&mut world), 0);
    assert!(world.chunks().iter().filter(|c| c.coord.cy == 0).all(|c| !c.mesh.is_empty()));
}
