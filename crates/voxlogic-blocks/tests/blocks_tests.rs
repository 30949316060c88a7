use voxlogic_blocks::{Block, Color, Face, FaceMask, GateKind, Logic, ModelId, Orientation};

#[test]
fn face_bits_follow_planar_then_vertical_order() {
    let bits: Vec<u8> = Face::ALL.iter().map(|f| f.bit()).collect();
    assert_eq!(bits, vec![1, 2, 4, 8, 16, 32]);
    assert_eq!(Face::from_index(3), Some(Face::PosX));
    assert_eq!(Face::from_index(6), None);
}

#[test]
fn opposite_faces_have_negated_deltas() {
    for f in Face::ALL {
        let (dx, dy, dz) = f.delta();
        assert_eq!(f.opposite().delta(), (-dx, -dy, -dz));
        assert_eq!(f.opposite().opposite(), f);
        assert_eq!(f.opposite().axis(), f.axis());
        assert_eq!(Face::from_axis(f.axis(), f.is_positive()), f);
    }
}

#[test]
fn face_mask_set_get_and_truncation() {
    let mut m = FaceMask::EMPTY;
    m.set(Face::PosY, true);
    m.set(Face::NegZ, true);
    assert!(m.get(Face::PosY));
    assert!(m.get(Face::NegZ));
    assert!(!m.get(Face::PosX));
    assert_eq!(m.count(), 2);
    m.set(Face::PosY, false);
    assert_eq!(m.bits(), 1);
    assert_eq!(FaceMask::new(0xFF), FaceMask::ALL);
    assert_eq!(!FaceMask::PLANAR, FaceMask::from_faces(&[Face::NegY, Face::PosY]));
    let faces: Vec<Face> = FaceMask::new(0b101010).faces().collect();
    assert_eq!(faces, vec![Face::NegX, Face::PosX, Face::PosY]);
}

#[test]
fn orientation_components_wrap() {
    let o = Orientation::new(5, 6, 7);
    assert_eq!((o.roll(), o.pitch(), o.yaw()), (1, 2, 3));
    assert_eq!(o.turned_yaw().yaw(), 0);
    assert_eq!(o.turned_roll().roll(), 2);
    assert_eq!(Orientation::IDENTITY.index(), 0);
    let all: Vec<Orientation> = Orientation::search_order().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[1], Orientation::new(0, 0, 1));
    assert_eq!(all[4], Orientation::new(0, 1, 0));
    assert_eq!(all[16], Orientation::new(1, 0, 0));
    let mut idx: Vec<usize> = all.iter().map(|o| o.index()).collect();
    idx.sort_unstable();
    idx.dedup();
    assert_eq!(idx.len(), 64);
}

#[test]
fn gate_kind_ids_roundtrip_and_cycle() {
    for (i, k) in GateKind::ALL.iter().enumerate() {
        assert_eq!(k.id(), i);
        assert_eq!(GateKind::from_id(i), Some(*k));
    }
    assert_eq!(GateKind::from_id(14), None);
    assert_eq!(GateKind::ColorOutput.next(), GateKind::Wire);
    assert_eq!(GateKind::Wire.next(), GateKind::Bridge);
}

#[test]
fn block_constructors() {
    assert!(!Block::AIR.active);
    assert_eq!(Block::default(), Block::AIR);
    let s = Block::solid(Color::rgb(10, 20, 30));
    assert!(s.occludes());
    let m = Block::with_model(ModelId(3));
    assert!(m.active && m.has_model() && !m.occludes());
    let l = Block::with_logic(Logic::new(GateKind::Not));
    assert!(l.active && l.logic.is_some() && l.model.is_none());
    assert_eq!(m.color, Color::GATE);
    assert_eq!(l.color, Color::GATE);
    assert!(!Color::GATE.is_clear());
    assert_eq!(Block::from_color(Color::CLEAR), Block::AIR);
    assert!(Block::from_color(Color::new(0, 0, 0, 1)).active);
}

#[test]
fn color_helpers() {
    assert!(Color::CLEAR.is_clear());
    assert!(!Color::BLACK.is_clear());
    assert_eq!(Color::WHITE.darkened(), Color::rgb(192, 192, 192));
    assert_eq!(Color::from_bytes([1, 2, 3, 4]).to_bytes(), [1, 2, 3, 4]);
    let [r, g, b] = Color::rgb(255, 0, 51).to_rgb_f32();
    assert_eq!((r, g), (1.0, 0.0));
    assert!((b - 0.2).abs() < 1e-6);
}

#[test]
fn config_values_deserialize() {
    #[derive(serde::Deserialize)]
    struct Palette {
        floor: Color,
        gate: GateKind,
    }
    let p: Palette = toml::from_str(
        "gate = \"connect3_bidirectional\"\n[floor]\nr = 1\ng = 2\nb = 3\na = 255\n",
    )
    .unwrap();
    assert_eq!(p.floor, Color::rgb(1, 2, 3));
    assert_eq!(p.gate, GateKind::Connect3Bidirectional);
}
