use voxlogic_blocks::{Face, FaceMask, GateKind};

/// Four-face tables, one hex digit per input state. Digit `i` holds the outputs for
/// inputs `i`; both use the planar bits `+x +z -x -z` from high to low.
const PLANAR: [u64; 12] = [
    0x5151_4040_5151_4040, // wire
    0xFB73_EA62_D951_C840, // bridge
    0xFFFF_FFF7_FFFB_FDE0, // connect4
    0xDDDD_D5D5_D9D9_C0C0, // connect3
    0xCCCC_4444_8888_0000, // single L
    0xFDEC_7564_B9A8_3120, // double L
    0x1111_0000_1111_0000, // diode
    0x0000_1111_0000_1111, // not
    0x1100_0000_0000_0000, // and
    0x1111_1111_1111_1100, // or
    0x1100_0011_0011_1100, // xor
    0x1111_1111_1111_1111, // constant
];

const NZ: u8 = 1 << Face::NegZ as u8;
const NX: u8 = 1 << Face::NegX as u8;
const PZ: u8 = 1 << Face::PosZ as u8;
const PX: u8 = 1 << Face::PosX as u8;
const NY: u8 = 1 << Face::NegY as u8;
const PY: u8 = 1 << Face::PosY as u8;

/// Arms of the three-axis corner junction.
const CORNER: u8 = NZ | PX | PY;

const INPUTS: [u8; GateKind::COUNT] = [
    NZ | PZ,
    NX | PX | NZ | PZ,
    NX | PX | NZ | PZ,
    PX | NZ | PZ,
    PX | PZ,
    NX | PX | NZ | PZ,
    PZ,
    PZ,
    NX | PX | PZ,
    NX | PX | PZ,
    NX | PX | PZ,
    0,
    CORNER,
    NZ | NX | PZ | PX | NY | PY,
];

const OUTPUTS: [u8; GateKind::COUNT] = [
    NZ | PZ,
    NX | PX | NZ | PZ,
    NX | PX | NZ | PZ,
    PX | NZ | PZ,
    PX | PZ,
    NX | PX | NZ | PZ,
    NZ,
    NZ,
    NZ,
    NZ,
    NZ,
    NZ,
    CORNER,
    0,
];

static TABLES: [[u8; 64]; GateKind::COUNT] = build_tables();

const fn build_tables() -> [[u8; 64]; GateKind::COUNT] {
    let mut out = [[0u8; 64]; GateKind::COUNT];
    let mut k = 0;
    while k < PLANAR.len() {
        let mut i = 0;
        while i < 64 {
            out[k][i] = ((PLANAR[k] >> ((i & 0xF) as u32 * 4)) & 0xF) as u8;
            i += 1;
        }
        k += 1;
    }
    // corner junction: an arm is driven when any other arm is
    let mut i = 0;
    while i < 64 {
        let mut o = 0u8;
        let mut f = 0;
        while f < 6 {
            let bit = 1u8 << f;
            if CORNER & bit != 0 && (i as u8) & CORNER & !bit != 0 {
                o |= bit;
            }
            f += 1;
        }
        out[GateKind::Connect3Bidirectional as usize][i] = o;
        i += 1;
    }
    // the color output sink drives nothing, its row stays zero
    out
}

/// Canonical outputs of `kind` for canonical inputs `input`.
#[inline]
pub fn truth(kind: GateKind, input: FaceMask) -> FaceMask {
    FaceMask::new(TABLES[kind.id()][input.bits() as usize])
}

/// The full 64-entry row of `kind`, indexed by canonical input bits.
#[inline]
pub fn truth_table(kind: GateKind) -> &'static [u8; 64] {
    &TABLES[kind.id()]
}

/// Canonical faces `kind` reads.
#[inline]
pub fn input_faces(kind: GateKind) -> FaceMask {
    FaceMask::new(INPUTS[kind.id()])
}

/// Canonical faces `kind` may drive.
#[inline]
pub fn output_faces(kind: GateKind) -> FaceMask {
    FaceMask::new(OUTPUTS[kind.id()])
}
