use std::num::NonZeroU32;

use voxlogic_blocks::Face;

use crate::{CHUNK_SIZE, CHUNK_VOLUME, ChunkCoord, local_coords, local_index};

/// Stable handle to one block of a grid: `chunk * CHUNK_VOLUME + local`, stored plus one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockRef(NonZeroU32);

impl BlockRef {
    #[inline]
    pub fn new(chunk: usize, local: usize) -> Self {
        debug_assert!(local < CHUNK_VOLUME);
        Self::from_linear(chunk * CHUNK_VOLUME + local)
    }

    #[inline]
    pub fn from_linear(i: usize) -> Self {
        // i + 1 is never zero for any index that fits a grid
        BlockRef(NonZeroU32::MIN.saturating_add(i as u32))
    }

    /// Position in a grid's flat block sequence.
    #[inline]
    pub fn linear(self) -> usize {
        (self.0.get() - 1) as usize
    }

    #[inline]
    pub fn chunk(self) -> usize {
        self.linear() / CHUNK_VOLUME
    }

    #[inline]
    pub fn local(self) -> usize {
        self.linear() % CHUNK_VOLUME
    }
}

/// Six neighbor handles per block, computed once when a grid is built.
#[derive(Clone, Debug)]
pub struct NeighborTable {
    chunks_per_edge: usize,
    refs: Vec<[Option<BlockRef>; 6]>,
}

impl NeighborTable {
    /// Links every block of a cube of `chunks_per_edge`^3 chunks to its face neighbors,
    /// across chunk boundaries. Handles at the outer boundary are `None`.
    pub fn build(chunks_per_edge: usize) -> Self {
        let n_chunks = chunks_per_edge * chunks_per_edge * chunks_per_edge;
        let edge = (chunks_per_edge * CHUNK_SIZE) as i32;
        let mut refs = vec![[None; 6]; n_chunks * CHUNK_VOLUME];
        for chunk in 0..n_chunks {
            let coord = ChunkCoord::from_index_in(chunk, chunks_per_edge);
            for local in 0..CHUNK_VOLUME {
                let (lx, ly, lz) = local_coords(local);
                let wx = coord.cx * CHUNK_SIZE as i32 + lx as i32;
                let wy = coord.cy * CHUNK_SIZE as i32 + ly as i32;
                let wz = coord.cz * CHUNK_SIZE as i32 + lz as i32;
                let slot = &mut refs[chunk * CHUNK_VOLUME + local];
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    let (nx, ny, nz) = (wx + dx, wy + dy, wz + dz);
                    if nx < 0 || ny < 0 || nz < 0 || nx >= edge || ny >= edge || nz >= edge {
                        continue;
                    }
                    slot[face.index()] = Some(ref_at(chunks_per_edge, nx, ny, nz));
                }
            }
        }
        Self {
            chunks_per_edge,
            refs,
        }
    }

    #[inline]
    pub fn chunks_per_edge(&self) -> usize {
        self.chunks_per_edge
    }

    #[inline]
    pub fn neighbor(&self, r: BlockRef, face: Face) -> Option<BlockRef> {
        self.refs[r.linear()][face.index()]
    }

    #[inline]
    pub fn all(&self, r: BlockRef) -> &[Option<BlockRef>; 6] {
        &self.refs[r.linear()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

/// Handle for in-range grid coordinates `(x, y, z)`.
#[inline]
pub(crate) fn ref_at(chunks_per_edge: usize, x: i32, y: i32, z: i32) -> BlockRef {
    let s = CHUNK_SIZE as i32;
    let coord = ChunkCoord::new(x / s, y / s, z / s);
    let chunk = ((coord.cx as usize * chunks_per_edge) + coord.cy as usize) * chunks_per_edge
        + coord.cz as usize;
    let local = local_index((x % s) as usize, (y % s) as usize, (z % s) as usize);
    BlockRef::new(chunk, local)
}
