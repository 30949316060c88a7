use voxlogic_blocks::Block;

use crate::{CHUNK_SIZE, CHUNK_VOLUME, ChunkCoord, LOG_CHUNK_SIZE, Mesh};

/// Linear cell index, x outermost and z innermost (the grid file order).
#[inline]
pub const fn local_index(x: usize, y: usize, z: usize) -> usize {
    (((x << LOG_CHUNK_SIZE) + y) << LOG_CHUNK_SIZE) + z
}

#[inline]
pub const fn local_coords(i: usize) -> (usize, usize, usize) {
    let mask = CHUNK_SIZE - 1;
    (
        (i >> (2 * LOG_CHUNK_SIZE)) & mask,
        (i >> LOG_CHUNK_SIZE) & mask,
        i & mask,
    )
}

/// A 16^3 array of blocks. Used both for world chunks and for model contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockGrid {
    blocks: Box<[Block]>,
}

impl Default for BlockGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockGrid {
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::AIR; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Takes ownership of exactly `CHUNK_VOLUME` blocks in [`local_index`] order.
    pub fn from_blocks(blocks: Vec<Block>) -> Option<Self> {
        (blocks.len() == CHUNK_VOLUME).then(|| Self {
            blocks: blocks.into_boxed_slice(),
        })
    }

    /// Coordinates must be below `CHUNK_SIZE`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> &Block {
        debug_assert!(x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE);
        &self.blocks[local_index(x, y, z)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> &mut Block {
        debug_assert!(x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE);
        &mut self.blocks[local_index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: Block) {
        *self.get_mut(x, y, z) = block;
    }

    /// Bounds-checked lookup for signed coordinates.
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32, z: i32) -> Option<&Block> {
        let n = CHUNK_SIZE as i32;
        if (0..n).contains(&x) && (0..n).contains(&y) && (0..n).contains(&z) {
            Some(self.get(x as usize, y as usize, z as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn by_index(&self, i: usize) -> &Block {
        &self.blocks[i]
    }

    #[inline]
    pub fn by_index_mut(&mut self, i: usize) -> &mut Block {
        &mut self.blocks[i]
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn has_active(&self) -> bool {
        self.blocks.iter().any(|b| b.active)
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }
}

/// A world chunk: its blocks, the last generated mesh and a remesh flag.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub blocks: BlockGrid,
    pub mesh: Mesh,
    pub dirty: bool,
}

impl Chunk {
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: BlockGrid::new(),
            mesh: Mesh::EMPTY,
            dirty: false,
        }
    }

    /// Chunk at the origin, not part of any world.
    pub fn standalone() -> Self {
        Self::new(ChunkCoord::default())
    }

    pub fn from_grid(coord: ChunkCoord, blocks: BlockGrid) -> Self {
        Self {
            coord,
            blocks,
            mesh: Mesh::EMPTY,
            dirty: true,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> &Block {
        self.blocks.get(x, y, z)
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> &mut Block {
        self.blocks.get_mut(x, y, z)
    }

    /// Replaces a block value and flags the chunk for remeshing.
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: Block) -> Block {
        self.dirty = true;
        std::mem::replace(self.blocks.get_mut(x, y, z), block)
    }

    /// Installs a freshly generated mesh, dropping the previous one, and clears the flag.
    pub fn replace_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
        self.dirty = false;
    }
}
