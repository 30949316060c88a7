use voxlogic_blocks::{Block, Color, Face};

use crate::neighbors::ref_at;
use crate::{BlockRef, CHUNK_SIZE, CHUNK_VOLUME, Chunk, ChunkCoord, NeighborTable, WORLD_SIZE};

/// A cube of chunks with neighbor handles that cross chunk boundaries.
///
/// The world does no locking of its own; callers serialize mutation.
#[derive(Clone, Debug)]
pub struct World {
    size: usize,
    chunks: Vec<Chunk>,
    neighbors: NeighborTable,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Empty world of `WORLD_SIZE`^3 chunks.
    pub fn new() -> Self {
        Self::with_size(WORLD_SIZE)
    }

    /// Empty world of `size`^3 chunks.
    pub fn with_size(size: usize) -> Self {
        let n = size * size * size;
        let chunks = (0..n)
            .map(|i| Chunk::new(ChunkCoord::from_index_in(i, size)))
            .collect();
        Self {
            size,
            chunks,
            neighbors: NeighborTable::build(size),
        }
    }

    /// Chunks per edge.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Blocks per edge.
    #[inline]
    pub fn block_extent(&self) -> i32 {
        (self.size * CHUNK_SIZE) as i32
    }

    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[inline]
    pub fn chunks_mut(&mut self) -> &mut [Chunk] {
        &mut self.chunks
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        coord.index_in(self.size).map(|i| &self.chunks[i])
    }

    pub fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        coord.index_in(self.size).map(move |i| &mut self.chunks[i])
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        let e = self.block_extent();
        (0..e).contains(&x) && (0..e).contains(&y) && (0..e).contains(&z)
    }

    /// Handle for world block coordinates, `None` outside the world.
    #[inline]
    pub fn block_ref(&self, x: i32, y: i32, z: i32) -> Option<BlockRef> {
        self.in_bounds(x, y, z).then(|| ref_at(self.size, x, y, z))
    }

    #[inline]
    pub fn block(&self, x: i32, y: i32, z: i32) -> Option<&Block> {
        self.block_ref(x, y, z).map(|r| self.get(r))
    }

    #[inline]
    pub fn block_mut(&mut self, x: i32, y: i32, z: i32) -> Option<&mut Block> {
        let r = self.block_ref(x, y, z)?;
        Some(self.get_mut(r))
    }

    #[inline]
    pub fn get(&self, r: BlockRef) -> &Block {
        self.chunks[r.chunk()].blocks.by_index(r.local())
    }

    #[inline]
    pub fn get_mut(&mut self, r: BlockRef) -> &mut Block {
        self.chunks[r.chunk()].blocks.by_index_mut(r.local())
    }

    #[inline]
    pub fn neighbor(&self, r: BlockRef, face: Face) -> Option<BlockRef> {
        self.neighbors.neighbor(r, face)
    }

    #[inline]
    pub fn neighbor_block(&self, r: BlockRef, face: Face) -> Option<&Block> {
        self.neighbor(r, face).map(|n| self.get(n))
    }

    /// World block coordinates of a handle.
    pub fn position(&self, r: BlockRef) -> (i32, i32, i32) {
        let c = &self.chunks[r.chunk()].coord;
        let (lx, ly, lz) = crate::local_coords(r.local());
        let s = CHUNK_SIZE as i32;
        (c.cx * s + lx as i32, c.cy * s + ly as i32, c.cz * s + lz as i32)
    }

    #[inline]
    pub fn mark_dirty(&mut self, r: BlockRef) {
        self.chunks[r.chunk()].dirty = true;
    }

    /// Replaces the block value at `r`, keeping its neighbor handles, and flags its chunk.
    pub fn replace(&mut self, r: BlockRef, block: Block) -> Block {
        self.mark_dirty(r);
        std::mem::replace(self.get_mut(r), block)
    }

    /// Like [`World::replace`] for coordinates; `None` outside the world.
    pub fn replace_block(&mut self, x: i32, y: i32, z: i32, block: Block) -> Option<Block> {
        let r = self.block_ref(x, y, z)?;
        Some(self.replace(r, block))
    }

    /// Every block handle in chunk order.
    pub fn refs(&self) -> impl Iterator<Item = BlockRef> + use<> {
        (0..self.chunks.len() * CHUNK_VOLUME).map(BlockRef::from_linear)
    }

    /// Handles of all blocks carrying a logic component.
    pub fn logic_refs(&self) -> Vec<BlockRef> {
        let mut out = Vec::new();
        for (ci, chunk) in self.chunks.iter().enumerate() {
            for (li, b) in chunk.blocks.blocks().iter().enumerate() {
                if b.logic.is_some() {
                    out.push(BlockRef::new(ci, li));
                }
            }
        }
        out
    }

    pub fn dirty_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.dirty).count()
    }

    pub fn mark_all_dirty(&mut self) {
        for c in &mut self.chunks {
            c.dirty = true;
        }
    }
}

/// Default scene: a checkerboard floor over the bottom chunk row plus a one-block
/// rim along the `x = 0` and `z = 0` edges. Touched chunks are flagged for remeshing.
pub fn fill_world(world: &mut World) {
    let mut placed = 0usize;
    for chunk in world.chunks_mut() {
        if chunk.coord.cy != 0 {
            continue;
        }
        let rim_x = chunk.coord.cx == 0;
        let rim_z = chunk.coord.cz == 0;
        for bx in 0..CHUNK_SIZE {
            for bz in 0..CHUNK_SIZE {
                for by in 0..2 {
                    let on_floor = by == 0;
                    let on_rim = by == 1 && ((bx == 0 && rim_x) || (bz == 0 && rim_z));
                    if !(on_floor || on_rim) {
                        continue;
                    }
                    let color = if (bx + by + bz) % 2 == 1 {
                        Color::WHITE
                    } else {
                        Color::WHITE.darkened()
                    };
                    chunk.set(bx, by, bz, Block::solid(color));
                    placed += 1;
                }
            }
        }
    }
    log::debug!("fill_world placed {} blocks", placed);
}
