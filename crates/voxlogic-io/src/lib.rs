//! Run-length grid files for chunks, models and whole worlds.
//!
//! A grid is a sequence of 8-byte records `{count: u32 LE, color: [r, g, b, a]}` that
//! together cover exactly `CHUNK_VOLUME` cells in x-major, then y, then z order.
//! A cell whose color is all zero is empty. A world file is its chunks' grids
//! back to back, chunks in the same x-major order.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use voxlogic_blocks::{Block, Color};
use voxlogic_chunk::{BlockGrid, CHUNK_VOLUME, World};

pub const RECORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum RleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("grid data covers more than {} cells", CHUNK_VOLUME)]
    TooLarge,
    #[error("grid data ends after {filled} of {} cells", CHUNK_VOLUME)]
    TooSmall { filled: usize },
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<RleError>,
    },
}

impl RleError {
    fn at(self, path: &Path) -> RleError {
        RleError::File {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any file context removed.
    pub fn root(&self) -> &RleError {
        match self {
            RleError::File { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RleError>;

/// Reads one record; `Ok(None)` at end of stream. A torn final record counts as the end.
fn read_record<R: Read>(r: &mut R) -> Result<Option<(u32, Color)>> {
    let mut buf = [0u8; RECORD_LEN];
    let mut got = 0;
    while got < RECORD_LEN {
        match r.read(&mut buf[got..]) {
            Ok(0) => break,
            Ok(n) => got += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    if got < RECORD_LEN {
        if got > 0 {
            log::warn!("ignoring {} trailing bytes of a torn run record", got);
        }
        return Ok(None);
    }
    let count = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let color = Color::from_bytes([buf[4], buf[5], buf[6], buf[7]]);
    Ok(Some((count, color)))
}

/// Reads exactly one grid's worth of cells from `r`, leaving the stream after it.
pub fn read_colors<R: Read>(r: &mut R) -> Result<Vec<Color>> {
    let mut cells = Vec::with_capacity(CHUNK_VOLUME);
    while cells.len() < CHUNK_VOLUME {
        let Some((count, color)) = read_record(r)? else {
            return Err(RleError::TooSmall {
                filled: cells.len(),
            });
        };
        let count = count as usize;
        if cells.len() + count > CHUNK_VOLUME {
            return Err(RleError::TooLarge);
        }
        cells.resize(cells.len() + count, color);
    }
    Ok(cells)
}

/// Cells to blocks: any non-zero color is an active solid block.
pub fn read_grid<R: Read>(r: &mut R) -> Result<BlockGrid> {
    let cells = read_colors(r)?;
    let blocks = cells.into_iter().map(Block::from_color).collect();
    BlockGrid::from_blocks(blocks).ok_or(RleError::TooSmall { filled: 0 })
}

/// Splits `colors` into runs no longer than `max_run`.
fn runs<I>(colors: I, max_run: u32) -> Vec<(u32, Color)>
where
    I: IntoIterator<Item = Color>,
{
    let mut out: Vec<(u32, Color)> = Vec::new();
    for c in colors {
        match out.last_mut() {
            Some((n, last)) if *last == c && *n < max_run => *n += 1,
            _ => out.push((1, c)),
        }
    }
    out
}

pub fn write_colors<W, I>(w: &mut W, colors: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Color>,
{
    for (count, color) in runs(colors, u32::MAX) {
        w.write_all(&count.to_le_bytes())?;
        w.write_all(&color.to_bytes())?;
    }
    Ok(())
}

/// Writes block colors; empty cells are written as the zero color. Model and logic
/// components are not part of the format.
pub fn write_grid<W: Write>(w: &mut W, grid: &BlockGrid) -> Result<()> {
    write_colors(
        w,
        grid.blocks()
            .iter()
            .map(|b| if b.active { b.color } else { Color::CLEAR }),
    )
}

fn expect_end<R: Read>(r: &mut R) -> Result<()> {
    match read_record(r)? {
        None => Ok(()),
        Some(_) => Err(RleError::TooLarge),
    }
}

pub fn load_grid(path: impl AsRef<Path>) -> Result<BlockGrid> {
    let path = path.as_ref();
    let run = || -> Result<BlockGrid> {
        let mut r = BufReader::new(File::open(path)?);
        let grid = read_grid(&mut r)?;
        expect_end(&mut r)?;
        Ok(grid)
    };
    run().map_err(|e| e.at(path))
}

pub fn save_grid(path: impl AsRef<Path>, grid: &BlockGrid) -> Result<()> {
    let path = path.as_ref();
    let run = || -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        write_grid(&mut w, grid)?;
        w.flush()?;
        Ok(())
    };
    run().map_err(|e| e.at(path))
}

/// Reads a world of `size`^3 chunks; every chunk is flagged for remeshing.
pub fn read_world<R: Read>(r: &mut R, size: usize) -> Result<World> {
    let mut world = World::with_size(size);
    for chunk in world.chunks_mut() {
        chunk.blocks = read_grid(r)?;
        chunk.dirty = true;
    }
    Ok(world)
}

pub fn write_world<W: Write>(w: &mut W, world: &World) -> Result<()> {
    for chunk in world.chunks() {
        write_grid(w, &chunk.blocks)?;
    }
    Ok(())
}

pub fn load_world(path: impl AsRef<Path>) -> Result<World> {
    let path = path.as_ref();
    let run = || -> Result<World> {
        let mut r = BufReader::new(File::open(path)?);
        let world = read_world(&mut r, voxlogic_chunk::WORLD_SIZE)?;
        expect_end(&mut r)?;
        Ok(world)
    };
    let world = run().map_err(|e| e.at(path))?;
    log::info!("loaded world from {}", path.display());
    Ok(world)
}

pub fn save_world(path: impl AsRef<Path>, world: &World) -> Result<()> {
    let path = path.as_ref();
    let run = || -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        write_world(&mut w, world)?;
        w.flush()?;
        Ok(())
    };
    run().map_err(|e| e.at(path))?;
    log::info!("saved world to {}", path.display());
    Ok(())
}
