mod config;

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use voxlogic_blocks::{Block, GateKind, Logic, Orientation};
use voxlogic_chunk::{CHUNK_WIDTH, World, fill_world};
use voxlogic_geom::{Mat4, Vec3};
use voxlogic_logic::{GateModels, SimulationEngine};
use voxlogic_mesh_cpu::{MeshMode, Mesher, ModelStore, is_visible, render_grid};
use voxlogic_runtime::{LogicOptions, LogicThread, RemeshPool};

use crate::config::{AppConfig, load_or_default};

const DEFAULT_TICKS: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "voxlogic", version, about = "Voxel world meshing and circuit simulation")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "voxlogic.toml")]
    config: PathBuf,
    /// Overrides `[log] level`
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the circuit simulation for a number of ticks
    Simulate {
        /// World file; overrides `[world] path`
        #[arg(long)]
        world: Option<PathBuf>,
        #[arg(long)]
        ticks: Option<u64>,
        /// Gate model directory; overrides `[logic] models_dir`
        #[arg(long)]
        models: Option<PathBuf>,
        /// Lay a demo circuit on the floor before running
        #[arg(long)]
        demo: bool,
        /// Save the world here afterwards
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Mesh a world (or a single grid file) and report sizes
    Mesh {
        #[arg(long)]
        world: Option<PathBuf>,
        /// Mesh one chunk/model grid file instead of a world
        #[arg(long, conflicts_with = "world")]
        grid: Option<PathBuf>,
        /// Use the per-cube mesher regardless of config
        #[arg(long)]
        naive: bool,
    },
    /// Write the default floor world
    NewWorld { out: PathBuf },
}

fn init_logging(level: LevelFilter, file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match file {
        Some(path) => {
            let cfg = simplelog::Config::default();
            CombinedLogger::init(vec![
                TermLogger::new(level, cfg.clone(), TerminalMode::Mixed, ColorChoice::Auto),
                WriteLogger::new(level, cfg, File::create(path)?),
            ])?;
        }
        None => {
            env_logger::Builder::new()
                .target(env_logger::Target::Stdout)
                .filter_level(level)
                .parse_env("RUST_LOG")
                .init();
        }
    }
    Ok(())
}

fn open_world(path: Option<&Path>) -> Result<World, Box<dyn Error>> {
    match path {
        Some(p) => Ok(voxlogic_io::load_world(p)?),
        None => {
            let mut world = World::new();
            fill_world(&mut world);
            Ok(world)
        }
    }
}

/// Constant source feeding a wire that runs into a not gate, then a lamp.
fn lay_demo_circuit(world: &mut World, mesher: &Mesher) {
    let gate = |kind: GateKind, yaw: u8| {
        Block::with_logic(Logic::new(kind).with_orientation(Orientation::new(0, 0, yaw)))
    };
    let (x, y) = (8, 1);
    mesher.set_block(world, x, y, 8, gate(GateKind::Constant, 2));
    for z in 9..20 {
        mesher.set_block(world, x, y, z, gate(GateKind::Wire, 0));
    }
    // not gate reading from -z and driving +z
    mesher.set_block(world, x, y, 20, gate(GateKind::Not, 2));
    mesher.set_block(world, x, y, 21, gate(GateKind::Wire, 0));
    mesher.set_block(world, x, y, 22, gate(GateKind::ColorOutput, 0));
    log::info!(target: "events", "demo circuit laid at x={} y={}", x, y);
}

fn simulate(
    cfg: &AppConfig,
    world: Option<PathBuf>,
    ticks: Option<u64>,
    models: Option<PathBuf>,
    demo: bool,
    save: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let world_path = world.or_else(|| cfg.world.path.clone());
    let mut world = open_world(world_path.as_deref())?;

    let t0 = Instant::now();
    let mut store = ModelStore::new();
    let models_dir = models.or_else(|| cfg.logic.models_dir.clone());
    let gate_models = Arc::new(GateModels::build(&mut store, models_dir.as_deref()));
    log::info!(target: "perf", "ms={} gate_models", t0.elapsed().as_millis());

    let mesher = Mesher::new(cfg.mesh.mode(), Arc::new(store));
    if demo {
        lay_demo_circuit(&mut world, &mesher);
    }
    let pool = RemeshPool::new(std::thread::available_parallelism().map_or(4, |n| n.get()));
    pool.remesh_dirty(&mut world, &mesher);

    let world = Arc::new(RwLock::new(world));
    let options = LogicOptions {
        max_ticks: Some(ticks.or(cfg.logic.max_ticks).unwrap_or(DEFAULT_TICKS)),
    };
    let thread = LogicThread::spawn(world.clone(), SimulationEngine::new(gate_models), options)?;

    let mut remeshed = 0usize;
    while let Ok(report) = thread.reports().recv() {
        log::debug!(
            target: "logic",
            "tick={} evaluated={} dirtied={} us={}",
            report.tick,
            report.evaluated,
            report.dirtied,
            report.elapsed.as_micros()
        );
        if report.dirtied > 0 {
            let mut w = world.write().map_err(|_| "world lock poisoned")?;
            remeshed += pool.remesh_dirty(&mut w, &mesher);
        }
    }
    let engine = thread.stop().ok_or("logic thread failed")?;

    let w = world.read().map_err(|_| "world lock poisoned")?;
    let powered = w
        .logic_refs()
        .into_iter()
        .filter(|r| w.get(*r).logic.is_some_and(|l| !l.output.is_empty()))
        .count();
    log::info!(
        target: "logic",
        "simulated {} ticks: {} logic blocks, {} driving, {} chunk remeshes",
        engine.ticks(),
        w.logic_refs().len(),
        powered,
        remeshed
    );
    if let Some(path) = save {
        voxlogic_io::save_world(&path, &w)?;
        log::info!("saved world to {}", path.display());
    }
    Ok(())
}

fn mesh(
    cfg: &AppConfig,
    world: Option<PathBuf>,
    grid: Option<PathBuf>,
    naive: bool,
) -> Result<(), Box<dyn Error>> {
    let mode = if naive { MeshMode::Naive } else { cfg.mesh.mode() };
    let store = ModelStore::new();

    if let Some(path) = grid {
        let g = voxlogic_io::load_grid(&path)?;
        let t0 = Instant::now();
        let mesh = render_grid(&g, &store, mode, Vec3::ZERO, 1.0);
        log::info!(
            target: "perf",
            "ms={:.3} mesh_grid mode={:?} blocks={} tris={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            mode,
            g.active_count(),
            mesh.triangle_count()
        );
        println!("{}: {} triangles", path.display(), mesh.triangle_count());
        return Ok(());
    }

    let world_path = world.or_else(|| cfg.world.path.clone());
    let mut world = open_world(world_path.as_deref())?;
    world.mark_all_dirty();
    let mesher = Mesher::new(mode, Arc::new(store));
    let pool = RemeshPool::new(std::thread::available_parallelism().map_or(4, |n| n.get()));
    let n = pool.remesh_dirty(&mut world, &mesher);

    let tris: usize = world.chunks().iter().map(|c| c.mesh.triangle_count()).sum();
    let extent = world.size() as f32 * CHUNK_WIDTH;
    let eye = Vec3::new(extent, extent * 0.75, extent);
    let view = Mat4::look_at(eye, Vec3::splat(extent * 0.5), Vec3::UP);
    let projection = Mat4::perspective(70f32.to_radians(), 16.0 / 9.0, 0.01, extent * 4.0);
    let visible = world
        .chunks()
        .iter()
        .filter(|c| !c.mesh.is_empty() && is_visible(c.coord, &view, &projection))
        .count();
    println!("{n} chunks meshed ({mode:?}): {tris} triangles, {visible} non-empty chunks in view");
    Ok(())
}

fn new_world(out: &Path) -> Result<(), Box<dyn Error>> {
    let mut world = World::new();
    fill_world(&mut world);
    voxlogic_io::save_world(out, &world)?;
    log::info!("wrote default world to {}", out.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let (cfg, found) = load_or_default(&cli.config)?;
    let level_name = cli.log_level.as_deref().unwrap_or(&cfg.log.level);
    let level: LevelFilter = level_name
        .parse()
        .map_err(|_| format!("unknown log level {level_name:?}"))?;
    init_logging(level, cfg.log.file.as_deref())?;
    if found {
        log::info!("loaded config from {}", cli.config.display());
    } else {
        log::info!("{} not found; using defaults", cli.config.display());
    }

    match cli.command {
        Command::Simulate {
            world,
            ticks,
            models,
            demo,
            save,
        } => simulate(&cfg, world, ticks, models, demo, save),
        Command::Mesh { world, grid, naive } => mesh(&cfg, world, grid, naive),
        Command::NewWorld { out } => new_world(&out),
    }
}
