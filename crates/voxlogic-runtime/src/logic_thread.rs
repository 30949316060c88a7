use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use voxlogic_chunk::World;
use voxlogic_logic::SimulationEngine;

#[derive(Clone, Copy, Debug, Default)]
pub struct LogicOptions {
    /// Stop on its own after this many ticks.
    pub max_ticks: Option<u64>,
}

/// Sent after every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub evaluated: usize,
    pub dirtied: usize,
    pub elapsed: Duration,
}

/// Owns the thread that ticks a [`SimulationEngine`] against a shared world.
///
/// Each tick holds the world's write lock. The thread runs until [`LogicThread::stop`],
/// drop, or `max_ticks`.
pub struct LogicThread {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<SimulationEngine>>,
    reports: Receiver<TickReport>,
}

impl LogicThread {
    pub fn spawn(
        world: Arc<RwLock<World>>,
        engine: SimulationEngine,
        options: LogicOptions,
    ) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, reports) = unbounded();
        let flag = stop.clone();
        let handle = thread::Builder::new()
            .name("voxlogic-logic".into())
            .spawn(move || run(world, engine, options, &flag, &tx))?;
        Ok(Self {
            stop,
            handle: Some(handle),
            reports,
        })
    }

    #[inline]
    pub fn reports(&self) -> &Receiver<TickReport> {
        &self.reports
    }

    /// Reports received so far, without blocking.
    pub fn drain(&self) -> Vec<TickReport> {
        self.reports.try_iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Signals the thread, joins it and hands back the engine.
    pub fn stop(mut self) -> Option<SimulationEngine> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Option<SimulationEngine> {
        self.stop.store(true, Ordering::Release);
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(engine) => Some(engine),
            Err(_) => {
                log::error!(target: "logic", "logic thread panicked");
                None
            }
        }
    }
}

impl Drop for LogicThread {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(
    world: Arc<RwLock<World>>,
    mut engine: SimulationEngine,
    options: LogicOptions,
    stop: &AtomicBool,
    tx: &Sender<TickReport>,
) -> SimulationEngine {
    log::info!(target: "logic", "logic thread started max_ticks={:?}", options.max_ticks);
    let mut ran = 0u64;
    while !stop.load(Ordering::Acquire) {
        if options.max_ticks.is_some_and(|m| ran >= m) {
            break;
        }
        let stats = {
            let Ok(mut w) = world.write() else {
                log::error!(target: "logic", "world lock poisoned; stopping simulation");
                break;
            };
            engine.tick(&mut w)
        };
        ran += 1;
        let _ = tx.send(TickReport {
            tick: engine.ticks(),
            evaluated: stats.evaluated,
            dirtied: stats.dirtied,
            elapsed: stats.elapsed,
        });
        thread::yield_now();
    }
    log::info!(target: "logic", "logic thread stopped after {} ticks", ran);
    engine
}
