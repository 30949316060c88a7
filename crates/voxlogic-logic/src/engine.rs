use std::sync::Arc;
use std::time::{Duration, Instant};

use voxlogic_blocks::{Face, FaceMask};
use voxlogic_chunk::{BlockRef, World};

use crate::GateModels;
use crate::rotate::{rotate_inputs, rotate_outputs};
use crate::tables::truth;

/// Counters for one simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Logic blocks evaluated.
    pub evaluated: usize,
    /// Chunks that became dirty during the step.
    pub dirtied: usize,
    pub elapsed: Duration,
}

/// Synchronous two-phase circuit simulation over a [`World`].
///
/// Each tick first evaluates every logic block from its current inputs, then latches
/// new inputs from the neighbors' outputs, so a signal moves one block per tick.
pub struct SimulationEngine {
    models: Arc<GateModels>,
    ticks: u64,
    refs: Vec<BlockRef>,
    latched: Vec<FaceMask>,
}

impl SimulationEngine {
    pub fn new(models: Arc<GateModels>) -> Self {
        Self {
            models,
            ticks: 0,
            refs: Vec::new(),
            latched: Vec::new(),
        }
    }

    /// Ticks completed so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn models(&self) -> &GateModels {
        &self.models
    }

    pub fn tick(&mut self, world: &mut World) -> TickStats {
        let t0 = Instant::now();
        self.refs = world.logic_refs();
        let dirtied = self.evaluate(world);
        self.advance(world);
        self.ticks += 1;
        TickStats {
            evaluated: self.refs.len(),
            dirtied,
            elapsed: t0.elapsed(),
        }
    }

    /// Outputs, model and transform for every logic block. Returns how many chunks
    /// were newly flagged for remeshing.
    fn evaluate(&self, world: &mut World) -> usize {
        let mut dirtied = 0;
        for &r in &self.refs {
            let block = world.get_mut(r);
            let Some(logic) = block.logic.as_mut() else {
                continue;
            };
            let canonical = rotate_inputs(logic.input, logic.orientation);
            logic.output = rotate_outputs(truth(logic.kind, canonical), logic.orientation);

            let model = Some(self.models.get(logic.kind, canonical));
            let transform = Some(logic.orientation.index() as u8);
            if block.model == model && logic.transform == transform {
                continue;
            }
            logic.transform = transform;
            block.model = model;
            if !world.chunks()[r.chunk()].dirty {
                dirtied += 1;
            }
            world.mark_dirty(r);
        }
        dirtied
    }

    fn advance(&mut self, world: &mut World) {
        self.latched.clear();
        for &r in &self.refs {
            let mut input = FaceMask::EMPTY;
            for face in Face::ALL {
                let driven = world
                    .neighbor_block(r, face)
                    .and_then(|b| b.logic)
                    .is_some_and(|n| n.output.get(face.opposite()));
                input.set(face, driven);
            }
            self.latched.push(input);
        }
        for (&r, &input) in self.refs.iter().zip(&self.latched) {
            if let Some(logic) = world.get_mut(r).logic.as_mut() {
                logic.input = input;
            }
        }
    }
}
