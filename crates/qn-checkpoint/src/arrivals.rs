//! The arrival generator.

use qn_core::PassengerId;
use qn_engine::{Process, Step, StepCtx};

use crate::model::Checkpoint;
use crate::passenger::Passenger;
use crate::trace::TraceSink;

/// A perpetual process that feeds the checkpoint: draw an interarrival delay,
/// sleep for it, spawn the next sequentially-numbered passenger, repeat.
///
/// Spawned passengers run concurrently with the generator under the
/// cooperative scheduler — the generator never waits for them.  The generator
/// itself only stops when the horizon discards its next wake-up.
#[derive(Default)]
pub struct ArrivalGenerator {
    next_id:  u64,
    spawning: bool,
}

impl ArrivalGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: TraceSink> Process<Checkpoint<S>> for ArrivalGenerator {
    fn resume(&mut self, _ctx: &StepCtx<'_>, world: &mut Checkpoint<S>) -> Step<Checkpoint<S>> {
        if self.spawning {
            self.spawning = false;
            let id = PassengerId(self.next_id);
            self.next_id += 1;
            return Step::Spawn(Box::new(Passenger::new(id)));
        }
        self.spawning = true;
        Step::Wait(world.sample_interarrival())
    }
}
