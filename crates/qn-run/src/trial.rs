//! Running a single trial.

use qn_core::{SimConfig, SimRng, SimTime};
use qn_engine::Engine;
use qn_checkpoint::{ArrivalGenerator, CheckpointBuilder, NoopSink, RunResult, TraceSink};

/// Run one trial to the horizon and return its aggregate.
///
/// `trial` selects the deterministic RNG stream: the same (seed, trial) pair
/// always reproduces the same result, independent of other trials.  The
/// configuration is assumed validated; [`run_study`][crate::run_study] does
/// that once up front.
pub fn run_trial(config: &SimConfig, trial: u32) -> RunResult {
    let (result, _) = run_trial_with_sink(config, trial, NoopSink);
    result
}

/// [`run_trial`], but with a trace sink observing every completion.
///
/// Returns the sink so file-backed sinks can be inspected (or collected
/// records read back) after the run.
pub fn run_trial_with_sink<S: TraceSink>(
    config: &SimConfig,
    trial:  u32,
    sink:   S,
) -> (RunResult, S) {
    let mut engine = Engine::new();
    let mut world = CheckpointBuilder::from_config(config)
        .sink(sink)
        .build(&mut engine, SimRng::for_trial(config.seed, trial));

    engine.spawn(Box::new(ArrivalGenerator::new()));
    engine.run(SimTime::new(config.horizon), &mut world);

    let result = world.result();
    let mut sink = world.into_sink();
    sink.on_run_end(&result);
    (result, sink)
}
