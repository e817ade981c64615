//! The `Checkpoint` world and its builder.

use qn_core::{ResourceId, SimConfig, SimRng, TimeDist};
use qn_engine::Engine;

use crate::passenger::Passenger;
use crate::stats::RunResult;
use crate::trace::{NoopSink, TraceSink};

/// The two-stage checkpoint: one multi-server boarding-pass pool feeding a
/// bank of independent single-server security lanes.
///
/// `Checkpoint` is the world type threaded through every process resumption.
/// It owns everything a passenger needs — resource handles, service
/// distributions, the trial RNG, the wait-time aggregate, and the trace sink
/// — so processes never capture ambient state.
///
/// Create via [`CheckpointBuilder`]; one per trial.
pub struct Checkpoint<S: TraceSink = NoopSink> {
    /// The boarding-pass checker pool: capacity N, one shared FIFO queue.
    checker: ResourceId,

    /// The security bank: M capacity-1 lanes, ordered left to right for the
    /// routing policy's tie-break.
    lanes: Vec<ResourceId>,

    arrival_time: TimeDist,
    check_time:   TimeDist,
    scan_time:    TimeDist,

    rng:    SimRng,
    result: RunResult,
    sink:   S,
}

impl<S: TraceSink> Checkpoint<S> {
    /// Handle of the checker pool.
    #[inline]
    pub fn checker(&self) -> ResourceId {
        self.checker
    }

    /// Handles of the security lanes, in routing scan order.
    #[inline]
    pub fn lanes(&self) -> &[ResourceId] {
        &self.lanes
    }

    /// Draw the next interarrival delay.
    pub fn sample_interarrival(&mut self) -> f64 {
        self.arrival_time.sample(&mut self.rng)
    }

    /// Draw one boarding-pass check duration.
    pub fn sample_check(&mut self) -> f64 {
        self.check_time.sample(&mut self.rng)
    }

    /// Draw one security-scan duration.
    pub fn sample_scan(&mut self) -> f64 {
        self.scan_time.sample(&mut self.rng)
    }

    /// The aggregate so far (final once the engine has stopped).
    pub fn result(&self) -> RunResult {
        self.result
    }

    /// Unwrap the trace sink (e.g. to inspect collected records after a run).
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Fold a finished passenger into the aggregate and notify the sink.
    pub(crate) fn complete(&mut self, passenger: &Passenger) {
        let trace = passenger.trace();
        self.result.record(trace.wait);
        self.sink.on_complete(&trace);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Checkpoint`].
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = Engine::new();
/// let mut world = CheckpointBuilder::from_config(&config)
///     .sink(CollectSink::default())
///     .build(&mut engine, SimRng::for_trial(config.seed, trial));
/// ```
pub struct CheckpointBuilder<S: TraceSink = NoopSink> {
    checkers: usize,
    lanes:    usize,
    arrival:  TimeDist,
    check:    TimeDist,
    scan:     TimeDist,
    sink:     S,
}

impl CheckpointBuilder<NoopSink> {
    /// Builder with explicit staffing and distributions.  Tests use this with
    /// [`TimeDist::Fixed`] for deterministic scenarios.
    pub fn new(
        checkers: usize,
        lanes:    usize,
        arrival:  TimeDist,
        check:    TimeDist,
        scan:     TimeDist,
    ) -> Self {
        CheckpointBuilder { checkers, lanes, arrival, check, scan, sink: NoopSink }
    }

    /// Builder from a validated [`SimConfig`]: exponential arrivals and
    /// checks, uniform scans.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.checker_count,
            config.lane_count,
            TimeDist::Exponential { rate: config.arrival_rate },
            TimeDist::Exponential { rate: config.check_rate },
            TimeDist::Uniform { min: config.scan_min, max: config.scan_max },
        )
    }
}

impl<S: TraceSink> CheckpointBuilder<S> {
    /// Replace the trace sink (changes the world's sink type).
    pub fn sink<S2: TraceSink>(self, sink: S2) -> CheckpointBuilder<S2> {
        CheckpointBuilder {
            checkers: self.checkers,
            lanes:    self.lanes,
            arrival:  self.arrival,
            check:    self.check,
            scan:     self.scan,
            sink,
        }
    }

    /// Register the resources with `engine` and produce the world.
    ///
    /// # Panics
    /// Panics on zero checkers or lanes; validated configurations cannot
    /// reach this.
    pub fn build(self, engine: &mut Engine<Checkpoint<S>>, rng: SimRng) -> Checkpoint<S> {
        assert!(self.checkers >= 1, "checkpoint needs at least one checker");
        assert!(self.lanes >= 1, "checkpoint needs at least one security lane");

        let checker = engine.add_resource(self.checkers);
        let lanes = (0..self.lanes).map(|_| engine.add_resource(1)).collect();

        Checkpoint {
            checker,
            lanes,
            arrival_time: self.arrival,
            check_time:   self.check,
            scan_time:    self.scan,
            rng,
            result: RunResult::default(),
            sink:   self.sink,
        }
    }
}
