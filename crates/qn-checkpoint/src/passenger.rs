//! The passenger lifecycle state machine.
//!
//! One [`Passenger`] is one journey through the pipeline.  The coroutine-ish
//! flow ("wait for a checker, get checked, pick a lane, wait for it, get
//! scanned") is flattened into an explicit [`Phase`] enum: every suspension
//! point is a phase boundary, and the engine's re-entrant `resume` calls
//! drive the transitions.  Timestamps are set exactly once each, in order —
//! violations are programming faults and panic.

use qn_core::{LaneId, PassengerId, SimTime};
use qn_engine::{Process, Step, StepCtx};

use crate::model::Checkpoint;
use crate::routing::shortest_queue;
use crate::trace::{PassengerTrace, TraceSink};

/// What the next `resume` call will do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// Stamp arrival and queue for the checker pool.
    Arrive,
    /// Checker granted: stamp check-start and serve the check.
    StartCheck,
    /// Check served: stamp check-end and give the checker slot back.
    FinishCheck,
    /// Commit to the shortest security queue and join it.
    PickLane,
    /// Lane granted: stamp scan-start and serve the scan.
    StartScan,
    /// Scan served: give the lane back.
    FinishScan,
    /// Report the completed journey and terminate.
    Report,
}

/// One passenger's journey through the checkpoint.
pub struct Passenger {
    id:    PassengerId,
    phase: Phase,
    lane:  LaneId,

    arrival:     Option<SimTime>,
    check_start: Option<SimTime>,
    check_end:   Option<SimTime>,
    scan_start:  Option<SimTime>,
}

impl Passenger {
    pub fn new(id: PassengerId) -> Self {
        Passenger {
            id,
            phase: Phase::Arrive,
            lane:  LaneId::INVALID,
            arrival:     None,
            check_start: None,
            check_end:   None,
            scan_start:  None,
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    /// Time spent queued: (check_start - arrival) + (scan_start - check_end).
    /// Service periods themselves are excluded.
    ///
    /// # Panics
    /// Panics if any timestamp is still unset.
    pub fn wait_time(&self) -> f64 {
        let arrival     = self.get(self.arrival, "arrival");
        let check_start = self.get(self.check_start, "check_start");
        let check_end   = self.get(self.check_end, "check_end");
        let scan_start  = self.get(self.scan_start, "scan_start");
        (check_start - arrival) + (scan_start - check_end)
    }

    /// The completion record for the trace sink.
    pub(crate) fn trace(&self) -> PassengerTrace {
        PassengerTrace {
            id:          self.id,
            arrival:     self.get(self.arrival, "arrival").as_f64(),
            check_start: self.get(self.check_start, "check_start").as_f64(),
            check_end:   self.get(self.check_end, "check_end").as_f64(),
            scan_start:  self.get(self.scan_start, "scan_start").as_f64(),
            wait:        self.wait_time(),
            lane:        self.lane,
        }
    }

    fn get(&self, slot: Option<SimTime>, what: &str) -> SimTime {
        slot.unwrap_or_else(|| panic!("{}: timestamp {what} read before set", self.id))
    }

    /// Set a timestamp exactly once, never earlier than the one before it.
    fn stamp(slot: &mut Option<SimTime>, now: SimTime, floor: Option<SimTime>, what: &str) {
        assert!(slot.is_none(), "timestamp {what} set twice");
        if let Some(floor) = floor {
            assert!(now >= floor, "timestamp {what} out of order: {now} before {floor}");
        }
        *slot = Some(now);
    }
}

impl<S: TraceSink> Process<Checkpoint<S>> for Passenger {
    fn resume(&mut self, ctx: &StepCtx<'_>, world: &mut Checkpoint<S>) -> Step<Checkpoint<S>> {
        let now = ctx.now();
        match self.phase {
            Phase::Arrive => {
                Self::stamp(&mut self.arrival, now, None, "arrival");
                self.phase = Phase::StartCheck;
                Step::Acquire(world.checker())
            }

            Phase::StartCheck => {
                Self::stamp(&mut self.check_start, now, self.arrival, "check_start");
                self.phase = Phase::FinishCheck;
                Step::Wait(world.sample_check())
            }

            Phase::FinishCheck => {
                Self::stamp(&mut self.check_end, now, self.check_start, "check_end");
                self.phase = Phase::PickLane;
                Step::Release(world.checker())
            }

            Phase::PickLane => {
                // Committed here, once; never re-evaluated afterwards.
                let idx = shortest_queue(world.lanes().iter().map(|&lane| ctx.queue_len(lane)));
                self.lane = LaneId(idx as u32);
                self.phase = Phase::StartScan;
                Step::Acquire(world.lanes()[idx])
            }

            Phase::StartScan => {
                Self::stamp(&mut self.scan_start, now, self.check_end, "scan_start");
                self.phase = Phase::FinishScan;
                Step::Wait(world.sample_scan())
            }

            Phase::FinishScan => {
                self.phase = Phase::Report;
                Step::Release(world.lanes()[self.lane.index()])
            }

            Phase::Report => {
                world.complete(self);
                Step::Done
            }
        }
    }
}
