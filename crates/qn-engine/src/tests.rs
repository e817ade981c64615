//! Integration tests for qn-engine.

use qn_core::{ResourceId, SimTime};

use crate::{Engine, Process, Step, StepCtx};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Test world: a log of (time, label) entries pushed by processes.
type Log = Vec<(f64, &'static str)>;

/// Waits `delay` once, then records its label and terminates.
struct FireAt {
    delay:  f64,
    label:  &'static str,
    waited: bool,
}

impl FireAt {
    fn new(delay: f64, label: &'static str) -> Self {
        FireAt { delay, label, waited: false }
    }
}

impl Process<Log> for FireAt {
    fn resume(&mut self, ctx: &StepCtx<'_>, world: &mut Log) -> Step<Log> {
        if !self.waited {
            self.waited = true;
            return Step::Wait(self.delay);
        }
        world.push((ctx.now().as_f64(), self.label));
        Step::Done
    }
}

/// Acquires a resource, holds it for `hold` time units, then releases it.
/// Logs its label at the instant the slot is granted.
struct Holder {
    rid:   ResourceId,
    hold:  f64,
    label: &'static str,
    phase: u8,
}

impl Holder {
    fn new(rid: ResourceId, hold: f64, label: &'static str) -> Self {
        Holder { rid, hold, label, phase: 0 }
    }
}

impl Process<Log> for Holder {
    fn resume(&mut self, ctx: &StepCtx<'_>, world: &mut Log) -> Step<Log> {
        match self.phase {
            0 => {
                self.phase = 1;
                Step::Acquire(self.rid)
            }
            1 => {
                // Reached only once the slot is held.
                assert!(
                    ctx.in_use(self.rid) <= ctx.capacity(self.rid),
                    "capacity exceeded on grant"
                );
                world.push((ctx.now().as_f64(), self.label));
                self.phase = 2;
                Step::Wait(self.hold)
            }
            2 => {
                self.phase = 3;
                Step::Release(self.rid)
            }
            _ => Step::Done,
        }
    }
}

fn run_to(engine: &mut Engine<Log>, until: f64) -> Log {
    let mut log = Log::new();
    engine.run(SimTime::new(until), &mut log);
    log
}

// ── Time-ordered firing ───────────────────────────────────────────────────────

mod clock_tests {
    use super::*;

    #[test]
    fn events_fire_in_time_order_regardless_of_insertion() {
        let mut engine = Engine::new();
        engine.spawn(Box::new(FireAt::new(3.0, "a")));
        engine.spawn(Box::new(FireAt::new(1.0, "b")));
        engine.spawn(Box::new(FireAt::new(2.0, "c")));

        let log = run_to(&mut engine, 10.0);
        assert_eq!(log, vec![(1.0, "b"), (2.0, "c"), (3.0, "a")]);
        assert_eq!(engine.now(), SimTime::new(3.0));
    }

    #[test]
    fn equal_time_events_fire_in_insertion_order() {
        let mut engine = Engine::new();
        engine.spawn(Box::new(FireAt::new(1.0, "first")));
        engine.spawn(Box::new(FireAt::new(1.0, "second")));
        engine.spawn(Box::new(FireAt::new(1.0, "third")));

        let log = run_to(&mut engine, 10.0);
        assert_eq!(log, vec![(1.0, "first"), (1.0, "second"), (1.0, "third")]);
    }

    #[test]
    fn events_past_horizon_are_discarded() {
        let mut engine = Engine::new();
        engine.spawn(Box::new(FireAt::new(5.0, "late")));

        let log = run_to(&mut engine, 2.0);
        assert!(log.is_empty(), "event past the horizon fired: {log:?}");
    }

    #[test]
    fn event_exactly_at_horizon_fires() {
        let mut engine = Engine::new();
        engine.spawn(Box::new(FireAt::new(2.0, "edge")));

        let log = run_to(&mut engine, 2.0);
        assert_eq!(log, vec![(2.0, "edge")]);
    }

    #[test]
    fn zero_delay_wait_fires_at_current_time() {
        let mut engine = Engine::new();
        engine.spawn(Box::new(FireAt::new(0.0, "now")));

        let log = run_to(&mut engine, 1.0);
        assert_eq!(log, vec![(0.0, "now")]);
    }

    #[test]
    #[should_panic(expected = "invalid delay")]
    fn negative_wait_is_an_invariant_violation() {
        struct BadWait;
        impl Process<Log> for BadWait {
            fn resume(&mut self, _ctx: &StepCtx<'_>, _world: &mut Log) -> Step<Log> {
                Step::Wait(-1.0)
            }
        }

        let mut engine = Engine::new();
        engine.spawn(Box::new(BadWait));
        run_to(&mut engine, 1.0);
    }
}

// ── Resource protocol ─────────────────────────────────────────────────────────

mod resource_tests {
    use super::*;

    #[test]
    fn single_server_grants_in_fifo_order() {
        let mut engine = Engine::new();
        let rid = engine.add_resource(1);
        engine.spawn(Box::new(Holder::new(rid, 1.0, "a")));
        engine.spawn(Box::new(Holder::new(rid, 1.0, "b")));
        engine.spawn(Box::new(Holder::new(rid, 1.0, "c")));

        let log = run_to(&mut engine, 10.0);
        assert_eq!(log, vec![(0.0, "a"), (1.0, "b"), (2.0, "c")]);
    }

    #[test]
    fn multi_server_respects_capacity() {
        let mut engine = Engine::new();
        let rid = engine.add_resource(2);
        engine.spawn(Box::new(Holder::new(rid, 1.0, "a")));
        engine.spawn(Box::new(Holder::new(rid, 1.0, "b")));
        engine.spawn(Box::new(Holder::new(rid, 1.0, "c")));
        engine.spawn(Box::new(Holder::new(rid, 1.0, "d")));

        // Two slots: a and b start immediately, c and d when the first two free.
        let log = run_to(&mut engine, 10.0);
        assert_eq!(log, vec![(0.0, "a"), (0.0, "b"), (1.0, "c"), (1.0, "d")]);
        assert_eq!(engine.resource(rid).in_use(), 0);
        assert_eq!(engine.resource(rid).queue_len(), 0);
    }

    #[test]
    fn free_slot_granted_synchronously() {
        // With capacity available the grant happens within the same scheduler
        // step: the holder's label lands at the spawn instant.
        let mut engine = Engine::new();
        let rid = engine.add_resource(1);
        engine.spawn(Box::new(Holder::new(rid, 0.5, "solo")));

        let log = run_to(&mut engine, 1.0);
        assert_eq!(log, vec![(0.0, "solo")]);
    }

    #[test]
    fn woken_waiter_resumes_after_events_firing_now() {
        // a releases at t=1; b is parked on the resource; c has an ordinary
        // event at t=1 scheduled before the release happens.  b's wake must
        // be ordered after c's already-queued event.
        let mut engine = Engine::new();
        let rid = engine.add_resource(1);
        engine.spawn(Box::new(Holder::new(rid, 1.0, "a")));
        engine.spawn(Box::new(Holder::new(rid, 1.0, "b")));
        engine.spawn(Box::new(FireAt::new(1.0, "c")));

        let log = run_to(&mut engine, 10.0);
        assert_eq!(log, vec![(0.0, "a"), (1.0, "c"), (1.0, "b")]);
    }

    #[test]
    fn queue_len_excludes_holders() {
        let mut engine = Engine::new();
        let rid = engine.add_resource(1);
        engine.spawn(Box::new(Holder::new(rid, 2.0, "a")));
        engine.spawn(Box::new(Holder::new(rid, 2.0, "b")));
        engine.spawn(Box::new(Holder::new(rid, 2.0, "c")));

        // Stop mid-run while a holds and b, c wait.
        let mut log = Log::new();
        engine.run(SimTime::new(1.0), &mut log);
        assert_eq!(engine.resource(rid).in_use(), 1);
        assert_eq!(engine.resource(rid).queue_len(), 2);
    }

    #[test]
    #[should_panic(expected = "does not hold")]
    fn releasing_unheld_resource_is_an_invariant_violation() {
        struct BadRelease(ResourceId);
        impl Process<Log> for BadRelease {
            fn resume(&mut self, _ctx: &StepCtx<'_>, _world: &mut Log) -> Step<Log> {
                Step::Release(self.0)
            }
        }

        let mut engine = Engine::new();
        let rid = engine.add_resource(1);
        engine.spawn(Box::new(BadRelease(rid)));
        run_to(&mut engine, 1.0);
    }
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

mod spawn_tests {
    use super::*;

    /// Logs itself, spawns a child, and terminates without awaiting it.
    struct Parent {
        spawned: bool,
    }

    impl Process<Log> for Parent {
        fn resume(&mut self, ctx: &StepCtx<'_>, world: &mut Log) -> Step<Log> {
            if !self.spawned {
                self.spawned = true;
                world.push((ctx.now().as_f64(), "parent"));
                return Step::Spawn(Box::new(FireAt::new(0.0, "child")));
            }
            Step::Done
        }
    }

    #[test]
    fn child_starts_at_spawn_instant_after_parent_continues() {
        let mut engine = Engine::new();
        engine.spawn(Box::new(Parent { spawned: false }));

        let log = run_to(&mut engine, 1.0);
        assert_eq!(log, vec![(0.0, "parent"), (0.0, "child")]);
    }

    #[test]
    fn spawned_lifecycles_run_concurrently() {
        // A generator that emits a child every 1.0 time units.  Children take
        // 2.5 units to complete, so their lifecycles overlap each other and
        // the generator itself.
        struct EveryUnit {
            emitted:  u8,
            spawning: bool,
        }
        impl Process<Log> for EveryUnit {
            fn resume(&mut self, _ctx: &StepCtx<'_>, _world: &mut Log) -> Step<Log> {
                if self.spawning {
                    self.spawning = false;
                    self.emitted += 1;
                    let label = ["x", "y", "z"][self.emitted as usize - 1];
                    return Step::Spawn(Box::new(FireAt::new(2.5, label)));
                }
                if self.emitted == 3 {
                    return Step::Done;
                }
                self.spawning = true;
                Step::Wait(1.0)
            }
        }

        let mut engine = Engine::new();
        engine.spawn(Box::new(EveryUnit { emitted: 0, spawning: false }));

        // Children spawn at t=1, 2, 3 and fire 2.5 units later.
        let log = run_to(&mut engine, 10.0);
        assert_eq!(log, vec![(3.5, "x"), (4.5, "y"), (5.5, "z")]);
    }
}
