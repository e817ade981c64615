//! The `Engine` struct and its event loop.

use std::collections::BinaryHeap;

use qn_core::{ProcessId, ResourceId, SimTime};

use crate::event::QueuedEvent;
use crate::process::{Process, Step, StepCtx};
use crate::resource::Resource;

/// The discrete-event engine: virtual clock, event queue, process table, and
/// resource table.
///
/// `W` is the model world threaded through every [`Process::resume`] call.
/// Typical use:
///
/// ```rust,ignore
/// let mut engine = Engine::new();
/// let mut world = CheckpointBuilder::from_config(&config).build(&mut engine, rng);
/// engine.spawn(Box::new(ArrivalGenerator::new()));
/// engine.run(SimTime::new(config.horizon), &mut world);
/// ```
pub struct Engine<W> {
    /// The virtual clock.  Advances only in [`run`][Self::run], monotonically.
    now: SimTime,

    /// Pending events, earliest first with FIFO tie-break (see `event.rs`).
    queue: BinaryHeap<QueuedEvent>,

    /// Monotonic insertion counter backing the tie-break.
    seq: u64,

    /// All processes ever spawned.  A slot goes back to `None` when its
    /// process terminates; IDs are never reused within a run.
    procs: Vec<Option<Box<dyn Process<W>>>>,

    /// All registered resources, indexed by `ResourceId`.
    resources: Vec<Resource>,
}

impl<W> Engine<W> {
    pub fn new() -> Self {
        Engine {
            now:       SimTime::ZERO,
            queue:     BinaryHeap::new(),
            seq:       0,
            procs:     Vec::new(),
            resources: Vec::new(),
        }
    }

    /// The current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Register a resource with the given slot count.
    pub fn add_resource(&mut self, capacity: usize) -> ResourceId {
        let id = ResourceId(self.resources.len() as u32);
        self.resources.push(Resource::new(capacity));
        id
    }

    /// Read-only access to a resource, mainly for inspection in tests.
    pub fn resource(&self, id: ResourceId) -> &Resource {
        &self.resources[id.index()]
    }

    /// Register a process and schedule its first resumption at the current
    /// instant (ordered after already-queued events).
    pub fn spawn(&mut self, process: Box<dyn Process<W>>) -> ProcessId {
        let pid = ProcessId(self.procs.len() as u32);
        self.procs.push(Some(process));
        self.push_event(self.now, pid);
        pid
    }

    /// Drive the event loop until the queue drains or the next event lies
    /// past `until`.  Events beyond the horizon are discarded, not executed:
    /// processes in flight at the cutoff are simply never resumed.
    pub fn run(&mut self, until: SimTime, world: &mut W) {
        while let Some(head) = self.queue.peek() {
            if head.at > until {
                break;
            }
            let event = self.queue.pop().expect("peeked event vanished");
            assert!(event.at >= self.now, "event queue produced a time regression");
            self.now = event.at;
            self.step(event.pid, world);
        }
    }

    fn push_event(&mut self, at: SimTime, pid: ProcessId) {
        self.seq += 1;
        self.queue.push(QueuedEvent { at, seq: self.seq, pid });
    }

    /// Resume one process and carry out its steps until it suspends,
    /// parks, or terminates.
    fn step(&mut self, pid: ProcessId, world: &mut W) {
        let mut process = self.procs[pid.index()]
            .take()
            .unwrap_or_else(|| panic!("event fired for terminated {pid}"));

        loop {
            let ctx = StepCtx { now: self.now, resources: &self.resources };
            match process.resume(&ctx, world) {
                Step::Wait(delay) => {
                    let at = self.now.after(delay);
                    self.procs[pid.index()] = Some(process);
                    self.push_event(at, pid);
                    return;
                }

                Step::Acquire(rid) => {
                    if self.resources[rid.index()].try_acquire(pid) {
                        // Granted synchronously: keep running.
                        continue;
                    }
                    // Parked.  The wake comes from a future release.
                    self.procs[pid.index()] = Some(process);
                    return;
                }

                Step::Release(rid) => {
                    if let Some(next) = self.resources[rid.index()].release(pid) {
                        // The waiter already holds the slot; it resumes at the
                        // current instant, after events firing now.
                        self.push_event(self.now, next);
                    }
                    continue;
                }

                Step::Spawn(child) => {
                    self.spawn(child);
                    continue;
                }

                Step::Done => {
                    // Slot stays `None`; the process is dropped here.
                    return;
                }
            }
        }
    }
}

impl<W> Default for Engine<W> {
    fn default() -> Self {
        Self::new()
    }
}
