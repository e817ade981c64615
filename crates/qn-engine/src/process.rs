//! The cooperative process abstraction.
//!
//! A process is one passenger-style lifecycle modeled as an explicit state
//! machine: each call to [`Process::resume`] runs the body from its current
//! state to the next suspension point and returns a [`Step`] telling the
//! engine what to do with it.  This replaces language-level coroutine
//! suspension with re-entrant stepping — the process advances its own state
//! before returning, so the next `resume` continues where it left off.

use qn_core::{ResourceId, SimTime};

use crate::resource::Resource;

/// What a process wants from the engine at its next suspension point.
pub enum Step<W> {
    /// Suspend for `delay` simulated time units, then resume.
    Wait(f64),

    /// Request one slot of the resource.  If a slot is free the engine
    /// grants it and resumes the process synchronously (no suspension);
    /// otherwise the process parks in the resource's FIFO wait list.
    Acquire(ResourceId),

    /// Give back a held slot.  Not a suspension point: the engine resumes
    /// the process immediately after waking the oldest waiter, if any.
    Release(ResourceId),

    /// Register a new process.  The child is scheduled to start at the
    /// current instant, ordered after already-queued events; the parent
    /// resumes immediately without waiting for it.
    Spawn(Box<dyn Process<W>>),

    /// The process has terminated; the engine drops it.
    Done,
}

/// A unit of simulated work driven by the engine.
pub trait Process<W> {
    /// Run from the current state to the next suspension point.
    ///
    /// `ctx` is a read-only view of the clock and resource occupancy;
    /// `world` is the model state, passed explicitly on every call.
    fn resume(&mut self, ctx: &StepCtx<'_>, world: &mut W) -> Step<W>;
}

/// Read-only view of engine state, handed to processes while they run.
pub struct StepCtx<'a> {
    pub(crate) now:       SimTime,
    pub(crate) resources: &'a [Resource],
}

impl StepCtx<'_> {
    /// The current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Number of processes waiting for the resource (holders excluded).
    #[inline]
    pub fn queue_len(&self, id: ResourceId) -> usize {
        self.resources[id.index()].queue_len()
    }

    /// Number of slots currently held.
    #[inline]
    pub fn in_use(&self, id: ResourceId) -> usize {
        self.resources[id.index()].in_use()
    }

    /// Total slots of the resource.
    #[inline]
    pub fn capacity(&self, id: ResourceId) -> usize {
        self.resources[id.index()].capacity()
    }
}
