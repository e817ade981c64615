//! `qn-engine` — discrete-event engine for the rust_qn simulator.
//!
//! # Event loop
//!
//! ```text
//! run(until, world):
//!   pop the earliest event (time, seq) with time <= until
//!   advance now to the event's time
//!   resume the target process until it suspends:
//!     Wait(d)     -> re-enqueue the process at now + d
//!     Acquire(r)  -> grant a slot and continue, or park in r's FIFO
//!     Release(r)  -> free the slot; grant the oldest waiter (wakes at now)
//!     Spawn(p)    -> register p; p starts at now, after queued events
//!     Done        -> drop the process
//! ```
//!
//! Scheduling is single-threaded and cooperative: exactly one process body
//! executes at a time, and it runs uninterrupted between suspension points.
//! Equal-time events fire in insertion order (stable FIFO tie-break), and
//! events scheduled past the horizon are discarded, never fired.
//!
//! The engine is generic over a world type `W` — the model state threaded
//! mutably through every [`Process::resume`] call.  Processes never capture
//! the world; they receive it explicitly, which keeps construction and
//! testing hermetic.

pub mod engine;
mod event;
pub mod process;
pub mod resource;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::Engine;
pub use process::{Process, Step, StepCtx};
pub use resource::Resource;
