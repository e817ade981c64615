//! `qn-checkpoint` — the two-stage security checkpoint model.
//!
//! # Pipeline
//!
//! ```text
//! arrivals ──> [ boarding-pass check ] ──> shortest-queue ──> [ security scan ] ──> done
//!               one capacity-N pool         routing, once      M capacity-1 lanes
//!               one shared FIFO queue       per passenger      one FIFO queue each
//! ```
//!
//! Passengers are [`Process`][qn_engine::Process] state machines driven by
//! the engine; the [`Checkpoint`] world holds the resources, the service
//! distributions, the trial RNG, and the wait-time aggregate.  A fresh
//! `Checkpoint` is built per trial — nothing is shared across trials.
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`model`]   | `Checkpoint`, `CheckpointBuilder`                        |
//! | [`passenger`] | the five-state passenger lifecycle                     |
//! | [`routing`] | the shortest-queue lane selection policy                 |
//! | [`arrivals`] | the perpetual arrival-generator process                 |
//! | [`stats`]   | `RunResult` and the empty-trial error                    |
//! | [`trace`]   | per-passenger trace records and sinks                    |

pub mod arrivals;
pub mod error;
pub mod model;
pub mod passenger;
pub mod routing;
pub mod stats;
pub mod trace;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::ArrivalGenerator;
pub use error::StatsError;
pub use model::{Checkpoint, CheckpointBuilder};
pub use passenger::Passenger;
pub use routing::shortest_queue;
pub use stats::RunResult;
pub use trace::{CollectSink, NoopSink, PassengerTrace, TraceSink};
