//! `qn-core` — foundational types for the `rust_qn` queueing-network
//! simulator.
//!
//! This crate is a dependency of every other `qn-*` crate.  It intentionally
//! has no `qn-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `PassengerId`, `LaneId`, `ProcessId`, `ResourceId`        |
//! | [`time`]   | `SimTime` — the virtual clock value                       |
//! | [`rng`]    | `SimRng` — deterministic per-trial RNG                    |
//! | [`dist`]   | `TimeDist` — duration distributions for service/arrivals  |
//! | [`config`] | `SimConfig` and its fail-fast validation                  |
//! | [`error`]  | `ConfigError`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod dist;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use dist::TimeDist;
pub use error::ConfigError;
pub use ids::{LaneId, PassengerId, ProcessId, ResourceId};
pub use rng::SimRng;
pub use time::SimTime;
