//! Configuration errors.
//!
//! Sub-crates define their own error enums for their own concerns and wrap
//! `ConfigError` via `From` impls where configuration flows through them.

use thiserror::Error;

/// An invalid simulation parameter, caught before any trial runs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("scan interval [{min}, {max}] must satisfy 0 <= min <= max")]
    InvalidScanInterval { min: f64, max: f64 },

    #[error("{name} must be at least 1, got {got}")]
    ZeroCount { name: &'static str, got: u64 },
}
