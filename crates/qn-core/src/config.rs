//! Top-level simulation configuration.

use crate::error::ConfigError;

/// Parameters for one simulation study.
///
/// Typically built by the application (constants or a parsed file) and handed
/// to the run orchestrator, which calls [`validate`][Self::validate] before
/// any trial starts.  Time units are whatever the caller decides (the demo
/// uses minutes); rates are per time unit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Passenger arrival rate (lambda): arrivals per time unit.
    pub arrival_rate: f64,

    /// Service rate of one boarding-pass checker (mu1): checks per time unit.
    pub check_rate: f64,

    /// Lower bound of the uniform security-scan duration.
    pub scan_min: f64,

    /// Upper bound of the uniform security-scan duration.
    pub scan_max: f64,

    /// Number of boarding-pass checkers sharing the single FIFO queue.
    pub checker_count: usize,

    /// Number of independent single-server security lanes.
    pub lane_count: usize,

    /// Simulated-time horizon: events past this instant never fire.
    pub horizon: f64,

    /// Number of independent trials to run and average.
    pub trial_count: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Check every parameter, failing fast before any simulation runs.
    ///
    /// Returns the first violation found; the order of checks follows the
    /// field order above.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arrival_rate", self.arrival_rate)?;
        positive("check_rate", self.check_rate)?;

        if !self.scan_min.is_finite()
            || !self.scan_max.is_finite()
            || self.scan_min < 0.0
            || self.scan_min > self.scan_max
        {
            return Err(ConfigError::InvalidScanInterval {
                min: self.scan_min,
                max: self.scan_max,
            });
        }

        at_least_one("checker_count", self.checker_count as u64)?;
        at_least_one("lane_count", self.lane_count as u64)?;

        positive("horizon", self.horizon)?;
        at_least_one("trial_count", self.trial_count as u64)?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn at_least_one(name: &'static str, got: u64) -> Result<(), ConfigError> {
    if got >= 1 {
        Ok(())
    } else {
        Err(ConfigError::ZeroCount { name, got })
    }
}
