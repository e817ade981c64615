//! Per-trial wait-time aggregate.

use crate::error::StatsError;

/// What one trial produced: completed-passenger count and wait-time sum.
///
/// Returned by value from each trial; the orchestrator combines results.
/// No accumulator is shared across trials.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunResult {
    /// Passengers that finished the whole pipeline before the horizon.
    pub completed: u64,
    /// Sum of their individual wait times.
    pub total_wait: f64,
}

impl RunResult {
    /// Fold in one completed passenger.
    ///
    /// # Panics
    /// Panics on a negative or non-finite wait — the lifecycle's timestamp
    /// ordering makes that impossible in correct code.
    pub fn record(&mut self, wait: f64) {
        assert!(
            wait.is_finite() && wait >= 0.0,
            "invalid wait time recorded: {wait}"
        );
        self.completed += 1;
        self.total_wait += wait;
    }

    /// Mean wait per completed passenger.
    ///
    /// A trial with zero completions has no mean; that is surfaced as an
    /// error rather than silently coerced to `0` or `NaN`.
    pub fn mean_wait(&self) -> Result<f64, StatsError> {
        if self.completed == 0 {
            return Err(StatsError::NoCompletions);
        }
        Ok(self.total_wait / self.completed as f64)
    }
}
