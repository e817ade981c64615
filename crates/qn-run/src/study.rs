//! Running and aggregating a whole study.

use qn_core::SimConfig;

use crate::error::RunError;
use crate::trial::run_trial;

/// One trial's contribution to the study.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    pub trial:     u32,
    pub completed: u64,
    pub mean_wait: f64,
}

/// All trials plus the study-level aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct StudySummary {
    pub trials: Vec<TrialOutcome>,
    /// Mean of the per-trial mean waits (each trial weighted equally).
    pub mean_wait: f64,
}

/// Validate the configuration, run `trial_count` independent trials, and
/// aggregate the mean of per-trial means.
///
/// Fails fast on an invalid configuration — no partial run is attempted —
/// and on any trial that completes zero passengers (its mean is undefined).
pub fn run_study(config: &SimConfig) -> Result<StudySummary, RunError> {
    config.validate()?;

    let mut trials = Vec::with_capacity(config.trial_count as usize);
    for trial in 0..config.trial_count {
        let result = run_trial(config, trial);
        let mean_wait = result
            .mean_wait()
            .map_err(|_| RunError::EmptyTrial { trial })?;
        trials.push(TrialOutcome {
            trial,
            completed: result.completed,
            mean_wait,
        });
    }

    let mean_wait = trials.iter().map(|t| t.mean_wait).sum::<f64>() / trials.len() as f64;
    Ok(StudySummary { trials, mean_wait })
}
