//! airport — staffing study for a two-stage security checkpoint.
//!
//! Passengers arrive at 5/min, clear one of 8 boarding-pass checkers
//! (exponential service, rate 0.75/min), then pick the shortest of 4
//! independent scanner queues (uniform 0.5–1.0 min scan).  Twenty
//! independent 100-minute trials are averaged; vary `CHECKER_COUNT` and
//! `LANE_COUNT` to find the cheapest staffing that meets a wait-time goal.

use std::fs;
use std::path::Path;

use anyhow::Result;

use qn_core::SimConfig;
use qn_output::CsvTraceWriter;
use qn_run::{run_study, run_trial_with_sink};

// ── Problem parameters ────────────────────────────────────────────────────────

const ARRIVALS_PER_MIN:   f64   = 5.0;
const CHECK_RATE_PER_MIN: f64   = 0.75;
const SCAN_MIN_MINUTES:   f64   = 0.5;
const SCAN_MAX_MINUTES:   f64   = 1.0;
const CHECKER_COUNT:      usize = 8;
const LANE_COUNT:         usize = 4;
const RUN_MINUTES:        f64   = 100.0;
const TRIAL_COUNT:        u32   = 20;
const SEED:               u64   = 42;

const TRACE_DIR: &str = "output";

fn main() -> Result<()> {
    let config = SimConfig {
        arrival_rate:  ARRIVALS_PER_MIN,
        check_rate:    CHECK_RATE_PER_MIN,
        scan_min:      SCAN_MIN_MINUTES,
        scan_max:      SCAN_MAX_MINUTES,
        checker_count: CHECKER_COUNT,
        lane_count:    LANE_COUNT,
        horizon:       RUN_MINUTES,
        trial_count:   TRIAL_COUNT,
        seed:          SEED,
    };

    let summary = run_study(&config)?;
    for t in &summary.trials {
        println!(
            "trial {:2}: {:4} passengers, mean wait {:.3} min",
            t.trial, t.completed, t.mean_wait
        );
    }
    println!(
        "\nmean wait across {} trials: {:.3} min ({} checkers, {} lanes)",
        TRIAL_COUNT, summary.mean_wait, CHECKER_COUNT, LANE_COUNT
    );

    // Re-run trial 0 with the CSV sink for a per-passenger trace.
    fs::create_dir_all(TRACE_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(TRACE_DIR))?;
    let (result, mut writer) = run_trial_with_sink(&config, 0, writer);
    if let Some(e) = writer.take_error() {
        return Err(e.into());
    }
    println!(
        "per-passenger trace for trial 0 ({} passengers) written to {TRACE_DIR}/passenger_trace.csv",
        result.completed
    );

    Ok(())
}
