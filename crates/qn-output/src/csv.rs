//! CSV trace backend.
//!
//! Creates one file in the configured output directory:
//! - `passenger_trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use qn_checkpoint::{PassengerTrace, RunResult, TraceSink};

use crate::OutputResult;
use crate::error::OutputError;

/// Writes one row per completed passenger to `passenger_trace.csv`.
///
/// `TraceSink` callbacks cannot return errors, so the first failure is kept
/// and surfaced through [`take_error`][Self::take_error] once the run ends.
pub struct CsvTraceWriter {
    writer:     Writer<File>,
    finished:   bool,
    last_error: Option<OutputError>,
}

impl CsvTraceWriter {
    /// Open (or create) the trace file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(dir.join("passenger_trace.csv"))?;
        writer.write_record([
            "passenger_id",
            "arrival",
            "check_start",
            "check_end",
            "scan_start",
            "wait",
            "lane",
        ])?;

        Ok(Self {
            writer,
            finished: false,
            last_error: None,
        })
    }

    /// Take the stored write error (if any) after the run ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the file.  Idempotent; called automatically at run end.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    fn write_row(&mut self, trace: &PassengerTrace) -> OutputResult<()> {
        self.writer.write_record(&[
            trace.id.0.to_string(),
            trace.arrival.to_string(),
            trace.check_start.to_string(),
            trace.check_end.to_string(),
            trace.scan_start.to_string(),
            trace.wait.to_string(),
            trace.lane.0.to_string(),
        ])?;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl TraceSink for CsvTraceWriter {
    fn on_complete(&mut self, trace: &PassengerTrace) {
        let result = self.write_row(trace);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _result: &RunResult) {
        let result = self.finish();
        self.store_err(result);
    }
}
