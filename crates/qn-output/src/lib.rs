//! `qn-output` — file-backed trace sinks for the rust_qn simulator.
//!
//! The checkpoint model emits one [`PassengerTrace`][qn_checkpoint::PassengerTrace]
//! per completion through the `TraceSink` trait; this crate provides the CSV
//! backend.  Sink callbacks have no return value, so write errors are stored
//! internally — check [`CsvTraceWriter::take_error`] after the run.

pub mod csv;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
