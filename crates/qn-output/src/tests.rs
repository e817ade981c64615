//! Tests for the CSV trace backend.

use qn_core::{LaneId, PassengerId};
use qn_checkpoint::{PassengerTrace, RunResult, TraceSink};

use crate::CsvTraceWriter;

fn trace(id: u64, arrival: f64, wait: f64, lane: u32) -> PassengerTrace {
    PassengerTrace {
        id: PassengerId(id),
        arrival,
        check_start: arrival + wait,
        check_end: arrival + wait + 0.75,
        scan_start: arrival + wait + 0.75,
        wait,
        lane: LaneId(lane),
    }
}

#[test]
fn writes_header_and_one_row_per_completion() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = CsvTraceWriter::new(dir.path()).unwrap();

    writer.on_complete(&trace(0, 0.5, 0.0, 0));
    writer.on_complete(&trace(1, 1.25, 0.5, 2));
    writer.on_run_end(&RunResult { completed: 2, total_wait: 0.5 });
    assert!(writer.take_error().is_none());

    let mut reader = csv::Reader::from_path(dir.path().join("passenger_trace.csv")).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["passenger_id", "arrival", "check_start", "check_end", "scan_start", "wait", "lane"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "0");
    assert_eq!(&rows[0][1], "0.5");
    assert_eq!(&rows[1][0], "1");
    assert_eq!(&rows[1][6], "2");
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = CsvTraceWriter::new(dir.path()).unwrap();
    writer.on_complete(&trace(0, 0.0, 0.0, 0));
    writer.finish().unwrap();
    writer.finish().unwrap();
    assert!(writer.take_error().is_none());
}
