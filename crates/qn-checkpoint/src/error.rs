use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// The horizon elapsed with zero completed passengers, so the mean wait
    /// is undefined — distinct from a genuine zero-wait result.
    #[error("no passengers completed within the horizon; mean wait is undefined")]
    NoCompletions,
}
