use qn_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A trial's horizon elapsed before any passenger completed, so its
    /// mean wait is undefined and the study cannot be aggregated.
    #[error("trial {trial} completed zero passengers within the horizon")]
    EmptyTrial { trial: u32 },
}
