//! Error taxonomy for the scoring core

use thiserror::Error;

pub type ScoringResult<T> = Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Feature vector has the wrong length or carries a non-finite value.
    /// Rejected per request, never fatal.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Artifact missing, unreadable, corrupt or incompatible.
    /// Fatal at startup.
    #[error("model load failure: {0}")]
    ModelLoadFailure(String),

    /// Degenerate numeric state (non-finite result, empty baseline, singular system)
    #[error("numeric computation error: {0}")]
    NumericComputation(String),

    /// Training data could not be fetched or parsed
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScoringError {
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        ScoringError::InvalidInput(format!(
            "expected {} features, got {}",
            expected, actual
        ))
    }
}

impl From<csv::Error> for ScoringError {
    fn from(err: csv::Error) -> Self {
        ScoringError::Dataset(err.to_string())
    }
}
