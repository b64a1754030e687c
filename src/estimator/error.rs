//! Error types for the estimator module.

use thiserror::Error;

/// Estimator errors
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("sample shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("batch must have a leading batch axis (got a 0-dimensional input)")]
    MissingBatchAxis,

    #[error("inconsistent state bundle: mean, sum_sq_dev and nonzero_count must all be present or all absent")]
    InconsistentState,

    #[error("checkpoint I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;
