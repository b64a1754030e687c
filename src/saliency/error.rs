//! Error types for the saliency module.

use thiserror::Error;

/// Saliency conversion errors
#[derive(Debug, Error)]
pub enum SaliencyError {
    #[error("unsupported data format {0:?} (expected \"NCHW\" or \"NHWC\")")]
    UnsupportedDataFormat(String),

    #[error("invalid target shape ({height}, {width}): both dimensions must be nonzero")]
    InvalidTargetShape { height: usize, width: usize },
}

/// Result type for saliency operations
pub type Result<T> = std::result::Result<T, SaliencyError>;
