//! Transformer error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by a transform attempt.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input artifact does not exist.
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    /// The input could not be decoded as an image.
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// The derived artifact could not be written.
    #[error("failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    /// The blocking transform task was cancelled or panicked.
    #[error("transform task failed: {0}")]
    TaskFailed(String),
}
