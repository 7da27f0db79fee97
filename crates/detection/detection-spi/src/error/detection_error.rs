//! Detection error types.

use thiserror::Error;

/// Flux detection errors.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Degenerate background: {reason}")]
    DegenerateBackground { reason: String },

    #[error("Degenerate parameters: {reason}")]
    DegenerateParameters { reason: String },

    #[error("Detector not fitted: call fit() before detect()")]
    NotFitted,

    #[error("Insufficient data: required {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for detection operations.
pub type Result<T> = std::result::Result<T, DetectionError>;
