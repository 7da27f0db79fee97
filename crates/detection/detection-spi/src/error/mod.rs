//! Detection error types.

mod detection_error;

pub use detection_error::{DetectionError, Result};
