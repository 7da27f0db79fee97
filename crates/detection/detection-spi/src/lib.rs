//! Flux Detection Service Provider Interface
//!
//! Defines traits and types for particle-flux event detection.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyDetector, OnsetDetector};
pub use error::{DetectionError, Result};
pub use model::{AnomalyMask, BackgroundModel, BackgroundStatistics, Interval, TimeSeries};
