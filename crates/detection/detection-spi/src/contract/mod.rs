//! Detection contracts.

mod detector;

pub use detector::{AnomalyDetector, OnsetDetector};
