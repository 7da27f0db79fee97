//! # fluxwatch-detection
//!
//! Event and anomaly detection for particle-flux time series.
//! Provides rolling-threshold spike detection, background-relative anomaly
//! detection, quiet-background filtering, and CUSUM onset detection for
//! solar energetic particle events.

pub use detection_facade::*;
