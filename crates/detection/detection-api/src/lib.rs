//! Flux Detection API
//!
//! Configuration types and builders for flux event detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use detection_spi::{
    AnomalyMask, BackgroundModel, BackgroundStatistics, DetectionError, Interval, Result,
    TimeSeries,
};

// ============================================================================
// Rolling-Threshold Configuration
// ============================================================================

/// Rolling-threshold spike detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingThresholdConfig {
    /// Size of the trailing rolling window.
    pub window: usize,
    /// Multiplier on the rolling standard deviation (default: 2.0).
    pub critical_value: f64,
}

impl Default for RollingThresholdConfig {
    fn default() -> Self {
        Self {
            window: 30,
            critical_value: 2.0,
        }
    }
}

impl RollingThresholdConfig {
    pub fn new(window: usize, critical_value: f64) -> Self {
        Self {
            window,
            critical_value,
        }
    }
}

// ============================================================================
// Background-Relative Configuration
// ============================================================================

/// Background-relative anomaly detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Size of the sliding comparison window (default: 50).
    pub window_size: usize,
    /// Z-score threshold marking a window anomalous (default: 3.0).
    pub threshold: f64,
    /// Distributional model assumed for the background sample.
    pub model: BackgroundModel,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            window_size: 50,
            threshold: 3.0,
            model: BackgroundModel::Gaussian,
        }
    }
}

impl BackgroundConfig {
    pub fn new(window_size: usize, threshold: f64, model: BackgroundModel) -> Self {
        Self {
            window_size,
            threshold,
            model,
        }
    }
}

// ============================================================================
// Noise Mask Configuration
// ============================================================================

/// Quiet-background stability filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseMaskConfig {
    /// Size of the centered rolling window (default: 30).
    pub rolling_window: usize,
    /// Sample offsets at which local-mean stability is required.
    pub offsets: Vec<usize>,
    /// Optional restriction of the series before processing.
    pub interval: Option<Interval>,
}

impl Default for NoiseMaskConfig {
    fn default() -> Self {
        Self {
            rolling_window: 30,
            offsets: vec![10, 30],
            interval: None,
        }
    }
}

impl NoiseMaskConfig {
    pub fn new(rolling_window: usize, offsets: Vec<usize>) -> Self {
        Self {
            rolling_window,
            offsets,
            interval: None,
        }
    }

    /// Restrict processing to the given interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }
}

// ============================================================================
// Onset Configuration
// ============================================================================

/// CUSUM onset detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnsetConfig {
    /// Consecutive alert samples required to confirm an onset (default: 30).
    pub window: usize,
    /// Multiplier on sigma defining the uncertainty limit (default: 2.0).
    pub critical_value: f64,
}

impl Default for OnsetConfig {
    fn default() -> Self {
        Self {
            window: 30,
            critical_value: 2.0,
        }
    }
}

impl OnsetConfig {
    pub fn new(window: usize, critical_value: f64) -> Self {
        Self {
            window,
            critical_value,
        }
    }
}
