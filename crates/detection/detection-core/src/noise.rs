//! Quiet-background stability filtering.

use detection_api::NoiseMaskConfig;
use detection_spi::{AnomalyMask, DetectionError, Result, TimeSeries};

use crate::stats::{centered_rolling_mean, centered_rolling_std};

/// Z-score magnitude above which a sample stops counting as quiet.
const STABILITY_LIMIT: f64 = 3.0;

/// Filter accepting samples whose local mean stays stable across time
/// offsets, in both the forward and backward direction.
///
/// In the returned mask `true` means "accepted as quiet background" - the
/// logical complement of an anomaly mask. Used upstream of the detectors to
/// select a clean, transient-free background sample.
#[derive(Debug, Clone)]
pub struct NoiseMaskFilter {
    config: NoiseMaskConfig,
}

impl NoiseMaskFilter {
    /// Create a filter with the given rolling window and offsets.
    pub fn new(rolling_window: usize, offsets: Vec<usize>) -> Self {
        Self {
            config: NoiseMaskConfig::new(rolling_window, offsets),
        }
    }

    /// Create from configuration.
    pub fn from_config(config: NoiseMaskConfig) -> Self {
        Self { config }
    }

    /// Compute the quiet-background mask for the series.
    ///
    /// When the configuration carries an interval the series is restricted to
    /// it first, and the mask aligns with the restricted series.
    pub fn noise_mask(&self, series: &TimeSeries) -> Result<AnomalyMask> {
        if self.config.rolling_window == 0 {
            return Err(DetectionError::InvalidParameter {
                name: "rolling_window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let restricted;
        let series = match &self.config.interval {
            Some(interval) => {
                restricted = series.restrict(interval);
                &restricted
            }
            None => series,
        };

        let n = series.len();
        let local_mean = centered_rolling_mean(series.values(), self.config.rolling_window);
        let local_std = centered_rolling_std(series.values(), self.config.rolling_window);

        let mut accepted = vec![true; n];
        for &offset in &self.config.offsets {
            // Samples outside [offset, n - offset) keep their zero-initialized
            // scores and therefore pass the stability check.
            // TODO: confirm with instrument operations whether edge samples
            // should be excluded instead.
            let mut forward = vec![0.0; n];
            let mut backward = vec![0.0; n];
            if offset < n {
                for i in offset..(n - offset) {
                    forward[i] = (local_mean[i] - local_mean[i + offset]) / local_std[i + offset];
                    backward[i] = (local_mean[i] - local_mean[i - offset]) / local_std[i - offset];
                }
            }
            for i in 0..n {
                // Non-finite scores (zero or NaN rolling std) reject the sample.
                let stable = forward[i].abs() < STABILITY_LIMIT
                    && backward[i].abs() < STABILITY_LIMIT;
                accepted[i] = accepted[i] && stable;
            }
        }

        Ok(AnomalyMask::new(accepted))
    }
}
