//! CUSUM onset detection for solar energetic particle events.

use detection_api::OnsetConfig;
use detection_spi::{DetectionError, OnsetDetector, Result, TimeSeries};

/// One-sided CUSUM accumulator state.
///
/// Each step depends on the previous cumulative value, which keeps the scan
/// strictly sequential. The state is reset at the start of every detection
/// call and never persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CusumState {
    previous_cusum: f64,
    cusum: f64,
    alert: usize,
}

impl CusumState {
    /// Advance the recursion by one normalized sample.
    ///
    /// The pair is swapped before the update, so the new cumulative value
    /// carries the value from two steps back.
    fn step(self, normalized: f64, reference: f64, hastiness: f64) -> Self {
        let cusum = (normalized - reference + self.previous_cusum).max(0.0);
        let alert = if cusum > hastiness { self.alert + 1 } else { 0 };
        Self {
            previous_cusum: self.cusum,
            cusum,
            alert,
        }
    }

    /// Consecutive samples the statistic has stayed above the threshold.
    pub fn alert(&self) -> usize {
        self.alert
    }

    /// Current cumulative value.
    pub fn cusum(&self) -> f64 {
        self.cusum
    }
}

/// CUSUM onset detector for a background with known mean and sigma.
///
/// Declares an onset once the cumulative statistic stays above an adaptive
/// hastiness threshold for `window` consecutive samples, then stops scanning.
#[derive(Debug, Clone)]
pub struct CusumOnsetDetector {
    mean: f64,
    sigma: f64,
    window: usize,
    critical_value: f64,
}

impl CusumOnsetDetector {
    /// Create a detector with default onset configuration.
    pub fn new(mean: f64, sigma: f64) -> Self {
        Self::from_config(mean, sigma, OnsetConfig::default())
    }

    /// Create from configuration.
    pub fn from_config(mean: f64, sigma: f64, config: OnsetConfig) -> Self {
        Self {
            mean,
            sigma,
            window: config.window,
            critical_value: config.critical_value,
        }
    }
}

impl OnsetDetector for CusumOnsetDetector {
    fn detect_onset(&self, series: &TimeSeries) -> Result<Option<i64>> {
        let uncertainty_limit = self.mean + self.critical_value * self.sigma;

        // Prevent division by zero and invalid log arguments.
        if self.mean == uncertainty_limit {
            return Err(DetectionError::DegenerateParameters {
                reason: "background mean equals the uncertainty limit; control parameter k \
                         cannot be computed"
                    .to_string(),
            });
        }

        // Control parameter scaling the CUSUM process.
        let k = (uncertainty_limit - self.mean)
            / (uncertainty_limit.ln_1p() - self.mean.ln_1p());
        let hastiness = if k < 1.0 { 1.0 } else { 2.0 };
        let reference = k.round();

        let mut state = CusumState::default();
        for i in 1..series.len() {
            let normalized = (series.value_at(i) - self.mean) / self.sigma;
            state = state.step(normalized, reference, hastiness);

            // The alert counter reaching the window size confirms the onset;
            // it began window samples before the current index.
            if state.alert() == self.window {
                return Ok(Some(series.timestamp_at(i - state.alert())));
            }
        }

        Ok(None)
    }
}
