//! Background-relative anomaly detection.

use detection_api::BackgroundConfig;
use detection_spi::{
    AnomalyDetector, AnomalyMask, BackgroundStatistics, DetectionError, Interval, Result,
    TimeSeries,
};

use crate::intervals::{extract_intervals, merge_touching};
use crate::stats::mean;

/// Detector comparing sliding signal windows against fixed background
/// statistics.
///
/// The background is characterized once from a separately supplied sample and
/// held for the duration of a detection run. Every window whose mean deviates
/// beyond the z-score threshold is marked in full, so a window that barely
/// straddles an anomaly still flags every sample it touches. This produces
/// smoothed anomaly regions rather than point-wise flags.
#[derive(Debug, Clone)]
pub struct BackgroundAnomalyDetector {
    config: BackgroundConfig,
    statistics: Option<BackgroundStatistics>,
}

impl BackgroundAnomalyDetector {
    /// Create an unfitted detector from configuration.
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            config,
            statistics: None,
        }
    }

    /// Background statistics estimated by the last `fit` call.
    pub fn statistics(&self) -> Option<&BackgroundStatistics> {
        self.statistics.as_ref()
    }

    fn z_score(&self, window_mean: f64, stats: &BackgroundStatistics) -> f64 {
        match *stats {
            BackgroundStatistics::Gaussian { mean, std } => (window_mean - mean) / std,
            BackgroundStatistics::Poisson { rate } => {
                // Variance of the window mean under a Poisson assumption.
                (window_mean - rate) / (rate / self.config.window_size as f64).sqrt()
            }
        }
    }
}

impl Default for BackgroundAnomalyDetector {
    fn default() -> Self {
        Self::new(BackgroundConfig::default())
    }
}

impl AnomalyDetector for BackgroundAnomalyDetector {
    fn fit(&mut self, background: &TimeSeries) -> Result<()> {
        let stats = BackgroundStatistics::estimate(background.values(), self.config.model)?;
        self.statistics = Some(stats);
        Ok(())
    }

    fn detect(&self, signal: &TimeSeries) -> Result<AnomalyMask> {
        let stats = self.statistics.as_ref().ok_or(DetectionError::NotFitted)?;
        let window_size = self.config.window_size;
        if window_size == 0 {
            return Err(DetectionError::InvalidParameter {
                name: "window_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let values = signal.values();
        let mut flags = vec![false; values.len()];

        // A signal shorter than the window yields no windows and no flags.
        if values.len() >= window_size {
            for i in 0..=(values.len() - window_size) {
                let window_mean = mean(&values[i..i + window_size]);
                if self.z_score(window_mean, stats).abs() > self.config.threshold {
                    for flag in &mut flags[i..i + window_size] {
                        *flag = true;
                    }
                }
            }
        }

        Ok(AnomalyMask::new(flags))
    }

    fn detect_intervals(&self, signal: &TimeSeries) -> Result<Vec<Interval>> {
        let mask = self.detect(signal)?;
        let intervals = extract_intervals(&mask, signal.timestamps())?;
        Ok(merge_touching(intervals))
    }

    fn is_fitted(&self) -> bool {
        self.statistics.is_some()
    }
}
