//! Rolling-threshold spike detection.

use detection_api::RollingThresholdConfig;
use detection_spi::{DetectionError, Interval, Result, TimeSeries};

use crate::stats::{rolling_mean, rolling_std};

/// Spike detector using a self-referential rolling baseline.
///
/// A sample is an event when it exceeds the trailing rolling mean by more
/// than `critical_value` rolling standard deviations. The baseline comes
/// from the series itself; no separate background sample is required.
#[derive(Debug, Clone)]
pub struct RollingThresholdDetector {
    window: usize,
    critical_value: f64,
}

impl RollingThresholdDetector {
    /// Create a detector with the given window and critical value.
    pub fn new(window: usize, critical_value: f64) -> Self {
        Self {
            window,
            critical_value,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: RollingThresholdConfig) -> Self {
        Self::new(config.window, config.critical_value)
    }

    /// Scan the series and return the event intervals.
    ///
    /// The first `window - 1` samples have undefined rolling statistics and
    /// are never flagged.
    pub fn find_events(&self, series: &TimeSeries) -> Result<Vec<Interval>> {
        if self.window == 0 {
            return Err(DetectionError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let values = series.values();
        let moving_avg = rolling_mean(values, self.window);
        let moving_std = rolling_std(values, self.window);

        let mut events = Vec::new();
        let mut in_event = false;
        let mut event_start = 0i64;

        for i in 0..series.len() {
            // NaN rolling statistics compare false: warm-up samples are inert.
            let is_event = values[i] > moving_avg[i] + self.critical_value * moving_std[i];
            if is_event {
                if !in_event {
                    event_start = series.timestamp_at(i);
                    in_event = true;
                }
            } else if in_event {
                events.push(Interval::new(event_start, series.timestamp_at(i - 1)));
                in_event = false;
            }
        }

        // If the last sample is still a spike, close the event.
        if in_event {
            events.push(Interval::new(
                event_start,
                series.timestamp_at(series.len() - 1),
            ));
        }

        Ok(events)
    }
}

impl Default for RollingThresholdDetector {
    fn default() -> Self {
        Self::from_config(RollingThresholdConfig::default())
    }
}
