//! Detector trait definitions.

use crate::error::Result;
use crate::model::{AnomalyMask, Interval, TimeSeries};

/// Background-relative anomaly detector trait.
///
/// Implementations characterize a background sample once, then classify
/// every sample of a signal against the fixed background statistics.
pub trait AnomalyDetector: Send + Sync {
    /// Fit the detector to a background sample.
    fn fit(&mut self, background: &TimeSeries) -> Result<()>;

    /// Detect anomalous samples in a signal.
    fn detect(&self, signal: &TimeSeries) -> Result<AnomalyMask>;

    /// Detect anomalous regions as merged, non-overlapping intervals.
    fn detect_intervals(&self, signal: &TimeSeries) -> Result<Vec<Interval>>;

    /// Check if the detector has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Onset detector trait.
///
/// Implementations scan a series sequentially and report the first confirmed
/// onset timestamp, if any. The scan is stateful within a single call and
/// carries no state between calls.
pub trait OnsetDetector: Send + Sync {
    /// Detect the onset timestamp of a sustained shift in the series.
    fn detect_onset(&self, series: &TimeSeries) -> Result<Option<i64>>;
}
