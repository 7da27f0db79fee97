//! Time-ordered series of flux measurements.

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};
use crate::model::Interval;

/// A time-ordered series of (timestamp, value) samples.
///
/// Timestamps are nanosecond-epoch instants sorted ascending; callers are
/// responsible for sorting and deduplication upstream. The series is a
/// read-only input to every detector and is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from parallel timestamp and value vectors.
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(DetectionError::ShapeMismatch {
                expected: timestamps.len(),
                actual: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    /// Create a series with positional timestamps (0, 1, 2, ...).
    pub fn from_values(values: Vec<f64>) -> Self {
        let timestamps = (0..values.len() as i64).collect();
        Self { timestamps, values }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Timestamp of the sample at `index`.
    pub fn timestamp_at(&self, index: usize) -> i64 {
        self.timestamps[index]
    }

    /// Value of the sample at `index`.
    pub fn value_at(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// All timestamps, in series order.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// All values, in series order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Clone the sub-series whose timestamps fall inside the closed interval.
    pub fn restrict(&self, interval: &Interval) -> TimeSeries {
        let mut timestamps = Vec::new();
        let mut values = Vec::new();
        for (&t, &v) in self.timestamps.iter().zip(self.values.iter()) {
            if t >= interval.start && t <= interval.stop {
                timestamps.push(t);
                values.push(v);
            }
        }
        Self { timestamps, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matching_lengths() {
        let series = TimeSeries::new(vec![0, 1, 2], vec![10.0, 11.0, 12.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = TimeSeries::new(vec![0, 1, 2], vec![10.0, 11.0]);
        assert!(matches!(
            result.unwrap_err(),
            DetectionError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_new_empty() {
        let series = TimeSeries::new(vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn test_from_values_positional_timestamps() {
        let series = TimeSeries::from_values(vec![5.0, 6.0, 7.0]);
        assert_eq!(series.timestamps(), &[0, 1, 2]);
        assert_eq!(series.values(), &[5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_accessors() {
        let series = TimeSeries::new(vec![100, 200, 300], vec![1.5, 2.5, 3.5]).unwrap();
        assert_eq!(series.timestamp_at(1), 200);
        assert_eq!(series.value_at(2), 3.5);
    }

    #[test]
    fn test_restrict_inner_range() {
        let series =
            TimeSeries::new(vec![10, 20, 30, 40, 50], vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let restricted = series.restrict(&Interval::new(20, 40));
        assert_eq!(restricted.timestamps(), &[20, 30, 40]);
        assert_eq!(restricted.values(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_restrict_closed_bounds() {
        let series = TimeSeries::new(vec![10, 20, 30], vec![1.0, 2.0, 3.0]).unwrap();
        let restricted = series.restrict(&Interval::new(10, 30));
        assert_eq!(restricted.len(), 3);
    }

    #[test]
    fn test_restrict_disjoint_range() {
        let series = TimeSeries::new(vec![10, 20, 30], vec![1.0, 2.0, 3.0]).unwrap();
        let restricted = series.restrict(&Interval::new(100, 200));
        assert!(restricted.is_empty());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let series = TimeSeries::new(vec![1, 2, 3], vec![0.5, 1.5, 2.5]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let deserialized: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deserialized);
    }
}
