//! Event interval type.

use serde::{Deserialize, Serialize};

/// A closed time range covering one contiguous flagged region.
///
/// `stop` is the timestamp of the last flagged sample, so `stop >= start`
/// always holds for intervals produced by the detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Timestamp of the first sample in the region.
    pub start: i64,
    /// Timestamp of the last sample in the region.
    pub stop: i64,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// Span between the first and last timestamp.
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }

    /// Check whether a timestamp falls inside the closed range.
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp <= self.stop
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.stop)
    }
}
