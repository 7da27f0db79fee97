//! Interval extraction and merging.

use detection_spi::{AnomalyMask, DetectionError, Interval, Result};

/// Convert a boolean mask into an ordered list of closed intervals.
///
/// A run of `true` samples opens an interval at its first timestamp and
/// closes at the timestamp before the first following `false`; a run reaching
/// the final index closes at the last timestamp. An all-false mask yields an
/// empty list, an all-true mask a single spanning interval.
pub fn extract_intervals(mask: &AnomalyMask, timestamps: &[i64]) -> Result<Vec<Interval>> {
    if mask.len() != timestamps.len() {
        return Err(DetectionError::ShapeMismatch {
            expected: timestamps.len(),
            actual: mask.len(),
        });
    }

    let mut intervals = Vec::new();
    let mut in_event = false;
    let mut event_start = 0i64;

    for i in 0..mask.len() {
        if mask.get(i) {
            if !in_event {
                event_start = timestamps[i];
                in_event = true;
            }
        } else if in_event {
            intervals.push(Interval::new(event_start, timestamps[i - 1]));
            in_event = false;
        }
    }

    // Close an event still open at the end of the series.
    if in_event {
        intervals.push(Interval::new(event_start, timestamps[timestamps.len() - 1]));
    }

    Ok(intervals)
}

/// Merge intervals whose ranges touch or overlap.
///
/// Input must be ordered by start time; two intervals merge when one's stop
/// reaches the next one's start. Applied whenever intervals are produced
/// incrementally rather than through a full mask.
pub fn merge_touching(intervals: Vec<Interval>) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if last.stop >= interval.start => {
                if interval.stop > last.stop {
                    last.stop = interval.stop;
                }
            }
            _ => merged.push(interval),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_false() {
        let mask = AnomalyMask::all_clear(5);
        let intervals = extract_intervals(&mask, &[0, 1, 2, 3, 4]).unwrap();
        assert!(intervals.is_empty());
    }

    #[test]
    fn test_extract_all_true() {
        let mask = AnomalyMask::all_set(5);
        let intervals = extract_intervals(&mask, &[10, 20, 30, 40, 50]).unwrap();
        assert_eq!(intervals, vec![Interval::new(10, 50)]);
    }

    #[test]
    fn test_extract_inner_run() {
        let mask = AnomalyMask::new(vec![false, true, true, false, false]);
        let intervals = extract_intervals(&mask, &[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(intervals, vec![Interval::new(1, 2)]);
    }

    #[test]
    fn test_extract_run_at_end_is_closed() {
        let mask = AnomalyMask::new(vec![false, false, true, true]);
        let intervals = extract_intervals(&mask, &[0, 1, 2, 3]).unwrap();
        assert_eq!(intervals, vec![Interval::new(2, 3)]);
    }

    #[test]
    fn test_extract_multiple_runs() {
        let mask = AnomalyMask::new(vec![true, false, true, true, false, true]);
        let intervals = extract_intervals(&mask, &[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(
            intervals,
            vec![
                Interval::new(0, 0),
                Interval::new(2, 3),
                Interval::new(5, 5)
            ]
        );
    }

    #[test]
    fn test_extract_shape_mismatch() {
        let mask = AnomalyMask::all_clear(3);
        let result = extract_intervals(&mask, &[0, 1]);
        assert!(matches!(
            result.unwrap_err(),
            DetectionError::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_merge_touching_overlap() {
        let merged = merge_touching(vec![Interval::new(0, 5), Interval::new(3, 8)]);
        assert_eq!(merged, vec![Interval::new(0, 8)]);
    }

    #[test]
    fn test_merge_touching_adjacent() {
        let merged = merge_touching(vec![Interval::new(0, 5), Interval::new(5, 8)]);
        assert_eq!(merged, vec![Interval::new(0, 8)]);
    }

    #[test]
    fn test_merge_disjoint_kept() {
        let merged = merge_touching(vec![Interval::new(0, 2), Interval::new(4, 6)]);
        assert_eq!(merged, vec![Interval::new(0, 2), Interval::new(4, 6)]);
    }

    #[test]
    fn test_merge_contained_interval() {
        let merged = merge_touching(vec![Interval::new(0, 10), Interval::new(2, 4)]);
        assert_eq!(merged, vec![Interval::new(0, 10)]);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_touching(vec![]).is_empty());
    }
}
