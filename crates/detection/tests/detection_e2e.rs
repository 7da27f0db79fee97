//! End-to-end tests for fluxwatch-detection
//!
//! Exercises complete detection workflows using only this crate's API.

use detection::{
    AnomalyDetector, AnomalyMask, BackgroundAnomalyDetector, BackgroundConfig, BackgroundModel,
    CusumOnsetDetector, Interval, NoiseMaskFilter, OnsetConfig, OnsetDetector, TimeSeries,
};

/// Alternating 9/11 background: mean 10, sample std close to 1.
fn background_sample() -> TimeSeries {
    TimeSeries::from_values(
        (0..100)
            .map(|i| if i % 2 == 0 { 9.0 } else { 11.0 })
            .collect(),
    )
}

/// 200-point signal at 10 with a 60-point plateau at 40.
fn spike_signal() -> TimeSeries {
    let mut values = vec![10.0; 200];
    for value in &mut values[70..130] {
        *value = 40.0;
    }
    TimeSeries::from_values(values)
}

#[test]
fn e2e_gaussian_spike_yields_single_covering_interval() {
    let mut detector =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(50, 3.0, BackgroundModel::Gaussian));
    detector.fit(&background_sample()).unwrap();

    let intervals = detector.detect_intervals(&spike_signal()).unwrap();

    // One merged interval covering a superset of the true spike positions
    assert_eq!(intervals.len(), 1);
    assert!(intervals[0].start <= 70);
    assert!(intervals[0].stop >= 129);
}

#[test]
fn e2e_poisson_spike_yields_single_covering_interval() {
    let mut detector =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(50, 3.0, BackgroundModel::Poisson));
    detector.fit(&background_sample()).unwrap();

    let intervals = detector.detect_intervals(&spike_signal()).unwrap();
    assert_eq!(intervals.len(), 1);
    assert!(intervals[0].start <= 70);
    assert!(intervals[0].stop >= 129);
}

#[test]
fn e2e_gaussian_mask_flags_every_plateau_sample() {
    let mut detector =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(50, 3.0, BackgroundModel::Gaussian));
    detector.fit(&background_sample()).unwrap();

    let mask = detector.detect(&spike_signal()).unwrap();
    for i in 70..130 {
        assert!(mask.get(i), "plateau sample {} should be flagged", i);
    }
}

#[test]
fn e2e_onset_after_transition() {
    let mut values = vec![5.0; 50];
    values.extend(vec![20.0; 20]);
    let series = TimeSeries::from_values(values);

    let detector = CusumOnsetDetector::from_config(5.0, 1.0, OnsetConfig::new(5, 2.0));
    let onset = detector.detect_onset(&series).unwrap();

    // Confirmation takes five consecutive alert samples past the transition;
    // the reported onset backtracks the window from the confirming index
    assert_eq!(onset, Some(49));
}

#[test]
fn e2e_no_onset_without_transition() {
    let series = TimeSeries::from_values(vec![5.0; 70]);
    let detector = CusumOnsetDetector::from_config(5.0, 1.0, OnsetConfig::new(5, 2.0));
    assert_eq!(detector.detect_onset(&series).unwrap(), None);
}

#[test]
fn e2e_noise_filtered_background_feeds_detection() {
    // Stable series with one strong transient
    let mut values: Vec<f64> = (0..300).map(|i| 10.0 + 0.5 * (i % 2) as f64).collect();
    for i in 140..160 {
        values[i] = 60.0 + 0.5 * (i % 2) as f64;
    }
    let series = TimeSeries::from_values(values);

    // Select quiet samples with the stability filter
    let filter = NoiseMaskFilter::new(6, vec![4, 30]);
    let quiet = filter.noise_mask(&series).unwrap();
    assert_eq!(quiet.len(), series.len());

    let background_values: Vec<f64> = quiet
        .flagged_indices()
        .into_iter()
        .filter(|&i| !(140..160).contains(&i))
        .map(|i| series.value_at(i))
        .collect();
    assert!(background_values.len() > 100);
    let background = TimeSeries::from_values(background_values);

    // Characterize the background and detect the transient
    let mut detector =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(10, 5.0, BackgroundModel::Gaussian));
    detector.fit(&background).unwrap();

    let intervals = detector.detect_intervals(&series).unwrap();
    assert_eq!(intervals.len(), 1);
    assert!(intervals[0].start <= 140);
    assert!(intervals[0].stop >= 159);
}

#[test]
fn e2e_quiet_mask_complement_extracts_transient_intervals() {
    let mut values: Vec<f64> = (0..200).map(|i| 10.0 + 0.5 * (i % 2) as f64).collect();
    for value in &mut values[90..110] {
        *value += 50.0;
    }
    let series = TimeSeries::from_values(values);

    let filter = NoiseMaskFilter::new(6, vec![30]);
    let quiet = filter.noise_mask(&series).unwrap();

    // The complement of the quiet mask marks the disturbed region
    let disturbed = quiet.complement();
    let intervals = detection::extract_intervals(&disturbed, series.timestamps()).unwrap();
    assert!(intervals
        .iter()
        .any(|iv| iv.contains(90) || iv.contains(109)));
}

#[test]
fn e2e_detection_results_roundtrip_through_json() {
    let mut detector =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(50, 3.0, BackgroundModel::Gaussian));
    detector.fit(&background_sample()).unwrap();

    let mask = detector.detect(&spike_signal()).unwrap();
    let intervals = detector.detect_intervals(&spike_signal()).unwrap();

    let mask_json = serde_json::to_string(&mask).unwrap();
    let mask_back: AnomalyMask = serde_json::from_str(&mask_json).unwrap();
    assert_eq!(mask_back, mask);

    let intervals_json = serde_json::to_string(&intervals).unwrap();
    let intervals_back: Vec<Interval> = serde_json::from_str(&intervals_json).unwrap();
    assert_eq!(intervals_back, intervals);

    let stats_json = serde_json::to_string(detector.statistics().unwrap()).unwrap();
    assert!(stats_json.contains("Gaussian"));
}
