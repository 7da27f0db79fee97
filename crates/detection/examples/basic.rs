//! Basic example demonstrating flux event detection
//!
//! Run with: cargo run --example basic -p fluxwatch-detection

use detection::{
    AnomalyDetector, BackgroundAnomalyDetector, BackgroundConfig, BackgroundModel,
    CusumOnsetDetector, NoiseMaskFilter, OnsetConfig, OnsetDetector, RollingThresholdDetector,
    TimeSeries,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== fluxwatch-detection Basic Examples ===\n");

    // Quiet background sample: counts oscillating around 10
    let background = TimeSeries::from_values(
        (0..100)
            .map(|i| if i % 2 == 0 { 9.0 } else { 11.0 })
            .collect(),
    );

    // Signal with a particle event: a 60-sample plateau at 40
    let mut signal_values = vec![10.0; 200];
    for value in &mut signal_values[70..130] {
        *value = 40.0;
    }
    let signal = TimeSeries::from_values(signal_values);

    println!("Background: 100 samples around 10");
    println!("Signal: 200 samples with a plateau at 40 over [70, 130)\n");

    // 1. Rolling-threshold spike detection
    println!("1. Rolling-Threshold Detector (window=10, critical_value=2.0)");
    let spikes = RollingThresholdDetector::new(10, 2.0).find_events(&signal)?;
    println!("   Events: {:?}\n", spikes);

    // 2. Background-relative detection (Gaussian model)
    println!("2. Background-Relative Detector (window_size=50, threshold=3.0, Gaussian)");
    let mut gaussian =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(50, 3.0, BackgroundModel::Gaussian));
    gaussian.fit(&background)?;
    let mask = gaussian.detect(&signal)?;
    let intervals = gaussian.detect_intervals(&signal)?;
    println!("   Flagged samples: {}", mask.flag_count());
    println!("   Merged intervals: {:?}\n", intervals);

    // 3. Background-relative detection (Poisson model)
    println!("3. Background-Relative Detector (window_size=50, threshold=3.0, Poisson)");
    let mut poisson =
        BackgroundAnomalyDetector::new(BackgroundConfig::new(50, 3.0, BackgroundModel::Poisson));
    poisson.fit(&background)?;
    let intervals = poisson.detect_intervals(&signal)?;
    println!("   Merged intervals: {:?}\n", intervals);

    // 4. Quiet-background selection
    println!("4. Noise Mask Filter (rolling_window=6, offsets=[4, 30])");
    let quiet = NoiseMaskFilter::new(6, vec![4, 30]).noise_mask(&signal)?;
    println!(
        "   Accepted {} of {} samples as quiet background\n",
        quiet.flag_count(),
        quiet.len()
    );

    // 5. CUSUM onset detection
    println!("5. CUSUM Onset Detector (window=5, critical_value=2.0)");
    let onset = CusumOnsetDetector::from_config(10.0, 1.0, OnsetConfig::new(5, 2.0))
        .detect_onset(&signal)?;
    match onset {
        Some(timestamp) => println!("   Onset detected at timestamp {}", timestamp),
        None => println!("   No onset detected"),
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
