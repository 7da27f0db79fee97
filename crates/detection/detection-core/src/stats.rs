//! Summary and rolling statistics over raw sample buffers.

/// Mean of a sample buffer. NaN for an empty buffer.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation (n - 1 denominator). NaN below two samples.
pub fn sample_std(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - m).powi(2)).sum();
    (sum_sq / (data.len() - 1) as f64).sqrt()
}

/// Trailing rolling mean. NaN for the first `window - 1` positions.
pub fn rolling_mean(data: &[f64], window: usize) -> Vec<f64> {
    rolling(data, window, mean)
}

/// Trailing rolling sample standard deviation. NaN for the first
/// `window - 1` positions.
pub fn rolling_std(data: &[f64], window: usize) -> Vec<f64> {
    rolling(data, window, sample_std)
}

fn rolling(data: &[f64], window: usize, stat: fn(&[f64]) -> f64) -> Vec<f64> {
    let n = data.len();
    let mut out = vec![f64::NAN; n];
    if window == 0 || window > n {
        return out;
    }
    for i in (window - 1)..n {
        out[i] = stat(&data[i + 1 - window..=i]);
    }
    out
}

/// Centered rolling mean. NaN wherever the window does not fit.
pub fn centered_rolling_mean(data: &[f64], window: usize) -> Vec<f64> {
    centered_rolling(data, window, mean)
}

/// Centered rolling sample standard deviation. NaN wherever the window does
/// not fit.
pub fn centered_rolling_std(data: &[f64], window: usize) -> Vec<f64> {
    centered_rolling(data, window, sample_std)
}

fn centered_rolling(data: &[f64], window: usize, stat: fn(&[f64]) -> f64) -> Vec<f64> {
    let n = data.len();
    let mut out = vec![f64::NAN; n];
    if window == 0 || window > n {
        return out;
    }
    // Even windows take the extra sample on the right.
    let left = (window - 1) / 2;
    let right = window / 2;
    for i in left..(n - right) {
        out[i] = stat(&data[i - left..=i + right]);
    }
    out
}
