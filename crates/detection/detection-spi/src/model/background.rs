//! Background distribution statistics.

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};

/// Distributional model assumed for the background sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundModel {
    /// Background characterized by mean and standard deviation.
    Gaussian,
    /// Counting background characterized by its rate alone.
    Poisson,
}

/// Fixed background statistics, estimated once per detection run and held
/// immutable for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BackgroundStatistics {
    Gaussian { mean: f64, std: f64 },
    Poisson { rate: f64 },
}

impl BackgroundStatistics {
    /// Estimate statistics from a background sample under the given model.
    ///
    /// Uses the sample standard deviation (n - 1 denominator). Fails with
    /// `DegenerateBackground` when the sample cannot characterize a usable
    /// background: zero or undefined standard deviation in Gaussian mode,
    /// non-positive rate in Poisson mode.
    pub fn estimate(sample: &[f64], model: BackgroundModel) -> Result<Self> {
        if sample.is_empty() {
            return Err(DetectionError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let mean = sample.iter().sum::<f64>() / sample.len() as f64;

        match model {
            BackgroundModel::Gaussian => {
                let sum_sq: f64 = sample.iter().map(|x| (x - mean).powi(2)).sum();
                let std = if sample.len() > 1 {
                    (sum_sq / (sample.len() - 1) as f64).sqrt()
                } else {
                    f64::NAN
                };
                if std == 0.0 || !std.is_finite() {
                    return Err(DetectionError::DegenerateBackground {
                        reason: "background standard deviation is zero".to_string(),
                    });
                }
                Ok(Self::Gaussian { mean, std })
            }
            BackgroundModel::Poisson => {
                if mean <= 0.0 || !mean.is_finite() {
                    return Err(DetectionError::DegenerateBackground {
                        reason: "background rate is not positive".to_string(),
                    });
                }
                Ok(Self::Poisson { rate: mean })
            }
        }
    }

    /// The model these statistics were estimated under.
    pub fn model(&self) -> BackgroundModel {
        match self {
            Self::Gaussian { .. } => BackgroundModel::Gaussian,
            Self::Poisson { .. } => BackgroundModel::Poisson,
        }
    }
}
