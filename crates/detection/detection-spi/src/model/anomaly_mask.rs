//! Boolean anomaly mask.

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};

/// Boolean mask aligned one-to-one with its source series.
///
/// `true` at position `i` means sample `i` belongs to a flagged region. For
/// the noise filter the polarity is inverted: `true` means "accepted as quiet
/// background". Masks are recomputed in full by each detection call, never
/// partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyMask {
    flags: Vec<bool>,
}

impl AnomalyMask {
    /// Wrap a flag vector.
    pub fn new(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Mask of `len` samples with every flag clear.
    pub fn all_clear(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Mask of `len` samples with every flag set.
    pub fn all_set(len: usize) -> Self {
        Self {
            flags: vec![true; len],
        }
    }

    /// Number of samples covered by the mask.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check whether the mask covers no samples.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flag at position `index`.
    pub fn get(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// Flags as a slice, in series order.
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// Number of set flags.
    pub fn flag_count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Positions of all set flags.
    pub fn flagged_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| if flag { Some(i) } else { None })
            .collect()
    }

    /// Positionwise logical AND with another mask of the same length.
    pub fn and(&self, other: &AnomalyMask) -> Result<AnomalyMask> {
        if self.len() != other.len() {
            return Err(DetectionError::ShapeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let flags = self
            .flags
            .iter()
            .zip(other.flags.iter())
            .map(|(&a, &b)| a && b)
            .collect();
        Ok(AnomalyMask::new(flags))
    }

    /// Mask with every flag inverted.
    ///
    /// Converts between quiet-background polarity and anomaly polarity.
    pub fn complement(&self) -> AnomalyMask {
        AnomalyMask::new(self.flags.iter().map(|&flag| !flag).collect())
    }
}
