//! Feature Vector - validated model input
//!
//! Raw request values become a `FeatureVector` only after the length and
//! finiteness checks pass. Wrong sizes are rejected, never truncated or padded.

use serde::Serialize;

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use crate::error::{ScoringError, ScoringResult};

/// Fixed-size feature vector in `FEATURE_LAYOUT` order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Validate raw values and build a vector
    pub fn from_slice(values: &[f64]) -> ScoringResult<Self> {
        if values.len() != FEATURE_COUNT {
            return Err(ScoringError::invalid_length(FEATURE_COUNT, values.len()));
        }

        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ScoringError::InvalidInput(format!(
                "feature {} ({}) is not a finite number: {}",
                i, FEATURE_LAYOUT[i], v
            )));
        }

        let mut array = [0.0f64; FEATURE_COUNT];
        array.copy_from_slice(values);
        Ok(Self { values: array })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = ScoringError;

    fn try_from(values: &[f64]) -> ScoringResult<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = ScoringError;

    fn try_from(values: Vec<f64>) -> ScoringResult<Self> {
        Self::from_slice(&values)
    }
}
