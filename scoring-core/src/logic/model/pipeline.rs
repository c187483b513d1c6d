//! Pipeline - StandardScaler followed by a logistic classifier
//!
//! Built once from artifact parameters, then only read.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::artifact::{LogisticParams, ScalerParams};
use crate::error::{ScoringError, ScoringResult};

/// Numerically stable logistic function
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Fitted scaling + classification transform
#[derive(Debug, Clone)]
pub struct Pipeline {
    mean: Array1<f64>,
    scale: Array1<f64>,
    coefficients: Array1<f64>,
    intercept: f64,
    threshold: f64,
}

impl Pipeline {
    pub fn new(
        scaler: &ScalerParams,
        classifier: &LogisticParams,
        threshold: f64,
    ) -> ScoringResult<Self> {
        let n = classifier.coefficients.len();

        if n == 0 {
            return Err(ScoringError::ModelLoadFailure(
                "classifier has no coefficients".to_string(),
            ));
        }
        if scaler.mean.len() != n || scaler.scale.len() != n {
            return Err(ScoringError::ModelLoadFailure(format!(
                "scaler has {}/{} parameters, classifier expects {}",
                scaler.mean.len(),
                scaler.scale.len(),
                n
            )));
        }
        if !scaler.mean.iter().chain(&classifier.coefficients).all(|v| v.is_finite())
            || !classifier.intercept.is_finite()
        {
            return Err(ScoringError::ModelLoadFailure(
                "non-finite model parameter".to_string(),
            ));
        }
        if let Some(i) = scaler.scale.iter().position(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(ScoringError::ModelLoadFailure(format!(
                "scale for feature {} must be positive, got {}",
                i, scaler.scale[i]
            )));
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ScoringError::ModelLoadFailure(format!(
                "decision threshold must be in (0, 1), got {}",
                threshold
            )));
        }

        Ok(Self {
            mean: Array1::from(scaler.mean.clone()),
            scale: Array1::from(scaler.scale.clone()),
            coefficients: Array1::from(classifier.coefficients.clone()),
            intercept: classifier.intercept,
            threshold,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scale step: `(x - mean) / scale`
    pub fn transform(&self, x: ArrayView1<f64>) -> Array1<f64> {
        (&x - &self.mean) / &self.scale
    }

    /// Scale step applied to every row of a matrix
    pub fn transform_batch(&self, x: ArrayView2<f64>) -> Array2<f64> {
        (&x - &self.mean) / &self.scale
    }

    /// Log-odds of the positive class for an already scaled row
    pub fn margin_scaled(&self, z: ArrayView1<f64>) -> f64 {
        self.coefficients.dot(&z) + self.intercept
    }

    /// Log-odds of the positive class for a raw row
    pub fn margin(&self, x: ArrayView1<f64>) -> f64 {
        self.margin_scaled(self.transform(x).view())
    }

    /// Margin for a raw row, rejecting inputs whose magnitude overflows it
    pub fn checked_margin(&self, x: ArrayView1<f64>) -> ScoringResult<f64> {
        let margin = self.margin(x);
        if margin.is_finite() {
            Ok(margin)
        } else {
            Err(ScoringError::InvalidInput(
                "feature values are out of range for the model".to_string(),
            ))
        }
    }

    /// `[P(class 0), P(class 1)]`
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> [f64; 2] {
        let p1 = sigmoid(self.margin(x));
        [1.0 - p1, p1]
    }

    /// Class 1 only when the positive probability is strictly above the threshold
    pub fn predict(&self, x: ArrayView1<f64>) -> u8 {
        let [_, p1] = self.predict_proba(x);
        u8::from(p1 > self.threshold)
    }
}
