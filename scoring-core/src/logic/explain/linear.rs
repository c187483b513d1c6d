//! Closed-form attribution for the linear classifier
//!
//! With independent features the Shapley value of feature `i` for a
//! linear margin is `w_i * (z_i - E[z_i])`, where `z` is the scaled row
//! and the expectation runs over the baseline distribution.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use super::engine::Explainer;
use super::types::ExplainStrategy;
use crate::error::{ScoringError, ScoringResult};
use crate::logic::features::FeatureVector;
use crate::logic::model::Pipeline;

#[derive(Debug, Clone)]
pub struct LinearExplainer {
    pipeline: Pipeline,
    /// Mean of the scaled baseline
    baseline_mean: Array1<f64>,
    base_value: f64,
}

impl LinearExplainer {
    /// Baseline is the scaled reference sample; an empty sample falls back
    /// to the training mean (zero after scaling)
    pub fn new(pipeline: &Pipeline, reference: ArrayView2<f64>) -> Self {
        let n = pipeline.n_features();

        let baseline_mean = if reference.nrows() == 0 {
            Array1::zeros(n)
        } else {
            pipeline
                .transform_batch(reference)
                .mean_axis(Axis(0))
                .unwrap_or_else(|| Array1::zeros(n))
        };

        let base_value = pipeline.margin_scaled(baseline_mean.view());

        Self {
            pipeline: pipeline.clone(),
            baseline_mean,
            base_value,
        }
    }

    pub fn baseline_mean(&self) -> ArrayView1<'_, f64> {
        self.baseline_mean.view()
    }
}

impl Explainer for LinearExplainer {
    fn strategy(&self) -> ExplainStrategy {
        ExplainStrategy::Linear
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn attribute(&self, vector: &FeatureVector) -> ScoringResult<Vec<f64>> {
        let z = self.pipeline.transform(ArrayView1::from(vector.as_slice()));
        let phi = &self.pipeline.coefficients() * &(&z - &self.baseline_mean);

        if !phi.iter().all(|v| v.is_finite()) {
            return Err(ScoringError::NumericComputation(
                "linear attribution produced a non-finite value".to_string(),
            ));
        }

        Ok(phi.to_vec())
    }
}
