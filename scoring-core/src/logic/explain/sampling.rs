//! Monte Carlo permutation Shapley values
//!
//! Each draw picks a random feature order and a random reference row, then
//! walks the order switching features from the reference value to the
//! instance value. The change in margin at each switch is credited to the
//! feature being switched. Averaged over draws this estimates the
//! interventional Shapley value for any model, linear or not.
//!
//! The RNG is reseeded on every call so identical inputs give identical
//! attributions.

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::engine::Explainer;
use super::types::ExplainStrategy;
use crate::error::{ScoringError, ScoringResult};
use crate::logic::features::FeatureVector;
use crate::logic::model::Pipeline;

#[derive(Debug, Clone)]
pub struct SamplingExplainer {
    pipeline: Pipeline,
    reference: Array2<f64>,
    n_permutations: usize,
    seed: u64,
    base_value: f64,
}

impl SamplingExplainer {
    pub fn new(
        pipeline: &Pipeline,
        reference: ArrayView2<f64>,
        n_permutations: usize,
        seed: u64,
    ) -> Self {
        let base_value = if reference.nrows() == 0 {
            pipeline.intercept()
        } else {
            reference
                .rows()
                .into_iter()
                .map(|row| pipeline.margin(row))
                .sum::<f64>()
                / reference.nrows() as f64
        };

        Self {
            pipeline: pipeline.clone(),
            reference: reference.to_owned(),
            n_permutations: n_permutations.max(1),
            seed,
            base_value,
        }
    }

    pub fn n_permutations(&self) -> usize {
        self.n_permutations
    }
}

impl Explainer for SamplingExplainer {
    fn strategy(&self) -> ExplainStrategy {
        ExplainStrategy::Sampling
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn attribute(&self, vector: &FeatureVector) -> ScoringResult<Vec<f64>> {
        let n_rows = self.reference.nrows();
        if n_rows == 0 {
            return Err(ScoringError::NumericComputation(
                "sampling attribution needs a non-empty reference sample".to_string(),
            ));
        }

        let x = ArrayView1::from(vector.as_slice());
        let n = self.pipeline.n_features();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut order: Vec<usize> = (0..n).collect();
        let mut phi = vec![0.0f64; n];

        for _ in 0..self.n_permutations {
            order.shuffle(&mut rng);
            let mut current = self.reference.row(rng.gen_range(0..n_rows)).to_owned();
            let mut previous = self.pipeline.margin(current.view());

            for &j in &order {
                current[j] = x[j];
                let next = self.pipeline.margin(current.view());
                phi[j] += next - previous;
                previous = next;
            }
        }

        let draws = self.n_permutations as f64;
        for value in &mut phi {
            *value /= draws;
        }

        if !phi.iter().all(|v| v.is_finite()) {
            return Err(ScoringError::NumericComputation(
                "sampling attribution produced a non-finite value".to_string(),
            ));
        }

        Ok(phi)
    }
}
