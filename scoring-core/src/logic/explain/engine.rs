use std::sync::Arc;
use std::time::Instant;

use ndarray::ArrayView1;

use super::linear::LinearExplainer;
use super::sampling::SamplingExplainer;
use super::types::{Contribution, ExplainStrategy, Explanation};
use crate::error::{ScoringError, ScoringResult};
use crate::logic::features::{feature_name, FeatureVector};
use crate::logic::model::ModelStore;

/// Per-feature attribution for a single prediction.
///
/// Implementations are built once at startup and shared across requests,
/// so `attribute` takes `&self` and must not depend on call order.
pub trait Explainer: Send + Sync {
    fn strategy(&self) -> ExplainStrategy;

    /// Model log-odds at the baseline
    fn base_value(&self) -> f64;

    /// One signed log-odds contribution per feature, in layout order
    fn attribute(&self, vector: &FeatureVector) -> ScoringResult<Vec<f64>>;
}

/// Build the configured explainer for a loaded model
pub fn build_explainer(
    store: &ModelStore,
    strategy: ExplainStrategy,
    n_permutations: usize,
    seed: u64,
) -> Arc<dyn Explainer> {
    match strategy {
        ExplainStrategy::Linear => {
            Arc::new(LinearExplainer::new(store.pipeline(), store.reference()))
        }
        ExplainStrategy::Sampling => Arc::new(SamplingExplainer::new(
            store.pipeline(),
            store.reference(),
            n_permutations,
            seed,
        )),
    }
}

/// Explain one raw feature vector
pub fn explain(
    store: &ModelStore,
    explainer: &dyn Explainer,
    features: &[f64],
) -> ScoringResult<Explanation> {
    let start_time = Instant::now();

    let vector = FeatureVector::from_slice(features)?;
    store
        .pipeline()
        .checked_margin(ArrayView1::from(vector.as_slice()))?;
    let values = explainer.attribute(&vector)?;

    if values.len() != store.feature_count() {
        return Err(ScoringError::NumericComputation(format!(
            "explainer returned {} values for {} features",
            values.len(),
            store.feature_count()
        )));
    }

    let contributions = values
        .into_iter()
        .enumerate()
        .map(|(i, contribution)| Contribution {
            feature_index: i,
            feature_name: feature_name(i).unwrap_or("unknown").to_string(),
            contribution,
        })
        .collect();

    store.record_explanation(start_time.elapsed().as_micros() as u64);

    Ok(Explanation {
        strategy: explainer.strategy(),
        base_value: explainer.base_value(),
        contributions,
    })
}
