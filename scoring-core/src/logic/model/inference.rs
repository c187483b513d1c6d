//! Prediction Service
//!
//! `predict` scales the raw vector, applies the classifier and reports the
//! predicted class with the probability mass of that class.

use std::time::Instant;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::pipeline::sigmoid;
use super::store::ModelStore;
use crate::error::ScoringResult;
use crate::logic::features::FeatureVector;

/// Prediction output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// 0 = no default, 1 = default next month
    pub label: u8,
    /// Probability of `label`, always >= the decision threshold's complement
    pub probability: f64,
}

/// Run the pipeline on a raw feature vector
pub fn predict(store: &ModelStore, features: &[f64]) -> ScoringResult<Prediction> {
    let start_time = Instant::now();

    let vector = FeatureVector::from_slice(features)?;
    let prediction = predict_vector(store, &vector)?;

    store.record_prediction(start_time.elapsed().as_micros() as u64);
    log::debug!(
        "prediction label={} probability={:.4}",
        prediction.label,
        prediction.probability
    );

    Ok(prediction)
}

pub fn predict_vector(store: &ModelStore, vector: &FeatureVector) -> ScoringResult<Prediction> {
    let pipeline = store.pipeline();
    let x = ArrayView1::from(vector.as_slice());

    let p1 = sigmoid(pipeline.checked_margin(x)?);
    let label = u8::from(p1 > pipeline.threshold());
    let probability = if label == 1 { p1 } else { 1.0 - p1 };

    Ok(Prediction { label, probability })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;
    use crate::logic::model::fixtures::{sample_features, test_store};

    #[test]
    fn test_predict_sample_vector() {
        let store = test_store();
        let prediction = predict(&store, &sample_features()).unwrap();

        assert!(prediction.label <= 1);
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert!(prediction.probability >= 0.5);
    }

    #[test]
    fn test_predict_is_idempotent() {
        let store = test_store();
        let first = predict(&store, &sample_features()).unwrap();
        let second = predict(&store, &sample_features()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_high_risk_vector() {
        let store = test_store();
        let mut features = sample_features();
        // Payments delayed 8 months across the board
        for value in &mut features[5..11] {
            *value = 8.0;
        }
        let prediction = predict(&store, &features).unwrap();
        assert_eq!(prediction.label, 1);
        assert!(prediction.probability > 0.5);
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let store = test_store();

        let mut short = sample_features();
        short.pop();
        assert!(matches!(predict(&store, &short), Err(ScoringError::InvalidInput(_))));

        let mut long = sample_features();
        long.push(1.0);
        assert!(matches!(predict(&store, &long), Err(ScoringError::InvalidInput(_))));
    }

    #[test]
    fn test_predict_rejects_overflowing_values() {
        let store = test_store();
        let mut features = sample_features();
        features[1] = -1.7e308;
        features[3] = 1.7e308;

        let result = predict(&store, &features);
        assert!(matches!(result, Err(ScoringError::InvalidInput(_))));
        assert_eq!(store.stats().prediction_count, 0);
    }

    #[test]
    fn test_predict_updates_stats() {
        let store = test_store();
        predict(&store, &sample_features()).unwrap();
        predict(&store, &sample_features()).unwrap();
        let _ = predict(&store, &[1.0]);

        assert_eq!(store.stats().prediction_count, 2);
    }
}
