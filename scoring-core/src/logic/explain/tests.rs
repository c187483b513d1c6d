//! Tests for the explanation service and its two strategies

use ndarray::Array2;

use super::engine::{build_explainer, explain, Explainer};
use super::linear::LinearExplainer;
use super::sampling::SamplingExplainer;
use super::types::ExplainStrategy;
use crate::error::ScoringError;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use crate::logic::model::fixtures::{reference_rows, sample_features, test_artifact, test_store};
use crate::logic::model::ModelStore;

/// Hand-picked applicant: two months late on the latest bill, low limit
fn delinquent_applicant() -> Vec<f64> {
    vec![
        30000.0, 1.0, 2.0, 2.0, 33.0, 3.0, 2.0, 2.0, 0.0, 0.0, 0.0,
        29000.0, 28500.0, 28000.0, 27000.0, 26000.0, 25000.0,
        0.0, 1200.0, 1000.0, 1000.0, 800.0, 800.0,
    ]
}

#[test]
fn test_linear_returns_one_record_per_feature() {
    let store = test_store();
    let explainer = build_explainer(&store, ExplainStrategy::Linear, 200, 42);

    let explanation = explain(&store, explainer.as_ref(), &sample_features()).unwrap();

    assert_eq!(explanation.strategy, ExplainStrategy::Linear);
    assert_eq!(explanation.contributions.len(), FEATURE_COUNT);
    for (i, record) in explanation.contributions.iter().enumerate() {
        assert_eq!(record.feature_index, i);
        assert!(record.contribution.is_finite());
    }
    assert_eq!(explanation.contributions[0].feature_name, "LIMIT_BAL");
    assert_eq!(explanation.contributions[22].feature_name, "PAY_AMT6");
}

#[test]
fn test_linear_is_additive() {
    let store = test_store();
    let explainer = LinearExplainer::new(store.pipeline(), store.reference());
    let features = sample_features();

    let vector = FeatureVector::from_slice(&features).unwrap();
    let phi = explainer.attribute(&vector).unwrap();

    let margin = store.pipeline().margin(ndarray::ArrayView1::from(features.as_slice()));
    let total: f64 = phi.iter().sum::<f64>() + explainer.base_value();
    assert!((total - margin).abs() < 1e-9);
}

#[test]
fn test_linear_empty_reference_uses_training_mean() {
    let mut artifact = test_artifact();
    artifact.reference.clear();
    let store = ModelStore::from_artifact(artifact).unwrap();

    let explainer = LinearExplainer::new(store.pipeline(), store.reference());
    assert!(explainer.baseline_mean().iter().all(|&m| m == 0.0));
    assert_eq!(explainer.base_value(), store.pipeline().intercept());

    let vector = FeatureVector::from_slice(&sample_features()).unwrap();
    let z = store.pipeline().transform(ndarray::ArrayView1::from(vector.as_slice()));
    let phi = explainer.attribute(&vector).unwrap();
    for i in 0..FEATURE_COUNT {
        let expected = store.pipeline().coefficients()[i] * z[i];
        assert!((phi[i] - expected).abs() < 1e-12);
    }
}

#[test]
fn test_sampling_is_deterministic() {
    let store = test_store();
    let explainer = build_explainer(&store, ExplainStrategy::Sampling, 100, 7);

    let first = explain(&store, explainer.as_ref(), &delinquent_applicant()).unwrap();
    let second = explain(&store, explainer.as_ref(), &delinquent_applicant()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.strategy, ExplainStrategy::Sampling);
    assert_eq!(first.contributions.len(), FEATURE_COUNT);
}

#[test]
fn test_sampling_matches_linear_with_single_reference_row() {
    let rows = reference_rows();
    let flat: Vec<f64> = rows[0].clone();
    let reference = Array2::from_shape_vec((1, FEATURE_COUNT), flat).unwrap();

    let store = test_store();
    let linear = LinearExplainer::new(store.pipeline(), reference.view());
    let sampling = SamplingExplainer::new(store.pipeline(), reference.view(), 25, 3);

    let vector = FeatureVector::from_slice(&delinquent_applicant()).unwrap();
    let exact = linear.attribute(&vector).unwrap();
    let estimate = sampling.attribute(&vector).unwrap();

    for (a, b) in exact.iter().zip(&estimate) {
        assert!((a - b).abs() < 1e-9, "linear {} vs sampling {}", a, b);
    }
    assert!((linear.base_value() - sampling.base_value()).abs() < 1e-9);
}

#[test]
fn test_strategies_agree_on_top_feature_sign() {
    let store = test_store();
    let linear = build_explainer(&store, ExplainStrategy::Linear, 200, 42);
    let sampling = build_explainer(&store, ExplainStrategy::Sampling, 200, 42);

    let applicant = delinquent_applicant();
    let exact = explain(&store, linear.as_ref(), &applicant).unwrap();
    let estimate = explain(&store, sampling.as_ref(), &applicant).unwrap();

    let top = exact.top_features(1)[0];
    assert_eq!(top.feature_name, "PAY_0");
    assert!(top.contribution > 0.0);

    let matching = &estimate.contributions[top.feature_index];
    assert_eq!(
        matching.contribution.signum(),
        top.contribution.signum(),
        "sampling {} vs linear {}",
        matching.contribution,
        top.contribution
    );
}

#[test]
fn test_sampling_without_reference_fails() {
    let mut artifact = test_artifact();
    artifact.reference.clear();
    let store = ModelStore::from_artifact(artifact).unwrap();
    let explainer = build_explainer(&store, ExplainStrategy::Sampling, 50, 1);

    let result = explain(&store, explainer.as_ref(), &sample_features());
    assert!(matches!(result, Err(ScoringError::NumericComputation(_))));
}

#[test]
fn test_explain_rejects_wrong_length() {
    let store = test_store();
    for strategy in [ExplainStrategy::Linear, ExplainStrategy::Sampling] {
        let explainer = build_explainer(&store, strategy, 10, 1);

        let mut short = sample_features();
        short.truncate(22);
        assert!(matches!(
            explain(&store, explainer.as_ref(), &short),
            Err(ScoringError::InvalidInput(_))
        ));

        let mut long = sample_features();
        long.push(0.0);
        assert!(matches!(
            explain(&store, explainer.as_ref(), &long),
            Err(ScoringError::InvalidInput(_))
        ));
    }
    assert_eq!(store.stats().explanation_count, 0);
}

#[test]
fn test_explain_rejects_overflowing_values() {
    let store = test_store();
    let mut features = sample_features();
    features[1] = -1.7e308;
    features[3] = 1.7e308;

    for strategy in [ExplainStrategy::Linear, ExplainStrategy::Sampling] {
        let explainer = build_explainer(&store, strategy, 10, 1);
        assert!(matches!(
            explain(&store, explainer.as_ref(), &features),
            Err(ScoringError::InvalidInput(_))
        ));
    }
    assert_eq!(store.stats().explanation_count, 0);
}

#[test]
fn test_strategy_parsing() {
    assert_eq!("linear".parse::<ExplainStrategy>(), Ok(ExplainStrategy::Linear));
    assert_eq!(" Sampling ".parse::<ExplainStrategy>(), Ok(ExplainStrategy::Sampling));
    assert!("kernel".parse::<ExplainStrategy>().is_err());
    assert_eq!(ExplainStrategy::Sampling.to_string(), "sampling");
}
