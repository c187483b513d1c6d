//! Tests for input vector validation

use super::vector::FeatureVector;
use super::layout::FEATURE_COUNT;
use crate::error::ScoringError;

fn sample_values() -> Vec<f64> {
    vec![
        20000.0, 2.0, 1.0, 0.0, 25.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        25000.0, 26000.0, 24000.0, 23000.0, 0.0, 0.0, 0.0, 0.0,
        1000.0, 1500.0, 0.0, 0.0, 0.0,
    ]
}

#[test]
fn test_accepts_exact_length() {
    let values = sample_values();
    assert_eq!(values.len(), FEATURE_COUNT);

    let vector = FeatureVector::from_slice(&values).unwrap();
    assert_eq!(vector.as_slice(), values.as_slice());
    assert_eq!(vector.get_by_name("LIMIT_BAL"), Some(20000.0));
    assert_eq!(vector.get_by_name("AGE"), Some(25.0));
}

#[test]
fn test_rejects_short_and_long_vectors() {
    let mut short = sample_values();
    short.pop();
    assert!(matches!(
        FeatureVector::from_slice(&short),
        Err(ScoringError::InvalidInput(_))
    ));

    let mut long = sample_values();
    long.push(0.0);
    assert!(matches!(
        FeatureVector::try_from(long),
        Err(ScoringError::InvalidInput(_))
    ));

    assert!(FeatureVector::from_slice(&[]).is_err());
}

#[test]
fn test_rejects_non_finite_values() {
    let mut values = sample_values();
    values[4] = f64::NAN;
    let err = FeatureVector::from_slice(&values).unwrap_err();
    assert!(err.to_string().contains("AGE"));

    values[4] = f64::INFINITY;
    assert!(FeatureVector::from_slice(&values).is_err());
}
