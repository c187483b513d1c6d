//! Shared test fixtures: a hand-built credit model with UCI-like parameters

use chrono::{TimeZone, Utc};

use super::artifact::{LogisticParams, ModelArtifact, ScalerParams, TrainingMetrics};
use super::store::ModelStore;

pub fn sample_features() -> Vec<f64> {
    vec![
        20000.0, 2.0, 1.0, 0.0, 25.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        25000.0, 26000.0, 24000.0, 23000.0, 0.0, 0.0, 0.0, 0.0,
        1000.0, 1500.0, 0.0, 0.0, 0.0,
    ]
}

pub fn reference_rows() -> Vec<Vec<f64>> {
    vec![
        vec![
            50000.0, 2.0, 2.0, 1.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            40000.0, 38000.0, 35000.0, 30000.0, 28000.0, 25000.0,
            2000.0, 2000.0, 1500.0, 1000.0, 1000.0, 1000.0,
        ],
        vec![
            200000.0, 1.0, 1.0, 2.0, 40.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
            3000.0, 2500.0, 2000.0, 1500.0, 1000.0, 500.0,
            3000.0, 2500.0, 2000.0, 1500.0, 1000.0, 500.0,
        ],
        vec![
            120000.0, 2.0, 2.0, 2.0, 28.0, 2.0, 2.0, 0.0, 0.0, 0.0, 0.0,
            90000.0, 88000.0, 85000.0, 60000.0, 58000.0, 55000.0,
            0.0, 3000.0, 3000.0, 2500.0, 2000.0, 2000.0,
        ],
        vec![
            360000.0, 1.0, 1.0, 1.0, 45.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            150000.0, 140000.0, 130000.0, 120000.0, 110000.0, 100000.0,
            10000.0, 8000.0, 7000.0, 6000.0, 5000.0, 5000.0,
        ],
        vec![
            80000.0, 2.0, 3.0, 1.0, 52.0, 1.0, 2.0, 2.0, 0.0, 0.0, 0.0,
            70000.0, 69000.0, 66000.0, 40000.0, 39000.0, 38000.0,
            3000.0, 0.0, 2000.0, 1500.0, 1500.0, 1500.0,
        ],
    ]
}

pub fn test_artifact() -> ModelArtifact {
    let scaler = ScalerParams {
        mean: vec![
            167484.0, 1.60, 1.85, 1.55, 35.5, -0.017, -0.13, -0.17, -0.22, -0.27, -0.29,
            51223.0, 49179.0, 47013.0, 43263.0, 40311.0, 38872.0,
            5664.0, 5921.0, 5226.0, 4826.0, 4799.0, 5216.0,
        ],
        scale: vec![
            129747.0, 0.49, 0.79, 0.52, 9.2, 1.12, 1.20, 1.20, 1.17, 1.13, 1.15,
            73635.0, 71173.0, 69349.0, 64332.0, 60797.0, 59554.0,
            16563.0, 23040.0, 17606.0, 15666.0, 15278.0, 17777.0,
        ],
    };
    let classifier = LogisticParams {
        coefficients: vec![
            -0.10, -0.05, -0.07, -0.08, 0.06, 0.65, 0.09, 0.08, 0.03, 0.04, 0.01,
            -0.38, 0.15, 0.08, 0.01, 0.02, 0.01,
            -0.20, -0.22, -0.05, -0.06, -0.03, -0.03,
        ],
        intercept: -1.45,
    };
    let metrics = TrainingMetrics {
        accuracy: 0.81,
        train_rows: 24000,
        test_rows: 6000,
        trained_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    };

    ModelArtifact::new(scaler, classifier, reference_rows(), metrics)
}

pub fn test_store() -> ModelStore {
    ModelStore::from_artifact(test_artifact()).unwrap()
}
