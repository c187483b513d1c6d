//! Training Module - offline fit of the scoring pipeline
//!
//! One-shot batch job: split, fit scaler, fit classifier, evaluate,
//! sample the attribution baseline and package everything as an artifact.
//! Both fits run through linfa; this module only wires them together.
//! No retry or recovery; any failure aborts the run.

pub mod logistic;
pub mod scaler;


use chrono::Utc;
use ndarray::{ArrayView1, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;

use crate::constants::{
    DECISION_THRESHOLD, DEFAULT_SEED, REFERENCE_SAMPLE_SIZE, TEST_FRACTION,
};
use crate::error::ScoringResult;
use crate::logic::dataset::{stratified_split, Dataset};
use crate::logic::model::{ModelArtifact, Pipeline, TrainingMetrics};

pub use logistic::{fit_logistic, LogisticOptions};
pub use scaler::{fit_scaler, scale_rows};

#[derive(Debug, Clone)]
pub struct TrainingOptions {
    pub test_fraction: f64,
    pub seed: u64,
    pub reference_size: usize,
    pub logistic: LogisticOptions,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            test_fraction: TEST_FRACTION,
            seed: DEFAULT_SEED,
            reference_size: REFERENCE_SAMPLE_SIZE,
            logistic: LogisticOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub artifact: ModelArtifact,
    pub accuracy: f64,
}

/// Share of rows where the pipeline's label equals the target
pub fn accuracy(pipeline: &Pipeline, x: ArrayView2<f64>, y: ArrayView1<f64>) -> f64 {
    if x.nrows() == 0 {
        return 0.0;
    }
    let correct = x
        .rows()
        .into_iter()
        .zip(y.iter())
        .filter(|(row, &label)| f64::from(pipeline.predict(*row)) == label)
        .count();
    correct as f64 / x.nrows() as f64
}

/// Seeded sample of raw training rows, without replacement
fn sample_reference(x: ArrayView2<f64>, size: usize, seed: u64) -> Vec<Vec<f64>> {
    let amount = size.min(x.nrows());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = sample(&mut rng, x.nrows(), amount).into_vec();
    picked.sort_unstable();

    x.select(Axis(0), &picked)
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect()
}

pub fn train(dataset: &Dataset, options: &TrainingOptions) -> ScoringResult<TrainingReport> {
    let (neg, pos) = dataset.class_counts();
    log::info!(
        "Training on {} rows ({} default, {} non-default)",
        dataset.n_rows(),
        pos,
        neg
    );

    let (train_set, test_set) = stratified_split(dataset, options.test_fraction, options.seed)?;
    log::info!(
        "Split: {} train / {} test rows",
        train_set.n_rows(),
        test_set.n_rows()
    );

    let scaler = fit_scaler(train_set.features.view())?;

    let z_train = scale_rows(&scaler, train_set.features.view());

    let classifier = fit_logistic(z_train.view(), train_set.target.view(), &options.logistic)?;
    log::info!(
        "Logistic regression fitted (C = {}, intercept {:.4})",
        options.logistic.c,
        classifier.intercept
    );

    let pipeline = Pipeline::new(&scaler, &classifier, DECISION_THRESHOLD)?;
    let score = accuracy(&pipeline, test_set.features.view(), test_set.target.view());

    let reference = sample_reference(
        train_set.features.view(),
        options.reference_size,
        options.seed,
    );

    let metrics = TrainingMetrics {
        accuracy: score,
        train_rows: train_set.n_rows(),
        test_rows: test_set.n_rows(),
        trained_at: Utc::now(),
    };

    Ok(TrainingReport {
        artifact: ModelArtifact::new(scaler, classifier, reference, metrics),
        accuracy: score,
    })
}
