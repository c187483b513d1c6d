//! Central Configuration Constants
//!
//! Single source of truth for defaults shared by the server and the trainer.

/// Default model artifact path (relative to the working directory)
pub const DEFAULT_MODEL_PATH: &str = "model/model.json";

/// Decision threshold on the positive-class probability
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Artifact format version written by the trainer
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Maximum number of training rows kept as attribution baseline
pub const REFERENCE_SAMPLE_SIZE: usize = 100;

/// Default Monte Carlo permutations for the sampling explainer
pub const DEFAULT_EXPLAIN_SAMPLES: usize = 200;

/// Default seed for every seeded random process (split, reference, sampling)
pub const DEFAULT_SEED: u64 = 42;

/// UCI "default of credit card clients" spreadsheet
pub const DEFAULT_DATASET_URL: &str = "https://archive.ics.uci.edu/ml/machine-learning-databases/00350/default%20of%20credit%20card%20clients.xls";

/// Held-out fraction for evaluation
pub const TEST_FRACTION: f64 = 0.2;

/// Inverse L2 regularization strength for the logistic fit
pub const DEFAULT_INVERSE_REGULARIZATION: f64 = 1.0;

/// Crate version
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
