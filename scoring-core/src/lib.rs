//! Credit Scoring Core
//!
//! Inference glue for the credit default classifier:
//! model store, prediction service and explanation service,
//! plus the offline training pipeline that produces the model artifact.
//!
//! ## Layout
//! - `logic/features/` - Feature layout (23 UCI columns, versioned)
//! - `logic/model/` - Pipeline, model store, prediction
//! - `logic/explain/` - Per-feature attribution (linear + sampling)
//! - `logic/dataset/` - Training data loading and splitting
//! - `logic/training/` - Scaler + logistic regression fitting

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{ScoringError, ScoringResult};
pub use logic::explain::{
    build_explainer, explain, Contribution, ExplainStrategy, Explainer, Explanation, LinearExplainer,
    SamplingExplainer,
};
pub use logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
pub use logic::model::{predict, ModelArtifact, ModelStore, Pipeline, Prediction};
