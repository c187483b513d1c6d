//! Model Module - pipeline, model store and prediction service
//!
//! The store owns the only model in the process. Prediction and
//! explanation borrow it read-only.

pub mod artifact;
pub mod inference;
pub mod pipeline;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;


pub use artifact::{LogisticParams, ModelArtifact, ScalerParams, TrainingMetrics};
pub use inference::{predict, Prediction};
pub use pipeline::{sigmoid, Pipeline};
pub use store::{InferenceStats, ModelMetadata, ModelStore};
