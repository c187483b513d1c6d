//! Loaded model description

use credit_scoring_core::logic::model::{InferenceStats, ModelMetadata};
use credit_scoring_core::ExplainStrategy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfoResponse {
    pub model: ModelMetadata,
    pub explain_strategy: ExplainStrategy,
    pub stats: InferenceStats,
}
