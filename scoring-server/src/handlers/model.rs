//! Model info handler

use axum::{extract::State, Json};
use credit_scoring_core::Explainer;

use crate::models::ModelInfoResponse;
use crate::AppState;

pub async fn info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        model: state.store.metadata().clone(),
        explain_strategy: state.explainer.strategy(),
        stats: state.store.stats(),
    })
}
