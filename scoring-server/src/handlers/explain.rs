//! Explanation handler
//!
//! Attribution runs on the blocking pool. A request that outlives
//! `explain_timeout` gets a 503; the worker finishes in the background
//! and its result is dropped.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use credit_scoring_core::Explanation;
use validator::Validate;

use crate::models::FeaturesRequest;
use crate::{AppError, AppResult, AppState};

/// Per-feature contributions for one applicant
pub async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<FeaturesRequest>, JsonRejection>,
) -> AppResult<Json<Explanation>> {
    let Json(req) = payload?;
    req.validate()?;

    let store = state.store.clone();
    let explainer = state.explainer.clone();
    let task = tokio::task::spawn_blocking(move || {
        credit_scoring_core::explain(&store, explainer.as_ref(), &req.features)
    });

    let explanation = tokio::time::timeout(state.config.explain_timeout, task)
        .await
        .map_err(|_| AppError::Timeout)?
        .map_err(|e| AppError::InternalError(format!("explain task failed: {}", e)))??;

    Ok(Json(explanation))
}
