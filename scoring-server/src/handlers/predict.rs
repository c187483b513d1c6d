//! Prediction handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::models::{FeaturesRequest, PredictResponse};
use crate::{AppResult, AppState};

/// Score one applicant
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<FeaturesRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let prediction = credit_scoring_core::predict(&state.store, &req.features)?;

    Ok(Json(prediction.into()))
}
