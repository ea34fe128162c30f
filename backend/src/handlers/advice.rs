//! HTTP handler for the advisory chat endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{AdviceRequest, AdvisoryResponse};
use crate::AppState;

/// Answer a farmer's question using their stored profile.
///
/// Only an undecodable body is rejected here; any email goes to the lookup.
pub async fn ask_advisor(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> AppResult<Json<AdvisoryResponse>> {
    let Json(request) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;

    let response = state.advice.advise(&request).await?;
    Ok(Json(response))
}
