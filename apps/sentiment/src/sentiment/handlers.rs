//! Axum route handlers for the Sentiment API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::sentiment::classify::{analyze, validate_text, SentimentResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// POST /api/v1/analyze
///
/// Validates the text length before the scorer is touched, then returns the
/// label, rounded compound score and pos/neu/neg distribution.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<SentimentResponse>, AppError> {
    let Json(request) = payload?;
    validate_text(&request.text)?;

    let response = analyze(state.scorer.as_ref(), &request.text);
    debug!(label = ?response.label, score = response.score, "Analyzed text");

    Ok(Json(response))
}
