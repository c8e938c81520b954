//! Axum route handlers for the Tailoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::prompts::{build_tailor_prompt, TAILOR_SYSTEM};

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TailorResponse {
    pub tailored_resume: String,
}

/// POST /tailor
///
/// Sends the resume and job description to the model and returns the first
/// generated message unmodified. Any provider failure becomes a 500 with the
/// error text in `detail`.
pub async fn handle_tailor(
    State(state): State<AppState>,
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let Json(request) = payload?;

    let prompt = build_tailor_prompt(&request.job_description, &request.resume_text);
    let tailored_resume = state.llm.complete(TAILOR_SYSTEM, &prompt).await?;

    debug!("Tailored resume: {} chars", tailored_resume.chars().count());

    Ok(Json(TailorResponse { tailored_resume }))
}
