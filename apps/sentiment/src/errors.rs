use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Rendered as `{"detail": "..."}`. Scoring itself cannot fail, so request
/// validation is the only error path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}
