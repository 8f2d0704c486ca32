use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::aggregate::AggregateError;
use crate::llm_client::extract::ExtractError;
use crate::llm_client::LlmError;
use crate::publish::report::ReportError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Clients only ever see two failure shapes: a 400 with the validation
/// message, or the opaque 500 body `{"error": "Internal Server Error"}`.
/// The underlying cause is logged server-side only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed completion: {0}")]
    Malformed(#[from] ExtractError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AggregateError> for AppError {
    fn from(e: AggregateError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => {
                let body = Json(json!({ "error": msg }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                internal_server_error()
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                internal_server_error()
            }
            AppError::Malformed(e) => {
                tracing::error!("Malformed LLM output: {e}");
                internal_server_error()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> Response {
    let body = Json(json!({ "error": "Internal Server Error" }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
