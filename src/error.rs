use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::generation::GenerationError;

/// One violated field of a request body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub path: Vec<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.into(),
        }
    }
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request data")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(&'static str),
}

impl AppError {
    pub fn persistence(message: &'static str, source: anyhow::Error) -> Self {
        Self::Persistence { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid request data", "errors": errors })),
            )
                .into_response(),
            AppError::Generation(err) => {
                let provider_status = match &err {
                    GenerationError::Api { status, .. } => Some(*status),
                    _ => None,
                };
                tracing::error!(error = %err, ?provider_status, "content generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": err.to_string() })),
                )
                    .into_response()
            }
            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response()
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthorized" })),
            )
                .into_response(),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
        }
    }
}
