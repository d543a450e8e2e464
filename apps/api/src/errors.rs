#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::summaries::pipeline::SummarizeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User not authenticated")]
    Unauthorized,

    #[error("Upload limit reached ({used}/{limit})")]
    QuotaExceeded { used: i64, limit: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "User not authenticated".to_string(),
            ),
            AppError::QuotaExceeded { used, limit } => {
                tracing::info!("Upload rejected: quota reached ({used}/{limit})");
                (
                    StatusCode::FORBIDDEN,
                    "UPLOAD_LIMIT_REACHED",
                    "You have reached your upload limit. Upgrade to Pro for unlimited uploads."
                        .to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Extract(e) => {
                tracing::error!("Extraction error: {e}");
                let status = match e {
                    ExtractError::Fetch(_) | ExtractError::Status(_) => StatusCode::BAD_GATEWAY,
                    ExtractError::Decode(_) | ExtractError::EmptyContent => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                };
                (status, "EXTRACTION_ERROR", e.to_string())
            }
            AppError::Summarize(e) => {
                tracing::error!("Summarization error: {e}");
                let status = match e {
                    SummarizeError::AllProvidersUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                    SummarizeError::Generation | SummarizeError::EmptyResult => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, "SUMMARY_ERROR", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
