//! Application error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the access core.
///
/// Parse errors come from the string boundary (headers, paths, config).
/// `Defect` means the compiled-in tables are inconsistent and startup must stop.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    #[error("access table defect: {0}")]
    Defect(String),
}

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("Access denied")]
    Forbidden,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Access(#[from] AccessError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Access(AccessError::Defect(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Access(_) => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::Access(AccessError::Defect(reason)) => {
                tracing::error!(%reason, "access table defect");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
