//! Error handling for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// An upstream service failed.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE", msg)
            }
        };

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<libstats_core::Error> for AppError {
    fn from(err: libstats_core::Error) -> Self {
        match err {
            libstats_core::Error::InvalidInput(msg) => AppError::BadRequest(msg),
            libstats_core::Error::NotFound(msg) => AppError::NotFound(msg),
            err @ libstats_core::Error::ServiceUnavailable { .. } => {
                warn!(error = %err, "upstream failure");
                AppError::ServiceUnavailable(err.to_string())
            }
        }
    }
}
