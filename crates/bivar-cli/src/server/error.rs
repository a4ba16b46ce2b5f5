//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bivar::BivarError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Error from the bivar library.
    Bivar(BivarError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Bivar(e @ BivarError::InvalidColumn(_)) => {
                (StatusCode::NOT_FOUND, "unknown_column", e.to_string())
            }
            ApiError::Bivar(e @ (BivarError::Statistics(_) | BivarError::Json(_))) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string())
            }
            ApiError::Bivar(e) => (StatusCode::BAD_REQUEST, "bivar_error", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<BivarError> for ApiError {
    fn from(err: BivarError) -> Self {
        ApiError::Bivar(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Bivar(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}
