//! Classroom service error types.
//!
//! All errors map to HTTP status codes via the `IntoResponse` impl.
//! Signing errors return a generic message to the client; the actual
//! cause is logged server-side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Classroom service error type.
///
/// Maps to HTTP status codes:
/// - Validation: 400 Bad Request
/// - Configuration, Signing: 500 Internal Server Error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Signing credentials are not configured: {0}")]
    Configuration(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Configuration(_) | ApiError::Signing(_) => 500,
        }
    }
}

/// Wire shape for every error response: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Configuration(detail) => {
                // Log actual detail server-side, return generic message to client
                tracing::error!(target: "cr.token", detail = %detail, "Token signing is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "token signing is not configured".to_string(),
                )
            }
            ApiError::Signing(detail) => {
                tracing::error!(target: "cr.token", detail = %detail, "Token signing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to mint access token".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
