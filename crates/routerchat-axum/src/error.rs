//! Axum-specific error types and mappings.
//!
//! Every handler failure becomes a JSON envelope with `success: false`, an
//! `error` message, and the HTTP status, so frontend code has one shape to
//! check regardless of what failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use routerchat_openrouter::OpenRouterError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream API rejected or failed the request. The message is
    /// already user-facing; the status stays 400 so frontend error handling
    /// treats it like any other request failure.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) | Self::Upstream(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            success: false,
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<OpenRouterError> for HttpError {
    fn from(err: OpenRouterError) -> Self {
        if err.is_configuration() {
            Self::Internal(err.to_string())
        } else {
            Self::Upstream(err.user_message())
        }
    }
}
