//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and renders every failure as the
//! `{"status": "error", "message": ...}` envelope. The message is the
//! underlying error text, passed through unchanged.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shaderlab_core::CoreError;
use thiserror::Error;

use crate::dto::StatusMessage;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (missing or unusable input).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (I/O failure, unparseable body).
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) => {
                tracing::warn!(%status, "Rejected request: {msg}");
                msg
            }
            Self::Internal(msg) => {
                tracing::error!(%status, "Request failed: {msg}");
                msg
            }
        };

        (status, Json(StatusMessage::error(message))).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        if err.is_client_error() {
            Self::BadRequest(message)
        } else {
            Self::Internal(message)
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
