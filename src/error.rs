//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Storage and remote failures are converted
//! with `From` so they propagate with `?` unchanged up to the handler, where
//! [`IntoResponse`] turns them into a status code and a JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Organization not found", "details": { "id": 999 } } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload rendered inside the `error` envelope.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request body or path parameter.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A sibling service could not be reached, answered with an error status,
    /// or returned a body that does not decode.
    #[error("{message}")]
    RemoteUnavailable { message: String, details: Value },

    /// A sibling service did not answer within the configured timeout.
    #[error("{message}")]
    RemoteTimeout { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn remote_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::RemoteUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn remote_timeout(message: impl Into<String>, details: Value) -> Self {
        Self::RemoteTimeout {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::RemoteUnavailable { .. } => (StatusCode::BAD_GATEWAY, "remote_unavailable"),
            AppError::RemoteTimeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "remote_timeout"),
            AppError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "Request failed");
        }

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::RemoteUnavailable { message, details }
            | AppError::RemoteTimeout { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string());

        if e.is_timeout() {
            AppError::remote_timeout("Remote service timed out", json!({ "url": url }))
        } else if e.is_connect() {
            AppError::remote_unavailable(
                "Failed to connect to remote service",
                json!({ "url": url }),
            )
        } else if e.is_decode() {
            AppError::remote_unavailable(
                "Invalid response from remote service",
                json!({ "url": url, "reason": e.to_string() }),
            )
        } else {
            AppError::remote_unavailable(
                "Remote service request failed",
                json!({ "url": url, "reason": e.to_string() }),
            )
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
