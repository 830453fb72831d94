//! API error types
//!
//! Structured error responses for the HTTP API. Note that validation
//! warnings are NOT errors - a batch with violations still returns 200
//! with `accepted_with_warnings`. Errors here are transport concerns:
//! bad credentials, unparseable bodies, malformed request shapes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API handlers
pub type Result<T> = std::result::Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not valid JSON for the batch schema
    #[error("invalid JSON body")]
    InvalidJson(String),

    /// Authentication required or key unknown
    #[error("invalid or missing API key")]
    Unauthorized,

    /// Request shape violates a field constraint
    #[error("validation error: {field} - {message}")]
    Validation {
        /// Offending request field
        field: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code (machine-readable)
    pub error: &'static str,
    /// Error message (human-readable)
    pub message: String,
    /// Additional detail lines, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            ApiError::InvalidJson(detail) => Some(vec![detail.clone()]),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
            details,
        };

        tracing::warn!(
            error_code = body.error,
            error_message = %body.message,
            status = status.as_u16(),
            "request failed"
        );

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidJson("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::validation("deviceId", "blank").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = ApiError::validation("deviceId", "must not be blank");
        assert!(err.to_string().contains("deviceId"));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
