pub mod codes;
pub mod responses;

pub use codes::ErrorCode;
pub use responses::{ErrorResponse, error_response, validation_failed_response};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by the antiforgery validator seam.
///
/// `Validation` is the distinguishable "token rejected" signal, carrying a
/// human-readable reason; the gate absorbs it into a terminal 400 response.
/// Anything else is `Internal` and propagates untouched to the pipeline's
/// own fault handling, since its meaning is unknown to the gate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AntiforgeryError {
    #[error("antiforgery validation failed: {reason}")]
    Validation { reason: String },

    #[error("antiforgery validator error: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AntiforgeryError {
    /// A validation failure with the given reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// A non-validation fault from the validator (backing store down,
    /// timeout, etc.).
    pub fn internal(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Internal(source.into())
    }

    /// Whether this error is a validation failure rather than a fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl IntoResponse for AntiforgeryError {
    fn into_response(self) -> Response {
        match self {
            // The gate logs the failure when it rejects a request, so this
            // conversion stays quiet: one rejection, one warning.
            AntiforgeryError::Validation { .. } => validation_failed_response(),
            AntiforgeryError::Internal(e) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Antiforgery validator error: {:?}",
                    e
                );
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    ErrorCode::InternalError,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_reason() {
        let err = AntiforgeryError::validation("token mismatch");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "antiforgery validation failed: token mismatch"
        );
    }

    #[test]
    fn test_internal_error_is_not_validation() {
        let err = AntiforgeryError::internal(std::io::Error::other("store down"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error_renders_as_bad_request() {
        let response = AntiforgeryError::validation("missing header").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_renders_as_server_error() {
        let response =
            AntiforgeryError::internal(std::io::Error::other("store down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
