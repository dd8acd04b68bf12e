use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use super::codes::ErrorCode;

/// Standard error response structure.
///
/// Returned for all error responses, providing consistent error information
/// to clients:
/// - `code`: Integer error code for logging/monitoring (e.g., 1001)
/// - `error`: Machine-readable error identifier (e.g., "CSRF_TOKEN_INVALID")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "CSRF_TOKEN_INVALID",
///   "message": "Antiforgery token missing or invalid",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use antiforgery::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Antiforgery token missing or invalid".to_string(),
///     ErrorCode::CsrfTokenInvalid,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

/// The terminal result written for a request that failed antiforgery
/// validation: 400 Bad Request with the standard error body and a generic
/// message.
pub fn validation_failed_response() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorCode::CsrfTokenInvalid.default_message().to_string(),
        ErrorCode::CsrfTokenInvalid,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_response_is_bad_request() {
        let response = validation_failed_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_body_shape() {
        let body = ErrorResponse {
            code: ErrorCode::CsrfTokenInvalid.code(),
            error: ErrorCode::CsrfTokenInvalid.as_str().to_string(),
            message: "Antiforgery token missing or invalid".to_string(),
            details: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 1001);
        assert_eq!(json["error"], "CSRF_TOKEN_INVALID");
        // `details` is omitted when empty
        assert!(json.get("details").is_none());
    }
}
