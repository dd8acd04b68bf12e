//! Type-safe error codes for antiforgery responses.
//!
//! Each error code combines:
//! - String representation for client consumption (e.g., "CSRF_TOKEN_INVALID")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use antiforgery::errors::ErrorCode;
//!
//! let code = ErrorCode::CsrfTokenInvalid;
//! assert_eq!(code.as_str(), "CSRF_TOKEN_INVALID");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for antiforgery responses.
///
/// Combines string identifiers (for clients), integer codes (for
/// monitoring), and default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Antiforgery token missing from the request, or it failed validation
    CsrfTokenInvalid,

    // Server errors (5000-5999)
    /// The antiforgery validator itself failed
    InternalError,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CsrfTokenInvalid => "CSRF_TOKEN_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            Self::CsrfTokenInvalid => 1001,
            Self::InternalError => 5000,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// The `CsrfTokenInvalid` message stays generic: the specific failure
    /// reason goes to the log, not to the client.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::CsrfTokenInvalid => "Antiforgery token missing or invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
