//! The antiforgery validator seam and the bundled double-submit validator.

use async_trait::async_trait;
use http::HeaderName;
use http::request::Parts;
use subtle::ConstantTimeEq;

use crate::errors::AntiforgeryError;

const DEFAULT_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");
const DEFAULT_COOKIE: &str = "csrf_token";

/// Validates the antiforgery token of one request.
///
/// Completes silently on success. A rejected token is reported as
/// [`AntiforgeryError::Validation`] with a human-readable reason; any other
/// fault (backing store down, timeout) as [`AntiforgeryError::Internal`].
#[async_trait]
pub trait Antiforgery: Send + Sync {
    /// Validate the current request.
    async fn validate_request(&self, request: &Parts) -> Result<(), AntiforgeryError>;
}

/// Double-submit cookie validator.
///
/// Compares the token presented in a request header against the token in a
/// request cookie; both are set by the client-rendered page. Nothing is
/// looked up server-side, so this validator never fails with `Internal`.
///
/// Defaults: header `x-csrf-token`, cookie `csrf_token`.
#[derive(Debug, Clone)]
pub struct DoubleSubmitValidator {
    header_name: HeaderName,
    cookie_name: String,
}

impl DoubleSubmitValidator {
    /// Create a validator with the default header and cookie names.
    pub fn new() -> Self {
        Self {
            header_name: DEFAULT_HEADER,
            cookie_name: DEFAULT_COOKIE.to_string(),
        }
    }

    /// Use a custom header name.
    pub fn with_header_name(mut self, name: HeaderName) -> Self {
        self.header_name = name;
        self
    }

    /// Use a custom cookie name.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    fn cookie_token<'a>(&self, request: &'a Parts) -> Option<&'a str> {
        request
            .headers
            .get(http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|cookies| {
                cookies.split(';').find_map(|cookie| {
                    let (name, value) = cookie.trim().split_once('=')?;
                    (name == self.cookie_name).then_some(value)
                })
            })
    }
}

impl Default for DoubleSubmitValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Antiforgery for DoubleSubmitValidator {
    async fn validate_request(&self, request: &Parts) -> Result<(), AntiforgeryError> {
        let cookie = match self.cookie_token(request) {
            Some(token) => token,
            None => return Err(AntiforgeryError::validation("antiforgery cookie is missing")),
        };

        let header = match request
            .headers
            .get(&self.header_name)
            .and_then(|v| v.to_str().ok())
        {
            Some(token) => token,
            None => return Err(AntiforgeryError::validation("antiforgery header is missing")),
        };

        // Constant-time comparison so the token can't leak through timing.
        let matches: bool = cookie.as_bytes().ct_eq(header.as_bytes()).into();
        if !matches {
            return Err(AntiforgeryError::validation(
                "antiforgery token does not match the cookie",
            ));
        }

        Ok(())
    }
}
