//! The authorization filter that gates request continuation on CSRF-token
//! validity.

use std::sync::Arc;

use crate::context::{AuthorizeContext, FilterId, PolicyKind};
use crate::errors::{AntiforgeryError, ErrorCode, validation_failed_response};
use crate::validator::Antiforgery;

/// Predicate deciding whether a request needs antiforgery validation.
///
/// Injected into the gate as a value rather than overridden by subclassing,
/// so callers compose exemption policy instead of inheriting it.
pub type ShouldValidate = Arc<dyn Fn(&AuthorizeContext<'_>) -> bool + Send + Sync>;

/// Authorization filter enforcing antiforgery token validation.
///
/// Invoked once per eligible request by the surrounding pipeline. The gate
/// decides whether validation applies, delegates the check to its
/// [`Antiforgery`] validator, and converts a validation failure into a
/// terminal 400 result on the request context. It holds no per-request
/// state; one instance serves concurrent requests.
pub struct AntiforgeryGate {
    id: FilterId,
    antiforgery: Arc<dyn Antiforgery>,
    should_validate: ShouldValidate,
}

impl AntiforgeryGate {
    /// Create a gate that validates every request with `antiforgery`.
    pub fn new(antiforgery: Arc<dyn Antiforgery>) -> Self {
        Self {
            id: FilterId::next(),
            antiforgery,
            should_validate: Arc::new(|_: &AuthorizeContext<'_>| true),
        }
    }

    /// Replace the applicability predicate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::sync::Arc;
    /// use antiforgery::{AntiforgeryGate, DoubleSubmitValidator, skip_safe_methods};
    ///
    /// let gate = AntiforgeryGate::new(Arc::new(DoubleSubmitValidator::new()))
    ///     .with_should_validate(skip_safe_methods());
    /// ```
    pub fn with_should_validate(mut self, should_validate: ShouldValidate) -> Self {
        self.should_validate = should_validate;
        self
    }

    /// Identity of this instance in the effective-policy registry.
    pub fn id(&self) -> FilterId {
        self.id
    }

    /// Run the antiforgery check for one request.
    ///
    /// Skips without side effects when this instance is not the effective
    /// antiforgery policy for the request, or when the predicate exempts the
    /// request. A validation failure is logged at warning level and written
    /// to the context's terminal-result slot; any other validator fault
    /// propagates unmodified.
    pub async fn authorize(&self, ctx: &mut AuthorizeContext<'_>) -> Result<(), AntiforgeryError> {
        if !ctx.is_effective_policy(PolicyKind::Antiforgery, self.id) {
            tracing::trace!(
                policy = ?PolicyKind::Antiforgery,
                "Skipping enforcement, another instance is the effective policy"
            );
            return Ok(());
        }

        if !(self.should_validate)(ctx) {
            return Ok(());
        }

        match self.antiforgery.validate_request(ctx.request()).await {
            Ok(()) => Ok(()),
            Err(AntiforgeryError::Validation { reason }) => {
                tracing::warn!(
                    error_code = ErrorCode::CsrfTokenInvalid.code(),
                    "Antiforgery validation failed: {}",
                    reason
                );
                ctx.set_result(validation_failed_response());
                Ok(())
            }
            Err(other) => Err(other),
        }
    }
}

/// Predicate that exempts safe methods (GET, HEAD, OPTIONS, TRACE) from
/// validation, leaving state-changing methods enforced.
pub fn skip_safe_methods() -> ShouldValidate {
    Arc::new(|ctx: &AuthorizeContext<'_>| !ctx.request().method.is_safe())
}
