//! # Antiforgery
//!
//! CSRF ("antiforgery") enforcement for Axum services: an authorization gate
//! that validates the antiforgery token of incoming requests and rejects the
//! request before it reaches its handler when the token is missing or
//! invalid.
//!
//! ## Modules
//!
//! - **[`gate`]**: The [`AntiforgeryGate`] filter and applicability predicates
//! - **[`validator`]**: The [`Antiforgery`] validator seam and the bundled
//!   [`DoubleSubmitValidator`]
//! - **[`context`]**: Request-scoped context, terminal-result slot, and the
//!   effective-policy registry
//! - **[`middleware`]**: Axum middleware wiring the gate into a router
//! - **[`errors`]**: Structured error responses with error codes
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::{Router, middleware, routing::post};
//! use antiforgery::{
//!     AntiforgeryGate, DoubleSubmitValidator, antiforgery_middleware, skip_safe_methods,
//! };
//!
//! let gate = Arc::new(
//!     AntiforgeryGate::new(Arc::new(DoubleSubmitValidator::new()))
//!         .with_should_validate(skip_safe_methods()),
//! );
//!
//! let app: Router = Router::new()
//!     .route("/submit", post(submit_handler))
//!     .layer(middleware::from_fn_with_state(gate, antiforgery_middleware));
//! ```

// Domain modules
pub mod context;
pub mod errors;
pub mod gate;
pub mod middleware;
pub mod validator;

// Re-export context types
pub use context::{AuthorizeContext, EffectivePolicySet, FilterId, PolicyKind};

// Re-export the gate
pub use gate::{AntiforgeryGate, ShouldValidate, skip_safe_methods};

// Re-export the validator seam
pub use validator::{Antiforgery, DoubleSubmitValidator};

// Re-export middleware
pub use middleware::antiforgery_middleware;

// Re-export error types
pub use errors::{AntiforgeryError, ErrorCode, ErrorResponse, error_response};
