//! axum integration for the antiforgery gate.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::context::{AuthorizeContext, EffectivePolicySet, PolicyKind};
use crate::errors::AntiforgeryError;
use crate::gate::AntiforgeryGate;

/// Middleware enforcing antiforgery validation through an
/// [`AntiforgeryGate`].
///
/// Builds the per-request context, designates the gate as the effective
/// antiforgery policy, and runs it. A terminal result from the gate is
/// returned directly; otherwise the request continues down the stack. A
/// non-validation fault from the validator surfaces as the middleware's
/// error and renders as a 500.
///
/// The effective-policy registry travels in the request extensions: when the
/// layer is attached more than once, the first layer to run designates its
/// gate and the inner layers stand down, so the token is validated once per
/// request.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use axum::{Router, middleware, routing::post};
/// use antiforgery::{AntiforgeryGate, DoubleSubmitValidator, antiforgery_middleware};
///
/// let gate = Arc::new(AntiforgeryGate::new(Arc::new(DoubleSubmitValidator::new())));
///
/// let app: Router = Router::new()
///     .route("/submit", post(submit_handler))
///     .layer(middleware::from_fn_with_state(gate, antiforgery_middleware));
/// ```
pub async fn antiforgery_middleware(
    State(gate): State<Arc<AntiforgeryGate>>,
    request: Request,
    next: Next,
) -> Result<Response, AntiforgeryError> {
    let (mut parts, body) = request.into_parts();

    // First layer to run designates itself; designation is first-wins, so
    // for later layers this is a no-op and their gates stand down.
    let mut policies = parts
        .extensions
        .get::<EffectivePolicySet>()
        .cloned()
        .unwrap_or_default();
    policies.designate(PolicyKind::Antiforgery, gate.id());
    parts.extensions.insert(policies.clone());

    let mut ctx = AuthorizeContext::new(&parts, policies);
    gate.authorize(&mut ctx).await?;

    if let Some(rejection) = ctx.take_result() {
        return Ok(rejection);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
