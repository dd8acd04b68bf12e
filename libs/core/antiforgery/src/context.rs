//! Request-scoped types shared between the pipeline and its authorization
//! filters: the per-request context with its terminal-result slot, and the
//! effective-policy registry that suppresses duplicate enforcement.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::response::Response;
use http::request::Parts;

/// Policy capabilities that must be enforced by at most one filter instance
/// per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PolicyKind {
    /// CSRF ("antiforgery") token enforcement.
    Antiforgery,
}

/// Process-unique identity of a filter instance.
///
/// Minted once per instance at construction; the effective-policy registry
/// compares these instead of relying on marker traits or pointer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(u64);

impl FilterId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-request registry of which filter instance is authoritative for each
/// policy kind.
///
/// When the same policy is attached more than once (e.g. by a global layer
/// and again by an explicit route layer), only the designated instance
/// enforces it; the others stand down. The registry is populated once during
/// pipeline assembly and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct EffectivePolicySet {
    designated: HashMap<PolicyKind, FilterId>,
}

impl EffectivePolicySet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as the effective instance for `kind`.
    ///
    /// The first designation for a kind wins; later ones are ignored.
    pub fn designate(&mut self, kind: PolicyKind, id: FilterId) {
        self.designated.entry(kind).or_insert(id);
    }

    /// Whether `id` is the effective instance for `kind`.
    ///
    /// With no designation recorded for `kind` the answer is true, so a
    /// single filter used outside an assembled pipeline still enforces.
    pub fn is_effective(&self, kind: PolicyKind, id: FilterId) -> bool {
        match self.designated.get(&kind) {
            Some(designated) => *designated == id,
            None => true,
        }
    }
}

/// Request-scoped context handed to authorization filters.
///
/// Created by the pipeline before its filters run and discarded at request
/// completion. Filters communicate their outcome solely through the terminal
/// result slot: once a filter sets it, the pipeline must return that response
/// instead of continuing to the handler.
pub struct AuthorizeContext<'a> {
    parts: &'a Parts,
    policies: EffectivePolicySet,
    result: Option<Response>,
}

impl<'a> AuthorizeContext<'a> {
    /// Create a context for one request.
    pub fn new(parts: &'a Parts, policies: EffectivePolicySet) -> Self {
        Self {
            parts,
            policies,
            result: None,
        }
    }

    /// The in-flight request: method, URI, headers, extensions.
    pub fn request(&self) -> &Parts {
        self.parts
    }

    /// Whether the filter identified by `id` should enforce `kind` for this
    /// request.
    pub fn is_effective_policy(&self, kind: PolicyKind, id: FilterId) -> bool {
        self.policies.is_effective(kind, id)
    }

    /// The terminal result, if any filter has set one.
    pub fn result(&self) -> Option<&Response> {
        self.result.as_ref()
    }

    /// Set the terminal result, halting normal processing.
    ///
    /// At most one filter sets this per request; the pipeline stops at the
    /// first terminal result, so a second write never takes effect.
    pub fn set_result(&mut self, response: Response) {
        self.result = Some(response);
    }

    /// Take the terminal result out of the context, leaving it unset.
    pub fn take_result(&mut self) -> Option<Response> {
        self.result.take()
    }
}
