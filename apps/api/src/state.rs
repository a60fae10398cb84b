use std::sync::Arc;

use crate::ats_client::AtsApi;
use crate::config::PlatformBindings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Outbound ATS transport. Production: `LoxoClient`. Tests swap in a
    /// recording mock to assert call counts and captured payloads.
    pub ats: Arc<dyn AtsApi>,
    /// Platform-provided secret bindings, combined with the local environment
    /// fallback on every request.
    pub bindings: PlatformBindings,
}
