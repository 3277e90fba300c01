use crate::application::services::{AuthGate, CsrfService, RateLimiter};

/// Shared state injected into the pipeline middleware.
///
/// Each service is cheap to clone (trait objects behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: RateLimiter,
    pub auth_gate: AuthGate,
    pub csrf: CsrfService,
}

impl AppState {
    pub fn new(rate_limiter: RateLimiter, auth_gate: AuthGate, csrf: CsrfService) -> Self {
        Self {
            rate_limiter,
            auth_gate,
            csrf,
        }
    }
}
