#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Router, middleware};
use chrono::{DateTime, TimeZone, Utc};

use edge_gate::api::handlers::health_handler;
use edge_gate::api::middleware::gate;
use edge_gate::application::services::{AuthGate, CsrfService, RateLimitConfig, RateLimiter};
use edge_gate::domain::clock::Clock;
use edge_gate::domain::session::{SessionToken, SessionVerifier, VerifierError};
use edge_gate::infrastructure::store::InMemoryRateLimitStore;
use edge_gate::state::AppState;

/// Clock whose time only moves when a test advances it.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        )))
    }

    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.0.lock().unwrap();
        *now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Verifier that reports the same session for every request.
pub struct StaticVerifier(Option<SessionToken>);

#[async_trait]
impl SessionVerifier for StaticVerifier {
    async fn verify(&self, _headers: &HeaderMap) -> Result<Option<SessionToken>, VerifierError> {
        Ok(self.0.clone())
    }
}

/// Verifier behaving like a signed-in user.
pub fn authenticated() -> Arc<dyn SessionVerifier> {
    Arc::new(StaticVerifier(Some(SessionToken {
        subject: "user-1".to_string(),
    })))
}

/// Verifier behaving like anonymous traffic.
pub fn anonymous() -> Arc<dyn SessionVerifier> {
    Arc::new(StaticVerifier(None))
}

/// Builds pipeline state over a fresh in-memory store and manual clock.
pub fn test_state(verifier: Arc<dyn SessionVerifier>) -> (AppState, ManualClock) {
    test_state_with_config(verifier, RateLimitConfig::default())
}

pub fn test_state_with_config(
    verifier: Arc<dyn SessionVerifier>,
    config: RateLimitConfig,
) -> (AppState, ManualClock) {
    let clock = ManualClock::new();
    let rate_limiter = RateLimiter::new(
        Arc::new(InMemoryRateLimitStore::new()),
        Arc::new(clock.clone()),
        config,
    );
    let state = AppState::new(
        rate_limiter,
        AuthGate::new(verifier, Duration::from_millis(500)),
        CsrfService::new(false),
    );
    (state, clock)
}

async fn downstream_handler() -> &'static str {
    "downstream"
}

/// Router with the full pipeline wrapped around a stand-in application.
pub fn gated_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(downstream_handler)
        .layer(middleware::from_fn_with_state(state, gate::layer))
}
