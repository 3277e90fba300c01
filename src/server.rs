//! HTTP server initialization and runtime setup.
//!
//! Wires the verifier, store, and services into shared state and runs the
//! Axum server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{AuthGate, CsrfService, RateLimitConfig, RateLimiter};
use crate::config::Config;
use crate::domain::session::SessionVerifier;
use crate::domain::{Clock, SystemClock};
use crate::infrastructure::auth::{DenyAllVerifier, HttpSessionVerifier};
use crate::infrastructure::store::InMemoryRateLimitStore;
use crate::routes::app_router;
use crate::state::AppState;

/// Builds the shared pipeline state from configuration.
///
/// When no auth provider endpoint is configured (or its client cannot be
/// built) the verifier falls back to deny-all: protected routes stay
/// closed rather than open.
pub fn build_state(config: &Config) -> AppState {
    let timeout = Duration::from_millis(config.auth_verify_timeout_ms);

    let verifier: Arc<dyn SessionVerifier> = if let Some(url) = &config.auth_session_url {
        match HttpSessionVerifier::new(url.clone(), timeout) {
            Ok(verifier) => {
                tracing::info!("Session verifier enabled ({url})");
                Arc::new(verifier)
            }
            Err(e) => {
                tracing::warn!("Failed to build session verifier: {e}. Using deny-all.");
                Arc::new(DenyAllVerifier)
            }
        }
    } else {
        tracing::warn!("No AUTH_SESSION_URL configured. Using deny-all verifier.");
        Arc::new(DenyAllVerifier)
    };

    let store = Arc::new(InMemoryRateLimitStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let rate_limiter = RateLimiter::new(
        store,
        clock,
        RateLimitConfig {
            exact_retry_after: config.rate_limit_exact_retry_after,
            ..RateLimitConfig::default()
        },
    );

    AppState::new(
        rate_limiter,
        AuthGate::new(verifier, timeout),
        CsrfService::new(config.production),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the server bind fails or a runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
