//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Gateway liveness (gated like any other request)
//! - everything else - Pass-through stand-in for the fronted application
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security gate** - Rate limit, route classification, auth, CSRF,
//!   headers, request stamping
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, passthrough_handler};
use crate::api::middleware::{gate, tracing};
use crate::state::AppState;

/// Constructs the application router with the full security pipeline.
///
/// The gate wraps every route, including `/health` and the fallback, so
/// no request reaches a handler without passing the pipeline.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .fallback(passthrough_handler)
        .layer(middleware::from_fn_with_state(state, gate::layer))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
