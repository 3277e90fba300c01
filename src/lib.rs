//! # edge-gate
//!
//! An edge request-security gateway built with Axum. Every inbound HTTP
//! request is gated before it reaches any page or API handler.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core types and the store/verifier/clock seams
//! - **Application Layer** ([`application`]) - The pipeline's decision services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, auth provider client
//! - **API Layer** ([`api`]) - The orchestrating middleware and gateway handlers
//!
//! ## Pipeline
//!
//! Rate limiting (fixed window, per client identity) → route classification
//! → session-aware auth gate → CSRF guard for mutating methods, with a
//! constant security header set and request metadata stamped on every
//! outcome:
//!
//! - `429 Too Many Requests` with `Retry-After: 900` on rate-limit denial
//! - `307` redirect to sign-in with the original URL as `callbackUrl`
//! - `403 Invalid CSRF Token` on anti-forgery failure
//! - pass-through otherwise
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the gateway at the auth provider's session endpoint
//! export AUTH_SESSION_URL="https://app.internal/api/auth/session"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Runtime wiring is loaded from environment variables via
//! [`config::Config`]; the security policy itself (route lists, window
//! sizes, header values) is static data in [`policy`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod policy;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::GateDenial;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthGate, CsrfOutcome, CsrfService, RateLimitConfig, RateLimiter,
    };
    pub use crate::domain::{
        Clock, RateDecision, RateLimitStore, RequestContext, RouteClass, SessionToken,
        SessionVerifier, SystemClock, classify, client_identity,
    };
    pub use crate::error::GateDenial;
    pub use crate::infrastructure::auth::{DenyAllVerifier, HttpSessionVerifier};
    pub use crate::infrastructure::store::InMemoryRateLimitStore;
    pub use crate::state::AppState;
}
