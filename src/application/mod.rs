//! Application layer services implementing the pipeline's decisions.
//!
//! Services consume domain traits (store, verifier, clock) and provide a
//! clean API for the orchestrating middleware.
//!
//! # Available Services
//!
//! - [`services::rate_limiter::RateLimiter`] - Fixed-window admission control
//! - [`services::auth_gate::AuthGate`] - Timeout-bounded, fail-closed session checks
//! - [`services::csrf::CsrfService`] - Anti-forgery token issuance and validation

pub mod services;
