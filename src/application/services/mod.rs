//! Decision services for the security pipeline.

pub mod auth_gate;
pub mod csrf;
pub mod rate_limiter;

pub use auth_gate::AuthGate;
pub use csrf::{CsrfOutcome, CsrfService};
pub use rate_limiter::{RateLimitConfig, RateLimiter};
