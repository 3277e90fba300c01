//! Domain layer containing the gateway's core types and seams.
//!
//! # Architecture
//!
//! - [`identity`] - Per-client rate-limiting keys
//! - [`route_class`] - Path sensitivity classification
//! - [`rate_limit`] - Fixed-window counters and the store trait
//! - [`session`] - Session token model and the verifier trait
//! - [`clock`] - Injectable time source
//! - [`context`] - Per-request correlation metadata
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store/verifier traits define contracts implemented by the infrastructure layer
//! - Decision logic is encapsulated in services (see [`crate::application::services`])

pub mod clock;
pub mod context;
pub mod identity;
pub mod rate_limit;
pub mod route_class;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use context::RequestContext;
pub use identity::client_identity;
pub use rate_limit::{RateDecision, RateLimitStore, RateWindow, RecordOutcome};
pub use route_class::{RouteClass, classify};
pub use session::{SessionToken, SessionVerifier, VerifierError};
