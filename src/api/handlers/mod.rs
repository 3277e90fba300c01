//! HTTP handlers served by the gateway itself.

pub mod health;
pub mod passthrough;

pub use health::health_handler;
pub use passthrough::passthrough_handler;
