//! HTTP layer: the gating middleware and the gateway's own handlers.

pub mod handlers;
pub mod middleware;
