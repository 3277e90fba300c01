//! HTTP middleware for request gating and observability.

pub mod gate;
pub mod tracing;
