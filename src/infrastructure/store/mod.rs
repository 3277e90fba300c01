//! Rate-limit store implementations.

pub mod memory;

pub use memory::InMemoryRateLimitStore;
