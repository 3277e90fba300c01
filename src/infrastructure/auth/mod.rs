//! Session verifier implementations.

pub mod http_verifier;

pub use http_verifier::{DenyAllVerifier, HttpSessionVerifier};
