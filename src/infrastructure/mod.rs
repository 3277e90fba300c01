//! Infrastructure layer: concrete stores and external collaborators.
//!
//! - [`store`] - Rate-limit window storage
//! - [`auth`] - Session verifiers (auth provider client and deny-all fallback)

pub mod auth;
pub mod store;
