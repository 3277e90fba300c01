//! Session verification seam.
//!
//! Token issuance and cryptography belong to the external auth provider;
//! this layer only asks "does this request carry a valid session?".

use axum::http::HeaderMap;
use async_trait::async_trait;

/// An authenticated session, as reported by the auth provider.
///
/// Opaque to the gateway beyond the subject identifier; nothing here is
/// inspected for authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    /// Stable identifier of the authenticated principal.
    pub subject: String,
}

/// Errors from the session verifier collaborator.
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("session verifier transport failure: {0}")]
    Transport(String),

    #[error("session verifier returned a malformed payload: {0}")]
    Malformed(String),
}

/// Verifies the session credential carried by a request.
///
/// Implementations must accept the same cookie/header convention as the
/// deployed auth provider. `Ok(None)` means "no valid session", which is
/// the expected outcome for anonymous traffic; `Err` is reserved for
/// infrastructure failures and is treated as unauthenticated by the
/// pipeline (fail-closed).
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::HttpSessionVerifier`] - queries the
///   auth provider's session endpoint
/// - [`crate::infrastructure::auth::DenyAllVerifier`] - fallback when no
///   provider is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Resolves the request's session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError`] on transport or payload failures.
    async fn verify(&self, headers: &HeaderMap) -> Result<Option<SessionToken>, VerifierError>;
}
