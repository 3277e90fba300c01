//! Session verification against the auth provider's HTTP endpoint.

use std::time::Duration;

use axum::http::{HeaderMap, header};
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::session::{SessionToken, SessionVerifier, VerifierError};

/// Session payload returned by the provider's session endpoint.
///
/// An unauthenticated session is an empty object, so every field is
/// optional.
#[derive(Debug, Deserialize)]
struct SessionPayload {
    #[serde(default)]
    user: Option<SessionUser>,
    #[serde(default)]
    sub: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl SessionPayload {
    fn subject(self) -> Option<String> {
        if let Some(user) = self.user {
            return user.id.or(user.email);
        }
        self.sub
    }
}

/// Verifier that asks the auth provider whether the request's cookies
/// carry a valid session.
///
/// The request's `Cookie` header is forwarded as-is, so the provider sees
/// the same credential convention it issued. The client carries its own
/// transport timeout; the pipeline additionally bounds the whole call via
/// [`crate::application::services::AuthGate`].
pub struct HttpSessionVerifier {
    client: reqwest::Client,
    session_url: String,
}

impl HttpSessionVerifier {
    /// Builds a verifier for the provider endpoint at `session_url`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(session_url: String, timeout: Duration) -> Result<Self, VerifierError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerifierError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            session_url,
        })
    }
}

#[async_trait]
impl SessionVerifier for HttpSessionVerifier {
    async fn verify(&self, headers: &HeaderMap) -> Result<Option<SessionToken>, VerifierError> {
        let mut request = self.client.get(&self.session_url);

        if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
            request = request.header(header::COOKIE.as_str(), cookies);
        } else {
            // No cookies means no session; skip the round trip.
            return Ok(None);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VerifierError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let payload: SessionPayload = response
            .json()
            .await
            .map_err(|e| VerifierError::Malformed(e.to_string()))?;

        Ok(payload
            .subject()
            .map(|subject| SessionToken { subject }))
    }
}

/// Fallback verifier used when no provider endpoint is configured.
///
/// Treats every request as unauthenticated, keeping protected routes
/// closed rather than open.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenyAllVerifier;

#[async_trait]
impl SessionVerifier for DenyAllVerifier {
    async fn verify(&self, _headers: &HeaderMap) -> Result<Option<SessionToken>, VerifierError> {
        Ok(None)
    }
}
