//! Session-aware auth gate.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderMap;
use url::form_urlencoded;

use crate::domain::session::{SessionToken, SessionVerifier};
use crate::policy;

/// Gate consulting the external session verifier, fail-closed.
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<dyn SessionVerifier>,
    timeout: Duration,
}

impl AuthGate {
    /// Creates a gate over `verifier`, bounding every call by `timeout`.
    pub fn new(verifier: Arc<dyn SessionVerifier>, timeout: Duration) -> Self {
        Self { verifier, timeout }
    }

    /// Resolves the request's session token.
    ///
    /// Fail-closed: a verifier error or timeout is logged and treated as
    /// "no session". An unreadable token must never grant access, and a
    /// hung verifier must never block the request forever.
    pub async fn verify(&self, headers: &HeaderMap) -> Option<SessionToken> {
        match tokio::time::timeout(self.timeout, self.verifier.verify(headers)).await {
            Ok(Ok(token)) => token,
            Ok(Err(e)) => {
                tracing::warn!("session verification failed, treating as unauthenticated: {e}");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "session verifier timed out, treating as unauthenticated"
                );
                None
            }
        }
    }
}

/// Builds the sign-in redirect target for an unauthenticated request.
///
/// The original absolute URL rides along as `callbackUrl` so the user
/// lands back on their intended destination after signing in.
pub fn sign_in_redirect(original_url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("callbackUrl", original_url)
        .finish();
    format!("{}?{}", policy::SIGN_IN_PATH, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{MockSessionVerifier, VerifierError};

    fn gate(verifier: MockSessionVerifier) -> AuthGate {
        AuthGate::new(Arc::new(verifier), Duration::from_millis(50))
    }

    #[tokio::test]
    async fn test_verify_passes_through_token() {
        let mut verifier = MockSessionVerifier::new();
        verifier.expect_verify().returning(|_| {
            Ok(Some(SessionToken {
                subject: "user-1".to_string(),
            }))
        });

        let token = gate(verifier).verify(&HeaderMap::new()).await;

        assert_eq!(token.map(|t| t.subject), Some("user-1".to_string()));
    }

    #[tokio::test]
    async fn test_verifier_error_is_unauthenticated() {
        let mut verifier = MockSessionVerifier::new();
        verifier
            .expect_verify()
            .returning(|_| Err(VerifierError::Transport("boom".to_string())));

        assert!(gate(verifier).verify(&HeaderMap::new()).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_verifier_hang_is_bounded_and_unauthenticated() {
        struct HangingVerifier;

        #[async_trait::async_trait]
        impl SessionVerifier for HangingVerifier {
            async fn verify(
                &self,
                _headers: &HeaderMap,
            ) -> Result<Option<SessionToken>, VerifierError> {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(None)
            }
        }

        let gate = AuthGate::new(Arc::new(HangingVerifier), Duration::from_millis(50));

        assert!(gate.verify(&HeaderMap::new()).await.is_none());
    }

    #[test]
    fn test_sign_in_redirect_percent_encodes_callback() {
        let target = sign_in_redirect("https://example.com/dashboard");

        assert_eq!(
            target,
            "/auth/signin?callbackUrl=https%3A%2F%2Fexample.com%2Fdashboard"
        );
    }
}
