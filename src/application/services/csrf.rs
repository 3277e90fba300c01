//! CSRF token issuance and validation.
//!
//! Mutating requests that are not exempt get a fresh anti-forgery token on
//! the response cookie and are validated against the token the client
//! echoed back. The comparison here is kept exactly as deployed: the token
//! being validated against is the one generated in this same request
//! cycle, so an incoming value can only match a coincidentally identical
//! prior cookie. See DESIGN.md before changing it.

use axum::http::{HeaderMap, Method, header};
use rand::Rng;

use crate::policy;

/// Outcome of running the guard against one mutating request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsrfOutcome {
    /// Exempt request; no token issued, no validation performed.
    Exempt,
    /// Token accepted; the `Set-Cookie` value must go on the response.
    Accepted { set_cookie: String },
    /// Token rejected; terminate with 403.
    Denied,
}

/// Anti-forgery guard for state-changing methods.
#[derive(Debug, Clone, Copy)]
pub struct CsrfService {
    /// Adds the `Secure` attribute to the issued cookie.
    production: bool,
}

impl CsrfService {
    pub fn new(production: bool) -> Self {
        Self { production }
    }

    /// True for the state-changing methods the guard applies to.
    pub fn is_mutating(method: &Method) -> bool {
        matches!(
            *method,
            Method::POST | Method::PUT | Method::DELETE | Method::PATCH
        )
    }

    /// Generates an opaque token: 32 random bytes, hex-encoded (64 chars).
    pub fn generate_token() -> String {
        let bytes: [u8; 32] = rand::rng().random();
        hex::encode(bytes)
    }

    /// Runs the guard for a mutating request.
    ///
    /// Exemptions pass unconditionally:
    /// - JSON request with a verified session: the session credential
    ///   already resists forgery and a browser form cannot produce it
    /// - the auth provider's own namespace, which manages its own CSRF
    ///   posture
    ///
    /// Otherwise a fresh token is generated, destined for the response
    /// cookie, and the incoming `x-csrf-token` header or `csrf-token`
    /// cookie is compared against that just-generated value.
    pub fn guard(&self, headers: &HeaderMap, path: &str, authenticated: bool) -> CsrfOutcome {
        let is_json = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        if is_json && authenticated {
            return CsrfOutcome::Exempt;
        }

        if path.starts_with(policy::AUTH_NAMESPACE) {
            return CsrfOutcome::Exempt;
        }

        let token = Self::generate_token();
        if self.validate(headers, &token) {
            CsrfOutcome::Accepted {
                set_cookie: self.cookie(&token),
            }
        } else {
            CsrfOutcome::Denied
        }
    }

    /// Compares the request's echoed token against `token`.
    ///
    /// Accepts when the `x-csrf-token` header or the `csrf-token` cookie
    /// equals `token` and the token is exactly 64 characters.
    fn validate(&self, headers: &HeaderMap, token: &str) -> bool {
        let header_token = headers
            .get(policy::CSRF_HEADER)
            .and_then(|v| v.to_str().ok());
        let cookie_token = request_cookie(headers, policy::CSRF_COOKIE);

        (header_token == Some(token) || cookie_token.as_deref() == Some(token))
            && token.len() == policy::CSRF_TOKEN_LEN
    }

    /// Builds the `Set-Cookie` value for a freshly issued token.
    fn cookie(&self, token: &str) -> String {
        let mut cookie = format!(
            "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Strict",
            policy::CSRF_COOKIE,
            token,
            policy::CSRF_COOKIE_MAX_AGE_SECS
        );
        if self.production {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Extracts a cookie value from the `Cookie` header.
///
/// Splits on semicolons and ignores unrelated cookies.
fn request_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) if key == name => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}
