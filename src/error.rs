use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::policy;

/// Terminal outcomes of the security pipeline.
///
/// All three are expected, client-recoverable conditions, never server
/// faults: a limited client retries later, an unauthenticated one signs
/// in, a CSRF mismatch re-fetches a token. Nothing internal leaks into
/// the response bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDenial {
    /// Too many requests inside the current window.
    RateLimited { retry_after_secs: u64 },
    /// Protected route without a valid session; redirect to sign-in.
    Unauthenticated { location: String },
    /// Mutating request failed anti-forgery validation.
    CsrfMismatch,
}

impl GateDenial {
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unauthenticated(location: impl Into<String>) -> Self {
        Self::Unauthenticated {
            location: location.into(),
        }
    }
}

impl IntoResponse for GateDenial {
    fn into_response(self) -> Response {
        match self {
            GateDenial::RateLimited { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, HeaderValue::from(retry_after_secs))],
                "Too Many Requests",
            )
                .into_response(),
            GateDenial::Unauthenticated { location } => {
                let location = HeaderValue::from_str(&location)
                    .unwrap_or_else(|_| HeaderValue::from_static(policy::SIGN_IN_PATH));
                (
                    StatusCode::TEMPORARY_REDIRECT,
                    [(header::LOCATION, location)],
                )
                    .into_response()
            }
            GateDenial::CsrfMismatch => {
                (StatusCode::FORBIDDEN, "Invalid CSRF Token").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_response() {
        let response = GateDenial::rate_limited(900).into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            &HeaderValue::from_static("900")
        );
    }

    #[test]
    fn test_unauthenticated_response_redirects() {
        let response =
            GateDenial::unauthenticated("/auth/signin?callbackUrl=x").into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/auth/signin?callbackUrl=x")
        );
    }

    #[test]
    fn test_csrf_mismatch_is_forbidden() {
        let response = GateDenial::CsrfMismatch.into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
