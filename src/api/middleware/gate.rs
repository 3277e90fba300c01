//! Request-security pipeline middleware.
//!
//! Every inbound request passes through here before it reaches any
//! handler. Stage order matters and is a contract:
//!
//! 1. Rate limit by client identity (may terminate with `429`)
//! 2. Classify the route
//! 3. Short-circuit `Public` / `StaticAsset`
//! 4. Verify the session (always, since the CSRF guard needs the result);
//!    `Protected` without a session terminates with a sign-in redirect
//! 5. CSRF-guard mutating methods (may terminate with `403`)
//!
//! Security headers and request metadata (`x-request-id`, `x-timestamp`)
//! are applied on the way out, so every outcome, terminal or not, carries
//! them.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::application::services::{CsrfOutcome, CsrfService, auth_gate};
use crate::domain::{RateDecision, RequestContext, RouteClass, classify, client_identity};
use crate::error::GateDenial;
use crate::policy;
use crate::state::AppState;

/// Gates one request through the full security pipeline.
///
/// # Outcomes
///
/// - pass-through to the inner service (`200` from downstream)
/// - `429 Too Many Requests` with `Retry-After`
/// - `307` redirect to `/auth/signin?callbackUrl=<original URL>`
/// - `403 Invalid CSRF Token`
///
/// All of them carry the full security header set plus `x-request-id`
/// and `x-timestamp`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .fallback(application_handler)
///     .layer(middleware::from_fn_with_state(state.clone(), gate::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();

    let mut response = run(&st, req, next).await;

    policy::apply_security_headers(response.headers_mut());
    ctx.stamp(response.headers_mut());

    response
}

async fn run(st: &AppState, req: Request, next: Next) -> Response {
    let identity = client_identity(req.headers());
    if let RateDecision::Denied { retry_after_secs } = st.rate_limiter.check(&identity) {
        tracing::warn!(identity = %identity, "rate limit exceeded");
        return GateDenial::rate_limited(retry_after_secs).into_response();
    }

    let path = req.uri().path().to_string();
    let class = classify(&path);
    if matches!(class, RouteClass::Public | RouteClass::StaticAsset) {
        return next.run(req).await;
    }

    // The verifier runs for every remaining class, not just Protected:
    // the CSRF JSON exemption depends on the auth result.
    let token = st.auth_gate.verify(req.headers()).await;

    if class == RouteClass::Protected && token.is_none() {
        let target = auth_gate::sign_in_redirect(&original_url(&req));
        tracing::debug!(path = %path, "unauthenticated access to protected route");
        return GateDenial::unauthenticated(target).into_response();
    }

    if !CsrfService::is_mutating(req.method()) {
        return next.run(req).await;
    }

    match st.csrf.guard(req.headers(), &path, token.is_some()) {
        CsrfOutcome::Exempt => next.run(req).await,
        CsrfOutcome::Denied => {
            tracing::warn!(path = %path, "csrf validation failed");
            GateDenial::CsrfMismatch.into_response()
        }
        CsrfOutcome::Accepted { set_cookie } => {
            let mut response = next.run(req).await;
            if let Ok(cookie) = HeaderValue::from_str(&set_cookie) {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            response
        }
    }
}

/// Reconstructs the fully-qualified URL the client requested.
///
/// Scheme comes from `x-forwarded-proto` (the gateway normally sits
/// behind a TLS terminator), host from the `Host` header.
fn original_url(req: &Request) -> String {
    let scheme = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("https");
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    format!("{scheme}://{host}{path_and_query}")
}
