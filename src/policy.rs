//! Static security policy: route lists, rate-limit constants, CSRF cookie
//! parameters, and the protective header set.
//!
//! Everything here is compile-time data. Runtime tunables (listen address,
//! verifier endpoint, log format) live in [`crate::config`] instead.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use chrono::Duration;

/// Paths that never require authentication, in evaluation order.
///
/// The bare `/` entry is matched exactly; every other entry is a prefix
/// match. A prefix match on `/` would classify every route as public.
pub const PUBLIC_PATHS: [&str; 9] = [
    "/",
    "/auth/signin",
    "/auth/signup",
    "/auth/error",
    "/api/auth",
    "/_next",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
];

/// Path prefixes that require a valid session, in evaluation order.
pub const PROTECTED_PATHS: [&str; 7] = [
    "/dashboard",
    "/portfolio",
    "/analytics",
    "/profile",
    "/api/profile",
    "/api/upload",
    "/api/portfolio",
];

/// Prefix for compiled static assets.
pub const STATIC_ASSET_PREFIX: &str = "/_next/static";

/// Namespace owned by the auth provider; it manages its own CSRF posture.
pub const AUTH_NAMESPACE: &str = "/api/auth";

/// Sign-in route that unauthenticated requests are redirected to.
pub const SIGN_IN_PATH: &str = "/auth/signin";

/// Rate-limit window length.
pub const RATE_LIMIT_WINDOW_SECS: i64 = 15 * 60;

/// Maximum requests per identity per window.
pub const RATE_LIMIT_MAX_REQUESTS: u32 = 100;

/// CSRF cookie name; the client echoes its value via `x-csrf-token`.
pub const CSRF_COOKIE: &str = "csrf-token";

/// Header the client uses to echo the CSRF token back.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// CSRF cookie lifetime in seconds (24 hours).
pub const CSRF_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// Expected CSRF token length: 32 random bytes, hex-encoded.
pub const CSRF_TOKEN_LEN: usize = 64;

/// Returns the rate-limit window as a [`chrono::Duration`].
pub fn rate_limit_window() -> Duration {
    Duration::seconds(RATE_LIMIT_WINDOW_SECS)
}

/// Content Security Policy for the fronted application.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     script-src 'self' 'unsafe-eval' 'unsafe-inline' *.vercel-scripts.com; \
     style-src 'self' 'unsafe-inline' fonts.googleapis.com; \
     font-src 'self' fonts.gstatic.com; \
     img-src 'self' data: https: *.githubusercontent.com *.gravatar.com; \
     connect-src 'self' *.portman.ai wss: ws:; \
     frame-ancestors 'none'; \
     base-uri 'self'; \
     form-action 'self';";

/// Protective headers attached to every response the gateway emits,
/// including 429, redirect, and 403 outcomes.
pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    ("x-xss-protection", "1; mode=block"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("permissions-policy", "camera=(), microphone=(), location=(), payment=()"),
];

/// Inserts the full [`SECURITY_HEADERS`] set into `headers`, overwriting
/// any values a downstream handler may have set.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
