//! Client identity resolution for rate limiting.

use axum::http::HeaderMap;

/// Header carrying the originating address when behind a proxy or CDN.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Bucket key used when no forwarded address is present.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Derives the per-client rate-limiting key from request headers.
///
/// Uses the raw `x-forwarded-for` value, falling back to `"unknown"`.
/// The result is not authenticated and must never be used for anything
/// other than bucketing requests.
pub fn client_identity(headers: &HeaderMap) -> String {
    headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_IDENTITY)
        .to_string()
}
