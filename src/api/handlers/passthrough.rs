//! Downstream stand-in handler.

use axum::http::StatusCode;

/// Placeholder for the fronted application.
///
/// Requests that clear the pipeline land here. In a deployment the
/// application router (pages, CV/portfolio APIs) mounts in its place;
/// the gateway itself is indifferent to what runs downstream.
pub async fn passthrough_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
