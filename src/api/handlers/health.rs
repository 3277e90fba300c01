//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Reports gateway liveness.
///
/// The pipeline holds no external connections on the hot path (the
/// session verifier is consulted lazily per request), so health reduces
/// to "the process is serving".
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
