//! Per-request metadata stamped on outgoing responses.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Response header carrying the processing timestamp.
pub const TIMESTAMP_HEADER: &str = "x-timestamp";

/// Correlation metadata generated fresh for every request.
///
/// Attached to the outgoing response only; never persisted.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    /// Writes `x-request-id` and `x-timestamp` (ISO-8601, millisecond
    /// precision, UTC `Z`) into `headers`.
    pub fn stamp(&self, headers: &mut HeaderMap) {
        if let Ok(id) = HeaderValue::from_str(&self.request_id.to_string()) {
            headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), id);
        }
        let ts = self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        if let Ok(ts) = HeaderValue::from_str(&ts) {
            headers.insert(HeaderName::from_static(TIMESTAMP_HEADER), ts);
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
