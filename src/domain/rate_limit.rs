//! Rate-limiting domain types and the store seam.

use chrono::{DateTime, Utc};

/// Per-identity fixed window counter.
///
/// Invariant: `count` only grows while `now < reset_at`; once the window
/// has passed the entry is replaced wholesale with `count = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

/// Result of recording one request against a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Request admitted.
    Allowed,
    /// Window is full; carries the window's actual expiry.
    Limited { reset_at: DateTime<Utc> },
}

/// Decision surfaced to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    /// Denied with the `Retry-After` hint, in seconds.
    Denied { retry_after_secs: u64 },
}

/// Storage interface for rate-limit windows.
///
/// The default implementation is a process-local mutex-guarded map
/// ([`crate::infrastructure::store::InMemoryRateLimitStore`]); an external
/// keyed-counter service can replace it for multi-instance deployments.
///
/// A miss is not an error, it is the first-request case, so both methods
/// are infallible.
#[cfg_attr(test, mockall::automock)]
pub trait RateLimitStore: Send + Sync {
    /// Removes every window whose `reset_at` has passed.
    ///
    /// Runs over the whole store, O(n) in tracked identities.
    fn sweep(&self, now: DateTime<Utc>);

    /// Records one request for `identity` and decides admission atomically.
    ///
    /// Creates a fresh window when the identity is unknown or its window
    /// has expired; increments while `count < max`; reports
    /// [`RecordOutcome::Limited`] once the window is full. The whole
    /// read-increment-write must happen under one lock so concurrent
    /// requests from the same identity cannot over-admit.
    fn record(
        &self,
        identity: &str,
        now: DateTime<Utc>,
        window: chrono::Duration,
        max: u32,
    ) -> RecordOutcome;
}
