//! Fixed-window rate limiting service.

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::rate_limit::{RateDecision, RateLimitStore, RecordOutcome};
use crate::policy;

/// Limiter tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Window length.
    pub window: chrono::Duration,
    /// Admissions per identity per window.
    pub max_requests: u32,
    /// When true, `Retry-After` carries the window's actual remaining
    /// time instead of the fixed window length. Off by default for parity
    /// with the deployed behavior.
    pub exact_retry_after: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: policy::rate_limit_window(),
            max_requests: policy::RATE_LIMIT_MAX_REQUESTS,
            exact_retry_after: false,
        }
    }
}

/// Per-identity fixed-window request limiter.
///
/// Each [`check`](Self::check) first sweeps every expired window out of the
/// store, then records the request atomically. The sweep is O(n) over all
/// tracked identities; with an in-memory store and this traffic shape that
/// is an accepted cost, and the [`RateLimitStore`] seam is where an
/// external counter service would take over.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    clock: Arc<dyn Clock>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(
        store: Arc<dyn RateLimitStore>,
        clock: Arc<dyn Clock>,
        config: RateLimitConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Decides admission for one request from `identity`.
    ///
    /// On denial the retry hint is the full window length (900s for the
    /// default window) regardless of how much of the window remains,
    /// unless [`RateLimitConfig::exact_retry_after`] is set.
    pub fn check(&self, identity: &str) -> RateDecision {
        let now = self.clock.now();
        self.store.sweep(now);

        match self
            .store
            .record(identity, now, self.config.window, self.config.max_requests)
        {
            RecordOutcome::Allowed => RateDecision::Allowed,
            RecordOutcome::Limited { reset_at } => {
                let retry_after_secs = if self.config.exact_retry_after {
                    (reset_at - now).num_seconds().max(0) as u64
                } else {
                    self.config.window.num_seconds().max(0) as u64
                };
                RateDecision::Denied { retry_after_secs }
            }
        }
    }
}
