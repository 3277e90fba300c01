//! Process-local rate-limit store.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::domain::rate_limit::{RateLimitStore, RateWindow, RecordOutcome};

/// Mutex-guarded in-memory window map.
///
/// One lock covers the whole map, so the per-identity read-increment-write
/// in [`record`](RateLimitStore::record) is atomic and concurrent requests
/// from the same identity cannot over-admit. State is process-local;
/// horizontal scaling needs an external keyed-counter store behind the
/// same trait.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    windows: Mutex<HashMap<String, RateWindow>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identities currently tracked. Test and health introspection.
    pub fn tracked_identities(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, RateWindow>> {
        // A poisoned lock only means another thread panicked mid-update;
        // the map is still usable for counting.
        self.windows.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn sweep(&self, now: DateTime<Utc>) {
        self.lock().retain(|_, w| w.reset_at > now);
    }

    fn record(
        &self,
        identity: &str,
        now: DateTime<Utc>,
        window: chrono::Duration,
        max: u32,
    ) -> RecordOutcome {
        let mut windows = self.lock();

        match windows.get_mut(identity) {
            Some(w) if now < w.reset_at => {
                if w.count >= max {
                    RecordOutcome::Limited { reset_at: w.reset_at }
                } else {
                    w.count += 1;
                    RecordOutcome::Allowed
                }
            }
            // First request, or the window expired between sweep and here.
            _ => {
                windows.insert(
                    identity.to_string(),
                    RateWindow {
                        count: 1,
                        reset_at: now + window,
                    },
                );
                RecordOutcome::Allowed
            }
        }
    }
}
