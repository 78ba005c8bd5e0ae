//! Cached portrait entry with TTL support

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// A resolved portrait URL and the Unix millisecond timestamp it was stored at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub url: String,
    #[serde(alias = "ts")]
    pub timestamp: i64,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time
    pub fn new(url: impl Into<String>) -> Self {
        Self::at(url, now_millis())
    }

    /// Creates an entry with an explicit timestamp
    pub fn at(url: impl Into<String>, timestamp: i64) -> Self {
        Self {
            url: url.into(),
            timestamp,
        }
    }

    /// Age of the entry relative to `now` (milliseconds). Entries stamped in
    /// the future count as brand new.
    pub fn age_millis(&self, now: i64) -> i64 {
        now.saturating_sub(self.timestamp).max(0)
    }

    /// Whether the entry can still be served at `now`.
    ///
    /// Entries with an empty URL or a zero timestamp are never usable, and an
    /// entry is stale once it is strictly older than `ttl`.
    pub fn is_fresh_at(&self, now: i64, ttl: Duration) -> bool {
        if self.url.is_empty() || self.timestamp == 0 {
            return false;
        }
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let age = self.age_millis(now);
        let fresh = age <= ttl_ms;

        debug!(
            "Portrait cache expiration check: age_ms={}, ttl_ms={}, fresh={}",
            age, ttl_ms, fresh
        );

        fresh
    }

    /// Whether the entry can still be served right now
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.is_fresh_at(now_millis(), ttl)
    }
}

/// Current time as Unix milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
