//! TTL-aware portrait cache on top of a [`PortraitStore`]

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::store::PortraitStore;
use super::types::{CacheEntry, now_millis};
use crate::constants::cache::KEY_PREFIX;

/// Builds the cache key for a player: the fixed prefix followed by the
/// trimmed, lower-cased name.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::cache::cache_key;
///
/// assert_eq!(cache_key("  Jane DOE "), "player_img_jane doe");
/// ```
pub fn cache_key(name: &str) -> String {
    format!("{KEY_PREFIX}{}", name.trim().to_lowercase())
}

/// Portrait cache keyed by player name.
///
/// Store failures never reach the caller: a failed read is a miss and a
/// failed write is logged and dropped.
#[derive(Clone)]
pub struct PortraitCache {
    store: Arc<dyn PortraitStore>,
    ttl: Duration,
}

impl std::fmt::Debug for PortraitCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortraitCache")
            .field("store", &self.store.name())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl PortraitCache {
    pub fn new(store: Arc<dyn PortraitStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &Arc<dyn PortraitStore> {
        &self.store
    }

    /// Returns the cached URL for `name` if it is still fresh.
    #[instrument(skip(self))]
    pub async fn lookup(&self, name: &str) -> Option<String> {
        self.lookup_at(name, now_millis()).await
    }

    /// Same as [`lookup`](Self::lookup) with an explicit clock.
    pub async fn lookup_at(&self, name: &str, now: i64) -> Option<String> {
        let key = cache_key(name);
        let entry = match self.store.get(&key).await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                debug!("Portrait cache miss: key={key}");
                return None;
            }
            Err(e) => {
                warn!("Portrait cache read failed for {key}: {e}");
                return None;
            }
        };

        if entry.is_fresh_at(now, self.ttl) {
            debug!("Portrait cache hit: key={}, url={}", key, entry.url);
            Some(entry.url)
        } else {
            debug!(
                "Ignoring stale portrait cache entry: key={}, age_ms={}",
                key,
                entry.age_millis(now)
            );
            None
        }
    }

    /// Stores `url` for `name` stamped with the current time.
    #[instrument(skip(self))]
    pub async fn remember(&self, name: &str, url: &str) {
        let key = cache_key(name);
        match self.store.set(&key, CacheEntry::new(url)).await {
            Ok(()) => info!("Cached portrait: key={key}, url={url}"),
            Err(e) => warn!("Portrait cache write failed for {key}: {e}"),
        }
    }

    /// Removes every cached portrait.
    pub async fn clear(&self) -> Result<(), crate::error::AppError> {
        self.store.clear().await
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::cache::MS_PER_DAY;
    use crate::error::AppError;
    use crate::image_resolver::cache::MemoryStore;
    use futures::FutureExt;
    use futures::future::BoxFuture;

    const THIRTY_DAYS: Duration = Duration::from_secs(30 * 86_400);

    struct BrokenStore;

    impl PortraitStore for BrokenStore {
        fn get<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Result<Option<CacheEntry>, AppError>> {
            async { Err(AppError::cache_store_error("disk on fire")) }.boxed()
        }

        fn set<'a>(
            &'a self,
            _key: &'a str,
            _entry: CacheEntry,
        ) -> BoxFuture<'a, Result<(), AppError>> {
            async { Err(AppError::cache_store_error("disk on fire")) }.boxed()
        }

        fn clear(&self) -> BoxFuture<'_, Result<(), AppError>> {
            async { Err(AppError::cache_store_error("disk on fire")) }.boxed()
        }

        fn len(&self) -> BoxFuture<'_, usize> {
            async { 0 }.boxed()
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_cache_key_is_case_insensitive() {
        assert_eq!(cache_key("Jane Doe"), cache_key("JANE DOE"));
        assert_eq!(cache_key("Jane Doe"), "player_img_jane doe");
    }

    #[tokio::test]
    async fn test_remember_then_lookup_any_casing() {
        let cache = PortraitCache::new(Arc::new(MemoryStore::new()), THIRTY_DAYS);
        cache.remember("Jane Doe", "https://img/j.jpg").await;
        assert_eq!(
            cache.lookup("jane doe").await.as_deref(),
            Some("https://img/j.jpg")
        );
    }

    #[tokio::test]
    async fn test_stale_entry_is_ignored_but_kept() {
        let store = Arc::new(MemoryStore::new());
        let now = 1_700_000_000_000;
        store
            .set(
                &cache_key("Jane Doe"),
                CacheEntry::at("https://img/old.jpg", now - 31 * MS_PER_DAY),
            )
            .await
            .unwrap();

        let cache = PortraitCache::new(store.clone(), THIRTY_DAYS);
        assert_eq!(cache.lookup_at("Jane Doe", now).await, None);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_failures_are_swallowed() {
        let cache = PortraitCache::new(Arc::new(BrokenStore), THIRTY_DAYS);
        cache.remember("Jane Doe", "https://img/j.jpg").await;
        assert_eq!(cache.lookup("Jane Doe").await, None);
        assert!(cache.clear().await.is_err());
    }
}
