//! In-memory portrait store with LRU eviction

use futures::FutureExt;
use futures::future::BoxFuture;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::RwLock;
use tracing::debug;

use super::store::PortraitStore;
use super::types::CacheEntry;
use crate::constants::cache::MEMORY_CAPACITY;
use crate::error::AppError;

/// Keeps portraits in process memory. When full, the least recently used
/// entry is evicted.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RwLock<LruCache<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_CAPACITY)
    }

    /// Creates a store holding at most `capacity` entries (minimum one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PortraitStore for MemoryStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<CacheEntry>, AppError>> {
        async move {
            // Write lock: a hit refreshes the LRU order
            let mut entries = self.entries.write().await;
            let entry = entries.get(key).cloned();
            debug!("Memory store lookup: key={}, hit={}", key, entry.is_some());
            Ok(entry)
        }
        .boxed()
    }

    fn set<'a>(&'a self, key: &'a str, entry: CacheEntry) -> BoxFuture<'a, Result<(), AppError>> {
        async move {
            let mut entries = self.entries.write().await;
            entries.put(key.to_string(), entry);
            Ok(())
        }
        .boxed()
    }

    fn clear(&self) -> BoxFuture<'_, Result<(), AppError>> {
        async move {
            self.entries.write().await.clear();
            Ok(())
        }
        .boxed()
    }

    fn len(&self) -> BoxFuture<'_, usize> {
        async move { self.entries.read().await.len() }.boxed()
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
