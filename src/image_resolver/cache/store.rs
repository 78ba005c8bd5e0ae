//! Key/value store interface behind the portrait cache.

use futures::FutureExt;
use futures::future::BoxFuture;

use super::types::CacheEntry;
use crate::error::AppError;

/// Storage backend for cached portraits.
///
/// Implementations only persist entries; freshness is decided by
/// [`PortraitCache`](super::PortraitCache). They must be safe to share
/// between concurrent resolutions.
pub trait PortraitStore: Send + Sync {
    /// Reads the entry stored under `key`.
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<CacheEntry>, AppError>>;

    /// Stores `entry` under `key`, replacing any previous entry.
    fn set<'a>(&'a self, key: &'a str, entry: CacheEntry) -> BoxFuture<'a, Result<(), AppError>>;

    /// Removes every entry.
    fn clear(&self) -> BoxFuture<'_, Result<(), AppError>>;

    /// Number of stored entries, expired ones included.
    fn len(&self) -> BoxFuture<'_, usize>;

    fn is_empty(&self) -> BoxFuture<'_, bool> {
        async move { self.len().await == 0 }.boxed()
    }

    /// Human-readable backend name for logs.
    fn name(&self) -> &'static str;
}
