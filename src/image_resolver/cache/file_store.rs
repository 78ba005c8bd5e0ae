//! On-disk portrait store: a single JSON object mapping keys to entries

use futures::FutureExt;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::store::PortraitStore;
use super::types::CacheEntry;
use crate::error::AppError;

/// Persists portraits to a JSON file so they survive restarts.
///
/// The whole map is loaded on [`FileStore::open`] and rewritten on every
/// `set`. Writes go to a sibling temp file first and are renamed into place.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file starts empty; an unreadable
    /// or corrupt file is logged and also starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load_entries(&path).await {
            Ok(entries) => {
                debug!(
                    "Loaded {} portrait cache entries from {}",
                    entries.len(),
                    path.display()
                );
                entries
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable portrait cache at {}: {}",
                    path.display(),
                    e
                );
                HashMap::new()
            }
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn load_entries(path: &Path) -> Result<HashMap<String, CacheEntry>, AppError> {
    if !fs::try_exists(path).await? {
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }
    Ok(serde_json::from_str(&content)?)
}

async fn persist(path: &Path, entries: &HashMap<String, CacheEntry>) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string(entries)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content).await?;
    fs::rename(&tmp_path, path).await.map_err(|e| {
        AppError::cache_store_error(format!(
            "Failed to move portrait cache into place at {}: {}",
            path.display(),
            e
        ))
    })
}

impl PortraitStore for FileStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<CacheEntry>, AppError>> {
        async move { Ok(self.entries.read().await.get(key).cloned()) }.boxed()
    }

    fn set<'a>(&'a self, key: &'a str, entry: CacheEntry) -> BoxFuture<'a, Result<(), AppError>> {
        async move {
            // Held across the write so concurrent sets cannot interleave on disk
            let mut entries = self.entries.write().await;
            entries.insert(key.to_string(), entry);
            persist(&self.path, &entries).await
        }
        .boxed()
    }

    fn clear(&self) -> BoxFuture<'_, Result<(), AppError>> {
        async move {
            let mut entries = self.entries.write().await;
            let removed = entries.len();
            entries.clear();
            persist(&self.path, &entries).await?;
            info!(
                "Cleared {} portrait cache entries at {}",
                removed,
                self.path.display()
            );
            Ok(())
        }
        .boxed()
    }

    fn len(&self) -> BoxFuture<'_, usize> {
        async move { self.entries.read().await.len() }.boxed()
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::open(temp_dir.path().join("image_cache.json")).await;
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_entries_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("image_cache.json");

        let store = FileStore::open(&path).await;
        store
            .set("player_img_jane doe", CacheEntry::at("https://img/j.jpg", 42))
            .await
            .unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).await;
        assert_eq!(
            reopened.get("player_img_jane doe").await.unwrap(),
            Some(CacheEntry::at("https://img/j.jpg", 42))
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_ignored_and_overwritten() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("image_cache.json");
        tokio::fs::write(&path, "{ definitely not json").await.unwrap();

        let store = FileStore::open(&path).await;
        assert_eq!(store.len().await, 0);

        store
            .set("player_img_a", CacheEntry::at("https://img/a.jpg", 1))
            .await
            .unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: HashMap<String, CacheEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_empties_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("image_cache.json");
        let store = FileStore::open(&path).await;
        store
            .set("player_img_a", CacheEntry::at("https://img/a.jpg", 1))
            .await
            .unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.len().await, 0);

        let reopened = FileStore::open(&path).await;
        assert_eq!(reopened.len().await, 0);
    }
}
