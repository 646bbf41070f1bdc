//! Durable key/value storage backing the day-scoped caches.
//!
//! The store is shared process-wide and namespaced by cache name and user
//! id. Writes are whole-entry overwrites; `put_all` lands a batch in one
//! write so a `(payload, day)` pair can never be observed half-updated.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Reads every key from one snapshot, so a concurrent `put_all` batch
    /// is observed either entirely or not at all. Values come back in key
    /// order.
    async fn get_all(&self, keys: &[String]) -> Result<Vec<Option<String>>, StoreError>;

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Writes every pair as a single atomic batch.
    async fn put_all(&self, pairs: &[(String, String)]) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: std::sync::Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn get_all(&self, keys: &[String]) -> Result<Vec<Option<String>>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(keys.iter().map(|key| entries.get(key).cloned()).collect())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn put_all(&self, pairs: &[(String, String)]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        for (key, value) in pairs {
            entries.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

/// File-backed store: one JSON object per file, rewritten whole on every
/// write. The mutex is held across the file write so concurrent batches
/// serialize as last-write-wins, never interleaved.
pub struct FileStore {
    path: PathBuf,
    entries: tokio::sync::Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens (or creates) the store file. An unreadable or malformed file
    /// is treated as empty; the caches repopulate it on the next refresh.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Store file {} is malformed, starting empty: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: tokio::sync::Mutex::new(entries),
        })
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn get_all(&self, keys: &[String]) -> Result<Vec<Option<String>>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(keys.iter().map(|key| entries.get(key).cloned()).collect())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn put_all(&self, pairs: &[(String, String)]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        for (key, value) in pairs {
            entries.insert(key.clone(), value.clone());
        }
        self.persist(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
        store.put("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_memory_store_get_all_returns_values_in_key_order() {
        let store = MemoryStore::new();
        store.put("a", "1").await.unwrap();
        store.put("c", "3").await.unwrap();
        let values = store
            .get_all(&["a".to_string(), "b".to_string(), "c".to_string()])
            .await
            .unwrap();
        assert_eq!(
            values,
            vec![Some("1".to_string()), None, Some("3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_memory_store_put_all_writes_every_pair() {
        let store = MemoryStore::new();
        store
            .put_all(&[
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ])
            .await
            .unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).await.unwrap();
        store.put("jobs_date_u1", "Mon Jan 01 2024").await.unwrap();
        drop(store);

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("jobs_date_u1").await.unwrap().as_deref(),
            Some("Mon Jan 01 2024")
        );
    }

    #[tokio::test]
    async fn test_file_store_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let store = FileStore::open(&path).await.unwrap();
        assert!(store.get("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_get_all_reads_one_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).await.unwrap();
        store
            .put_all(&[
                ("jobs_data_u1".to_string(), "[]".to_string()),
                ("jobs_date_u1".to_string(), "Mon Jan 01 2024".to_string()),
            ])
            .await
            .unwrap();
        let values = store
            .get_all(&["jobs_data_u1".to_string(), "jobs_date_u1".to_string()])
            .await
            .unwrap();
        assert_eq!(
            values,
            vec![Some("[]".to_string()), Some("Mon Jan 01 2024".to_string())]
        );
    }

    #[tokio::test]
    async fn test_file_store_overwrites_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).await.unwrap();
        store.put("k", "old").await.unwrap();
        store.put("k", "new").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("new"));
    }
}
