//! Key-value stores
//!
//! [`FileStore`] persists entries as a JSON object on disk; [`MemoryStore`]
//! keeps them in process memory.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};

use super::error::{StorageError, StorageResult};

/// Durable string key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read an entry, `None` when absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Create or overwrite an entry
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Create or overwrite several entries at once; either all land or none
    async fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()>;

    /// Delete an entry; deleting a missing key is not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Entries stored in a single JSON file
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so a crash never leaves a half-written file behind. On unix the
/// file is readable by its owner only. A file that no longer parses is
/// discarded by the next write instead of blocking it.
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current entries as the base of a write; unparseable content is dropped
    async fn entries_for_write(&self) -> StorageResult<BTreeMap<String, String>> {
        match self.read_entries().await {
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(path = ?self.path, "Discarding unreadable key-value store: {}", e);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&tmp, content).await?;
        restrict_permissions(&tmp).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::trace!(path = ?self.path, entries = entries.len(), "Wrote key-value store");
        Ok(())
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.set_many(&[(key, value)]).await
    }

    async fn set_many(&self, new_entries: &[(&str, &str)]) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        for (key, value) in new_entries {
            entries.insert(key.to_string(), value.to_string());
        }
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        match self.read_entries().await {
            Ok(mut entries) => {
                if entries.remove(key).is_some() {
                    self.write_entries(&entries).await?;
                }
            }
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(path = ?self.path, "Removing unreadable key-value store: {}", e);
                tokio::fs::remove_file(&self.path).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

/// Entries held in memory for the lifetime of the process
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_many(&self, new_entries: &[(&str, &str)]) -> StorageResult<()> {
        let mut entries = self.entries.write().await;
        for (key, value) in new_entries {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
