//! In-memory base storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::logging::{trace, warn};

use super::BaseStorage;

/// Errors from [`MemoryStorage`].
#[derive(Error, Debug)]
pub enum MemoryStorageError {
    #[error("Quota exceeded writing '{key}': need {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
}

/// Map-backed storage.
///
/// Every instance owns its own key space; share one instance through `&`
/// or `Arc` to let several typed facades see the same data. An optional
/// byte quota (keys plus values) makes writes fail once the store is full,
/// the way browser storage does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `bytes` bytes of keys and values.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::default(),
            quota: Some(bytes),
        }
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
            quota: None,
        }
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        used_bytes(&self.read())
    }

    // Every mutation is a single map operation, so a panic elsewhere while
    // the lock was held cannot leave the map half-written.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn used_bytes(entries: &HashMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl BaseStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, MemoryStorageError> {
        trace!(key, "memory get");
        Ok(self.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MemoryStorageError> {
        trace!(key, bytes = value.len(), "memory set");
        let mut entries = self.write();

        if let Some(quota) = self.quota {
            let replaced = entries
                .get(key)
                .map(|old| key.len() + old.len())
                .unwrap_or(0);
            let needed = used_bytes(&entries) - replaced + key.len() + value.len();
            if needed > quota {
                warn!(key, needed, quota, "memory storage quota exceeded");
                return Err(MemoryStorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), MemoryStorageError> {
        trace!(key, "memory remove");
        self.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), MemoryStorageError> {
        trace!("memory clear");
        self.write().clear();
        Ok(())
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl super::AsyncBaseStorage for MemoryStorage {
    type Error = MemoryStorageError;

    async fn get(&self, key: &str) -> Result<Option<String>, MemoryStorageError> {
        BaseStorage::get(self, key)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), MemoryStorageError> {
        BaseStorage::set(self, key, value)
    }

    async fn remove(&self, key: &str) -> Result<(), MemoryStorageError> {
        BaseStorage::remove(self, key)
    }

    async fn clear(&self) -> Result<(), MemoryStorageError> {
        BaseStorage::clear(self)
    }
}
