//! Async typed storage.

use crate::codec::Codec;
use crate::config::StorageOptions;
use crate::logging::{debug, trace};
use crate::storage::AsyncBaseStorage;

use super::KeyPrefix;
use super::error::{Operation, TypedStorageError};
use super::spec::{KeyValue, Spec, SpecKey};

/// Typed facade over an [`AsyncBaseStorage`].
///
/// Same contract as [`TypedStorage`](super::TypedStorage); each operation
/// suspends only while awaiting the base storage. There is no locking, so
/// concurrent writes to one key race exactly as the base storage allows.
#[derive(Debug)]
pub struct AsyncTypedStorage<S, B> {
    spec: S,
    base: B,
    prefix: KeyPrefix,
}

impl<S: Spec, B: AsyncBaseStorage> AsyncTypedStorage<S, B> {
    pub fn new(spec: S, base: B) -> Self {
        Self {
            spec,
            base,
            prefix: KeyPrefix::default(),
        }
    }

    pub fn with_options(spec: S, base: B, options: StorageOptions) -> Self {
        Self {
            spec,
            base,
            prefix: KeyPrefix::new(options.key_prefix),
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = KeyPrefix::new(Some(prefix.into()));
        self
    }

    pub fn spec(&self) -> &S {
        &self.spec
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn key_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn physical_key(&self, key: &str) -> String {
        self.prefix.apply(key)
    }

    pub async fn get<K>(&self) -> Result<Option<KeyValue<K>>, TypedStorageError>
    where
        K: SpecKey<Spec = S>,
    {
        let physical = self.prefix.apply(K::NAME);
        trace!(key = K::NAME, physical_key = %physical, "async get");

        let raw = self
            .base
            .get(&physical)
            .await
            .map_err(|e| TypedStorageError::new(Operation::Get, K::NAME, e))?;

        let Some(raw) = raw else {
            debug!(key = K::NAME, "key absent");
            return Ok(None);
        };

        K::codec(&self.spec)
            .decode(&raw)
            .map(Some)
            .map_err(|e| TypedStorageError::new(Operation::Get, K::NAME, e))
    }

    pub async fn set<K>(&self, value: &KeyValue<K>) -> Result<(), TypedStorageError>
    where
        K: SpecKey<Spec = S>,
    {
        let physical = self.prefix.apply(K::NAME);

        let encoded = K::codec(&self.spec)
            .encode(value)
            .map_err(|e| TypedStorageError::new(Operation::Set, K::NAME, e))?;

        trace!(key = K::NAME, physical_key = %physical, bytes = encoded.len(), "async set");
        self.base
            .set(&physical, &encoded)
            .await
            .map_err(|e| TypedStorageError::new(Operation::Set, K::NAME, e))
    }

    pub async fn remove<K>(&self) -> Result<(), TypedStorageError>
    where
        K: SpecKey<Spec = S>,
    {
        let physical = self.prefix.apply(K::NAME);
        trace!(key = K::NAME, physical_key = %physical, "async remove");

        self.base
            .remove(&physical)
            .await
            .map_err(|e| TypedStorageError::new(Operation::Remove, K::NAME, e))
    }

    /// Delete every key of the spec, one after another.
    pub async fn clear(&self) -> Result<(), TypedStorageError> {
        debug!(keys = S::KEYS.len(), prefix = ?self.prefix.as_deref(), "async clear");
        for key in S::KEYS {
            self.base
                .remove(&self.prefix.apply(key))
                .await
                .map_err(|e| TypedStorageError::new(Operation::Clear, *key, e))?;
        }
        Ok(())
    }
}
