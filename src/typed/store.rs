//! Blocking typed storage.

use crate::codec::Codec;
use crate::config::StorageOptions;
use crate::logging::{debug, trace};
use crate::storage::BaseStorage;

use super::KeyPrefix;
use super::error::{Operation, TypedStorageError};
use super::spec::{KeyValue, Spec, SpecKey};

/// Typed facade over a [`BaseStorage`].
///
/// `B` is usually a reference or an `Arc`, since the facade does not own
/// the lifetime of the store it writes to.
///
/// # Example
///
/// ```ignore
/// use typed_kv::prelude::*;
///
/// typed_spec! {
///     pub struct CounterSpec {
///         count: NumberCodec = codec::number() => Count,
///     }
/// }
///
/// let base = MemoryStorage::new();
/// let storage = TypedStorage::new(CounterSpec::new(), &base).with_key_prefix("app");
///
/// storage.set::<Count>(&100.0)?;
/// assert_eq!(storage.get::<Count>()?, Some(100.0));
/// assert_eq!(base.get("app_count")?, Some("100".to_string()));
/// ```
#[derive(Debug)]
pub struct TypedStorage<S, B> {
    spec: S,
    base: B,
    prefix: KeyPrefix,
}

impl<S: Spec, B: BaseStorage> TypedStorage<S, B> {
    /// Create a facade with no key prefix. Does not touch `base`.
    pub fn new(spec: S, base: B) -> Self {
        Self {
            spec,
            base,
            prefix: KeyPrefix::default(),
        }
    }

    /// Create a facade configured by `options`.
    pub fn with_options(spec: S, base: B, options: StorageOptions) -> Self {
        Self {
            spec,
            base,
            prefix: KeyPrefix::new(options.key_prefix),
        }
    }

    /// Prefix every physical key with `{prefix}_`.
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

    /// The key under which `key` is stored in the base storage.
    pub fn physical_key(&self, key: &str) -> String {
        self.prefix.apply(key)
    }

    /// Read and decode the value of `K`.
    ///
    /// Returns `Ok(None)` when the key is absent; the codec is not invoked.
    pub fn get<K>(&self) -> Result<Option<KeyValue<K>>, TypedStorageError>
    where
        K: SpecKey<Spec = S>,
    {
        let physical = self.prefix.apply(K::NAME);
        trace!(key = K::NAME, physical_key = %physical, "get");

        let raw = self
            .base
            .get(&physical)
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

    /// Encode `value` and write it under `K`.
    pub fn set<K>(&self, value: &KeyValue<K>) -> Result<(), TypedStorageError>
    where
        K: SpecKey<Spec = S>,
    {
        let physical = self.prefix.apply(K::NAME);

        let encoded = K::codec(&self.spec)
            .encode(value)
            .map_err(|e| TypedStorageError::new(Operation::Set, K::NAME, e))?;

        trace!(key = K::NAME, physical_key = %physical, bytes = encoded.len(), "set");
        self.base
            .set(&physical, &encoded)
            .map_err(|e| TypedStorageError::new(Operation::Set, K::NAME, e))
    }

    /// Delete the value of `K`. Removing an absent key succeeds.
    pub fn remove<K>(&self) -> Result<(), TypedStorageError>
    where
        K: SpecKey<Spec = S>,
    {
        let physical = self.prefix.apply(K::NAME);
        trace!(key = K::NAME, physical_key = %physical, "remove");

        self.base
            .remove(&physical)
            .map_err(|e| TypedStorageError::new(Operation::Remove, K::NAME, e))
    }

    /// Delete every key of the spec.
    ///
    /// Only this facade's physical keys are touched, so other data in a
    /// shared base storage survives. Stops at the first failure.
    pub fn clear(&self) -> Result<(), TypedStorageError> {
        debug!(keys = S::KEYS.len(), prefix = ?self.prefix.as_deref(), "clear");
        for key in S::KEYS {
            self.base
                .remove(&self.prefix.apply(key))
                .map_err(|e| TypedStorageError::new(Operation::Clear, *key, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::codec::{self, ArrayOf, BooleanCodec, NumberCodec};
    use crate::storage::MemoryStorage;

    crate::typed_spec! {
        struct TestSpec {
            count: NumberCodec = codec::number() => Count,
            flags: ArrayOf<BooleanCodec> = codec::array_of(codec::boolean()) => Flags,
        }
    }

    #[test]
    fn set_get_remove() -> Result<(), TypedStorageError> {
        let base = MemoryStorage::new();
        let storage = TypedStorage::new(TestSpec::new(), &base);

        assert_eq!(storage.get::<Count>()?, None);
        storage.set::<Count>(&100.0)?;
        assert_eq!(storage.get::<Count>()?, Some(100.0));

        storage.remove::<Count>()?;
        assert_eq!(storage.get::<Count>()?, None);
        Ok(())
    }

    #[test]
    fn writes_go_to_prefixed_physical_keys() -> Result<(), anyhow::Error> {
        let base = MemoryStorage::new();
        let storage = TypedStorage::new(TestSpec::new(), &base)
            .with_key_prefix("app");

        storage.set::<Flags>(&vec![true, false])?;
        assert_eq!(storage.physical_key("flags"), "app_flags");
        assert_eq!(
            base.get("app_flags")?,
            Some(r#"["true","false"]"#.to_string())
        );
        assert_eq!(base.get("flags")?, None);
        Ok(())
    }

    #[test]
    fn clear_only_removes_spec_keys() -> Result<(), anyhow::Error> {
        let base = MemoryStorage::with_entries([("unrelated", "keep")]);
        let storage = TypedStorage::new(TestSpec::new(), &base)
            .with_key_prefix("p");

        storage.set::<Count>(&1.0)?;
        storage.set::<Flags>(&vec![true])?;
        storage.clear()?;

        assert_eq!(base.keys(), vec!["unrelated".to_string()]);
        Ok(())
    }

    #[test]
    fn empty_prefix_option_means_no_prefix() {
        let options = StorageOptions::default().with_key_prefix("");
        let storage = TypedStorage::with_options(TestSpec::new(), MemoryStorage::new(), options);
        assert_eq!(storage.key_prefix(), None);
        assert_eq!(storage.physical_key("count"), "count");
    }
}
