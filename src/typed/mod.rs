//! Typed get/set/remove facade over a base storage.
//!
//! A [`TypedStorage`] binds a [`Spec`] (a closed set of keys, each with its
//! codec) to a [`BaseStorage`](crate::storage::BaseStorage). Every call goes
//! straight through to the base storage; nothing is cached. An optional key
//! prefix lets several facades share one base storage without collisions.
//!
//! [`AsyncTypedStorage`] (requires the `async` feature) is the same facade
//! over an [`AsyncBaseStorage`](crate::storage::AsyncBaseStorage).

#[cfg(feature = "async")]
mod async_store;
mod error;
mod spec;
mod store;

#[cfg(feature = "async")]
pub use async_store::AsyncTypedStorage;
pub use error::{Operation, TypedStorageError};
pub use spec::{KeyValue, Spec, SpecKey};
pub use store::TypedStorage;

/// Maps logical keys to physical keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct KeyPrefix(Option<String>);

impl KeyPrefix {
    /// An empty prefix is the same as no prefix.
    pub(crate) fn new(prefix: Option<String>) -> Self {
        Self(prefix.filter(|p| !p.is_empty()))
    }

    pub(crate) fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// `key` -> `{prefix}_{key}`
    pub(crate) fn apply(&self, key: &str) -> String {
        match &self.0 {
            Some(prefix) => format!("{}_{}", prefix, key),
            None => key.to_string(),
        }
    }
}
