//! Base storage contracts and implementations.
//!
//! A base storage is an opaque string-keyed, string-valued store. Typed
//! storage consumes it only through [`BaseStorage`] (blocking) or
//! [`AsyncBaseStorage`] (async, requires the `async` feature).
//!
//! Implementations:
//!
//! - [`MemoryStorage`]: map-backed, one independent key space per instance
//! - [`BrowserStorage`]: Web Storage `localStorage` / `sessionStorage`
//!   (requires the `browser` feature)

#[cfg(feature = "browser")]
mod browser;
mod memory;

use std::sync::Arc;

#[cfg(feature = "browser")]
pub use browser::{BrowserStorage, BrowserStorageError, StorageArea};
pub use memory::{MemoryStorage, MemoryStorageError};

/// Blocking string key-value store.
///
/// Methods take `&self` so one store can back several facades at once;
/// implementations use interior mutability where they need it.
pub trait BaseStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value at `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;

    /// Delete every key in the store.
    fn clear(&self) -> Result<(), Self::Error>;
}

impl<T: BaseStorage + ?Sized> BaseStorage for &T {
    type Error = T::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear()
    }
}

impl<T: BaseStorage + ?Sized> BaseStorage for Box<T> {
    type Error = T::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear()
    }
}

impl<T: BaseStorage + ?Sized> BaseStorage for Arc<T> {
    type Error = T::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear()
    }
}

/// Async string key-value store, same contract as [`BaseStorage`].
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncBaseStorage: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    async fn remove(&self, key: &str) -> Result<(), Self::Error>;

    async fn clear(&self) -> Result<(), Self::Error>;
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T: AsyncBaseStorage + ?Sized> AsyncBaseStorage for Arc<T> {
    type Error = T::Error;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key).await
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear().await
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<'a, T: AsyncBaseStorage + ?Sized> AsyncBaseStorage for &'a T {
    type Error = T::Error;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key).await
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear().await
    }
}
