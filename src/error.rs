//! Unified error type for the typed-kv library.
//!
//! Each module has its own error type; [`Error`] wraps all of them so
//! application code can use a single error type with `?`.

use thiserror::Error;

use crate::codec::CodecError;
#[cfg(feature = "config")]
use crate::config::ConfigError;
#[cfg(feature = "browser")]
use crate::storage::BrowserStorageError;
use crate::storage::MemoryStorageError;
use crate::typed::TypedStorageError;

/// Unified error type for all typed-kv operations.
///
/// # Example
///
/// ```ignore
/// use typed_kv::prelude::*;
///
/// fn bump(storage: &TypedStorage<CounterSpec, &MemoryStorage>) -> typed_kv::Result<f64> {
///     let next = storage.get::<Count>()?.unwrap_or(0.0) + 1.0;
///     storage.set::<Count>(&next)?;
///     Ok(next)
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A typed get/set/remove/clear failed.
    #[error(transparent)]
    Storage(#[from] TypedStorageError),

    /// Encoding or decoding outside a typed storage call.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Direct use of the in-memory base storage.
    #[error(transparent)]
    Memory(#[from] MemoryStorageError),

    /// Direct use of a browser base storage.
    #[cfg(feature = "browser")]
    #[error(transparent)]
    Browser(#[from] BrowserStorageError),

    /// Loading storage options.
    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a typed storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Returns `true` if a codec failed, either directly or inside a typed
    /// storage call.
    pub fn is_codec(&self) -> bool {
        match self {
            Self::Codec(_) => true,
            Self::Storage(err) => err.codec_error().is_some(),
            _ => false,
        }
    }
}
