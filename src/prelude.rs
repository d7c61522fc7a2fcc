//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use typed_kv::prelude::*;
//!
//! let base = MemoryStorage::new();
//! let storage = TypedStorage::new(AppSpec::new(), &base);
//! storage.set::<Visits>(&1.0)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Codecs
pub use crate::codec::{
    self, ArrayOf, BooleanCodec, Codec, CodecError, IntegerCodec, JsonWithValidation,
    NumberCodec, StringCodec, TupleOf, Validator,
};

// Base storage
pub use crate::storage::{BaseStorage, MemoryStorage, MemoryStorageError};

// Typed facade
pub use crate::config::StorageOptions;
pub use crate::typed::{Operation, Spec, SpecKey, TypedStorage, TypedStorageError};
pub use crate::typed_spec;

// Async facade (requires "async" feature). `AsyncBaseStorage` is left out
// so that `get`/`set` on a store implementing both contracts stay unambiguous.
#[cfg(feature = "async")]
pub use crate::typed::AsyncTypedStorage;
