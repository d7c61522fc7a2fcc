//! Typed key-value storage over plain string stores.
//!
//! typed-kv turns any string-keyed, string-valued store (an in-memory map,
//! browser `localStorage`, or your own backend) into a typed store. Each
//! key is declared once together with the codec that converts its value to
//! a string and back, and the compiler rejects keys that were never
//! declared.
//!
//! # Module Organization
//!
//! - [`codec`]: the [`Codec`] contract and the built-in catalog (string,
//!   number, integer, boolean, array, tuple, validated JSON)
//! - [`storage`]: the base storage contracts and their implementations
//! - [`typed`]: the typed get/set/remove facade and the [`typed_spec!`] macro
//! - [`config`]: [`StorageOptions`], optionally loaded from TOML
//! - [`error`]: unified error types
//! - [`prelude`]: convenient re-exports
//! - `logging`: conditional logging macros (internal)
//!
//! # Feature Flags
//!
//! - `async` (default): async base storage contract and [`AsyncTypedStorage`]
//! - `bigint` (default): arbitrary-precision integer codec
//! - `config`: load [`StorageOptions`] from TOML files
//! - `browser`: `localStorage` / `sessionStorage` backends via `web-sys`
//! - `logging`: library-level tracing (consumers provide their own subscriber)
//! - `full`: all of the above
//!
//! # Example
//!
//! ```ignore
//! use typed_kv::prelude::*;
//!
//! typed_spec! {
//!     pub struct AppSpec {
//!         visits: NumberCodec = codec::number() => Visits,
//!         tags: ArrayOf<StringCodec> = codec::array_of(codec::string()) => Tags,
//!     }
//! }
//!
//! let base = MemoryStorage::new();
//! let storage = TypedStorage::new(AppSpec::new(), &base).with_key_prefix("app");
//!
//! storage.set::<Tags>(&vec!["rust".to_string()])?;
//! assert_eq!(storage.get::<Tags>()?, Some(vec!["rust".to_string()]));
//! assert_eq!(storage.get::<Visits>()?, None);
//! ```

pub mod codec;
pub mod config;
pub mod error;
mod logging;
pub mod prelude;
pub mod storage;
pub mod typed;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the core contracts at crate root for convenience
pub use codec::{Codec, CodecError};
#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::StorageOptions;
#[cfg(feature = "async")]
pub use storage::AsyncBaseStorage;
pub use storage::{BaseStorage, MemoryStorage, MemoryStorageError};
#[cfg(feature = "async")]
pub use typed::AsyncTypedStorage;
pub use typed::{KeyValue, Operation, Spec, SpecKey, TypedStorage, TypedStorageError};
