//! Validator adapters for schema libraries.
//!
//! Each adapter turns a library's "parse this unknown value" entry point
//! into a [`Validator`](super::Validator) and wraps it in a
//! [`JsonWithValidation`](super::JsonWithValidation) codec. The core
//! combinators never depend on any of them.
//!
//! - [`serde_adapter`]: validation through `serde::Deserialize`

pub mod serde_adapter;

pub use serde_adapter::{SerdeValidator, json, json_with_serde};
