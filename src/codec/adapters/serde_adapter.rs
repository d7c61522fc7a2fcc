//! `serde::Deserialize` as a validator.
//!
//! A type's `Deserialize` impl is its schema: deserializing the parsed JSON
//! value either yields the typed value or a `serde_json::Error` describing
//! the mismatch, which becomes the validation error's cause.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::{JsonWithValidation, Validator};

/// Validator that deserializes the parsed JSON value into `T`.
pub struct SerdeValidator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeValidator<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Validator<T> for SerdeValidator<T> {
    fn validate(&self, value: Value) -> anyhow::Result<T> {
        Ok(serde_json::from_value(value)?)
    }
}

/// JSON codec validated by `T`'s `Deserialize` impl, named after `T`.
pub fn json_with_serde<T>() -> JsonWithValidation<T, SerdeValidator<T>>
where
    T: Serialize + DeserializeOwned,
{
    JsonWithValidation::new(SerdeValidator::new())
        .named(short_type_name::<T>())
}

/// Plain JSON codec for any serde type.
///
/// Same as [`json_with_serde`] but without a validator name in errors.
pub fn json<T>() -> JsonWithValidation<T, SerdeValidator<T>>
where
    T: Serialize + DeserializeOwned,
{
    JsonWithValidation::new(SerdeValidator::new())
}

/// `my_crate::models::User<u8>` -> `User<u8>`
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full
        .get(..base_end)
        .and_then(|base| base.rfind("::"))
        .map(|pos| pos + 2)
        .unwrap_or(0);
    full.get(start..).unwrap_or(full).to_string()
}
