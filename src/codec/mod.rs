//! Value codecs: typed values to strings and back.
//!
//! A [`Codec`] pairs an `encode` and a `decode` function for one value
//! type, with the round-trip law `decode(encode(x)) == x` for every value
//! it supports. Decoding never falls back to a default; invalid text is
//! always a [`CodecError`].
//!
//! # Module Organization
//!
//! - [`error`]: Error types for codec operations
//! - `primitive`: string, number and boolean codecs
//! - `integer`: decimal integer codecs, including arbitrary precision
//! - `array`, `tuple`: combinators building codecs from element codecs
//! - `json`: JSON codec with a pluggable [`Validator`]
//! - [`adapters`]: validators backed by schema libraries
//!
//! # Example
//!
//! ```ignore
//! use typed_kv::codec::{self, Codec};
//!
//! let scores = codec::array_of(codec::number());
//! let text = scores.encode(&vec![1.0, 2.5])?;
//! assert_eq!(text, r#"["1","2.5"]"#);
//! assert_eq!(scores.decode(&text)?, vec![1.0, 2.5]);
//! ```

pub mod adapters;
mod array;
pub mod error;
mod integer;
mod json;
mod primitive;
mod tuple;

use std::sync::Arc;

pub use adapters::{SerdeValidator, json, json_with_serde};
pub use array::ArrayOf;
pub use error::{CodecError, ContainerKind};
pub use integer::IntegerCodec;
pub use json::{JsonWithValidation, Validator};
pub use primitive::{BooleanCodec, NumberCodec, StringCodec};
pub use tuple::{TupleCodecs, TupleOf};

/// Conversion between a typed value and its string representation.
pub trait Codec {
    type Value;

    fn encode(&self, value: &Self::Value) -> Result<String, CodecError>;

    fn decode(&self, raw: &str) -> Result<Self::Value, CodecError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Result<String, CodecError> {
        (**self).encode(value)
    }

    fn decode(&self, raw: &str) -> Result<Self::Value, CodecError> {
        (**self).decode(raw)
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Result<String, CodecError> {
        (**self).encode(value)
    }

    fn decode(&self, raw: &str) -> Result<Self::Value, CodecError> {
        (**self).decode(raw)
    }
}

impl<C: Codec + ?Sized> Codec for Arc<C> {
    type Value = C::Value;

    fn encode(&self, value: &Self::Value) -> Result<String, CodecError> {
        (**self).encode(value)
    }

    fn decode(&self, raw: &str) -> Result<Self::Value, CodecError> {
        (**self).decode(raw)
    }
}

/// Identity codec for strings.
pub const fn string() -> StringCodec {
    StringCodec
}

/// `f64` codec that round-trips NaN, the infinities and negative zero.
pub const fn number() -> NumberCodec {
    NumberCodec
}

/// Boolean codec using the JSON literals `true` / `false`.
pub const fn boolean() -> BooleanCodec {
    BooleanCodec
}

/// Decimal codec for any integer type with `FromStr` and `Display`.
pub const fn integer<T>() -> IntegerCodec<T> {
    IntegerCodec::new()
}

/// Arbitrary-precision integer codec.
#[cfg(feature = "bigint")]
pub const fn bigint() -> IntegerCodec<num_bigint::BigInt> {
    IntegerCodec::new()
}

/// Codec for a `Vec` whose elements use `element`.
pub fn array_of<C: Codec>(element: C) -> ArrayOf<C> {
    ArrayOf::new(element)
}

/// Codec for a fixed-length tuple, one codec per position.
pub fn tuple_of<T: TupleCodecs>(codecs: T) -> TupleOf<T> {
    TupleOf::new(codecs)
}

/// JSON codec whose decoded values must pass `validator`.
///
/// `name`, when given and non-empty, appears in validation error messages.
pub fn json_with_validation<T, V>(validator: V, name: Option<&str>) -> JsonWithValidation<T, V>
where
    V: Validator<T>,
{
    let codec = JsonWithValidation::new(validator);
    match name {
        Some(name) => codec.named(name),
        None => codec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_codecs_are_codecs() -> Result<(), CodecError> {
        let boxed: Box<dyn Codec<Value = bool>> = Box::new(boolean());
        let shared = Arc::new(number());
        assert_eq!(boxed.encode(&true)?, "true");
        assert_eq!(shared.decode("4")?, 4.0);
        assert_eq!((&shared).encode(&4.0)?, "4");
        Ok(())
    }

    #[test]
    fn validation_constructor_names() {
        let validate = |value: serde_json::Value| -> anyhow::Result<String> {
            value
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| anyhow::anyhow!("expected a string"))
        };
        let labelled = json_with_validation::<String, _>(validate, Some("label"));
        let empty = json_with_validation::<String, _>(validate, Some(""));
        let unnamed = json_with_validation::<String, _>(validate, None);
        assert_eq!(labelled.name(), Some("label"));
        assert_eq!(empty.name(), None);
        assert_eq!(unnamed.name(), None);
    }
}
