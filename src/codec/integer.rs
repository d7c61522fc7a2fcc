//! Decimal integer codecs, including arbitrary precision.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use super::Codec;
use super::error::CodecError;

/// Codec for integers stored as plain decimal text.
///
/// Decoding accepts `[+-]?[0-9]+` only (surrounding whitespace is ignored),
/// then hands the digits to the target type's parser, so fractions,
/// exponents, hex and suffixed literals such as `10n` are all rejected, and
/// so are values outside the target type's range.
pub struct IntegerCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> IntegerCodec<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IntegerCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntegerCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntegerCodec<T> {}

impl<T> std::fmt::Debug for IntegerCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntegerCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T> Codec for IntegerCodec<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    type Value = T;

    fn encode(&self, value: &T) -> Result<String, CodecError> {
        Ok(value.to_string())
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        let literal = integer_literal(raw).ok_or_else(|| {
            CodecError::decode("integer", format!("{:?} is not an integer literal", raw))
        })?;

        literal
            .parse::<T>()
            .map_err(|e| CodecError::decode("integer", format!("{:?}: {}", raw, e)))
    }
}

/// Validate the integer grammar and return the text to parse.
///
/// A leading `+` is stripped since not every integer parser accepts it.
fn integer_literal(raw: &str) -> Option<&str> {
    let text = raw.trim();
    let (literal, digits) = match text.strip_prefix('-') {
        Some(digits) => (text, digits),
        None => {
            let unsigned = text.strip_prefix('+').unwrap_or(text);
            (unsigned, unsigned)
        }
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(literal)
}
