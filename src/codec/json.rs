//! JSON codec with a pluggable validation step.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use super::Codec;
use super::error::CodecError;

/// Something that can produce a `T` from an arbitrary parsed JSON value.
///
/// This is the only surface a schema or validation library needs to offer;
/// adapters for specific libraries live in [`crate::codec::adapters`].
/// Any `Fn(Value) -> anyhow::Result<T>` closure is a validator.
pub trait Validator<T> {
    fn validate(&self, value: Value) -> anyhow::Result<T>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(Value) -> anyhow::Result<T>,
{
    fn validate(&self, value: Value) -> anyhow::Result<T> {
        self(value)
    }
}

/// Codec that stores values as JSON and checks them with a [`Validator`]
/// when reading them back.
pub struct JsonWithValidation<T, V> {
    validator: V,
    name: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, V> JsonWithValidation<T, V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            name: None,
            _marker: PhantomData,
        }
    }

    /// Name the validator in decode error messages.
    ///
    /// An empty name is the same as no name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<T, V> std::fmt::Debug for JsonWithValidation<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonWithValidation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T, V> Codec for JsonWithValidation<T, V>
where
    T: Serialize,
    V: Validator<T>,
{
    type Value = T;

    fn encode(&self, value: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        let parsed: Value = serde_json::from_str(raw)
            .map_err(|e| CodecError::decode("JSON", e.to_string()))?;

        self.validator
            .validate(parsed)
            .map_err(|source| CodecError::Validation {
                validator: self.name.clone(),
                source,
            })
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(value: Value) -> anyhow::Result<u32> {
        let n = value
            .as_u64()
            .ok_or_else(|| anyhow::anyhow!("expected a non-negative integer, got {}", value))?;
        anyhow::ensure!(n > 0, "expected a positive integer");
        Ok(u32::try_from(n)?)
    }

    #[test]
    fn validated_roundtrip() -> Result<(), CodecError> {
        let codec = JsonWithValidation::<u32, _>::new(positive)
            .named("positive");
        assert_eq!(codec.encode(&7)?, "7");
        assert_eq!(codec.decode("7")?, 7);
        Ok(())
    }

    #[test]
    fn validator_failure_is_wrapped_with_name() {
        let codec = JsonWithValidation::<u32, _>::new(positive)
            .named("positive");
        let result = codec
            .decode("0")
            .map_err(|e| (e.is_validation(), e.to_string()));
        assert_eq!(
            result,
            Err((
                true,
                "Validation failed in validator 'positive': expected a positive integer"
                    .to_string()
            ))
        );
    }

    #[test]
    fn empty_name_is_no_name() {
        let codec = JsonWithValidation::<u32, _>::new(positive).named("");
        assert_eq!(codec.name(), None);
        let message = codec.decode("-3").map_err(|e| e.to_string());
        assert_eq!(
            message,
            Err("Validation failed: expected a non-negative integer, got -3".to_string())
        );
    }

    #[test]
    fn malformed_json_never_reaches_the_validator() {
        let codec = JsonWithValidation::<u32, _>::new(|_: Value| -> anyhow::Result<u32> {
            anyhow::bail!("validator should not run")
        });
        assert!(matches!(
            codec.decode("{not json"),
            Err(CodecError::Decode {
                expected: "JSON",
                ..
            })
        ));
    }
}
