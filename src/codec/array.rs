//! Homogeneous array codec.
//!
//! Arrays are stored as a JSON array of strings, each string being the
//! element codec's own encoding. Nested arrays therefore nest as JSON
//! strings, not as nested JSON arrays.

use serde_json::Value;

use super::Codec;
use super::error::{CodecError, ContainerKind};
use super::json::json_kind;

/// Codec for `Vec<C::Value>` built from an element codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayOf<C> {
    element: C,
}

impl<C> ArrayOf<C> {
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<C: Codec> Codec for ArrayOf<C> {
    type Value = Vec<C::Value>;

    fn encode(&self, values: &Vec<C::Value>) -> Result<String, CodecError> {
        let encoded = values
            .iter()
            .map(|value| self.element.encode(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::to_string(&encoded)?)
    }

    fn decode(&self, raw: &str) -> Result<Vec<C::Value>, CodecError> {
        parse_string_array(raw, ContainerKind::Array)?
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.element
                    .decode(entry)
                    .map_err(|source| CodecError::element(ContainerKind::Array, index, source))
            })
            .collect()
    }
}

/// Parse `raw` as a JSON array whose entries are all strings.
///
/// Every failure here is a container error for `kind`.
pub(crate) fn parse_string_array(
    raw: &str,
    kind: ContainerKind,
) -> Result<Vec<String>, CodecError> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|e| CodecError::container(kind, e.to_string()))?;

    let items = match parsed {
        Value::Array(items) => items,
        other => {
            return Err(CodecError::container(
                kind,
                format!("expected a JSON array, found {}", json_kind(&other)),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(entry) => Ok(entry),
            other => Err(CodecError::container(
                kind,
                format!("entry {index} is {}, not a string", json_kind(&other)),
            )),
        })
        .collect()
}
