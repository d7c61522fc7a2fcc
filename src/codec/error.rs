//! Error types for codec operations.

use std::fmt;

use thiserror::Error;

/// The container shape a composite codec expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Tuple,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Array => f.write_str("array"),
            ContainerKind::Tuple => f.write_str("tuple"),
        }
    }
}

/// Errors that can occur while encoding or decoding a value.
///
/// Composite codecs keep container and element failures apart: a
/// [`CodecError::Container`] means the outer JSON shape was wrong, while a
/// [`CodecError::Element`] means the shape was fine but one entry was
/// rejected by its own codec.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to decode {expected}: {reason}")]
    Decode {
        expected: &'static str,
        reason: String,
    },

    #[error("Failed to decode {kind}: {reason}")]
    Container { kind: ContainerKind, reason: String },

    #[error("Failed to decode {kind} of specified type: element {index}: {source}")]
    Element {
        kind: ContainerKind,
        index: usize,
        source: Box<CodecError>,
    },

    #[error("Validation failed{}: {source:#}", validator_label(.validator))]
    Validation {
        validator: Option<String>,
        source: anyhow::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn validator_label(validator: &Option<String>) -> String {
    match validator {
        Some(name) => format!(" in validator '{}'", name),
        None => String::new(),
    }
}

impl CodecError {
    /// Create a decode error for a scalar value.
    pub fn decode(expected: &'static str, reason: impl Into<String>) -> Self {
        Self::Decode {
            expected,
            reason: reason.into(),
        }
    }

    /// Create a container-shape error.
    pub fn container(kind: ContainerKind, reason: impl Into<String>) -> Self {
        Self::Container {
            kind,
            reason: reason.into(),
        }
    }

    /// Wrap the failure of the element at `index`.
    pub fn element(kind: ContainerKind, index: usize, source: CodecError) -> Self {
        Self::Element {
            kind,
            index,
            source: Box::new(source),
        }
    }

    /// Returns `true` if the outer array/tuple shape was invalid.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container { .. })
    }

    /// Returns `true` if an array/tuple element failed its own codec.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    /// Returns `true` if a validator rejected the parsed value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
