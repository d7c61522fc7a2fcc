//! Error type for typed storage operations.

use std::error::Error as StdError;
use std::fmt;

use crate::codec::CodecError;
use crate::logging::debug;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The facade operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Set,
    Remove,
    Clear,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => f.write_str("get"),
            Operation::Set => f.write_str("set"),
            Operation::Remove => f.write_str("remove"),
            Operation::Clear => f.write_str("clear"),
        }
    }
}

/// A typed storage operation failed.
///
/// Names the operation and the logical key, and keeps the underlying codec
/// or base storage error as its [`source`](StdError::source). The display
/// message appends the cause's message when it has one.
#[derive(Debug)]
pub struct TypedStorageError {
    operation: Operation,
    key: String,
    cause: BoxError,
}

impl TypedStorageError {
    pub fn new(operation: Operation, key: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        let err = Self {
            operation,
            key: key.into(),
            cause: cause.into(),
        };
        debug!(
            operation = %err.operation,
            key = %err.key,
            cause = %err.cause,
            "typed storage operation failed"
        );
        err
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The logical (unprefixed) key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// The codec error behind this failure, if a codec raised it.
    pub fn codec_error(&self) -> Option<&CodecError> {
        self.cause.downcast_ref::<CodecError>()
    }

    /// Returns `true` if a stored value exists but could not be decoded.
    pub fn is_corrupt(&self) -> bool {
        self.operation == Operation::Get && self.codec_error().is_some()
    }

    /// Consume the error, returning its cause.
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl fmt::Display for TypedStorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { operation, key, .. } = self;
        write!(f, "Failed to {operation} value for key '{key}'")?;
        let cause = self.cause.to_string();
        if !cause.is_empty() {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl StdError for TypedStorageError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::codec::ContainerKind;

    #[derive(Debug)]
    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl StdError for Silent {}

    #[test]
    fn message_names_operation_key_and_cause() {
        let err = TypedStorageError::new(
            Operation::Get,
            "tags",
            CodecError::container(ContainerKind::Array, "expected a JSON array, found number"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to get value for key 'tags': Failed to decode array: expected a JSON array, found number"
        );
        assert!(err.is_corrupt());
        assert!(err.codec_error().is_some_and(CodecError::is_container));
        assert!(err.source().is_some());
    }

    #[test]
    fn empty_cause_message_is_omitted() {
        let err = TypedStorageError::new(Operation::Remove, "token", Silent);
        assert_eq!(err.to_string(), "Failed to remove value for key 'token'");
        assert!(err.codec_error().is_none());
        assert!(!err.is_corrupt());
    }
}
