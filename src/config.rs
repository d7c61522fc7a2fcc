//! Typed storage options.
//!
//! Options can be built in code or, with the `config` feature, loaded from
//! a TOML document:
//!
//! ```toml
//! key_prefix = "editor"
//! ```

use serde::{Deserialize, Serialize};

/// Options for [`TypedStorage`](crate::TypedStorage) and its async variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageOptions {
    /// When set and non-empty, logical key `k` is stored as `{key_prefix}_{k}`.
    pub key_prefix: Option<String>,
}

impl StorageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

#[cfg(feature = "config")]
mod toml_loader {
    use std::path::Path;

    use thiserror::Error;

    use super::StorageOptions;

    /// Configuration error.
    #[derive(Error, Debug)]
    pub enum ConfigError {
        #[error("Failed to read config file '{path}': {source}")]
        Io {
            path: String,
            source: std::io::Error,
        },

        #[error("Failed to parse config: {0}")]
        Parse(#[from] toml::de::Error),
    }

    impl StorageOptions {
        /// Load options from a TOML file.
        pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Self::from_toml_str(&content)
        }

        /// Parse options from a TOML string.
        pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
            Ok(toml::from_str(content)?)
        }
    }
}

#[cfg(feature = "config")]
pub use toml_loader::ConfigError;
