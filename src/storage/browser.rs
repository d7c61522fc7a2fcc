//! Browser Web Storage (`localStorage` / `sessionStorage`) backends.

use std::fmt;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::logging::trace;

use super::BaseStorage;

/// Which Web Storage area to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageArea::Local => f.write_str("localStorage"),
            StorageArea::Session => f.write_str("sessionStorage"),
        }
    }
}

/// Errors from browser storage.
#[derive(Error, Debug)]
pub enum BrowserStorageError {
    #[error("{0} is not available in this context")]
    Unavailable(StorageArea),

    /// The browser threw, e.g. `QuotaExceededError` on write.
    #[error("{area} error: {message}")]
    Js { area: StorageArea, message: String },
}

/// A [`BaseStorage`] over one of the browser's Web Storage areas.
///
/// Web Storage is a per-origin singleton, so facades sharing it should use
/// distinct key prefixes.
pub struct BrowserStorage {
    area: StorageArea,
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`.
    pub fn local() -> Result<Self, BrowserStorageError> {
        Self::open(StorageArea::Local)
    }

    /// Open `window.sessionStorage`.
    pub fn session() -> Result<Self, BrowserStorageError> {
        Self::open(StorageArea::Session)
    }

    pub fn open(area: StorageArea) -> Result<Self, BrowserStorageError> {
        let window = web_sys::window()
            .ok_or(BrowserStorageError::Unavailable(area))?;
        let storage = match area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        }
        .map_err(|e| js_error(area, e))?
        .ok_or(BrowserStorageError::Unavailable(area))?;

        Ok(Self { area, storage })
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }
}

impl fmt::Debug for BrowserStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserStorage")
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

fn js_error(area: StorageArea, value: JsValue) -> BrowserStorageError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    BrowserStorageError::Js { area, message }
}

impl BaseStorage for BrowserStorage {
    type Error = BrowserStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, BrowserStorageError> {
        trace!(area = %self.area, key, "browser get");
        self.storage
            .get_item(key)
            .map_err(|e| js_error(self.area, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrowserStorageError> {
        trace!(area = %self.area, key, bytes = value.len(), "browser set");
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error(self.area, e))
    }

    fn remove(&self, key: &str) -> Result<(), BrowserStorageError> {
        trace!(area = %self.area, key, "browser remove");
        self.storage
            .remove_item(key)
            .map_err(|e| js_error(self.area, e))
    }

    fn clear(&self) -> Result<(), BrowserStorageError> {
        trace!(area = %self.area, "browser clear");
        self.storage.clear().map_err(|e| js_error(self.area, e))
    }
}
