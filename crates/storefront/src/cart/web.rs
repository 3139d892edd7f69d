//! `window.localStorage` backend for `wasm32` builds.

use super::backend::{PersistenceBackend, PersistenceError};

/// Persistence over the page's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    /// Open the current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Unavailable` when there is no window or the
    /// browser refuses access to storage (privacy settings, sandboxed frames).
    pub fn from_window() -> Result<Self, PersistenceError> {
        let window = web_sys::window()
            .ok_or_else(|| PersistenceError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| PersistenceError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl PersistenceBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage
            .get_item(key)
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        // Browsers report quota errors as a generic DOMException.
        self.storage
            .set_item(key, value)
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))
    }
}
