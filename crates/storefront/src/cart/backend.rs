//! Key-value string storage the cart persists into.
//!
//! The browser's `localStorage` is the production backend (see
//! [`LocalStorageBackend`](super::web::LocalStorageBackend), `web` feature).
//! [`MemoryBackend`] keeps the same semantics in-process for tests and
//! non-browser hosts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Errors a persistence backend can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// The storage area cannot be reached (disabled, private mode, no window).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the storage quota.
    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Total bytes the store would hold after the write.
        needed: usize,
        /// Configured quota in bytes.
        quota: usize,
    },
}

/// Durable key-value string storage.
pub trait PersistenceBackend {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<T: PersistenceBackend + ?Sized> PersistenceBackend for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

impl<T: PersistenceBackend + ?Sized> PersistenceBackend for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// In-process storage with `localStorage` semantics.
///
/// Clones share the same storage area, the way every page of an origin sees
/// the same `localStorage`. A store built from one clone and a second store
/// built later from another clone behave like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<MemoryArea>>,
}

#[derive(Debug, Default)]
struct MemoryArea {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryArea {
    fn used_bytes_with(&self, key: &str, value: &str) -> usize {
        let others: usize = self
            .entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        others + key.len() + value.len()
    }
}

impl MemoryBackend {
    /// Create an empty storage area with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty storage area that rejects writes beyond `quota` bytes
    /// (keys plus values).
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        let backend = Self::default();
        backend.inner.borrow_mut().quota = Some(quota);
        backend
    }

    /// Make every read and write fail, or restore access.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    /// Drop the value stored under `key`.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.borrow_mut().entries.remove(key)
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let area = self.inner.borrow();
        if area.unavailable {
            return Err(PersistenceError::Unavailable("storage disabled".to_string()));
        }
        Ok(area.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut area = self.inner.borrow_mut();
        if area.unavailable {
            return Err(PersistenceError::Unavailable("storage disabled".to_string()));
        }
        if let Some(quota) = area.quota {
            let needed = area.used_bytes_with(key, value);
            if needed > quota {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        area.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("cartItems").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut backend = MemoryBackend::new();
        backend.set("cartItems", "[]").unwrap();
        assert_eq!(backend.get("cartItems").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_clones_share_storage() {
        let mut writer = MemoryBackend::new();
        let reader = writer.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(reader.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let mut backend = MemoryBackend::with_quota(10);
        backend.set("k", "12345").unwrap();
        backend.set("k", "123456789").unwrap();

        let err = backend.set("k", "1234567890").unwrap_err();
        assert_eq!(
            err,
            PersistenceError::QuotaExceeded {
                key: "k".to_string(),
                needed: 11,
                quota: 10,
            }
        );
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("123456789"));
    }

    #[test]
    fn test_unavailable_storage() {
        let mut backend = MemoryBackend::new();
        backend.set_unavailable(true);
        assert!(matches!(
            backend.get("k"),
            Err(PersistenceError::Unavailable(_))
        ));
        assert!(backend.set("k", "v").is_err());

        backend.set_unavailable(false);
        assert!(backend.set("k", "v").is_ok());
    }

    #[test]
    fn test_remove() {
        let mut backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        assert_eq!(backend.remove("k").as_deref(), Some("v"));
        assert!(backend.is_empty());
    }
}
