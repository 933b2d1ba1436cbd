//! Key-value storage substrate behind the persisted collection stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores only see [`KeyValueStorage`]. The browser build talks to
//! `window.localStorage`; SSR and tests use [`MemoryStorage`]. Every browser
//! failure (no window, private mode, quota) surfaces as a [`StorageError`] so
//! callers can fall back to in-memory behavior.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

/// Synchronous string key-value store.
pub trait KeyValueStorage: Send + Sync + Debug {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the substrate cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] or [`StorageError::Rejected`].
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the substrate cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle held by each store.
pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Browser `localStorage`. Resolved on every call so the handle stays `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    #[must_use]
    pub fn shared() -> SharedStorage {
        Arc::new(Self)
    }
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

impl KeyValueStorage for LocalStorage {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process storage for SSR and tests.
///
/// Clones share the same entries, so a test can keep one handle and give
/// another to a store. `set_available(false)` simulates a browser that
/// refuses storage access.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    available: Arc<AtomicBool>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that reports [`StorageError::Unavailable`] for every call.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    #[must_use]
    pub fn shared(&self) -> SharedStorage {
        Arc::new(self.clone())
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable);
        }
        self.entries.lock().map_err(|_| StorageError::Unavailable)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
