//! Versioned JSON snapshots written through a [`KeyValueStorage`].
//!
//! Each collection is stored under its own key as
//! `{"state": <snapshot>, "version": 0}`. A [`SnapshotSlot`] tracks whether a
//! key has been read this session and never writes a key it has not read,
//! so a store can't overwrite a snapshot it never saw. Keys holding a newer
//! client's layout are left alone for the whole session.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStorage, SharedStorage};
use crate::error::StorageError;

/// Snapshot layout version written by this client.
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

/// Load and decode the snapshot stored under `key`, `Ok(None)` when absent.
///
/// # Errors
///
/// Propagates storage errors, returns [`StorageError::Malformed`] when the
/// stored value does not decode and [`StorageError::NewerVersion`] when it
/// was written with a layout newer than [`SNAPSHOT_VERSION`].
pub fn load_snapshot<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| StorageError::Malformed(e.to_string()))?;
    if envelope.version > SNAPSHOT_VERSION {
        return Err(StorageError::NewerVersion(envelope.version));
    }
    serde_json::from_value(envelope.state).map(Some).map_err(|e| StorageError::Malformed(e.to_string()))
}

/// Encode `state` and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] when encoding fails, otherwise
/// propagates the storage error.
pub fn save_snapshot<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, state: &T) -> Result<(), StorageError> {
    let envelope = Envelope { state, version: SNAPSHOT_VERSION };
    let raw = serde_json::to_string(&envelope).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set(key, &raw)
}

/// Read status of a [`SnapshotSlot`] for this session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Not read yet, or the last read could not reach storage.
    Unread,
    /// Read (or found unreadable garbage); writes are allowed.
    Read,
    /// Holds a newer client's snapshot; writes are suppressed.
    Foreign,
}

/// One storage key owned by one store.
#[derive(Clone, Debug)]
pub struct SnapshotSlot {
    storage: SharedStorage,
    key: String,
    state: SlotState,
}

impl SnapshotSlot {
    pub fn new(storage: SharedStorage, key: impl Into<String>) -> Self {
        Self { storage, key: key.into(), state: SlotState::Unread }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn state(&self) -> SlotState {
        self.state
    }

    /// Whether a read has settled (successfully, malformed or foreign).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.state != SlotState::Unread
    }

    /// Read the stored snapshot. Failures are logged and yield `None`; an
    /// unreachable storage leaves the slot `Unread` so a later read retries.
    pub fn read<T: DeserializeOwned>(&mut self) -> Option<T> {
        match load_snapshot(self.storage.as_ref(), &self.key) {
            Ok(snapshot) => {
                self.state = SlotState::Read;
                snapshot
            }
            Err(StorageError::NewerVersion(version)) => {
                leptos::logging::warn!("{}: snapshot version {version} is newer, leaving it untouched", self.key);
                self.state = SlotState::Foreign;
                None
            }
            Err(e @ StorageError::Malformed(_)) => {
                leptos::logging::warn!("{}: discarding snapshot: {e}", self.key);
                self.state = SlotState::Read;
                None
            }
            Err(e) => {
                leptos::logging::warn!("{}: snapshot not read: {e}", self.key);
                None
            }
        }
    }

    /// Write `state` if the slot has been read and is not foreign.
    pub fn write<T: Serialize>(&self, state: &T) {
        if self.state != SlotState::Read {
            return;
        }
        if let Err(e) = save_snapshot(self.storage.as_ref(), &self.key, state) {
            leptos::logging::warn!("{}: snapshot not persisted: {e}", self.key);
        }
    }
}
