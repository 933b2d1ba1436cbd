//! Error types for the persisted-storage layer.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach UI callers. Stores log them and continue in
//! memory, so these variants exist for the storage adapters and their tests.

/// Failure reported by a [`crate::util::storage::KeyValueStorage`] adapter or
/// the snapshot codec layered on top of it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage substrate in this environment (SSR, private mode, disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The substrate refused the write (quota exceeded, security error).
    #[error("storage rejected write: {0}")]
    Rejected(String),
    /// A persisted value could not be decoded.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
    /// The stored snapshot was written by a newer client layout.
    #[error("snapshot version {0} is newer than supported")]
    NewerVersion(u32),
    /// The in-memory value could not be encoded.
    #[error("snapshot serialization failed: {0}")]
    Serialize(String),
}
