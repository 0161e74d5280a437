//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (io::Error, poisoned lock)                             │
//! │  Corrupt blob    (serde_json::Error)                                    │
//! │  Domain errors   (ValidationError, AuthError)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key / path context                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in inventory-app) ← Serialized for frontend                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Corrupt Data Policy
//! A stored value that is present but does not parse is an error, never an
//! empty collection. Operations that meet one fail without writing, so the
//! bad blob stays on disk for inspection instead of being overwritten by `[]`.

use std::path::PathBuf;

use stockroom_core::{AuthError, ValidationError};
use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend itself failed (e.g., a poisoned lock).
    #[error("Storage backend failed: {0}")]
    Backend(String),

    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value exists but is not valid JSON for its type.
    #[error("Stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file exists but is not a flat JSON object of strings.
    #[error("Store file {path} is corrupt: {source}")]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded.
    #[error("Failed to serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected before mutation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Credential mismatch.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl StoreError {
    /// Creates a Corrupt error for a given key.
    pub fn corrupt(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            source,
        }
    }

    /// Creates an Io error for a given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_message_names_key() {
        let source = serde_json::from_str::<Vec<u8>>("{oops").unwrap_err();
        let err = StoreError::corrupt("inventoryItems", source);
        assert!(err.to_string().starts_with("Stored value under 'inventoryItems' is corrupt"));
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let err: StoreError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid username or password.");
    }
}
