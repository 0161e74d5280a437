//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('save_item')                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── StoreError::Corrupt { .. } ────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Validation Error? ─── ValidationError ────────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR",                                          │
//! │    "message": "Quantity must be 1+ and Price must be greater than 0." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure ends up as a user-visible message; persisted state is left
//! as it was before the command ran.

use serde::Serialize;
use stockroom_core::ValidationError;
use stockroom_store::{ExportError, StoreError};

/// Message shown when quantity or price is out of range.
pub const ITEM_RANGE_MESSAGE: &str = "Quantity must be 1+ and Price must be greater than 0.";

/// API error returned from app commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "AUTH_ERROR",
///   "message": "Invalid username or password."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Storage backend failed or holds corrupt data
    StorageError,

    /// Command needs a logged-in user
    Unauthorized,

    /// Credentials rejected
    AuthError,

    /// Export could not be produced
    ExportError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Please log in first.")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MustBePositive { .. } => ApiError::validation(ITEM_RANGE_MESSAGE),
            ValidationError::InvalidFormat { ref field, .. }
                if field == "price" || field == "quantity" =>
            {
                ApiError::validation(ITEM_RANGE_MESSAGE)
            }
            ValidationError::Required { field } => {
                ApiError::validation(format!("Item {} is required.", field))
            }
            ValidationError::TooLong { field, max } => ApiError::validation(format!(
                "The {} term must be at most {} characters.",
                field, max
            )),
            ValidationError::InvalidFormat { field, reason } => {
                ApiError::validation(format!("Invalid {}: {}", field, reason))
            }
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::from(e),
            StoreError::Auth(e) => ApiError::new(ErrorCode::AuthError, e.to_string()),
            StoreError::Corrupt { ref key, .. } => {
                // Log the actual error but return a generic message
                tracing::error!(key = %key, "Stored data is corrupt: {}", err);
                ApiError::new(
                    ErrorCode::StorageError,
                    format!("Stored data under \"{}\" is unreadable", key),
                )
            }
            StoreError::CorruptFile { ref path, .. } => {
                tracing::error!(path = %path.display(), "Store file is corrupt: {}", err);
                ApiError::new(ErrorCode::StorageError, "Store file is unreadable")
            }
            StoreError::Backend(_) | StoreError::Io { .. } | StoreError::Serialization { .. } => {
                tracing::error!("Storage operation failed: {}", err);
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

/// Converts export errors to API errors.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Empty => ApiError::new(ErrorCode::ExportError, err.to_string()),
            ExportError::Store(e) => ApiError::from(e),
            ExportError::Serialize(_) | ExportError::Io { .. } => {
                tracing::error!("Export failed: {}", err);
                ApiError::new(ErrorCode::ExportError, "Failed to export inventory")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
