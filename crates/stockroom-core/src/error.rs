//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── ValidationError  - Item input rejected before mutation            │
//! │  ├── AuthError        - Credential mismatch                            │
//! │  └── MoneyParseError  - Price text could not be read                   │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Backend / corrupt blob / wrapped domain errors │
//! │                                                                         │
//! │  inventory-app errors                                                  │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → Frontend message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found on update or delete is deliberately absent from this list:
//! repositories report it as an empty result, never as an error.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any storage access, so a rejected input never changes
/// persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., unparsable price text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Auth Error
// =============================================================================

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No user matches the given username and password.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Errors from reading decimal price text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

impl From<MoneyParseError> for ValidationError {
    fn from(err: MoneyParseError) -> Self {
        ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
