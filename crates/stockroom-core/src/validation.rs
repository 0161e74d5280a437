//! # Validation Module
//!
//! Input validation for item and search input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  ├── `required` / `min` attributes                                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any storage access)                      │
//! │  ├── name non-empty                                                    │
//! │  ├── quantity >= 1                                                     │
//! │  └── price > 0                                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository read-modify-write                                 │
//! │  └── only ever sees validated input                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::validate_item_input;
//! use stockroom_core::{ItemInput, Money};
//!
//! let ok = ItemInput::new("Bolt", 10, Money::from_cents(150));
//! assert!(validate_item_input(&ok).is_ok());
//!
//! let free = ItemInput::new("Bolt", 10, Money::zero());
//! assert!(validate_item_input(&free).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ItemInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Item Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly greater than zero (no free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a complete item submission.
///
/// Checks run in form order (name, quantity, price) and stop at the first
/// failure.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Item Form: Submit                                                      │
/// │                                                                         │
/// │  { name: "Bolt", quantity: 0, price: "1.50" }                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_item_input ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── qty < 1?    → "Quantity must be 1+ and Price must be..."     │
/// │       ├── price <= 0? → same message, nothing written                  │
/// │       │                                                                 │
/// │       └── OK → repository upsert                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_item_input(input: &ItemInput) -> ValidationResult<()> {
    validate_item_name(&input.name)?;
    validate_quantity(input.quantity)?;
    validate_price(input.price)?;
    Ok(())
}

// =============================================================================
// Search Validators
// =============================================================================

/// Validates a search term against a length cap.
///
/// ## Rules
/// - Can be empty (returns the full collection)
/// - At most `max_len` characters ([`crate::MAX_SEARCH_TERM_LEN`] by default)
///
/// The term is returned untouched: surrounding whitespace is part of the
/// substring being matched.
pub fn validate_search_term(term: &str, max_len: usize) -> ValidationResult<&str> {
    if term.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: max_len,
        });
    }

    Ok(term)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_SEARCH_TERM_LEN;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Bolt").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_item_input_reports_first_failure() {
        let input = ItemInput::new("", 0, Money::zero());
        let err = validate_item_input(&input).unwrap_err();
        assert_eq!(err.field(), "name");

        let input = ItemInput::new("Bolt", 0, Money::zero());
        let err = validate_item_input(&input).unwrap_err();
        assert_eq!(err.field(), "quantity");

        let input = ItemInput::new("Bolt", 1, Money::zero());
        let err = validate_item_input(&input).unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("", MAX_SEARCH_TERM_LEN).unwrap(), "");
        assert_eq!(validate_search_term(" bo ", MAX_SEARCH_TERM_LEN).unwrap(), " bo ");
        assert!(validate_search_term(&"x".repeat(100), MAX_SEARCH_TERM_LEN).is_ok());
        assert!(validate_search_term(&"x".repeat(101), MAX_SEARCH_TERM_LEN).is_err());
        assert!(validate_search_term("bolts", 3).is_err());
    }
}
