//! # Money Module
//!
//! Provides the `Money` type for item prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price typed into the item form as "0.1" + "0.2" is not "0.3"        │
//! │  once it has been through a binary float.                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "1.5"   ──parse──►  150 cents  ──store──►  "1.50"                   │
//! │    "2.345" ──parse──►  235 cents  (half away from zero)                │
//! │                                                                         │
//! │  Stored blobs always carry fixed 2-decimal TEXT, never a float.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price: Money = "1.5".parse().unwrap();
//! assert_eq!(price.cents(), 150);
//! assert_eq!(price.to_fixed_string(), "1.50");
//! assert_eq!(price.to_string(), "$1.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::MoneyParseError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Item form price text ──► Money ──► Item.price ──► stored as "x.yy"
///                                         │
///                                         └──► table cell "$x.yy"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Renders the amount as fixed 2-decimal text without a currency symbol.
    ///
    /// This is the stored representation of an item price.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(150).to_fixed_string(), "1.50");
    /// assert_eq!(Money::from_cents(-5).to_fixed_string(), "-0.05");
    /// ```
    pub fn to_fixed_string(&self) -> String {
        self.format_with("")
    }

    /// Renders the amount with a currency symbol after the sign.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1234).format_with("€"), "€12.34");
    /// assert_eq!(Money::from_cents(-5).format_with("$"), "-$0.05");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"1.5"`, `"10"`, `".75"` or `" 2.345 "`.
///
/// ## Rules
/// - Surrounding whitespace is ignored, one leading `+` or `-` is allowed
/// - Digits beyond the second decimal round half away from zero
/// - Exponents, grouping separators and currency symbols are rejected
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(MoneyParseError::Invalid(text.to_string()));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::Overflow(text.to_string()))?
        };

        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| MoneyParseError::Overflow(text.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Serde Adapter
// =============================================================================

/// Serde adapter storing money as fixed 2-decimal text.
///
/// ```text
/// write:  Money(150)  ──►  "1.50"
/// read:   "1.50" | "1.5" | 1.5 | 2  ──►  Money
/// ```
///
/// Bare JSON numbers are accepted on read as well.
pub mod fixed {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&money.to_fixed_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPrice::deserialize(deserializer)? {
            RawPrice::Text(text) => text.parse().map_err(D::Error::custom),
            RawPrice::Integer(major) => major
                .checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| D::Error::custom("price out of range")),
            RawPrice::Float(value) => {
                let cents = (value * 100.0).round();
                if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
                    return Err(D::Error::custom("price out of range"));
                }
                Ok(Money::from_cents(cents as i64))
            }
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the table-cell format, e.g. `$1.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
