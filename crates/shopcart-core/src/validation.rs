//! # Validation Module
//!
//! Item validation for [`crate::Cart::add_item`].
//!
//! Validation happens once, at insertion. Everything stored in a cart has
//! passed these checks, so discounting and rendering never fail.
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::validate_item;
//! use shopcart_core::{Money, ValidationError};
//!
//! assert!(validate_item("Apple", Money::from_cents(99), 5).is_ok());
//! assert_eq!(
//!     validate_item("", Money::zero(), 0),
//!     Err(ValidationError::InvalidTitle), // first failing rule wins
//! );
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_TITLE_LENGTH, MIN_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty
/// - At most 32 characters (counted as chars, not bytes)
/// - Not trimmed: `"   "` is an acceptable title
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::InvalidTitle);
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be at least one cent
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price < MIN_UNIT_PRICE {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound; large quantities just hit the discount cap
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::InvalidQuantity);
    }

    Ok(())
}

/// Runs title, price and quantity checks, in that order.
pub fn validate_item(title: &str, price: Money, quantity: i64) -> ValidationResult<()> {
    validate_title(title)?;
    validate_unit_price(price)?;
    validate_quantity(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
