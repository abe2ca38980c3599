//! # Validation Module
//!
//! Precondition checks shared by the pricing calculators.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Run                                   │
//! │                                                                         │
//! │  calculate_discounted_price ──► validate_original_price                │
//! │                             └─► validate_discount_percentage           │
//! │                                                                         │
//! │  calculate_tax ──────────────► validate_price                          │
//! │                             └─► validate_tax_rate                      │
//! │                                                                         │
//! │  legacy strict shipping ─────► validate_shipping_inputs                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! NaN never satisfies a bound, so every validator rejects it with the
//! same message as an out-of-range value.
//!
//! ## Usage
//! ```rust
//! use shopkit_core::validation::{validate_price, validate_tax_rate};
//!
//! assert!(validate_price(19.99).is_ok());
//! assert!(validate_tax_rate(-1.0).is_err());
//! ```

use crate::error::CoreError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, CoreError>;

// =============================================================================
// Error Messages
// =============================================================================

pub const ORIGINAL_PRICE_NEGATIVE: &str = "Original price cannot be negative";
pub const DISCOUNT_OUT_OF_RANGE: &str = "Discount percentage must be between 0 and 100";
pub const PRICE_NEGATIVE: &str = "Price cannot be negative";
pub const TAX_RATE_NEGATIVE: &str = "Tax rate cannot be negative";
pub const SHIPPING_INPUTS_NOT_POSITIVE: &str = "Weight and distance must be positive numbers";

// =============================================================================
// Price Validators
// =============================================================================

/// Validates the pre-discount price of an item.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_original_price(price: f64) -> ValidationResult<()> {
    if !is_non_negative(price) {
        return Err(CoreError::invalid_argument(ORIGINAL_PRICE_NEGATIVE));
    }

    Ok(())
}

/// Validates a taxable price.
///
/// ## Example
/// ```rust
/// use shopkit_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());   // Free item
/// assert!(validate_price(-1.0).is_err()); // Invalid
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !is_non_negative(price) {
        return Err(CoreError::invalid_argument(PRICE_NEGATIVE));
    }

    Ok(())
}

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percentage(percentage: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(CoreError::invalid_argument(DISCOUNT_OUT_OF_RANGE));
    }

    Ok(())
}

/// Validates a tax rate given as a percentage.
///
/// ## Rules
/// - Must be non-negative
/// - No upper bound: stacked surcharges above 100% are accepted
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    if !is_non_negative(rate) {
        return Err(CoreError::invalid_argument(TAX_RATE_NEGATIVE));
    }

    Ok(())
}

// =============================================================================
// Shipping Validators
// =============================================================================

/// Validates the inputs of the legacy strict shipping calculator.
///
/// ## Rules
/// - Weight and distance must both be strictly positive
pub fn validate_shipping_inputs(weight: f64, distance: f64) -> ValidationResult<()> {
    if !(is_positive(weight) && is_positive(distance)) {
        return Err(CoreError::invalid_argument(SHIPPING_INPUTS_NOT_POSITIVE));
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// `value >= 0`, false for NaN.
#[inline]
pub(crate) fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

/// `value > 0`, false for NaN.
#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value > 0.0
}

// =============================================================================
// Unit Tests
// =============================================================================
