//! # Pricing Module
//!
//! Discount, tax, stock and shipping calculations.
//!
//! ## Final Price Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  original_price                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_discounted_price(price, discount%)  ← discount FIRST         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_tax(discounted, rate%)              ← tax on the discounted  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  final = discounted + tax                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shipping Policy
//! [`calculate_shipping_cost`] is lenient: unusable inputs cost `0.0`,
//! expedited orders double, and any valid shipment costs at least `5.0`.
//! The older strict calculator, which rejects bad input and uses a
//! different rate card, lives in [`legacy`] for callers that still depend
//! on it.

use crate::error::CoreResult;
use crate::types::ShippingRates;
use crate::validation::{
    is_positive, validate_discount_percentage, validate_original_price, validate_price,
    validate_tax_rate,
};

// =============================================================================
// Discount & Tax
// =============================================================================

/// Applies a percentage discount.
///
/// ## Errors
/// - `InvalidArgument("Original price cannot be negative")`
/// - `InvalidArgument("Discount percentage must be between 0 and 100")`
///
/// ## Example
/// ```rust
/// use shopkit_core::pricing::calculate_discounted_price;
///
/// assert_eq!(calculate_discounted_price(100.0, 10.0).unwrap(), 90.0);
/// assert_eq!(calculate_discounted_price(100.0, 100.0).unwrap(), 0.0);
/// assert!(calculate_discounted_price(100.0, 105.0).is_err());
/// ```
pub fn calculate_discounted_price(original_price: f64, discount_percentage: f64) -> CoreResult<f64> {
    validate_original_price(original_price)?;
    validate_discount_percentage(discount_percentage)?;

    let discount_amount = original_price * discount_percentage / 100.0;
    Ok(original_price - discount_amount)
}

/// Calculates the tax owed on a price.
///
/// The rate is a percentage with no upper bound.
///
/// ## Example
/// ```rust
/// use shopkit_core::pricing::calculate_tax;
///
/// assert_eq!(calculate_tax(50.0, 8.5).unwrap(), 4.25);
/// assert!(calculate_tax(100.0, -5.0).is_err());
/// ```
pub fn calculate_tax(price: f64, tax_rate: f64) -> CoreResult<f64> {
    validate_price(price)?;
    validate_tax_rate(tax_rate)?;

    Ok(price * tax_rate / 100.0)
}

// =============================================================================
// Stock
// =============================================================================

/// True when a strictly positive quantity is on hand.
///
/// Fractional quantities (bulk goods) above zero count as in stock.
#[inline]
pub fn is_in_stock(quantity: f64) -> bool {
    is_positive(quantity)
}

// =============================================================================
// Shipping
// =============================================================================

/// Estimates shipping with the default [`ShippingRates`].
///
/// ## Example
/// ```rust
/// use shopkit_core::pricing::calculate_shipping_cost;
///
/// assert_eq!(calculate_shipping_cost(20.0, 1000.0, false), 11.0);
/// assert_eq!(calculate_shipping_cost(20.0, 1000.0, true), 22.0);
/// assert_eq!(calculate_shipping_cost(1.0, 10.0, false), 5.0);  // floor
/// assert_eq!(calculate_shipping_cost(0.0, 10.0, false), 0.0);  // invalid
/// ```
pub fn calculate_shipping_cost(weight: f64, distance: f64, expedited: bool) -> f64 {
    ShippingRates::default().cost(weight, distance, expedited)
}

impl ShippingRates {
    /// Shipping charge for a parcel.
    ///
    /// Returns `0.0` when weight or distance is not positive; the minimum
    /// charge only applies to valid shipments.
    pub fn cost(&self, weight: f64, distance: f64, expedited: bool) -> f64 {
        if !(is_positive(weight) && is_positive(distance)) {
            return 0.0;
        }

        let mut cost = weight * self.per_weight + distance * self.per_distance;
        if expedited {
            cost *= self.expedited_multiplier;
        }

        cost.max(self.minimum_charge)
    }
}

/// Pre-lenient shipping calculator, kept for backward compatibility.
pub mod legacy {
    use crate::error::CoreResult;
    use crate::validation::validate_shipping_inputs;

    pub const BASE_RATE: f64 = 5.0;
    /// Per kilogram.
    pub const WEIGHT_RATE: f64 = 0.5;
    /// Per kilometre.
    pub const DISTANCE_RATE: f64 = 0.1;

    /// `5 + weight * 0.5 + distance * 0.1`, rejecting non-positive input.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::pricing::legacy::calculate_shipping_cost_strict;
    ///
    /// assert_eq!(calculate_shipping_cost_strict(2.0, 10.0).unwrap(), 7.0);
    /// assert!(calculate_shipping_cost_strict(0.0, 10.0).is_err());
    /// ```
    pub fn calculate_shipping_cost_strict(weight: f64, distance: f64) -> CoreResult<f64> {
        validate_shipping_inputs(weight, distance)?;

        Ok(BASE_RATE + weight * WEIGHT_RATE + distance * DISTANCE_RATE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
