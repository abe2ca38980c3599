//! # Loyalty Points
//!
//! ## Scoring Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase $600.75, Platinum, first purchase                             │
//! │                                                                         │
//! │  floor(600.75)            = 600      ← floor BEFORE the multiplier      │
//! │  × tier multiplier (3)    = 1800                                        │
//! │  + first purchase bonus   = 1850                                        │
//! │  + big spender bonus      = 1950     ← purchase >= $500                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::CustomerTier;
use crate::validation::is_positive;

/// Bonus for a customer's first purchase.
pub const FIRST_PURCHASE_BONUS: f64 = 50.0;

/// Bonus once a single purchase reaches [`LARGE_PURCHASE_THRESHOLD`].
pub const LARGE_PURCHASE_BONUS: f64 = 100.0;

pub const LARGE_PURCHASE_THRESHOLD: f64 = 500.0;

/// Points earned for a purchase.
///
/// Non-positive (or NaN) amounts earn nothing.
///
/// ## Example
/// ```rust
/// use shopkit_core::{loyalty::calculate_loyalty_points, CustomerTier};
///
/// assert_eq!(calculate_loyalty_points(100.0, CustomerTier::Platinum, false), 300);
/// assert_eq!(calculate_loyalty_points(600.0, CustomerTier::Platinum, true), 1950);
/// assert_eq!(calculate_loyalty_points(-50.0, CustomerTier::default(), false), 0);
/// ```
pub fn calculate_loyalty_points(purchase_amount: f64, tier: CustomerTier, is_first_purchase: bool) -> i64 {
    if !is_positive(purchase_amount) {
        return 0;
    }

    let mut points = purchase_amount.floor() * tier.multiplier();

    if is_first_purchase {
        points += FIRST_PURCHASE_BONUS;
    }

    if purchase_amount >= LARGE_PURCHASE_THRESHOLD {
        points += LARGE_PURCHASE_BONUS;
    }

    points.floor() as i64
}
