//! # Domain Types
//!
//! Closed value types shared by the calculators and the display layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────────┐             │
//! │  │  CustomerTier   │          │      ShippingRates       │             │
//! │  │  ─────────────  │          │  ──────────────────────  │             │
//! │  │  Bronze   ×1    │          │  per_weight     0.5      │             │
//! │  │  Silver   ×1.5  │          │  per_distance   0.001    │             │
//! │  │  Gold     ×2    │          │  expedited      ×2       │             │
//! │  │  Platinum ×3    │          │  minimum_charge 5        │             │
//! │  └─────────────────┘          └──────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Customer Tier
// =============================================================================

/// Loyalty classification of a customer.
///
/// Serialized in lowercase (`"gold"`) to match the storefront's tier names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CustomerTier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl CustomerTier {
    pub const ALL: [CustomerTier; 4] = [
        CustomerTier::Bronze,
        CustomerTier::Silver,
        CustomerTier::Gold,
        CustomerTier::Platinum,
    ];

    /// Multiplier applied to base loyalty points.
    pub const fn multiplier(&self) -> f64 {
        match self {
            CustomerTier::Bronze => 1.0,
            CustomerTier::Silver => 1.5,
            CustomerTier::Gold => 2.0,
            CustomerTier::Platinum => 3.0,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Bronze => "bronze",
            CustomerTier::Silver => "silver",
            CustomerTier::Gold => "gold",
            CustomerTier::Platinum => "platinum",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a tier name, ignoring case and surrounding whitespace.
///
/// ## Example
/// ```rust
/// use shopkit_core::CustomerTier;
///
/// assert_eq!("Gold".parse::<CustomerTier>().unwrap(), CustomerTier::Gold);
/// assert!("diamond".parse::<CustomerTier>().is_err());
/// ```
impl FromStr for CustomerTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        CustomerTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::invalid_argument(format!("Unknown customer tier: {name}")))
    }
}

// =============================================================================
// Shipping Rates
// =============================================================================

/// Rate table for the shipping calculator.
///
/// Weight is in pounds and distance in miles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ShippingRates {
    /// Charge per unit of weight.
    pub per_weight: f64,

    /// Charge per unit of distance.
    pub per_distance: f64,

    /// Factor applied to the whole charge for expedited orders.
    pub expedited_multiplier: f64,

    /// Floor for any valid shipment.
    pub minimum_charge: f64,
}

impl Default for ShippingRates {
    fn default() -> Self {
        ShippingRates {
            per_weight: 0.5,
            per_distance: 0.001,
            expedited_multiplier: 2.0,
            minimum_charge: 5.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
