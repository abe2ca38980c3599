//! # shopkit-core: Pure Pricing & Formatting for Shopkit
//!
//! This crate holds every storefront calculation as a pure function with
//! zero I/O dependencies. The presentation layer calls into it with raw
//! numbers and renders what comes back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (apps/price-display, web UI)          │   │
//! │  │        Price summary ──► Checkout ──► Order confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopkit-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │ pricing  │ │ loyalty  │ │  dates   │          │   │
//! │  │   │ format   │ │ discount │ │  tiers   │ │ delivery │          │   │
//! │  │   │ Money    │ │ tax/ship │ │  points  │ │ display  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                        │   │
//! │  │   │   text   │ │   ids    │ │validation│                        │   │
//! │  │   │ names    │ │ product  │ │ precond. │                        │   │
//! │  │   │ phones   │ │ order    │ │ checks   │                        │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Currency formatting and the `Money` display value
//! - [`pricing`] - Discount, tax, stock and shipping calculations
//! - [`loyalty`] - Loyalty point scoring
//! - [`dates`] - Delivery projection and date display
//! - [`text`] - Product name and phone number normalization
//! - [`ids`] - Product and order id generation
//! - [`types`] - Customer tiers and shipping rates
//! - [`validation`] - Precondition checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output (id generation reads an
//!    injected clock and random source)
//! 2. **No I/O**: nothing here logs, reads files or touches the network
//! 3. **Errors vs. Sentinels**: violated preconditions return
//!    `Err(CoreError::InvalidArgument)`; unusable text input returns `""`
//!    or `None`
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::{calculate_discounted_price, calculate_tax, format_as_price};
//!
//! // Discount first, then tax on the discounted price
//! let discounted = calculate_discounted_price(100.0, 20.0)?;
//! let tax = calculate_tax(discounted, 10.0)?;
//!
//! assert_eq!(format_as_price(discounted + tax), "$88.00");
//! # Ok::<(), shopkit_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dates;
pub mod error;
pub mod ids;
pub mod loyalty;
pub mod money;
pub mod pricing;
pub mod text;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopkit_core::calculate_tax` instead of
// `use shopkit_core::pricing::calculate_tax`

pub use dates::{calculate_delivery_date, format_date};
pub use error::{CoreError, CoreResult};
pub use ids::{generate_order_id, generate_product_id, IdGenerator};
pub use loyalty::calculate_loyalty_points;
pub use money::{format_as_price, CurrencyFormat, Money};
pub use pricing::{calculate_discounted_price, calculate_shipping_cost, calculate_tax, is_in_stock};
pub use text::{format_phone_number, format_product_name};
pub use types::*;
