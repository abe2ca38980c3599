//! # Price Display
//!
//! Turns raw price inputs into the lines of a price summary.
//!
//! ## Rendered Summary
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Price Information                    │
//! │ Original Price: $100.00              │
//! │ Discount (20%): -$20.00              │  only when discount > 0
//! │ Discounted Price: $80.00             │
//! │ Tax (10%): $8.00                     │  only when tax is shown and > 0
//! │ Final Price: $88.00                  │
//! │ In Stock (5)                         │  or "Out of Stock"
//! └──────────────────────────────────────┘
//! ```
//!
//! ## Failed Calculations
//! A calculator error means the field is not rendered. A rejected discount
//! hides every line that depends on the discounted price; a rejected tax
//! rate hides the tax and final price lines.

use serde::Serialize;
use shopkit_core::{calculate_discounted_price, calculate_tax, is_in_stock, CoreResult, CurrencyFormat};
use tracing::{debug, warn};

use crate::config::DisplayConfig;

/// Inputs of one price summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDisplay {
    pub original_price: f64,
    pub discount_percentage: f64,
    pub tax_rate: f64,
    pub quantity: f64,
    pub show_tax: bool,
    pub currency: CurrencyFormat,
}

/// Derived values behind a price summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub original_price: f64,
    pub discounted_price: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub final_price: f64,
    pub in_stock: bool,
}

impl PriceDisplay {
    /// A summary with no discount, no tax and one unit in stock.
    pub fn new(original_price: f64) -> Self {
        PriceDisplay {
            original_price,
            discount_percentage: 0.0,
            tax_rate: 0.0,
            quantity: 1.0,
            show_tax: true,
            currency: CurrencyFormat::default(),
        }
    }

    /// A summary seeded from configured defaults.
    pub fn from_config(original_price: f64, config: &DisplayConfig) -> Self {
        PriceDisplay {
            original_price,
            discount_percentage: config.default_discount_percentage,
            tax_rate: config.default_tax_rate,
            quantity: config.default_quantity,
            show_tax: config.show_tax,
            currency: config.currency.clone(),
        }
    }

    pub fn with_discount(mut self, discount_percentage: f64) -> Self {
        self.discount_percentage = discount_percentage;
        self
    }

    pub fn with_tax(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_show_tax(mut self, show_tax: bool) -> Self {
        self.show_tax = show_tax;
        self
    }

    /// Computes discount, then tax on the discounted price, then the total.
    pub fn breakdown(&self) -> CoreResult<PriceBreakdown> {
        let discounted_price = self.discounted_price()?;
        let tax_amount = self.tax_amount(discounted_price)?;

        let breakdown = PriceBreakdown {
            original_price: self.original_price,
            discounted_price,
            discount_amount: self.original_price - discounted_price,
            tax_amount,
            final_price: discounted_price + tax_amount,
            in_stock: is_in_stock(self.quantity),
        };

        debug!(
            original = breakdown.original_price,
            discounted = breakdown.discounted_price,
            tax = breakdown.tax_amount,
            total = breakdown.final_price,
            "Computed price breakdown"
        );

        Ok(breakdown)
    }

    /// Renders the summary lines, skipping any field whose calculation failed.
    pub fn render(&self) -> Vec<String> {
        let price = |amount: f64| self.currency.format(amount);

        let mut lines = vec![
            "Price Information".to_string(),
            format!("Original Price: {}", price(self.original_price)),
        ];

        match self.discounted_price() {
            Ok(discounted) => {
                if self.discount_percentage > 0.0 {
                    lines.push(format!(
                        "Discount ({}%): -{}",
                        self.discount_percentage,
                        price(self.original_price - discounted)
                    ));
                    lines.push(format!("Discounted Price: {}", price(discounted)));
                }

                match self.tax_amount(discounted) {
                    Ok(tax) => {
                        if self.show_tax && self.tax_rate > 0.0 {
                            lines.push(format!("Tax ({}%): {}", self.tax_rate, price(tax)));
                        }
                        lines.push(format!("Final Price: {}", price(discounted + tax)));
                    }
                    Err(err) => warn!(error = %err, "Skipping tax and final price"),
                }
            }
            Err(err) => warn!(error = %err, "Skipping discount, tax and final price"),
        }

        lines.push(self.stock_label());
        lines
    }

    fn discounted_price(&self) -> CoreResult<f64> {
        calculate_discounted_price(self.original_price, self.discount_percentage)
    }

    fn tax_amount(&self, discounted_price: f64) -> CoreResult<f64> {
        if self.show_tax {
            calculate_tax(discounted_price, self.tax_rate)
        } else {
            Ok(0.0)
        }
    }

    fn stock_label(&self) -> String {
        if is_in_stock(self.quantity) {
            format!("In Stock ({})", self.quantity)
        } else {
            "Out of Stock".to_string()
        }
    }
}
