//! # Price Display
//!
//! Thin presentation layer over shopkit-core: reads configuration, takes
//! raw price inputs from the command line and prints a price summary.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file, then `SHOPKIT_*` environment)
//! 3. Merge command line flags over configured defaults
//! 4. Render text lines or a JSON breakdown

pub mod config;
pub mod display;
pub mod error;

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DisplayConfig;
use crate::display::PriceDisplay;
use crate::error::AppResult;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "price-display")]
#[command(about = "Render a storefront price summary")]
pub struct Cli {
    /// Price before discount and tax
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    /// Discount percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub discount: Option<f64>,

    /// Tax rate percentage
    #[arg(long, allow_negative_numbers = true)]
    pub tax: Option<f64>,

    /// Units in stock
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<f64>,

    /// Leave tax out of the final price
    #[arg(long)]
    pub no_tax: bool,

    /// Print the computed breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML config file
    #[arg(long, env = "SHOPKIT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Builds the display, letting flags win over configured defaults.
    pub fn to_display(&self, config: &DisplayConfig) -> PriceDisplay {
        let mut display = PriceDisplay::from_config(self.price, config);

        if let Some(discount) = self.discount {
            display = display.with_discount(discount);
        }
        if let Some(tax) = self.tax {
            display = display.with_tax(tax);
        }
        if let Some(quantity) = self.quantity {
            display = display.with_quantity(quantity);
        }
        if self.no_tax {
            display = display.with_show_tax(false);
        }

        display
    }
}

/// Runs the app and returns what should be printed.
pub fn run(cli: &Cli) -> AppResult<String> {
    let config = DisplayConfig::load(cli.config.as_deref())?;
    info!(price = cli.price, json = cli.json, "Rendering price summary");

    render_summary(cli, &config)
}

/// Renders the summary against an already loaded configuration.
pub fn render_summary(cli: &Cli, config: &DisplayConfig) -> AppResult<String> {
    let display = cli.to_display(config);

    if cli.json {
        Ok(serde_json::to_string_pretty(&display.breakdown()?)?)
    } else {
        Ok(display.render().join("\n"))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: WARN, with DEBUG for this crate
///
/// Logs go to stderr so stdout carries only the summary.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,price_display=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("price-display").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["--price", "100", "--discount", "20", "--tax", "8.5", "--no-tax"]);

        assert_eq!(cli.price, 100.0);
        assert_eq!(cli.discount, Some(20.0));
        assert_eq!(cli.tax, Some(8.5));
        assert_eq!(cli.quantity, None);
        assert!(cli.no_tax);
        assert!(!cli.json);
    }

    #[test]
    fn test_price_is_required() {
        assert!(Cli::try_parse_from(["price-display", "--discount", "10"]).is_err());
    }

    #[test]
    fn test_negative_values_reach_the_calculators() {
        let cli = parse(&["--price", "-5"]);
        assert_eq!(cli.price, -5.0);
    }

    #[test]
    fn test_flags_override_config() {
        let config = DisplayConfig {
            default_discount_percentage: 10.0,
            default_tax_rate: 5.0,
            default_quantity: 2.0,
            ..DisplayConfig::default()
        };

        let display = parse(&["--price", "50", "--tax", "0"]).to_display(&config);
        assert_eq!(display.discount_percentage, 10.0);
        assert_eq!(display.tax_rate, 0.0);
        assert_eq!(display.quantity, 2.0);
        assert!(display.show_tax);
    }

    #[test]
    fn test_render_summary_lines() {
        let cli = parse(&["--price", "100", "--discount", "20", "--tax", "10", "--quantity", "5"]);
        let output = render_summary(&cli, &DisplayConfig::default()).unwrap();

        assert!(output.starts_with("Price Information\n"));
        assert!(output.contains("Final Price: $88.00"));
        assert!(output.ends_with("In Stock (5)"));
    }

    #[test]
    fn test_render_summary_uses_given_config() {
        let config = DisplayConfig {
            default_discount_percentage: 50.0,
            default_tax_rate: 20.0,
            show_tax: false,
            ..DisplayConfig::default()
        };
        let cli = parse(&["--price", "100", "--discount", "20", "--tax", "10"]);
        let output = render_summary(&cli, &config).unwrap();

        assert!(output.contains("Discount (20%): -$20.00"));
        assert!(!output.contains("Tax ("));
        assert!(output.contains("Final Price: $80.00"));
    }

    #[test]
    fn test_render_summary_json() {
        let cli = parse(&["--price", "100", "--discount", "20", "--json"]);
        let output = render_summary(&cli, &DisplayConfig::default()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["finalPrice"], 80.0);
        assert_eq!(value["inStock"], true);
    }

    #[test]
    fn test_render_summary_json_reports_errors() {
        let cli = parse(&["--price", "100", "--discount", "150", "--json"]);
        let err = render_summary(&cli, &DisplayConfig::default()).unwrap_err();

        assert_eq!(err.to_string(), "Discount percentage must be between 0 and 100");
    }
}
