//! # Display Configuration
//!
//! Settings the price summary falls back to when a flag is not given.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (handled by the caller)
//! 2. Environment variables (`SHOPKIT_*`)
//! 3. TOML config file (`--config` / `SHOPKIT_CONFIG`)
//! 4. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! default_discount_percentage = 0.0
//! default_tax_rate = 8.25
//! default_quantity = 1.0
//! show_tax = true
//!
//! [currency]
//! symbol = "$"
//! thousands_separator = ","
//! decimal_separator = "."
//! ```

use serde::{Deserialize, Serialize};
use shopkit_core::validation::{validate_discount_percentage, validate_tax_rate};
use shopkit_core::CurrencyFormat;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ConfigError;

pub const ENV_DISCOUNT: &str = "SHOPKIT_DISCOUNT";
pub const ENV_TAX_RATE: &str = "SHOPKIT_TAX_RATE";
pub const ENV_QUANTITY: &str = "SHOPKIT_QUANTITY";
pub const ENV_SHOW_TAX: &str = "SHOPKIT_SHOW_TAX";
pub const ENV_CURRENCY_SYMBOL: &str = "SHOPKIT_CURRENCY_SYMBOL";

/// Price display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How amounts are rendered.
    pub currency: CurrencyFormat,

    /// Discount applied when none is given (0-100).
    pub default_discount_percentage: f64,

    /// Tax rate percentage applied when none is given.
    pub default_tax_rate: f64,

    /// Stock quantity assumed when none is given.
    pub default_quantity: f64,

    /// Whether tax is added to the final price.
    pub show_tax: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency: CurrencyFormat::default(),
            default_discount_percentage: 0.0,
            default_tax_rate: 0.0,
            default_quantity: 1.0,
            show_tax: true,
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from an optional file, then the environment.
    ///
    /// A missing file falls back to defaults; a malformed one is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = DisplayConfig::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading display config from file");
                let contents = std::fs::read_to_string(path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `SHOPKIT_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup.
    ///
    /// ## Recognized Keys
    /// - `SHOPKIT_DISCOUNT`: default discount percentage (e.g., "15")
    /// - `SHOPKIT_TAX_RATE`: default tax rate (e.g., "8.25")
    /// - `SHOPKIT_QUANTITY`: default stock quantity
    /// - `SHOPKIT_SHOW_TAX`: "true" / "false"
    /// - `SHOPKIT_CURRENCY_SYMBOL`: currency symbol (e.g., "€")
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DISCOUNT) {
            self.default_discount_percentage = parse_value(ENV_DISCOUNT, &value)?;
        }

        if let Some(value) = lookup(ENV_TAX_RATE) {
            self.default_tax_rate = parse_value(ENV_TAX_RATE, &value)?;
        }

        if let Some(value) = lookup(ENV_QUANTITY) {
            self.default_quantity = parse_value(ENV_QUANTITY, &value)?;
        }

        if let Some(value) = lookup(ENV_SHOW_TAX) {
            self.show_tax = parse_value(ENV_SHOW_TAX, &value)?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            self.currency.symbol = symbol;
        }

        Ok(())
    }

    /// Rejects defaults the calculators would refuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_discount_percentage(self.default_discount_percentage)
            .map_err(|_| ConfigError::InvalidValue("default_discount_percentage".to_string()))?;

        validate_tax_rate(self.default_tax_rate)
            .map_err(|_| ConfigError::InvalidValue("default_tax_rate".to_string()))?;

        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.currency, CurrencyFormat::en_us());
        assert_eq!(config.default_discount_percentage, 0.0);
        assert_eq!(config.default_tax_rate, 0.0);
        assert_eq!(config.default_quantity, 1.0);
        assert!(config.show_tax);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: DisplayConfig = toml::from_str(
            r#"
            default_tax_rate = 8.25

            [currency]
            symbol = "€"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_tax_rate, 8.25);
        assert_eq!(config.currency.symbol, "€");
        assert_eq!(config.currency.thousands_separator, ",");
        assert!(config.show_tax);
    }

    #[test]
    fn test_toml_keys_are_snake_case() {
        let config: DisplayConfig =
            toml::from_str("default_quantity = 4.0\ndefaultTaxRate = 8.25").unwrap();

        assert_eq!(config.default_quantity, 4.0);
        assert_eq!(config.default_tax_rate, 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_discount_percentage = 15.0\nshow_tax = false").unwrap();

        let config = DisplayConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_discount_percentage, 15.0);
        assert!(!config.show_tax);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let config = DisplayConfig::load(Some(missing.as_path())).unwrap();
        assert_eq!(config.currency, CurrencyFormat::en_us());
        assert_eq!(config.default_quantity, 1.0);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_tax_rate = \"lots\"").unwrap();

        let err = DisplayConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = DisplayConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (ENV_DISCOUNT, "20"),
                (ENV_TAX_RATE, " 8.5 "),
                (ENV_QUANTITY, "3"),
                (ENV_SHOW_TAX, "false"),
                (ENV_CURRENCY_SYMBOL, "£"),
            ]))
            .unwrap();

        assert_eq!(config.default_discount_percentage, 20.0);
        assert_eq!(config.default_tax_rate, 8.5);
        assert_eq!(config.default_quantity, 3.0);
        assert!(!config.show_tax);
        assert_eq!(config.currency.symbol, "£");
    }

    #[test]
    fn test_invalid_override_names_the_variable() {
        let mut config = DisplayConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_TAX_RATE, "eight")]))
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid value for SHOPKIT_TAX_RATE");
    }

    #[test]
    fn test_validate_rejects_out_of_range_defaults() {
        let config = DisplayConfig {
            default_discount_percentage: 120.0,
            ..DisplayConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(field)) if field == "default_discount_percentage"));

        let config = DisplayConfig {
            default_tax_rate: -1.0,
            ..DisplayConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(field)) if field == "default_tax_rate"));
    }
}
