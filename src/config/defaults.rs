//! Initial settings loading from config.toml
//!
//! This module provides functionality to load an initial settings
//! document from a TOML configuration file. The values defined in
//! config.toml are used to seed the settings on first run; a missing
//! file simply means the built-in defaults apply.

use crate::core::settings::Settings;
use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration structure representing the entire config.toml file.
/// Every field is optional; omitted fields keep their built-in default.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Active display currency code (e.g. "USD")
    pub currency: Option<String>,
    /// Monthly spending cap
    pub budget_cap: Option<Decimal>,
    /// Conversion rates relative to the base currency
    pub rates: Option<BTreeMap<String, Decimal>>,
    /// Category labels offered for new transactions
    pub categories: Option<Vec<String>>,
}

impl Config {
    /// Merges the configured values over the built-in defaults.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        if let Some(currency) = self.currency {
            settings.currency = currency;
        }
        if let Some(budget_cap) = self.budget_cap {
            settings.budget_cap = budget_cap;
        }
        if let Some(rates) = self.rates {
            settings.rates = rates;
        }
        if let Some(categories) = self.categories {
            settings.categories = categories;
        }
        settings
    }
}

/// Loads settings configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Resolves the initial settings document: values from ./config.toml
/// when the file exists, built-in defaults otherwise.
pub fn load_initial_settings() -> Result<Settings> {
    let path = Path::new("config.toml");
    if path.exists() {
        Ok(load_config(path)?.into_settings())
    } else {
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            currency = "EUR"
            budget_cap = "650"
            categories = ["Food", "Rent"]

            [rates]
            EUR = "1.09"
            GBP = "1.27"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        let settings = config.into_settings();
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.budget_cap, Decimal::from(650));
        assert_eq!(settings.categories, vec!["Food", "Rent"]);
        assert_eq!(
            settings.rates.get("GBP"),
            Some(&Decimal::from_str("1.27").unwrap())
        );
    }

    #[test]
    fn test_omitted_fields_keep_defaults() {
        let config: Config = toml::from_str("currency = \"GBP\"").unwrap();
        let settings = config.into_settings();
        let defaults = Settings::default();
        assert_eq!(settings.currency, "GBP");
        assert_eq!(settings.budget_cap, defaults.budget_cap);
        assert_eq!(settings.rates, defaults.rates);
        assert_eq!(settings.categories, defaults.categories);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = toml::from_str::<Config>("currency = ");
        assert!(result.is_err());
    }
}
