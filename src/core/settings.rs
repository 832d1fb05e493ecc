//! Domain settings - session-wide configuration.
//!
//! Settings are a single fixed-shape record: display currency, static
//! exchange rates, budget cap, and the ordered category list. Updates go
//! through an explicit merge over known fields rather than an arbitrary
//! overlay object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Session-wide configuration for the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display currency code; unknown codes fall back to `$` at render time
    pub currency: String,
    /// Static display-conversion multipliers per currency code
    pub rates: BTreeMap<String, Decimal>,
    /// Positive spend threshold for budget warnings
    pub budget_cap: Decimal,
    /// Ordered list of unique category names
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("EUR".to_string(), Decimal::new(109, 2));
        rates.insert("GBP".to_string(), Decimal::new(127, 2));
        Self {
            currency: "USD".to_string(),
            rates,
            budget_cap: Decimal::from(500),
            categories: [
                "Food",
                "Books",
                "Transport",
                "Entertainment",
                "Fees",
                "Other",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

/// A partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    /// New display currency, if changing
    pub currency: Option<String>,
    /// Replacement rate table, if changing
    pub rates: Option<BTreeMap<String, Decimal>>,
    /// New budget cap, if changing
    pub budget_cap: Option<Decimal>,
    /// Replacement category list, if changing
    pub categories: Option<Vec<String>>,
}

impl Settings {
    /// Merges a patch into this record, field by field.
    ///
    /// Only the four known fields exist; there is no way to smuggle in
    /// arbitrary keys the way an untyped object spread would.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(rates) = patch.rates {
            self.rates = rates;
        }
        if let Some(budget_cap) = patch.budget_cap {
            self.budget_cap = budget_cap;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
    }

    /// Removes a category from the list.
    ///
    /// Transactions already tagged with the removed category keep it;
    /// removal detaches the name from the list and nothing else.
    pub fn remove_category(&mut self, name: &str) {
        self.categories.retain(|c| c != name);
    }
}

/// Returns the display symbol for a currency code, falling back to `$`
/// for unknown codes.
#[must_use]
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        _ => "$",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.budget_cap, Decimal::from(500));
        assert_eq!(settings.rates.get("EUR"), Some(&Decimal::new(109, 2)));
        assert_eq!(settings.rates.get("GBP"), Some(&Decimal::new(127, 2)));
        assert_eq!(settings.categories.len(), 6);
        assert_eq!(settings.categories[0], "Food");
    }

    #[test]
    fn test_merge_partial_patch() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch {
            currency: Some("EUR".to_string()),
            ..Default::default()
        });
        assert_eq!(settings.currency, "EUR");
        // Untouched fields survive the merge
        assert_eq!(settings.budget_cap, Decimal::from(500));
        assert_eq!(settings.categories.len(), 6);
    }

    #[test]
    fn test_merge_replaces_whole_collections() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch {
            categories: Some(vec!["Rent".to_string()]),
            ..Default::default()
        });
        assert_eq!(settings.categories, vec!["Rent".to_string()]);
    }

    #[test]
    fn test_remove_category_detaches_only_the_name() {
        let mut settings = Settings::default();
        settings.remove_category("Books");
        assert!(!settings.categories.contains(&"Books".to_string()));
        assert_eq!(settings.categories.len(), 5);
        // Removing an unknown name is a no-op
        settings.remove_category("Rocketry");
        assert_eq!(settings.categories.len(), 5);
    }

    #[test]
    fn test_currency_symbol_fallback() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("JPY"), "$");
    }
}
