//! Static menu reference data.
//!
//! The catalog is loaded once at startup and never mutated; the order actor
//! receives it as shared context (`Arc<Menu>`). New dishes are added by
//! extending the item table here and the keyword table in
//! [`crate::extractor::KeywordCatalog`]: two data rows, no new types.

use serde::{Deserialize, Serialize};

/// One entry of the static menu: display name plus unit price.
///
/// Prices are whole rupiah (`u64`); the currency has no subunits in
/// practice, and integer math keeps subtotals exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The immutable menu catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The standard kiosk menu.
    pub fn standard() -> Self {
        Self::new(vec![
            MenuItem::new("🍔 Burger", 25_000),
            MenuItem::new("🍗 Ayam Goreng", 30_000),
            MenuItem::new("🍟 Kentang Goreng", 15_000),
            MenuItem::new("🌭 Hot Dog", 20_000),
            MenuItem::new("🥤 Cola", 10_000),
            MenuItem::new("🥤 Mineral Water", 7_000),
            MenuItem::new("🍦 Es Krim", 12_000),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Resolves a canonical item key (e.g. `"kentang goreng"`) to its menu
    /// entry. Matching ignores case and whitespace so that keys line up with
    /// display names carrying icons ("🍟 Kentang Goreng").
    pub fn resolve(&self, canonical_key: &str) -> Option<&MenuItem> {
        let needle = normalize(canonical_key);
        self.items
            .iter()
            .find(|item| normalize(&item.name).contains(&needle))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
