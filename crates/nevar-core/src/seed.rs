//! # Seed Data
//!
//! The stock the machine is loaded with when no catalog file is configured.
//!
//! ## Layout
//! - Snacks: codes 31-35
//! - Drinks: codes 36-40
//! - Every snack pairs with a drink and every drink with a snack
//! - 10 units of everything

use crate::catalog::{Catalog, Category, Item, ItemCode};
use crate::error::CatalogError;
use crate::money::Money;

/// (code, name, price in cents, stock, pair)
type SeedItem = (u32, &'static str, i64, u32, u32);

/// Categories in menu order.
const CATEGORIES: &[(&str, &[SeedItem])] = &[
    (
        "Snacks",
        &[
            (31, "Pringles Cheese", 1000, 10, 37),
            (32, "Ritz Crackers", 1100, 10, 40),
            (33, "Twix Rolls", 800, 10, 39),
            (34, "Bugles Natcho", 700, 10, 36),
            (35, "Oreo Biscuit", 500, 10, 39),
        ],
    ),
    (
        "Drinks",
        &[
            (36, "Sprite", 300, 10, 34),
            (37, "Coca-Cola", 300, 10, 31),
            (38, "Berain Water", 100, 10, 32),
            (39, "Saudia Choco Milk", 250, 10, 33),
            (40, "Almarai Apple Juice", 450, 10, 35),
        ],
    ),
];

/// Builds the built-in catalog.
///
/// Goes through the same validation as a catalog file, so a bad edit to
/// the table above fails the unit tests rather than a customer's sale.
pub fn default_catalog() -> Result<Catalog, CatalogError> {
    let categories = CATEGORIES
        .iter()
        .map(|(name, items)| {
            let items = items
                .iter()
                .map(|&(code, name, price_cents, stock, pair)| {
                    Item::new(
                        ItemCode::new(code),
                        name,
                        Money::from_cents(price_cents),
                        stock,
                        ItemCode::new(pair),
                    )
                })
                .collect();
            Category::new(*name, items)
        })
        .collect();

    Catalog::new(categories)
}
