//! # Suggestion
//!
//! After a sale, recommend one item from another category.
//!
//! ```text
//! committed cart: [35 × 2, 31 × 1]
//!                   │
//!                   ├── 35 → pair 39 (Saudia Choco Milk), stock 10 > 0 ──► suggest, stop
//!                   └── 31 → never looked at
//! ```
//!
//! At most one suggestion per sale. Stock is read after the commit, so a
//! pair that the sale itself emptied is skipped.

use crate::cart::Cart;
use crate::catalog::{Catalog, Item};

/// Returns the first in-stock paired item, walking the cart in selection order.
pub fn suggest<'a>(catalog: &'a Catalog, cart: &Cart) -> Option<&'a Item> {
    cart.lines()
        .iter()
        .filter_map(|line| catalog.paired_item(line.code))
        .find(|paired| paired.in_stock())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ItemCode};
    use crate::money::Money;
    use crate::seed::default_catalog;

    #[test]
    fn test_suggests_pair_of_first_line() {
        let catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(0).unwrap(), ItemCode::new(35), 2).unwrap();
        cart.add(catalog.category(0).unwrap(), ItemCode::new(31), 1).unwrap();

        let suggestion = suggest(&catalog, &cart).unwrap();
        assert_eq!(suggestion.name(), "Saudia Choco Milk");
    }

    #[test]
    fn test_pairing_is_not_assumed_symmetric() {
        // 39 pairs with 33, even though 35 pairs with 39
        let catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(1).unwrap(), ItemCode::new(39), 1).unwrap();

        assert_eq!(suggest(&catalog, &cart).unwrap().code(), ItemCode::new(33));
    }

    #[test]
    fn test_skips_out_of_stock_pairs() {
        let item = |code, stock, pair| {
            Item::new(
                ItemCode::new(code),
                format!("Item {code}"),
                Money::from_cents(100),
                stock,
                ItemCode::new(pair),
            )
        };
        let catalog = Catalog::new(vec![
            Category::new("Snacks", vec![item(1, 5, 3), item(2, 5, 4)]),
            Category::new("Drinks", vec![item(3, 0, 1), item(4, 2, 1)]),
        ])
        .unwrap();

        let mut cart = Cart::new();
        cart.add(catalog.category(0).unwrap(), ItemCode::new(1), 1).unwrap();
        assert!(suggest(&catalog, &cart).is_none());

        cart.add(catalog.category(0).unwrap(), ItemCode::new(2), 1).unwrap();
        assert_eq!(suggest(&catalog, &cart).unwrap().code(), ItemCode::new(4));
    }

    #[test]
    fn test_empty_cart_has_no_suggestion() {
        let catalog = default_catalog().unwrap();
        assert!(suggest(&catalog, &Cart::new()).is_none());
    }
}
