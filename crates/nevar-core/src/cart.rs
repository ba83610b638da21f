//! # Cart
//!
//! The selections made during one visit to a category menu.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category menu opened ──► Cart::new()                                  │
//! │                                │                                        │
//! │  code + quantity ─────────────►│ add()  (repeat, quantities accumulate) │
//! │                                │                                        │
//! │  "0" typed ────────────────────┤                                        │
//! │                                ▼                                        │
//! │                empty? ── yes ──► dropped, back to main menu             │
//! │                   │ no                                                  │
//! │                   ▼                                                     │
//! │              Checkout::new(cart) ──► paid or cancelled ──► dropped      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by code (adding the same code increases its quantity)
//! - Every quantity is > 0
//! - A line never holds more than the item's stock at the time it was added:
//!   each addition is checked against `stock - already in cart`
//! - Line order is selection order, which drives dispensing and suggestions
//!
//! The cart stores codes, not item references, so stock is never touched
//! here. Only [`Catalog::commit`](crate::Catalog::commit) changes stock.

use serde::Serialize;

use crate::catalog::{Category, Item, ItemCode};
use crate::error::{CoreError, CoreResult, ValidationError};

/// One code and how many of it were selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub code: ItemCode,
    pub quantity: u32,
}

/// The in-progress, uncommitted selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Lines in selection order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `code` already in the cart (0 when absent).
    pub fn quantity_of(&self, code: ItemCode) -> u32 {
        self.lines
            .iter()
            .find(|line| line.code == code)
            .map_or(0, |line| line.quantity)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Units of `item` that can still be added to this cart.
    pub fn available(&self, item: &Item) -> u32 {
        item.stock().saturating_sub(self.quantity_of(item.code()))
    }

    /// Resolves a code typed at the category prompt, before asking for a
    /// quantity.
    ///
    /// ## Errors
    /// - `InvalidItemCode`: the code is not part of `category`
    /// - `OutOfStock`: nothing left to add (stock is zero, or already all
    ///   in this cart)
    pub fn select<'a>(&self, category: &'a Category, code: ItemCode) -> CoreResult<&'a Item> {
        let item = category
            .get(code)
            .ok_or(ValidationError::InvalidItemCode)?;

        if self.available(item) == 0 {
            return Err(CoreError::OutOfStock {
                name: item.name().to_string(),
            });
        }

        Ok(item)
    }

    /// Adds `quantity` of `code` or increases the quantity if already present.
    ///
    /// ## User Workflow
    /// ```text
    /// How many Oreo Biscuit? 4
    ///      │
    ///      ▼
    /// add(snacks, 35, 4) ← THIS FUNCTION
    ///      │
    ///      ├── qty == 0?               → "Invalid quantity."
    ///      ├── qty > stock - in cart?  → "Insufficient stock. Only N available."
    ///      └── OK → line for 35 grows by 4
    /// ```
    ///
    /// ## Returns
    /// The accumulated quantity of `code` in the cart.
    pub fn add(&mut self, category: &Category, code: ItemCode, quantity: u32) -> CoreResult<u32> {
        let item = self.select(category, code)?;

        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity.into());
        }

        let available = self.available(item);
        if quantity > available {
            return Err(CoreError::InsufficientStock {
                name: item.name().to_string(),
                available,
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.code == code) {
            line.quantity += quantity;
            return Ok(line.quantity);
        }

        self.lines.push(CartLine { code, quantity });
        Ok(quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn snacks() -> Category {
        Category::new(
            "Snacks",
            vec![
                Item::new(ItemCode::new(33), "Twix Rolls", Money::from_cents(800), 0, ItemCode::new(39)),
                Item::new(ItemCode::new(35), "Oreo Biscuit", Money::from_cents(500), 10, ItemCode::new(39)),
            ],
        )
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let accumulated = cart.add(&snacks(), ItemCode::new(35), 2).unwrap();

        assert_eq!(accumulated, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ItemCode::new(35)), 2);
    }

    #[test]
    fn test_add_same_code_accumulates() {
        let mut cart = Cart::new();
        let category = snacks();

        cart.add(&category, ItemCode::new(35), 2).unwrap();
        let accumulated = cart.add(&category, ItemCode::new(35), 3).unwrap();

        assert_eq!(accumulated, 5);
        assert_eq!(cart.len(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_out_of_stock_leaves_cart_untouched() {
        let mut cart = Cart::new();
        let err = cart.add(&snacks(), ItemCode::new(33), 1).unwrap_err();

        assert!(matches!(err, CoreError::OutOfStock { ref name } if name == "Twix Rolls"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_code_is_invalid() {
        let cart = Cart::new();
        let err = cart.select(&snacks(), ItemCode::new(39)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidItemCode)));
    }

    #[test]
    fn test_zero_quantity_is_invalid() {
        let mut cart = Cart::new();
        let err = cart.add(&snacks(), ItemCode::new(35), 0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidQuantity)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_over_stock_reports_available() {
        let mut cart = Cart::new();
        let err = cart.add(&snacks(), ItemCode::new(35), 11).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient stock. Only 10 available.");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_accumulation_is_bounded_by_remaining_stock() {
        let mut cart = Cart::new();
        let category = snacks();

        cart.add(&category, ItemCode::new(35), 7).unwrap();
        let err = cart.add(&category, ItemCode::new(35), 4).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock { available: 3, requested: 4, .. }
        ));

        cart.add(&category, ItemCode::new(35), 3).unwrap();
        assert_eq!(cart.quantity_of(ItemCode::new(35)), 10);

        // Everything left is already in the cart
        let err = cart.select(&category, ItemCode::new(35)).unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { .. }));
    }
}
