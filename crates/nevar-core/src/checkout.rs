//! # Checkout
//!
//! Totals a finished cart, takes the customer's money and commits the sale.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout::new(cart)                              │
//! │                   total = Σ unit_price × quantity                       │
//! │                                │                                        │
//! │              ┌─────────────────┼────────────────────┐                   │
//! │              ▼                 ▼                    ▼                   │
//! │           cancel()      tender(amount < total)  tender(amount ≥ total)  │
//! │              │                 │                    │                   │
//! │              ▼                 ▼                    ▼                   │
//! │   CancelledTransaction  InsufficientPayment   Catalog::commit (atomic)  │
//! │   stock untouched       { owed }, re-prompt         │                   │
//! │                                                     ▼                   │
//! │                                     Receipt { change = amount - total } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::{Catalog, ItemCode};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Receipt
// =============================================================================

/// A cart line priced at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub code: ItemCode,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price × quantity
    pub line_total: Money,
}

/// A committed sale.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    /// In dispensing order.
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub tendered: Money,
    /// tendered - total, never negative.
    pub change: Money,
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Checkout
// =============================================================================

/// A cart waiting for payment.
#[derive(Debug, Clone)]
pub struct Checkout {
    cart: Cart,
    lines: Vec<ReceiptLine>,
    total: Money,
}

impl Checkout {
    /// Prices every line of `cart` against the catalog.
    ///
    /// ## Errors
    /// `ItemNotFound` if the cart holds a code the catalog does not know.
    pub fn new(catalog: &Catalog, cart: Cart) -> CoreResult<Self> {
        let lines = cart
            .lines()
            .iter()
            .map(|line| -> CoreResult<ReceiptLine> {
                let item = catalog
                    .item(line.code)
                    .ok_or(CoreError::ItemNotFound { code: line.code })?;
                Ok(ReceiptLine {
                    code: line.code,
                    name: item.name().to_string(),
                    unit_price: item.unit_price(),
                    quantity: line.quantity,
                    line_total: item.unit_price() * line.quantity,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let total = lines.iter().map(|line| line.line_total).sum();

        Ok(Checkout { cart, lines, total })
    }

    /// Amount due.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// The cart being paid for.
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[inline]
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Takes `tendered` and, if it covers the total, dispenses the cart.
    ///
    /// A rejected payment leaves the checkout usable for another attempt.
    /// After a receipt is returned the checkout must be dropped: the stock
    /// has already been taken.
    ///
    /// ## Errors
    /// - `InsufficientPayment { owed }`: `tendered < total`, nothing changes
    /// - `InsufficientStock`: live stock no longer covers a line, nothing
    ///   changes (see [`Catalog::commit`])
    pub fn tender(&self, catalog: &mut Catalog, tendered: Money) -> CoreResult<Receipt> {
        if tendered < self.total {
            return Err(CoreError::InsufficientPayment {
                owed: self.total - tendered,
            });
        }

        catalog.commit(&self.cart)?;

        let receipt = Receipt {
            id: Uuid::new_v4(),
            lines: self.lines.clone(),
            total: self.total,
            tendered,
            change: tendered - self.total,
            completed_at: Utc::now(),
        };

        info!(
            receipt_id = %receipt.id,
            total = %receipt.total,
            tendered = %receipt.tendered,
            change = %receipt.change,
            units = self.cart.total_quantity(),
            "Sale committed"
        );

        Ok(receipt)
    }

    /// Abandons the sale. The cart is discarded and stock is untouched.
    pub fn cancel(self) -> CoreError {
        info!(total = %self.total, "Transaction cancelled");
        CoreError::CancelledTransaction
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_catalog;

    fn code(n: u32) -> ItemCode {
        ItemCode::new(n)
    }

    fn stock(catalog: &Catalog, n: u32) -> u32 {
        catalog.item(code(n)).unwrap().stock()
    }

    #[test]
    fn test_total_is_exact_sum() {
        let catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(1).unwrap(), code(39), 3).unwrap(); // 3 × $2.50
        cart.add(catalog.category(1).unwrap(), code(40), 1).unwrap(); // 1 × $4.50

        let checkout = Checkout::new(&catalog, cart).unwrap();

        assert_eq!(checkout.total(), Money::from_cents(1200));
        assert_eq!(checkout.lines()[0].line_total, Money::from_cents(750));
    }

    #[test]
    fn test_exact_payment_scenario() {
        let mut catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(0).unwrap(), code(35), 2).unwrap();

        let checkout = Checkout::new(&catalog, cart).unwrap();
        assert_eq!(checkout.total().to_string(), "$10.00");

        let receipt = checkout.tender(&mut catalog, Money::from_cents(1000)).unwrap();

        assert_eq!(receipt.change, Money::zero());
        assert_eq!(receipt.change.to_string(), "$0.00");
        assert_eq!(stock(&catalog, 35), 8);
        // No other item moved
        for other in (31..=40).filter(|&n| n != 35) {
            assert_eq!(stock(&catalog, other), 10, "item {other}");
        }
    }

    #[test]
    fn test_overpayment_returns_change() {
        let mut catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(1).unwrap(), code(39), 1).unwrap();

        let checkout = Checkout::new(&catalog, cart).unwrap();
        let receipt = checkout.tender(&mut catalog, Money::from_cents(500)).unwrap();

        assert_eq!(receipt.change.to_string(), "$2.50");
        assert!(!receipt.change.is_negative());
    }

    #[test]
    fn test_underpayment_reports_owed_and_keeps_stock() {
        let mut catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(0).unwrap(), code(31), 1).unwrap(); // $10.00

        let checkout = Checkout::new(&catalog, cart).unwrap();
        let err = checkout.tender(&mut catalog, Money::from_cents(750)).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientPayment { owed } if owed.cents() == 250));
        assert_eq!(stock(&catalog, 31), 10);

        // Same checkout can be paid on the next attempt
        checkout.tender(&mut catalog, Money::from_cents(1000)).unwrap();
        assert_eq!(stock(&catalog, 31), 9);
    }

    #[test]
    fn test_cancel_leaves_stock_unchanged() {
        let catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(0).unwrap(), code(32), 4).unwrap();

        let checkout = Checkout::new(&catalog, cart).unwrap();
        let err = checkout.cancel();

        assert!(matches!(err, CoreError::CancelledTransaction));
        assert_eq!(stock(&catalog, 32), 10);
    }

    #[test]
    fn test_short_stock_at_commit_fails_whole_sale() {
        let mut catalog = default_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.category(0).unwrap(), code(31), 1).unwrap();
        cart.add(catalog.category(0).unwrap(), code(34), 10).unwrap();
        let checkout = Checkout::new(&catalog, cart).unwrap();

        // Another sale empties 34 first
        let mut other = Cart::new();
        other.add(catalog.category(0).unwrap(), code(34), 1).unwrap();
        Checkout::new(&catalog, other)
            .unwrap()
            .tender(&mut catalog, Money::from_cents(700))
            .unwrap();

        let err = checkout.tender(&mut catalog, Money::from_cents(10_000)).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { available: 9, .. }));
        assert_eq!(stock(&catalog, 31), 10);
        assert_eq!(stock(&catalog, 34), 9);
    }
}
