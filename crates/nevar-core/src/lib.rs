//! # nevar-core: Pure Vending Logic
//!
//! This crate is the **heart** of the Nevar vending machine. It contains the
//! catalog, cart, checkout and suggestion rules as plain functions and types
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Nevar Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 nevar-terminal (stdin / stdout)                 │   │
//! │  │   Main Menu ──► Category Menu ──► Payment ──► Suggestion        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ parse_* / Cart / Checkout              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nevar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │checkout │ │suggestion│ │ money  │  │   │
//! │  │   │ Item    │ │ Cart    │ │Checkout │ │ suggest  │ │ Money  │  │   │
//! │  │   │ Category│ │CartLine │ │ Receipt │ │          │ │        │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO FILES • NO ENVIRONMENT              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Items, categories and the validated catalog
//! - [`cart`] - The in-progress selection for one menu visit
//! - [`checkout`] - Totals, tendering and the atomic stock commit
//! - [`suggestion`] - Cross-category paired item recommendation
//! - [`validation`] - Parsing of raw prompt input into typed values
//! - [`seed`] - The machine's built-in stock
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use nevar_core::{seed, Cart, Checkout, ItemCode, Money};
//!
//! let mut catalog = seed::default_catalog().unwrap();
//! let snacks = catalog.category(0).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(snacks, ItemCode::new(35), 2).unwrap(); // 2 x Oreo Biscuit
//!
//! let checkout = Checkout::new(&catalog, cart).unwrap();
//! assert_eq!(checkout.total(), Money::from_cents(1000));
//!
//! let receipt = checkout.tender(&mut catalog, Money::from_cents(1000)).unwrap();
//! assert!(receipt.change.is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod seed;
pub mod suggestion;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogDefinition, Category, CategoryDefinition, Item, ItemCode};
pub use checkout::{Checkout, Receipt, ReceiptLine};
pub use error::{CatalogError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use suggestion::suggest;
pub use validation::{MenuChoice, OrderInput, Tender};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Code typed at the category prompt to finish the order.
///
/// Item codes can never be zero, so the sentinel never collides with an item.
pub const FINISH_ORDER_SENTINEL: &str = "0";

/// Word typed at the payment prompt to abort the transaction (any case).
pub const CANCEL_KEYWORD: &str = "cancel";
