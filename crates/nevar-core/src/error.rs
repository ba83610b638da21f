//! # Error Types
//!
//! Domain-specific error types for nevar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nevar-core errors (this file)                                         │
//! │  ├── ValidationError  - Raw prompt input that does not parse           │
//! │  ├── CoreError        - Vending rule violations                        │
//! │  └── CatalogError     - Catalog rejected at construction               │
//! │                                                                         │
//! │  nevar-terminal errors (separate crate)                                │
//! │  └── AppError         - Startup and terminal stream failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed at the prompt, re-prompt  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` of every prompt-level error IS the message the customer
//!    sees, so the terminal prints errors verbatim
//! 3. Errors are enum variants, never String
//! 4. Nothing in `ValidationError` or `CoreError` is fatal

use thiserror::Error;

use crate::catalog::ItemCode;
use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Vending rule violations.
///
/// Every variant is recoverable: the terminal prints it and re-prompts.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The selected item has no stock left to offer.
    ///
    /// ## When This Occurs
    /// - Stock is zero
    /// - The current cart already holds every remaining unit
    #[error("Sorry, {name} is out of stock.")]
    OutOfStock { name: String },

    /// The requested quantity is larger than what can still be sold.
    ///
    /// ## User Workflow
    /// ```text
    /// How many Sprite? 12
    ///      │
    ///      ▼
    /// Check stock: available=10
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Sprite", available: 10, requested: 12 }
    ///      │
    ///      ▼
    /// "Insufficient stock. Only 10 available."
    /// ```
    #[error("Insufficient stock. Only {available} available.")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Money inserted does not cover the total.
    #[error("Insufficient balance. You still owe {owed}")]
    InsufficientPayment { owed: Money },

    /// The customer typed `cancel` at the payment prompt.
    #[error("Transaction cancelled. Returning to menu.")]
    CancelledTransaction,

    /// Code does not exist in the catalog.
    #[error("Item {code} not found")]
    ItemNotFound { code: ItemCode },

    /// Raw input did not parse.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Catalog construction failed.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a line typed at a prompt cannot be turned into the
/// value that prompt expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Main menu input is not one of the numbered options.
    #[error("Invalid option! Please enter 1-{max}.")]
    InvalidMenuChoice { max: usize },

    /// Category prompt input is not a code of that category.
    #[error("Invalid code. Please try again.")]
    InvalidItemCode,

    /// Quantity is not a positive whole number.
    #[error("Invalid quantity.")]
    InvalidQuantity,

    /// Payment input is not a non-negative amount.
    #[error("Invalid input. Please enter an amount.")]
    InvalidPaymentFormat,
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Reasons a catalog is refused at construction time.
///
/// A catalog that constructs successfully has globally unique codes and
/// every pair resolves into a different category, so none of these can
/// surface once the machine is running.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    EmptyCatalog,

    #[error("category name is blank")]
    BlankCategoryName,

    #[error("category '{name}' is defined more than once")]
    DuplicateCategory { name: String },

    /// Zero is reserved for the finish-order sentinel.
    #[error("item code {code} is not allowed")]
    InvalidItemCode { code: u32 },

    #[error("item code {code} is used more than once")]
    DuplicateItemCode { code: ItemCode },

    #[error("item {code} has a blank name")]
    BlankItemName { code: ItemCode },

    #[error("item {code} has a negative price")]
    NegativePrice { code: ItemCode },

    #[error("item {code} is paired with unknown item {paired_code}")]
    UnresolvedPair { code: ItemCode, paired_code: ItemCode },

    #[error("item {code} is paired with item {paired_code} from its own category")]
    SamePairCategory { code: ItemCode, paired_code: ItemCode },

    /// Price × stock summed over every item must fit in `Money`.
    #[error("catalog stock is worth more than the machine can total")]
    StockValueTooLarge,

    #[error("catalog definition is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
