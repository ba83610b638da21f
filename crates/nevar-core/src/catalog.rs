//! # Catalog
//!
//! The machine's items, grouped into named categories.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog                                                                │
//! │  ├── Category "Snacks"   (menu option 1)                                │
//! │  │   ├── [31] Pringles Cheese  $10.00  stock 10  pair → 37             │
//! │  │   └── ...                                                            │
//! │  └── Category "Drinks"   (menu option 2)                                │
//! │      ├── [37] Coca-Cola         $3.00  stock 10  pair → 31             │
//! │      └── ...                                                            │
//! │                                                                         │
//! │  index: code → (category, position)   codes are unique machine-wide    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants (checked by [`Catalog::new`])
//! - At least one category; category names are non-blank and unique
//! - Item codes are non-zero and unique across ALL categories
//! - Every `paired_code` resolves to an item in a *different* category
//!
//! Pairing is not assumed to be symmetric: 35 → 39 does not imply 39 → 35.
//!
//! ## Mutation
//! `stock` is the only field that ever changes, and only through
//! [`Catalog::commit`], which checks every cart line before touching any.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cart::Cart;
use crate::error::{CatalogError, CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Item Code
// =============================================================================

/// Numeric code the customer types to select an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(u32);

impl ItemCode {
    #[inline]
    pub const fn new(code: u32) -> Self {
        ItemCode(code)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A product slot in the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    code: ItemCode,
    name: String,
    unit_price: Money,
    stock: u32,
    /// Item suggested after this one is bought.
    paired_code: ItemCode,
}

impl Item {
    pub fn new(
        code: ItemCode,
        name: impl Into<String>,
        unit_price: Money,
        stock: u32,
        paired_code: ItemCode,
    ) -> Self {
        Item {
            code,
            name: name.into(),
            unit_price,
            stock,
            paired_code,
        }
    }

    #[inline]
    pub fn code(&self) -> ItemCode {
        self.code
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    #[inline]
    pub fn paired_code(&self) -> ItemCode {
        self.paired_code
    }

    /// Checks if at least one unit is left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Category
// =============================================================================

/// A named group of items, shown as one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    /// Display order.
    items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Category {
            name: name.into(),
            items,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item of this category only.
    pub fn get(&self, code: ItemCode) -> Option<&Item> {
        self.items.iter().find(|item| item.code == code)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Position of an item: (category index, item index).
type Slot = (usize, usize);

/// The validated, ordered set of categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<ItemCode, Slot>,
}

impl Catalog {
    /// Builds a catalog, rejecting anything that breaks the module invariants.
    ///
    /// ## Example
    /// ```rust
    /// use nevar_core::{Catalog, Category, Item, ItemCode, Money};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Category::new("Snacks", vec![
    ///         Item::new(ItemCode::new(35), "Oreo Biscuit", Money::from_cents(500), 10, ItemCode::new(39)),
    ///     ]),
    ///     Category::new("Drinks", vec![
    ///         Item::new(ItemCode::new(39), "Saudia Choco Milk", Money::from_cents(250), 10, ItemCode::new(35)),
    ///     ]),
    /// ]);
    /// assert!(catalog.is_ok());
    /// ```
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut index = HashMap::new();
        let mut stock_value: i128 = 0;
        for (category_idx, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::BlankCategoryName);
            }
            if categories[..category_idx]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&category.name))
            {
                return Err(CatalogError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }

            for (item_idx, item) in category.items.iter().enumerate() {
                if item.code.get() == 0 {
                    return Err(CatalogError::InvalidItemCode { code: 0 });
                }
                if item.name.trim().is_empty() {
                    return Err(CatalogError::BlankItemName { code: item.code });
                }
                if item.unit_price.is_negative() {
                    return Err(CatalogError::NegativePrice { code: item.code });
                }
                if index.insert(item.code, (category_idx, item_idx)).is_some() {
                    return Err(CatalogError::DuplicateItemCode { code: item.code });
                }
                stock_value = stock_value
                    .saturating_add(i128::from(item.unit_price.cents()) * i128::from(item.stock));
            }
        }

        // Any cart is a subset of the stock, so this bounds every order total
        if stock_value > i128::from(i64::MAX) {
            return Err(CatalogError::StockValueTooLarge);
        }

        // Pairs can point forward, so they are resolved once every code is known
        for (category_idx, category) in categories.iter().enumerate() {
            for item in &category.items {
                match index.get(&item.paired_code) {
                    None => {
                        return Err(CatalogError::UnresolvedPair {
                            code: item.code,
                            paired_code: item.paired_code,
                        })
                    }
                    Some(&(pair_category, _)) if pair_category == category_idx => {
                        return Err(CatalogError::SamePairCategory {
                            code: item.code,
                            paired_code: item.paired_code,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Catalog { categories, index })
    }

    /// Builds a catalog from its serialisable description.
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let categories = definition
            .categories
            .into_iter()
            .map(CategoryDefinition::into_category)
            .collect();
        Catalog::new(categories)
    }

    /// Parses a JSON catalog description and validates it.
    ///
    /// ## Format
    /// ```json
    /// { "categories": [
    ///     { "name": "Snacks", "items": [
    ///         { "code": 35, "name": "Oreo Biscuit", "price_cents": 500, "stock": 10, "pair": 39 }
    ///     ] }
    /// ] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Catalog::from_definition(definition)
    }

    /// Categories in menu order.
    #[inline]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category by 0-based menu position.
    pub fn category(&self, idx: usize) -> Option<&Category> {
        self.categories.get(idx)
    }

    #[inline]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Resolves a code anywhere in the machine.
    pub fn item(&self, code: ItemCode) -> Option<&Item> {
        self.index
            .get(&code)
            .map(|&(category, item)| &self.categories[category].items[item])
    }

    /// The item `code` is paired with.
    pub fn paired_item(&self, code: ItemCode) -> Option<&Item> {
        self.item(code).and_then(|item| self.item(item.paired_code))
    }

    /// Dispenses every cart line, or nothing at all.
    ///
    /// ## Commit Flow
    /// ```text
    /// Pass 1: every line  ── quantity ≤ live stock? ── no ──► Err, stock untouched
    ///                                │ yes
    ///                                ▼
    /// Pass 2: every line  ── stock -= quantity
    /// ```
    pub fn commit(&mut self, cart: &Cart) -> CoreResult<()> {
        let mut slots = Vec::with_capacity(cart.len());
        for line in cart.lines() {
            let slot = *self
                .index
                .get(&line.code)
                .ok_or(CoreError::ItemNotFound { code: line.code })?;
            let item = &self.categories[slot.0].items[slot.1];
            if line.quantity > item.stock {
                warn!(
                    code = %line.code,
                    requested = line.quantity,
                    available = item.stock,
                    "Commit rejected, stock is short"
                );
                return Err(CoreError::InsufficientStock {
                    name: item.name.clone(),
                    available: item.stock,
                    requested: line.quantity,
                });
            }
            slots.push((slot, line.quantity));
        }

        for ((category, item), quantity) in slots {
            self.categories[category].items[item].stock -= quantity;
        }

        Ok(())
    }
}

// =============================================================================
// Serialisable Definitions
// =============================================================================

/// Catalog as written in a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub items: Vec<ItemDefinition>,
}

/// One item as written in a JSON file. Prices are integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub code: u32,
    pub name: String,
    pub price_cents: i64,
    pub stock: u32,
    pub pair: u32,
}

impl CategoryDefinition {
    fn into_category(self) -> Category {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                Item::new(
                    ItemCode::new(item.code),
                    item.name,
                    Money::from_cents(item.price_cents),
                    item.stock,
                    ItemCode::new(item.pair),
                )
            })
            .collect();
        Category::new(self.name, items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
