//! # Validation Module
//!
//! Turns the raw lines typed at each prompt into typed values.
//!
//! ## Prompt → Parser
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Select an option (1-3): "          parse_menu_choice → MenuChoice     │
//! │  "Enter code to select (or 0 ...): " parse_order_input → OrderInput     │
//! │  "How many <name>? "                 parse_quantity    → u32            │
//! │  "Insert money (or type 'cancel'): $" parse_tender     → Tender         │
//! │                                                                         │
//! │  Every parser returns Result<_, ValidationError>. A failure is printed  │
//! │  and the same prompt is shown again; nothing panics.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Surrounding whitespace (including the trailing newline) is ignored by
//! every parser. Numbers are plain ASCII digits: no sign, no separators.

use crate::catalog::ItemCode;
use crate::error::ValidationError;
use crate::money::Money;
use crate::{CANCEL_KEYWORD, FINISH_ORDER_SENTINEL};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Parsed Input Types
// =============================================================================

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 0-based category position.
    Category(usize),
    Exit,
}

/// Category prompt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderInput {
    /// The finish-order sentinel.
    Finish,
    Select(ItemCode),
}

/// Payment prompt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tender {
    Cancel,
    Amount(Money),
}

// =============================================================================
// Parsers
// =============================================================================

fn parse_digits(input: &str) -> Option<u32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Parses the main menu option.
///
/// Options `1..=category_count` open a category, `category_count + 1` exits.
///
/// ## Example
/// ```rust
/// use nevar_core::validation::{parse_menu_choice, MenuChoice};
///
/// assert_eq!(parse_menu_choice("2", 2), Ok(MenuChoice::Category(1)));
/// assert_eq!(parse_menu_choice("3", 2), Ok(MenuChoice::Exit));
/// assert!(parse_menu_choice("4", 2).is_err());
/// ```
pub fn parse_menu_choice(input: &str, category_count: usize) -> ValidationResult<MenuChoice> {
    let exit_option = category_count + 1;
    let invalid = ValidationError::InvalidMenuChoice { max: exit_option };

    match parse_digits(input.trim()).map(|n| n as usize) {
        Some(n) if n == exit_option => Ok(MenuChoice::Exit),
        Some(n) if (1..=category_count).contains(&n) => Ok(MenuChoice::Category(n - 1)),
        _ => Err(invalid),
    }
}

/// Parses the category prompt: the finish sentinel or an item code.
///
/// Only the exact sentinel finishes the order; `"00"` is just an unknown
/// code. Whether a code belongs to the category is checked by
/// [`Cart::select`](crate::Cart::select).
pub fn parse_order_input(input: &str) -> ValidationResult<OrderInput> {
    let input = input.trim();
    if input == FINISH_ORDER_SENTINEL {
        return Ok(OrderInput::Finish);
    }

    parse_digits(input)
        .map(|code| OrderInput::Select(ItemCode::new(code)))
        .ok_or(ValidationError::InvalidItemCode)
}

/// Parses a quantity.
///
/// ## Rules
/// - Must be a whole number
/// - Must be positive (> 0)
///
/// Upper bounds depend on stock and are checked by [`Cart::add`](crate::Cart::add).
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    match parse_digits(input.trim()) {
        Some(qty) if qty > 0 => Ok(qty),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

/// Parses the payment prompt.
///
/// ## Example
/// ```rust
/// use nevar_core::validation::{parse_tender, Tender};
/// use nevar_core::Money;
///
/// assert_eq!(parse_tender("CANCEL"), Ok(Tender::Cancel));
/// assert_eq!(parse_tender("12.5"), Ok(Tender::Amount(Money::from_cents(1250))));
/// assert!(parse_tender("abc").is_err());
/// ```
pub fn parse_tender(input: &str) -> ValidationResult<Tender> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(CANCEL_KEYWORD) {
        return Ok(Tender::Cancel);
    }

    input.parse::<Money>().map(Tender::Amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1", 2), Ok(MenuChoice::Category(0)));
        assert_eq!(parse_menu_choice(" 2\n", 2), Ok(MenuChoice::Category(1)));
        assert_eq!(parse_menu_choice("3", 2), Ok(MenuChoice::Exit));

        for input in ["0", "4", "", "one", "-1", "1.0", "+1"] {
            assert_eq!(
                parse_menu_choice(input, 2),
                Err(ValidationError::InvalidMenuChoice { max: 3 }),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_menu_choice_follows_category_count() {
        assert_eq!(parse_menu_choice("4", 3), Ok(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("3", 3), Ok(MenuChoice::Category(2)));
        assert_eq!(
            parse_menu_choice("5", 3),
            Err(ValidationError::InvalidMenuChoice { max: 4 })
        );
    }

    #[test]
    fn test_parse_order_input() {
        assert_eq!(parse_order_input("0"), Ok(OrderInput::Finish));
        assert_eq!(parse_order_input("35"), Ok(OrderInput::Select(ItemCode::new(35))));
        assert_eq!(parse_order_input("00"), Ok(OrderInput::Select(ItemCode::new(0))));

        assert_eq!(parse_order_input("abc"), Err(ValidationError::InvalidItemCode));
        assert_eq!(parse_order_input(""), Err(ValidationError::InvalidItemCode));
        assert_eq!(parse_order_input("-3"), Err(ValidationError::InvalidItemCode));
        assert_eq!(
            parse_order_input("99999999999"),
            Err(ValidationError::InvalidItemCode)
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1"), Ok(1));
        assert_eq!(parse_quantity("12 "), Ok(12));

        for input in ["0", "-2", "two", "", "1.5"] {
            assert_eq!(parse_quantity(input), Err(ValidationError::InvalidQuantity), "{input:?}");
        }
    }

    #[test]
    fn test_parse_tender() {
        assert_eq!(parse_tender("cancel"), Ok(Tender::Cancel));
        assert_eq!(parse_tender(" Cancel "), Ok(Tender::Cancel));
        assert_eq!(parse_tender("10.00"), Ok(Tender::Amount(Money::from_cents(1000))));
        assert_eq!(parse_tender("abc"), Err(ValidationError::InvalidPaymentFormat));
        assert_eq!(parse_tender("cancel now"), Err(ValidationError::InvalidPaymentFormat));
    }
}
