//! # Display
//!
//! Text shown on the machine's screen. Pure formatting: the session decides
//! when each piece is printed.
//!
//! ```text
//! ===================================        ◄── banner()
//! WELCOME TO NEVAR VENDING MACHINE!
//!
//! ===================================
//!
//! --- SNACKS MENU ---                        ◄── category_header()
//! [35] Oreo Biscuit - $5.00 (Stock: 10)      ◄── item_line()
//! [33] Twix Rolls - $8.00 (Stock Unavailable!)
//! ...
//! Thank you for using Nevar Vending Machine! Goodbye!   ◄── goodbye()
//! ```

use nevar_core::Item;

const RULE_WIDTH: usize = 35;

/// Welcome banner, printed once at startup.
pub fn banner(machine_name: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\nWELCOME TO {} VENDING MACHINE!\n\n{rule}",
        machine_name.to_uppercase()
    )
}

/// Last line printed, on Exit or when the input closes.
pub fn goodbye(machine_name: &str) -> String {
    format!("Thank you for using {machine_name} Vending Machine! Goodbye!")
}

/// `[35] Oreo Biscuit - $5.00 (Stock: 10)`, or `(Stock Unavailable!)` at zero.
pub fn item_line(item: &Item) -> String {
    let stock_status = if item.in_stock() {
        format!("Stock: {}", item.stock())
    } else {
        "Stock Unavailable!".to_string()
    };
    format!(
        "[{}] {} - {} ({})",
        item.code(),
        item.name(),
        item.unit_price(),
        stock_status
    )
}

/// Heading above a category's item list, preceded by a blank line.
pub fn category_header(category_name: &str) -> String {
    format!("\n--- {} MENU ---", category_name.to_uppercase())
}
