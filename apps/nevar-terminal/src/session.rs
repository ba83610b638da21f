//! # Vending Session
//!
//! The interactive loop: one customer, one line of input per prompt.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  MAIN MENU ◄──────────────────────────────────────────────────────┐     │
//! │    │ category                    exit ──► goodbye, end            │     │
//! │    ▼                                                              │     │
//! │  CATEGORY MENU: code → quantity → added   (repeat)                │     │
//! │    │ "0"                                                          │     │
//! │    ├── empty cart ────────────────────────────────────────────────┤     │
//! │    ▼                                                              │     │
//! │  PAYMENT: amount / cancel   (re-prompt until paid or cancelled)   │     │
//! │    ├── cancel ────────────────────────────────────────────────────┤     │
//! │    ▼                                                              │     │
//! │  DISPENSING + change ──► SMART SUGGESTION (if any) ───────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rejected input prints the error's message and shows the same
//! prompt again. Closing the input stream ends the session as if the
//! customer picked "Exit"; an unpaid cart is dropped without touching stock.

use std::io::{BufRead, Write};

use nevar_core::validation::{parse_menu_choice, parse_order_input, parse_quantity, parse_tender};
use nevar_core::{
    suggest, Cart, Catalog, Checkout, CoreError, MenuChoice, OrderInput, Receipt, Tender,
};
use tracing::{debug, info, warn};

use crate::config::MachineConfig;
use crate::display;
use crate::error::AppResult;

/// What the main loop does after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Show the main menu again.
    Continue,
    /// Leave the main loop.
    Exit,
}

// =============================================================================
// Terminal
// =============================================================================

/// Line-oriented input and output.
struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn say(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `text` without a newline and reads one line.
    ///
    /// Returns `None` once the input is closed. Bytes that are not UTF-8
    /// are replaced, so the line reaches the parsers and is rejected there.
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

// =============================================================================
// Session
// =============================================================================

/// A running machine: the catalog it owns and the terminal it talks to.
pub struct Session<R, W> {
    catalog: Catalog,
    config: MachineConfig,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, config: MachineConfig, input: R, output: W) -> Self {
        Session {
            catalog,
            config,
            terminal: Terminal { input, output },
        }
    }

    /// Current catalog, including stock.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ends the session and hands the catalog back.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Runs until the customer exits or the input closes.
    pub fn run(&mut self) -> AppResult<()> {
        self.terminal.say(&display::banner(&self.config.machine_name))?;

        while self.main_menu()? == Step::Continue {}

        self.terminal.say(&display::goodbye(&self.config.machine_name))?;
        info!("Session ended");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Menu Navigator
    // -------------------------------------------------------------------------

    fn main_menu(&mut self) -> AppResult<Step> {
        let category_count = self.catalog.category_count();

        self.terminal.say("\nMAIN MENU: ")?;
        for (idx, category) in self.catalog.categories().iter().enumerate() {
            self.terminal.say(&format!("{}. {}", idx + 1, category.name()))?;
        }
        self.terminal.say(&format!("{}. Exit", category_count + 1))?;

        let prompt = format!("Select an option (1-{}): ", category_count + 1);
        let Some(line) = self.terminal.prompt(&prompt)? else {
            return Ok(Step::Exit);
        };

        match parse_menu_choice(&line, category_count) {
            Ok(MenuChoice::Exit) => Ok(Step::Exit),
            Ok(MenuChoice::Category(idx)) => {
                debug!(category = idx, "Category selected");
                self.category_menu(idx)
            }
            Err(err) => {
                self.terminal.say(&err.to_string())?;
                Ok(Step::Continue)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Order Builder
    // -------------------------------------------------------------------------

    fn category_menu(&mut self, idx: usize) -> AppResult<Step> {
        let Some(category) = self.catalog.category(idx) else {
            return Ok(Step::Continue);
        };

        self.terminal.say(&display::category_header(category.name()))?;
        for item in category.items() {
            self.terminal.say(&display::item_line(item))?;
        }

        let mut cart = Cart::new();
        loop {
            let Some(line) = self
                .terminal
                .prompt("\nEnter code to select (or 0 to finish order): ")?
            else {
                return Ok(Step::Exit);
            };

            let code = match parse_order_input(&line) {
                Ok(OrderInput::Finish) => break,
                Ok(OrderInput::Select(code)) => code,
                Err(err) => {
                    self.terminal.say(&err.to_string())?;
                    continue;
                }
            };

            let item = match cart.select(category, code) {
                Ok(item) => item,
                Err(err) => {
                    self.terminal.say(&err.to_string())?;
                    continue;
                }
            };

            let Some(line) = self.terminal.prompt(&format!("How many {}? ", item.name()))? else {
                return Ok(Step::Exit);
            };

            let added = parse_quantity(&line)
                .map_err(CoreError::from)
                .and_then(|qty| cart.add(category, code, qty).map(|in_cart| (qty, in_cart)));

            match added {
                Ok((qty, in_cart)) => {
                    debug!(code = %code, qty, in_cart, "Added to cart");
                    self.terminal
                        .say(&format!("Added {} x {} to cart.", qty, item.name()))?;
                }
                Err(err) => self.terminal.say(&err.to_string())?,
            }
        }

        if cart.is_empty() {
            return Ok(Step::Continue);
        }

        self.process_payment(cart)
    }

    // -------------------------------------------------------------------------
    // Payment Processor
    // -------------------------------------------------------------------------

    fn process_payment(&mut self, cart: Cart) -> AppResult<Step> {
        let checkout = Checkout::new(&self.catalog, cart)?;
        self.terminal
            .say(&format!("\nTOTAL DUE: {}", checkout.total()))?;

        loop {
            let Some(line) = self.terminal.prompt("Insert money (or type 'cancel'): $")? else {
                return Ok(Step::Exit);
            };

            let amount = match parse_tender(&line) {
                Ok(Tender::Cancel) => {
                    self.terminal.say(&checkout.cancel().to_string())?;
                    return Ok(Step::Continue);
                }
                Ok(Tender::Amount(amount)) => amount,
                Err(err) => {
                    self.terminal.say(&err.to_string())?;
                    continue;
                }
            };

            match checkout.tender(&mut self.catalog, amount) {
                Ok(receipt) => {
                    self.dispense(&receipt)?;
                    self.suggest(checkout.cart())?;
                    return Ok(Step::Continue);
                }
                Err(err @ CoreError::InsufficientPayment { .. }) => {
                    self.terminal.say(&err.to_string())?;
                }
                Err(err) => {
                    // Live stock no longer covers the cart; nothing was dispensed
                    warn!(%err, "Sale abandoned at commit");
                    self.terminal.say(&err.to_string())?;
                    self.terminal.say(&CoreError::CancelledTransaction.to_string())?;
                    return Ok(Step::Continue);
                }
            }
        }
    }

    fn dispense(&mut self, receipt: &Receipt) -> AppResult<()> {
        self.terminal.say("\n--- DISPENSING ITEMS ---")?;
        for line in &receipt.lines {
            self.terminal
                .say(&format!("Dispensed: {} x {}", line.quantity, line.name))?;
        }
        self.terminal
            .say(&format!("Change Returned: {}", receipt.change))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Suggestion Engine
    // -------------------------------------------------------------------------

    fn suggest(&mut self, cart: &Cart) -> AppResult<()> {
        let Some(item) = suggest(&self.catalog, cart) else {
            return Ok(());
        };

        debug!(code = %item.code(), "Suggesting paired item");
        self.terminal.say("\n--- SMART SUGGESTION ---")?;
        self.terminal.say(&format!(
            "Enjoy your purchase! Why not try {} next time?",
            item.name()
        ))?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
