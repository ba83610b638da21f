//! # Nevar Vending Machine Entry Point
//!
//! ```bash
//! cargo run -p nevar-terminal
//!
//! # Different machine name and stock
//! NEVAR_MACHINE_NAME=Lobby NEVAR_CATALOG_PATH=./catalog.json cargo run -p nevar-terminal
//!
//! # Show sales in the log (stderr)
//! RUST_LOG=info cargo run -p nevar-terminal
//! ```
//!
//! The setup lives in lib.rs so it can be tested.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    nevar_terminal::run()?;
    Ok(())
}
