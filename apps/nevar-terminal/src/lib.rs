//! # Nevar Terminal Library
//!
//! Runs the vending machine on stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! nevar_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── MachineConfig from the environment
//! ├── session.rs      ◄─── Menu, order, payment and suggestion screens
//! ├── display.rs      ◄─── Banner and menu line formatting
//! └── error.rs        ◄─── AppError for fatal failures
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod session;

use std::io;

use nevar_core::{seed, Catalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::MachineConfig;
use error::{AppError, AppResult};
use session::Session;

/// Runs the machine until the customer exits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Machine Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration (NEVAR_* variables)                              │
/// │                                                                         │
/// │  3. Load Catalog                                                        │
/// │     • NEVAR_CATALOG_PATH set: JSON file, validated                      │
/// │     • otherwise: built-in seed                                          │
/// │                                                                         │
/// │  4. Run Session on stdin/stdout                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = MachineConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let catalog = load_catalog(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(catalog, config, stdin.lock(), stdout.lock());
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the customer dialogue
/// on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Sales, cancellations, startup
/// - `RUST_LOG=nevar_core=debug,nevar_terminal=debug` - Every selection
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Loads the configured catalog file, or the built-in stock.
pub fn load_catalog(config: &MachineConfig) -> AppResult<Catalog> {
    let Some(path) = &config.catalog_path else {
        info!("Using built-in catalog");
        return Ok(seed::default_catalog()?);
    };

    let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogFile {
        path: path.clone(),
        source,
    })?;
    let catalog = Catalog::from_json(&json)?;

    info!(
        path = %path.display(),
        categories = catalog.category_count(),
        "Catalog loaded from file"
    );
    Ok(catalog)
}
