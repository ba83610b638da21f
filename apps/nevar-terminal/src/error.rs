//! # Application Error Type
//!
//! Failures that stop the machine.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prompt-level (nevar-core)           Fatal (this file)                  │
//! │  ─────────────────────────           ─────────────────                  │
//! │  ValidationError, CoreError          AppError                           │
//! │        │                                   │                            │
//! │        ▼                                   ▼                            │
//! │  printed to the customer,            returned from main, logged,        │
//! │  same prompt shown again             non-zero exit status               │
//! │                                                                         │
//! │  AppError only comes from startup (configuration, catalog file) or a    │
//! │  broken terminal stream.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use nevar_core::{CatalogError, CoreError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot read catalog file {path}: {source}")]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A core rule failed where the terminal has no way to re-prompt.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
