//! # Machine Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`NEVAR_*`)
//! 2. Defaults (this file)
//!
//! Logging is configured separately through `RUST_LOG` (see `init_tracing`).
//!
//! Every default reproduces the stock Nevar machine, so running with an
//! empty environment needs no setup.

use std::path::PathBuf;

/// Machine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Shown in the welcome banner and the goodbye line.
    pub machine_name: String,

    /// JSON catalog replacing the built-in stock.
    pub catalog_path: Option<PathBuf>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            machine_name: "Nevar".to_string(),
            catalog_path: None,
        }
    }
}

impl MachineConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `NEVAR_MACHINE_NAME`: Override the machine name
    /// - `NEVAR_CATALOG_PATH`: Load the catalog from this JSON file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = MachineConfig::default();

        if let Some(name) = lookup("NEVAR_MACHINE_NAME") {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Blank("NEVAR_MACHINE_NAME".to_string()));
            }
            config.machine_name = name.to_string();
        }

        if let Some(path) = lookup("NEVAR_CATALOG_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::Blank("NEVAR_CATALOG_PATH".to_string()));
            }
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is set but blank")]
    Blank(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = MachineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MachineConfig::default());
        assert_eq!(config.machine_name, "Nevar");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = MachineConfig::from_lookup(lookup_from(&[
            ("NEVAR_MACHINE_NAME", " Lobby "),
            ("NEVAR_CATALOG_PATH", "/etc/nevar/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.machine_name, "Lobby");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/nevar/catalog.json"))
        );
    }

    #[test]
    fn test_blank_values_are_rejected() {
        let err = MachineConfig::from_lookup(lookup_from(&[("NEVAR_MACHINE_NAME", "  ")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "NEVAR_MACHINE_NAME is set but blank");

        assert!(MachineConfig::from_lookup(lookup_from(&[("NEVAR_CATALOG_PATH", "")])).is_err());
    }
}
