//! Mayday configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mayday_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{MaydayConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use mayday_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory and creates a default
/// if none exists. A file that fails validation yields the defaults.
pub fn load_config() -> Result<MaydayConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from `path` when given, otherwise from the default location.
///
/// An explicit path must exist; only the default location is created on
/// demand.
pub fn load_config_from(path: Option<&Path>) -> Result<MaydayConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MaydayConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
