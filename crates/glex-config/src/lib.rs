//! glex configuration system.
//!
//! TOML-based configuration with validation. Every section uses sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glex_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GlexConfig, CONFIG_SCHEMA_VERSION};

use glex_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default
/// path (creating it on first run), then validate the result.
pub fn load_config(path: Option<&Path>) -> Result<GlexConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlexConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
