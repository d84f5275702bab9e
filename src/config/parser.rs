//! Configuration file loading
//!
//! Configuration is optional: without a file, [`Config::default`] supplies
//! the classic thresholds and preset menu. A TOML file may override any
//! subset of the fields.

use crate::config::validation::validate_config;
use crate::config::Config;
use crate::ConfigResult;
use std::fs;
use std::path::Path;

/// Loads and validates configuration from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Parsed and validated configuration
/// * `Err(ConfigError)` - File unreadable, TOML invalid, or validation failed
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}
