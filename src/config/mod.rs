//! Configuration module for Article-Scout
//!
//! Thresholds, the PDF auto-accept rule, the preset seed menu, and the output
//! path all live in an explicit [`Config`] structure with documented
//! defaults. An optional TOML file can override any subset of the fields.
//!
//! # Example
//!
//! ```no_run
//! use article_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Article threshold: {} chars", config.min_article_len);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, PresetEntry};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate_config;
