//! Article-Scout: a one-hop article link detector
//!
//! This crate crawls a single seed page, follows its outbound links one hop,
//! estimates each linked page's main-content size with a paragraph-density
//! heuristic, and writes the links classified as articles to a CSV file.

pub mod config;
pub mod console;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Article-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while fetching a single page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP 403 Forbidden for {url}")]
    Forbidden { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },
}

/// Result type alias for Article-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{classify_links, estimate_body_length, ClassificationRecord, LinkLengthMap};
pub use output::ArticleTable;
