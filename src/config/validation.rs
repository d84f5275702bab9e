//! Configuration validation
//!
//! Checks that a loaded configuration is internally consistent before the
//! pipeline runs with it.

use crate::config::Config;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates a configuration
///
/// Rules:
/// - `min-article-len` must be non-zero (a zero threshold classifies every
///   reachable link as an article, which is never intended)
/// - `article-suffix` must be non-empty
/// - preset codes must be non-empty and unique (case-insensitively)
/// - preset URLs must parse as absolute URLs
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.min_article_len == 0 {
        return Err(ConfigError::Validation(
            "min-article-len must be greater than zero".to_string(),
        ));
    }

    if config.article_suffix.is_empty() {
        return Err(ConfigError::Validation(
            "article-suffix must not be empty".to_string(),
        ));
    }

    let mut seen_codes: Vec<String> = Vec::new();
    for preset in &config.presets {
        if preset.code.trim().is_empty() {
            return Err(ConfigError::Validation(
                "preset codes must not be empty".to_string(),
            ));
        }

        let lowered = preset.code.to_ascii_lowercase();
        if seen_codes.contains(&lowered) {
            return Err(ConfigError::Validation(format!(
                "duplicate preset code: {}",
                preset.code
            )));
        }
        seen_codes.push(lowered);

        if Url::parse(&preset.url).is_err() {
            return Err(ConfigError::InvalidUrl(preset.url.clone()));
        }
    }

    Ok(())
}
