//! URL handling
//!
//! Seed validation plus the one-hop link resolution rule. The rule is
//! deliberately literal: hrefs beginning with `#`, `/`, or `?` get the full
//! seed URL string prepended, everything else is fetched as written. This
//! reproduces the classic behavior exactly, including its blind spot for
//! protocol-relative `//host/path` links.

use crate::{FetchError, FetchResult};
use url::Url;

/// Outcome of resolving one href against the seed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLink {
    /// A fetchable URL (possibly the href unchanged)
    Url(String),

    /// The href cannot be resolved (empty string); dropped silently
    Malformed,
}

/// Resolves an href found on the seed page
///
/// * empty href → [`ResolvedLink::Malformed`]
/// * href starting with `#`, `/`, or `?` → seed URL string + href
/// * anything else → the href unchanged
pub fn resolve_link(seed_url: &str, href: &str) -> ResolvedLink {
    let first = match href.chars().next() {
        Some(c) => c,
        None => return ResolvedLink::Malformed,
    };

    if matches!(first, '#' | '/' | '?') {
        ResolvedLink::Url(format!("{}{}", seed_url, href))
    } else {
        ResolvedLink::Url(href.to_string())
    }
}

/// Checks that a seed selection is a syntactically valid absolute URL
///
/// Performed before any fetch is attempted so a malformed seed is reported
/// distinctly from an unreachable one.
pub fn validate_seed(url: &str) -> FetchResult<()> {
    match Url::parse(url) {
        Ok(_) => Ok(()),
        Err(e) => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://example.com/news";

    #[test]
    fn test_rooted_path_gets_seed_prefix() {
        assert_eq!(
            resolve_link(SEED, "/report.pdf"),
            ResolvedLink::Url("https://example.com/news/report.pdf".to_string())
        );
    }

    #[test]
    fn test_fragment_and_query_get_seed_prefix() {
        assert_eq!(
            resolve_link(SEED, "#section"),
            ResolvedLink::Url("https://example.com/news#section".to_string())
        );
        assert_eq!(
            resolve_link(SEED, "?page=2"),
            ResolvedLink::Url("https://example.com/news?page=2".to_string())
        );
    }

    #[test]
    fn test_absolute_href_passes_through() {
        assert_eq!(
            resolve_link(SEED, "https://other.com/a"),
            ResolvedLink::Url("https://other.com/a".to_string())
        );
    }

    #[test]
    fn test_bare_relative_href_passes_through() {
        // The literal rule only special-cases #, /, and ?
        assert_eq!(
            resolve_link(SEED, "story.html"),
            ResolvedLink::Url("story.html".to_string())
        );
    }

    #[test]
    fn test_empty_href_is_malformed() {
        assert_eq!(resolve_link(SEED, ""), ResolvedLink::Malformed);
    }

    #[test]
    fn test_validate_seed_accepts_absolute_urls() {
        assert!(validate_seed("https://example.com/news").is_ok());
        assert!(validate_seed("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_seed_rejects_garbage() {
        assert!(validate_seed("not a url").is_err());
        assert!(validate_seed("").is_err());
    }
}
