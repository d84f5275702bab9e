//! Article classification
//!
//! Labels each measured link as article or not-article. Links whose path
//! ends in the configured suffix (PDFs by default) can be accepted without
//! content analysis, since they were never parsed as HTML and their recorded
//! length says nothing about them.

use crate::config::Config;
use crate::crawler::LinkLengthMap;

/// One verdict per distinct link, in length-map order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    /// The resolved link URL
    pub link: String,

    /// Whether the link was judged to be an article
    pub is_article: bool,
}

/// Classifies every link in a length map
///
/// Decision rule, per link:
/// - suffix match (default `.pdf`) with auto-accept enabled → article
/// - otherwise article iff `length >= min_article_len` (inclusive)
///
/// Output order follows the map's insertion order, one record per unique
/// link. When no record is marked as an article, a user-facing advisory is
/// printed suggesting looser thresholds; this never alters the output.
pub fn classify_links(lengths: &LinkLengthMap, config: &Config) -> Vec<ClassificationRecord> {
    let mut records = Vec::with_capacity(lengths.len());
    let mut article_found = false;

    for (link, length) in lengths.iter() {
        let is_article = if config.auto_accept_pdf && link.ends_with(&config.article_suffix) {
            true
        } else {
            length >= config.min_article_len
        };

        if is_article {
            article_found = true;
        } else {
            tracing::debug!("Not an article ({} chars): {}", length, link);
        }

        records.push(ClassificationRecord {
            link: link.to_string(),
            is_article,
        });
    }

    if !article_found {
        tracing::warn!("No links classified as articles");
        println!("NO ARTICLES FOUND - Try changing the system parameters to less strict values");
    }

    records
}
