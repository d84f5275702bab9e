//! HTML link enumeration
//!
//! Extracts the href value of every anchor element on a page, in document
//! order. The hrefs are returned exactly as written (relative or absolute);
//! resolution against the seed URL happens later in the pipeline, which
//! applies the literal prefix rule rather than RFC resolution.

use scraper::{Html, Selector};

/// Extracts every `a[href]` value from an HTML document, in document order
///
/// Duplicate hrefs are kept; the pipeline's length map collapses them.
/// Returns an empty vector for documents without anchors (or for
/// non-HTML bodies, which parse to a tree with no anchor elements).
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}
