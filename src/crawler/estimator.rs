//! Main-content length estimation
//!
//! Estimates how much "article body" a page carries. Real article bodies are
//! typically one container holding many substantial paragraphs, so the
//! densest sibling-paragraph cluster approximates body size while scattered
//! short text (nav links, captions, teasers) is ignored.
//!
//! The steps, in order:
//! 1. Collect every `<p>` element.
//! 2. Per paragraph, compute the visible text (trimmed text fragments joined
//!    by spaces) and its whitespace-token word count.
//! 3. Drop paragraphs below the word-count minimum.
//! 4. Group survivors by their parent node, keyed by the parse tree's stable
//!    `NodeId`.
//! 5. Sum the trimmed character counts per group; the estimate is the
//!    largest group sum, or 0 when nothing survives.

use ego_tree::NodeId;
use scraper::{Html, Selector};
use std::collections::HashMap;

/// Estimates the character length of a page's main content block
///
/// Returns 0 for empty or garbage input; there are no error conditions.
///
/// # Arguments
///
/// * `html` - The raw HTML to analyze
/// * `min_paragraph_words` - Paragraphs with fewer whitespace-separated
///   words than this do not count toward any group
pub fn estimate_body_length(html: &str, min_paragraph_words: usize) -> usize {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("p") {
        Ok(s) => s,
        Err(_) => return 0,
    };

    // Sum of trimmed paragraph lengths per parent container
    let mut groups: HashMap<Option<NodeId>, usize> = HashMap::new();

    for paragraph in document.select(&selector) {
        let fragments: Vec<&str> = paragraph.text().collect();

        let visible = fragments
            .iter()
            .map(|fragment| fragment.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let word_count = visible.split_whitespace().count();

        if word_count < min_paragraph_words {
            continue;
        }

        // Character count of the full text, trimmed at the ends only
        let text_len = fragments.concat().trim().chars().count();

        let parent_id = paragraph.parent().map(|parent| parent.id());
        *groups.entry(parent_id).or_insert(0) += text_len;
    }

    groups.values().copied().max().unwrap_or(0)
}
