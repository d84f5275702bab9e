//! The final output artifact: the accepted article links

/// Ordered list of links classified as articles
///
/// Produced once per run by projecting the classification records, then
/// persisted as CSV and optionally printed to the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTable {
    links: Vec<String>,
}

impl ArticleTable {
    /// Wraps an ordered list of article links
    pub fn new(links: Vec<String>) -> Self {
        Self { links }
    }

    /// The article links, in classification order
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Number of article links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when no link was classified as an article
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Formats the table for console display
///
/// One indexed row per link, plus a count line. An empty table renders as a
/// single "(no article links)" line.
pub fn format_table(table: &ArticleTable) -> String {
    if table.is_empty() {
        return "(no article links)\n".to_string();
    }

    let mut out = String::new();
    out.push_str("   Article\n");
    for (index, link) in table.links().iter().enumerate() {
        out.push_str(&format!("{:<3}{}\n", index, link));
    }
    out.push_str(&format!("\n[{} article links]\n", table.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_lists_links_with_indices() {
        let table = ArticleTable::new(vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
        ]);
        let rendered = format_table(&table);

        assert!(rendered.contains("0  https://example.com/a"));
        assert!(rendered.contains("1  https://example.com/b"));
        assert!(rendered.contains("[2 article links]"));
    }

    #[test]
    fn test_format_empty_table() {
        let rendered = format_table(&ArticleTable::default());
        assert!(rendered.contains("no article links"));
    }
}
