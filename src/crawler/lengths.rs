//! Link length accumulation
//!
//! One [`LinkLengthMap`] is built per run: one entry per successfully
//! fetched link, keyed by the resolved URL, in insertion order. Failed
//! fetches are simply omitted, never recorded as zero.

use std::collections::HashMap;

/// Insertion-ordered map from link URL to estimated content length
///
/// Keys are unique: re-inserting an existing link overwrites its length but
/// keeps the position of the first insertion.
#[derive(Debug, Default, Clone)]
pub struct LinkLengthMap {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl LinkLengthMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an estimated length for a link
    pub fn insert(&mut self, link: String, length: usize) {
        match self.index.get(&link) {
            Some(&pos) => self.entries[pos].1 = length,
            None => {
                self.index.insert(link.clone(), self.entries.len());
                self.entries.push((link, length));
            }
        }
    }

    /// Returns the recorded length for a link, if present
    pub fn get(&self, link: &str) -> Option<usize> {
        self.index.get(link).map(|&pos| self.entries[pos].1)
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(link, len)| (link.as_str(), *len))
    }

    /// Number of distinct links recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no link has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut map = LinkLengthMap::new();
        map.insert("https://example.com/c".to_string(), 3);
        map.insert("https://example.com/a".to_string(), 1);
        map.insert("https://example.com/b".to_string(), 2);

        let links: Vec<&str> = map.iter().map(|(link, _)| link).collect();
        assert_eq!(
            links,
            vec![
                "https://example.com/c",
                "https://example.com/a",
                "https://example.com/b"
            ]
        );
    }

    #[test]
    fn test_reinsert_overwrites_but_keeps_position() {
        let mut map = LinkLengthMap::new();
        map.insert("https://example.com/a".to_string(), 10);
        map.insert("https://example.com/b".to_string(), 20);
        map.insert("https://example.com/a".to_string(), 30);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("https://example.com/a"), Some(30));

        let first = map.iter().next().map(|(link, _)| link.to_string());
        assert_eq!(first.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_empty_map() {
        let map = LinkLengthMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get("https://example.com/"), None);
    }
}
