use serde::{Deserialize, Serialize};

use crate::model::IndexEntry;

/// The full lookup table, in traversal order.
///
/// Serializes as a bare JSON array. Duplicate filenames are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }
}

impl From<Vec<IndexEntry>> for Index {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<IndexEntry> for Index {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Index {
    type Item = IndexEntry;
    type IntoIter = std::vec::IntoIter<IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_preserves_order_and_duplicates() {
        let mut index = Index::new();
        index.push(IndexEntry::new("b/x.mp3", "x.mp3", "x x"));
        index.push(IndexEntry::new("a/x.mp3", "x.mp3", "x x"));
        index.push(IndexEntry::new("b/x.mp3", "x.mp3", "x x"));

        assert_eq!(index.len(), 3);
        let names: Vec<&str> = index.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["b/x.mp3", "a/x.mp3", "b/x.mp3"]);
    }

    #[test]
    fn test_empty_index_serializes_as_empty_array() {
        let index = Index::new();
        assert!(index.is_empty());
        assert_eq!(serde_json::to_string(&index).unwrap(), "[]");
    }

    #[test]
    fn test_index_serializes_as_array() {
        let index: Index = vec![IndexEntry::new("a.mp3", "a.mp3", "a a")].into();
        let json = serde_json::to_value(&index).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["basename"], "a.mp3");
    }
}
