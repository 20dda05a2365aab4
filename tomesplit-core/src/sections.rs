//! Ordered title-keyed section maps
//!
//! Segmentation output is positional: book one comes before book two, and
//! chapters follow the order of their headings. [`SectionMap`] keeps entries
//! in insertion order while still offering lookup by title.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Insertion-ordered map from section title to value.
///
/// Titles are unique. Inserting a title that is already present replaces the
/// value but keeps the position of the first insertion, so a repeated heading
/// silently drops the earlier section's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

/// Chapter title → chapter body
pub type Chapters = SectionMap<String>;

/// Book title → chapters, the result of [`Segmenter::segment`](crate::Segmenter::segment)
pub type Segmentation = SectionMap<Chapters>;

impl<V> Default for SectionMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> SectionMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, returning the value it replaced if the title was
    /// already present.
    pub fn insert(&mut self, title: impl Into<String>, value: V) -> Option<V> {
        let title = title.into();
        match self.index.get(&title) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(title.clone(), self.entries.len());
                self.entries.push((title, value));
                None
            }
        }
    }

    /// Look up a section by title
    pub fn get(&self, title: &str) -> Option<&V> {
        self.index.get(title).map(|&slot| &self.entries[slot].1)
    }

    /// Whether a section with this title exists
    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Section at a position in document order
    pub fn get_index(&self, position: usize) -> Option<(&str, &V)> {
        self.entries
            .get(position)
            .map(|(title, value)| (title.as_str(), value))
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no sections
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(title, value)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries
            .iter()
            .map(|(title, value)| (title.as_str(), value))
    }

    /// Titles in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(title, _)| title.as_str())
    }

    /// Values in document order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for SectionMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (title, value) in iter {
            map.insert(title, value);
        }
        map
    }
}

impl<V> IntoIterator for SectionMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for SectionMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (title, value) in &self.entries {
            map.serialize_entry(title, value)?;
        }
        map.end()
    }
}

/// Book and chapter counts of a segmentation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SegmentationStats {
    /// Number of books
    pub book_count: usize,
    /// Number of chapters across all books
    pub chapter_count: usize,
    /// Chapter count of each book, in document order
    pub chapters_per_book: Vec<(String, usize)>,
}

impl Segmentation {
    /// Summarize the shape of the segmentation
    pub fn stats(&self) -> SegmentationStats {
        let chapters_per_book: Vec<(String, usize)> = self
            .iter()
            .map(|(title, chapters)| (title.to_string(), chapters.len()))
            .collect();

        SegmentationStats {
            book_count: self.len(),
            chapter_count: chapters_per_book.iter().map(|(_, count)| count).sum(),
            chapters_per_book,
        }
    }
}
