//! Word catalog
//!
//! The immutable list of known words, loaded once at startup either from the catalog
//! compiled into the binary or from a JSON file.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_CATALOG_JSON;

use crate::core::WordEntry;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading catalog or tier files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid difficulty table: {0}")]
    InvalidTiers(String),
}

/// Ordered, read-only collection of word entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    #[must_use]
    pub const fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from a JSON array of word records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the text is not a JSON array of word records.
    ///
    /// # Examples
    /// ```
    /// use sanapeli::catalog::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_json_str(r#"[{"word":"kala","count":50,"meanings":[]}]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<WordEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` only if the embedded JSON is broken.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG_JSON)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<WordEntry> for WordCatalog {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordCatalog {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = WordCatalog::embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn embedded_words_are_unique_and_nonempty() {
        let catalog = WordCatalog::embedded().unwrap();
        let unique: std::collections::HashSet<_> = catalog.iter().map(|e| &e.word).collect();

        assert_eq!(unique.len(), catalog.len(), "Embedded catalog has duplicates");
        for entry in &catalog {
            assert!(!entry.word.is_empty(), "Embedded catalog has an empty word");
        }
    }

    #[test]
    fn embedded_keeps_file_order() {
        let catalog = WordCatalog::embedded().unwrap();
        assert_eq!(catalog.entries()[0].word, "kala");
        assert_eq!(catalog.entries()[1].word, "ala");
    }

    #[test]
    fn from_json_rejects_non_array() {
        let result = WordCatalog::from_json_str(r#"{"word":"kala"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn from_json_empty_array() {
        let catalog = WordCatalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn collect_from_entries() {
        let catalog: WordCatalog = ["kala", "ala"]
            .into_iter()
            .map(|w| WordEntry::new(w, 1))
            .collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[1].word, "ala");
    }
}
