//! Subword search
//!
//! Finds every catalog word that can be spelled with the letters of a query word.

use super::ordering::SolutionOrder;
use crate::catalog::WordCatalog;
use crate::core::{LetterCounts, MatchConfig, WordEntry};

/// Filters the catalog down to proper subwords of a query
#[derive(Debug, Clone, Copy)]
pub struct SubwordFinder<'a> {
    catalog: &'a WordCatalog,
    config: MatchConfig,
}

impl<'a> SubwordFinder<'a> {
    #[must_use]
    pub const fn new(catalog: &'a WordCatalog, config: MatchConfig) -> Self {
        Self { catalog, config }
    }

    /// All proper subwords of `query`, in catalog order
    ///
    /// The query itself is never included. Only an empty catalog word fits inside an empty
    /// query, and that one is excluded as equal, so an empty query finds nothing.
    #[must_use]
    pub fn find(&self, query: &str) -> Vec<&'a WordEntry> {
        let case = self.config.case;
        let query = case.normalize(query);
        let available = LetterCounts::from_normalized(&query);

        self.catalog
            .iter()
            .filter(|entry| {
                let word = case.normalize(&entry.word);
                *word != *query && LetterCounts::from_normalized(&word).fits_within(&available)
            })
            .collect()
    }

    /// Number of proper subwords of `query`
    #[must_use]
    pub fn count(&self, query: &str) -> usize {
        self.find(query).len()
    }

    /// Proper subwords of `query` sorted by `order`
    #[must_use]
    pub fn find_sorted(&self, query: &str, order: &SolutionOrder) -> Vec<&'a WordEntry> {
        let mut found = self.find(query);
        order.sort(&mut found);
        found
    }
}
