//! Exact word lookup
//!
//! Answers "is this a word?" and builds the dictionary link shown next to the answer.

use crate::catalog::WordCatalog;
use crate::core::{MatchConfig, WordEntry};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Where the "tell me more" / "check it" link points by default
pub const DEFAULT_REFERENCE_BASE: &str = "https://fi.wiktionary.org/wiki/";

/// Bytes left unescaped in a path segment: RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Finds catalog entries by exact word equality
#[derive(Debug, Clone, Copy)]
pub struct ExactLookup<'a> {
    catalog: &'a WordCatalog,
    config: MatchConfig,
}

impl<'a> ExactLookup<'a> {
    #[must_use]
    pub const fn new(catalog: &'a WordCatalog, config: MatchConfig) -> Self {
        Self { catalog, config }
    }

    /// First entry equal to `query` under the configured case mode
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&'a WordEntry> {
        let case = self.config.case;
        let found = self
            .catalog
            .iter()
            .find(|entry| case.same_word(&entry.word, query));
        tracing::debug!(query, found = found.is_some(), "word lookup");
        found
    }

    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.find(query).is_some()
    }
}

/// Build the external dictionary link for `query`
///
/// # Examples
/// ```
/// use sanapeli::engine::lookup::{DEFAULT_REFERENCE_BASE, reference_url};
///
/// assert_eq!(
///     reference_url(DEFAULT_REFERENCE_BASE, "hyvä sana"),
///     "https://fi.wiktionary.org/wiki/hyv%C3%A4%20sana"
/// );
/// ```
#[must_use]
pub fn reference_url(base: &str, query: &str) -> String {
    format!("{base}{}", utf8_percent_encode(query, PATH_SEGMENT))
}
