//! Word lookup command
//!
//! Answers whether a word exists and carries the dictionary link either way.

use crate::core::WordEntry;
use crate::engine::Helper;
use crate::engine::lookup::reference_url;

/// Result of looking up a word
#[derive(Debug, Clone)]
pub struct LookupResult<'a> {
    pub query: String,
    pub entry: Option<&'a WordEntry>,
    pub reference_url: String,
}

impl LookupResult<'_> {
    #[must_use]
    pub const fn found(&self) -> bool {
        self.entry.is_some()
    }
}

/// Look up `query` and build its dictionary link against `reference_base`
#[must_use]
pub fn lookup_word<'a>(helper: &Helper<'a>, query: &str, reference_base: &str) -> LookupResult<'a> {
    LookupResult {
        query: query.to_string(),
        entry: helper.find_word(query),
        reference_url: reference_url(reference_base, query),
    }
}
