//! Display ordering for subword solutions
//!
//! The ordering is caller-held state: the finder only takes an ordering and sorts by it.
//! Toggling the active axis flips direction, switching axis starts ascending again.

use crate::core::WordEntry;
use std::cmp::Ordering;

/// What to sort solutions by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic word order
    #[default]
    Name,
    /// Word length in characters
    Length,
}

impl SortKey {
    /// Parse a key name: "name"/"alpha" or "length"/"len"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" | "alpha" => Some(Self::Name),
            "length" | "len" => Some(Self::Length),
            _ => None,
        }
    }
}

/// Sort key plus direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionOrder {
    pub key: SortKey,
    pub reverse: bool,
}

impl SolutionOrder {
    #[must_use]
    pub const fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    /// Select name order; flips direction if name order was already active
    pub fn by_name(&mut self) {
        self.toggle(SortKey::Name);
    }

    /// Select length order; flips direction if length order was already active
    pub fn by_length(&mut self) {
        self.toggle(SortKey::Length);
    }

    fn toggle(&mut self, key: SortKey) {
        self.reverse = self.key == key && !self.reverse;
        self.key = key;
    }

    /// Compare two entries; equal lengths compare `Equal` in length mode
    #[must_use]
    pub fn compare(&self, a: &WordEntry, b: &WordEntry) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.word.cmp(&b.word),
            SortKey::Length => a.char_len().cmp(&b.char_len()),
        };
        if self.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Stable in-place sort
    pub fn sort(&self, entries: &mut [&WordEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}
