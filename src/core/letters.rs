//! Letter multisets and the subword test
//!
//! A word is a "subword" of another when each of its letters occurs in the other word at
//! least as many times. Letter order is irrelevant; only counts matter.

use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// How words are compared before matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Lowercase both sides first (default)
    #[default]
    Insensitive,
    /// Compare exactly as given
    Sensitive,
}

impl CaseMode {
    /// Normalize `text` for comparison under this mode
    #[must_use]
    pub fn normalize(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(text),
            Self::Insensitive => Cow::Owned(text.to_lowercase()),
        }
    }

    /// Whether two words are the same word under this mode
    #[must_use]
    pub fn same_word(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Matching configuration shared by every query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    pub case: CaseMode,
}

impl MatchConfig {
    #[must_use]
    pub const fn new(case: CaseMode) -> Self {
        Self { case }
    }

    #[must_use]
    pub const fn case_sensitive() -> Self {
        Self::new(CaseMode::Sensitive)
    }

    #[must_use]
    pub const fn case_insensitive() -> Self {
        Self::new(CaseMode::Insensitive)
    }
}

/// Multiset of the characters in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Count the letters of `word` after normalizing it under `case`
    #[must_use]
    pub fn of(word: &str, case: CaseMode) -> Self {
        Self::from_normalized(&case.normalize(word))
    }

    /// Count the letters of text that is already normalized
    #[must_use]
    pub fn from_normalized(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter` (0 when absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True when every letter here occurs at least as often in `bigger`
    #[must_use]
    pub fn fits_within(&self, bigger: &Self) -> bool {
        self.counts
            .iter()
            .all(|(&letter, &needed)| needed <= bigger.count(letter))
    }
}

/// Check whether `smaller`'s letters are contained in `bigger`'s letters
///
/// With `allow_equal == false` a word equal to `bigger` (after case normalization) is
/// rejected, so the question becomes "is `smaller` a proper subword of `bigger`".
/// The empty string fits inside anything.
///
/// # Examples
/// ```
/// use sanapeli::core::{CaseMode, is_sub_word};
///
/// assert!(is_sub_word("ala", "kala", false, CaseMode::Insensitive));
/// assert!(!is_sub_word("kalla", "kala", false, CaseMode::Insensitive));
/// assert!(!is_sub_word("kala", "KALA", false, CaseMode::Insensitive));
/// assert!(is_sub_word("kala", "KALA", true, CaseMode::Insensitive));
/// ```
#[must_use]
pub fn is_sub_word(smaller: &str, bigger: &str, allow_equal: bool, case: CaseMode) -> bool {
    let smaller = case.normalize(smaller);
    let bigger = case.normalize(bigger);

    if !allow_equal && smaller == bigger {
        return false;
    }

    LetterCounts::from_normalized(&smaller).fits_within(&LetterCounts::from_normalized(&bigger))
}
