//! Core domain types for the word helper
//!
//! Word entries as they come out of the catalog, and the letter-multiset matcher every
//! query is built on. Everything here is pure and has no I/O.

mod entry;
mod letters;

pub use entry::{WordEntry, WordMeaning};
pub use letters::{CaseMode, LetterCounts, MatchConfig, is_sub_word};
