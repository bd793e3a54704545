//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{SubwordsView, print_lookup_result, print_subwords_result, print_suggest_result};
