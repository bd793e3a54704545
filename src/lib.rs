//! Sanapeli
//!
//! Word game helper over a frequency-annotated dictionary: finds every word that can be
//! spelled from another word's letters, checks whether a word exists, and draws random
//! words by difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use sanapeli::catalog::WordCatalog;
//! use sanapeli::core::MatchConfig;
//! use sanapeli::engine::{Helper, SolutionOrder};
//!
//! let catalog = WordCatalog::embedded().unwrap();
//! let helper = Helper::new(&catalog, MatchConfig::default());
//!
//! let subwords = helper.sorted_sub_words("kala", &SolutionOrder::default());
//! assert!(subwords.iter().any(|e| e.word == "ala"));
//! assert!(helper.find_word("KALA").is_some());
//! ```

// Core domain types
pub mod core;

// Word catalog loading
pub mod catalog;

// Query engine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
