//! Command implementations
//!
//! Each command takes plain inputs, runs one engine query and returns a result struct for
//! the output layer or the TUI to render.

pub mod lookup;
pub mod subwords;
pub mod suggest;

pub use lookup::{LookupResult, lookup_word};
pub use subwords::{SubwordsConfig, SubwordsResult, find_sub_words};
pub use suggest::{SuggestConfig, SuggestResult, suggest_word};

use crate::engine::EngineError;
use thiserror::Error;

/// Errors a command reports back to its caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("enter a word to search")]
    EmptyQuery,
    #[error(transparent)]
    Engine(#[from] EngineError),
}
