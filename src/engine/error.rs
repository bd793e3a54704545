//! Engine errors

use thiserror::Error;

/// Misuse of the query engine
///
/// Not-found results are `None`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("difficulty tier {tier} is out of range, expected 0..{tiers}")]
    InvalidTier { tier: usize, tiers: usize },
}
