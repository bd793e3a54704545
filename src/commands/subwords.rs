//! Subword search command

use super::CommandError;
use crate::core::WordEntry;
use crate::engine::{Helper, SolutionOrder};

/// Configuration for a subword search
pub struct SubwordsConfig {
    pub query: String,
    pub order: SolutionOrder,
}

impl SubwordsConfig {
    #[must_use]
    pub fn new(query: String) -> Self {
        Self {
            query,
            order: SolutionOrder::default(),
        }
    }
}

/// Result of a subword search
#[derive(Debug, Clone)]
pub struct SubwordsResult<'a> {
    pub query: String,
    pub order: SolutionOrder,
    pub solutions: Vec<&'a WordEntry>,
}

impl SubwordsResult<'_> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.solutions.len()
    }

    /// Re-sort the solutions after the caller changed the order
    pub fn reorder(&mut self, order: SolutionOrder) {
        self.order = order;
        order.sort(&mut self.solutions);
    }
}

/// Find the sorted subwords of the configured query
///
/// # Errors
///
/// Returns `CommandError::EmptyQuery` if the query is empty. Whitespace is matched like any
/// other character.
pub fn find_sub_words<'a>(
    helper: &Helper<'a>,
    config: SubwordsConfig,
) -> Result<SubwordsResult<'a>, CommandError> {
    let SubwordsConfig { query, order } = config;
    if query.is_empty() {
        return Err(CommandError::EmptyQuery);
    }

    let solutions = helper.sorted_sub_words(&query, &order);
    tracing::debug!(query, solutions = solutions.len(), "subword search");

    Ok(SubwordsResult {
        query,
        order,
        solutions,
    })
}
