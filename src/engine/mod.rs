//! Query engine
//!
//! Subword search, exact lookup and difficulty-tiered suggestions over an immutable
//! catalog. [`Helper`] bundles the three behind one configuration.

mod error;
pub mod lookup;
pub mod ordering;
pub mod sampler;
pub mod subwords;
pub mod tiers;

pub use error::EngineError;
pub use lookup::ExactLookup;
pub use ordering::{SolutionOrder, SortKey};
pub use sampler::DifficultySampler;
pub use subwords::SubwordFinder;
pub use tiers::{DEFAULT_TIER, DifficultyTable, FrequencyRange};

use crate::catalog::WordCatalog;
use crate::core::{MatchConfig, WordEntry};
use rand::Rng;

/// Entry point for front ends
///
/// Holds the catalog reference, matching configuration and difficulty table. Every query is
/// read-only; the random generator for suggestions is supplied per call.
#[derive(Debug, Clone)]
pub struct Helper<'a> {
    catalog: &'a WordCatalog,
    config: MatchConfig,
    tiers: DifficultyTable,
}

impl<'a> Helper<'a> {
    /// Create a helper with the default difficulty table
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, config: MatchConfig) -> Self {
        Self::with_tiers(catalog, config, DifficultyTable::default())
    }

    #[must_use]
    pub const fn with_tiers(
        catalog: &'a WordCatalog,
        config: MatchConfig,
        tiers: DifficultyTable,
    ) -> Self {
        Self {
            catalog,
            config,
            tiers,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a WordCatalog {
        self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> MatchConfig {
        self.config
    }

    #[must_use]
    pub const fn tiers(&self) -> &DifficultyTable {
        &self.tiers
    }

    #[must_use]
    pub const fn finder(&self) -> SubwordFinder<'a> {
        SubwordFinder::new(self.catalog, self.config)
    }

    #[must_use]
    pub const fn lookup(&self) -> ExactLookup<'a> {
        ExactLookup::new(self.catalog, self.config)
    }

    #[must_use]
    pub const fn sampler(&self) -> DifficultySampler<'a, '_> {
        DifficultySampler::new(self.catalog, &self.tiers, self.config)
    }

    /// Proper subwords of `query` in catalog order
    #[must_use]
    pub fn sub_words(&self, query: &str) -> Vec<&'a WordEntry> {
        self.finder().find(query)
    }

    #[must_use]
    pub fn sub_word_count(&self, query: &str) -> usize {
        self.finder().count(query)
    }

    #[must_use]
    pub fn sorted_sub_words(&self, query: &str, order: &SolutionOrder) -> Vec<&'a WordEntry> {
        self.finder().find_sorted(query, order)
    }

    #[must_use]
    pub fn find_word(&self, query: &str) -> Option<&'a WordEntry> {
        self.lookup().find(query)
    }

    /// Random word from `tier` containing `required_letters`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTier` if `tier` is not in the difficulty table.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        tier: usize,
        required_letters: &str,
        rng: &mut R,
    ) -> Result<Option<&'a WordEntry>, EngineError> {
        self.sampler().suggest(tier, required_letters, rng)
    }
}
