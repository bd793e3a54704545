//! Difficulty-tiered word suggestions
//!
//! Picks a random catalog word whose frequency falls in a difficulty tier and which contains
//! a given set of letters.

use super::tiers::{DifficultyTable, FrequencyRange};
use super::EngineError;
use crate::catalog::WordCatalog;
use crate::core::{LetterCounts, MatchConfig, WordEntry};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Draws suggestions from the catalog
#[derive(Debug, Clone, Copy)]
pub struct DifficultySampler<'a, 't> {
    catalog: &'a WordCatalog,
    tiers: &'t DifficultyTable,
    config: MatchConfig,
}

impl<'a, 't> DifficultySampler<'a, 't> {
    #[must_use]
    pub const fn new(catalog: &'a WordCatalog, tiers: &'t DifficultyTable, config: MatchConfig) -> Self {
        Self {
            catalog,
            tiers,
            config,
        }
    }

    /// Frequency range of `tier`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTier` if the table has no such tier.
    pub fn range(&self, tier: usize) -> Result<FrequencyRange, EngineError> {
        self.tiers.range(tier)
    }

    /// Every entry in `tier`'s range that contains all of `required_letters`
    ///
    /// A word equal to `required_letters` qualifies. Empty letters accept every word in range.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTier` if the table has no such tier.
    pub fn eligible(
        &self,
        tier: usize,
        required_letters: &str,
    ) -> Result<Vec<&'a WordEntry>, EngineError> {
        let range = self.tiers.range(tier)?;
        let case = self.config.case;
        let required = LetterCounts::of(required_letters, case);

        let eligible: Vec<&'a WordEntry> = self
            .catalog
            .iter()
            .filter(|entry| range.contains(entry.count))
            .filter(|entry| required.fits_within(&LetterCounts::of(&entry.word, case)))
            .collect();

        tracing::debug!(
            tier,
            %range,
            required_letters,
            eligible = eligible.len(),
            "collected suggestion candidates"
        );
        Ok(eligible)
    }

    /// One uniformly random eligible entry, or `None` when nothing qualifies
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTier` if the table has no such tier.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        tier: usize,
        required_letters: &str,
        rng: &mut R,
    ) -> Result<Option<&'a WordEntry>, EngineError> {
        let eligible = self.eligible(tier, required_letters)?;
        Ok(pick(&eligible, rng))
    }
}

/// Uniform choice over an already-filtered candidate list
pub fn pick<'e, R: Rng + ?Sized>(eligible: &[&'e WordEntry], rng: &mut R) -> Option<&'e WordEntry> {
    eligible.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scenario_catalog() -> WordCatalog {
        WordCatalog::new(vec![
            WordEntry::new("kala", 50),
            WordEntry::new("ala", 10),
            WordEntry::new("ka", 5),
        ])
    }

    fn words(entries: &[&WordEntry]) -> Vec<String> {
        entries.iter().map(|e| e.word.clone()).collect()
    }

    #[test]
    fn eligible_filters_by_range_and_letters() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());

        // tier 0 is [1, 20]: "ala" and "ka" are in range, both contain an 'a'
        assert_eq!(words(&sampler.eligible(0, "a").unwrap()), ["ala", "ka"]);
        // two a's rule out "ka"
        assert_eq!(words(&sampler.eligible(0, "aa").unwrap()), ["ala"]);
        // tier 2 is [35, 59]
        assert_eq!(words(&sampler.eligible(2, "").unwrap()), ["kala"]);
    }

    #[test]
    fn suggestion_comes_from_eligible_set() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let entry = sampler.suggest(0, "a", &mut rng).unwrap().unwrap();
            assert!(entry.word == "ala" || entry.word == "ka");
            assert!(tiers.range(0).unwrap().contains(entry.count));
        }
    }

    #[test]
    fn both_candidates_get_drawn() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(42);

        let drawn: std::collections::HashSet<String> = (0..200)
            .filter_map(|_| sampler.suggest(0, "", &mut rng).unwrap())
            .map(|e| e.word.clone())
            .collect();
        assert_eq!(drawn.len(), 2);
    }

    #[test]
    fn single_candidate_is_deterministic() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let entry = sampler.suggest(0, "aal", &mut rng).unwrap();
            assert_eq!(entry.map(|e| e.word.as_str()), Some("ala"));
        }
    }

    #[test]
    fn required_letters_may_equal_the_word() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        let entry = sampler.suggest(2, "KALA", &mut rng).unwrap();
        assert_eq!(entry.map(|e| e.word.as_str()), Some("kala"));
    }

    #[test]
    fn no_candidates_is_none() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(sampler.suggest(0, "z", &mut rng), Ok(None));
        assert_eq!(sampler.suggest(4, "", &mut rng), Ok(None));
    }

    #[test]
    fn invalid_tier_is_error() {
        let catalog = scenario_catalog();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            sampler.suggest(5, "", &mut rng),
            Err(EngineError::InvalidTier { tier: 5, tiers: 5 })
        );
    }

    #[test]
    fn empty_catalog_is_none() {
        let catalog = WordCatalog::default();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        for tier in 0..tiers.len() {
            assert_eq!(sampler.suggest(tier, "", &mut rng), Ok(None));
        }
    }

    #[test]
    fn case_sensitive_letters() {
        let catalog = WordCatalog::new(vec![WordEntry::new("Kala", 50)]);
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::case_sensitive());

        assert!(sampler.eligible(2, "k").unwrap().is_empty());
        assert_eq!(sampler.eligible(2, "K").unwrap().len(), 1);
    }

    #[test]
    fn embedded_catalog_respects_every_tier() {
        let catalog = WordCatalog::embedded().unwrap();
        let tiers = DifficultyTable::default();
        let sampler = DifficultySampler::new(&catalog, &tiers, MatchConfig::default());
        let mut rng = StdRng::seed_from_u64(2024);

        for tier in 0..tiers.len() {
            let range = tiers.range(tier).unwrap();
            for _ in 0..20 {
                if let Some(entry) = sampler.suggest(tier, "a", &mut rng).unwrap() {
                    assert!(range.contains(entry.count), "{} outside {range}", entry.word);
                    assert!(entry.word.to_lowercase().contains('a'));
                }
            }
        }
    }

    #[test]
    fn pick_from_empty_slice() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick(&[], &mut rng).is_none());
    }
}
