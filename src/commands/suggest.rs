//! Random word suggestion command

use super::CommandError;
use crate::core::WordEntry;
use crate::engine::sampler::pick;
use crate::engine::{DEFAULT_TIER, FrequencyRange, Helper};
use rand::Rng;

/// Configuration for a suggestion
pub struct SuggestConfig {
    pub tier: usize,
    pub letters: String,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(tier: usize, letters: String) -> Self {
        Self { tier, letters }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIER, String::new())
    }
}

/// Result of a suggestion draw
#[derive(Debug, Clone)]
pub struct SuggestResult<'a> {
    pub tier: usize,
    pub tier_name: String,
    pub range: FrequencyRange,
    pub letters: String,
    pub eligible: usize,
    pub suggestion: Option<&'a WordEntry>,
}

/// Draw a random word for the configured tier and letters
///
/// # Errors
///
/// Returns `CommandError::Engine` if the tier is not in the helper's difficulty table.
pub fn suggest_word<'a, R: Rng + ?Sized>(
    helper: &Helper<'a>,
    config: SuggestConfig,
    rng: &mut R,
) -> Result<SuggestResult<'a>, CommandError> {
    let SuggestConfig { tier, letters } = config;
    let sampler = helper.sampler();

    let range = sampler.range(tier)?;
    let eligible = sampler.eligible(tier, &letters)?;
    let suggestion = pick(&eligible, rng);

    Ok(SuggestResult {
        tier,
        tier_name: helper.tiers().tier_name(tier),
        range,
        letters,
        eligible: eligible.len(),
        suggestion,
    })
}
