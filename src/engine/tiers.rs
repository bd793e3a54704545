//! Difficulty tiers
//!
//! Each tier is an inclusive range of corpus frequency counts. Common words (high counts)
//! are easy to play with, rare words are hard. Adjacent ranges may share an edge value.

use super::EngineError;
use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Display names of the default tiers, easiest first
pub const TIER_NAMES: [&str; 5] = ["Huono", "Meh", "OK", "Hyvä", "Tosi hyvä"];

/// Tier preselected by the front ends
pub const DEFAULT_TIER: usize = 2;

/// Inclusive frequency range; `max == None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub min: u64,
    #[serde(default)]
    pub max: Option<u64>,
}

impl FrequencyRange {
    #[must_use]
    pub const fn bounded(min: u64, max: u64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub const fn unbounded(min: u64) -> Self {
        Self { min, max: None }
    }

    /// `count >= min && count <= max`
    #[inline]
    #[must_use]
    pub const fn contains(&self, count: u64) -> bool {
        if count < self.min {
            return false;
        }
        match self.max {
            Some(max) => count <= max,
            None => true,
        }
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}–{max}", self.min),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Lookup table from tier index to frequency range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DifficultyTable {
    tiers: Vec<FrequencyRange>,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                FrequencyRange::bounded(1, 20),
                FrequencyRange::bounded(21, 34),
                FrequencyRange::bounded(35, 59),
                FrequencyRange::bounded(60, 110),
                FrequencyRange::unbounded(110),
            ],
        }
    }
}

impl DifficultyTable {
    /// Build a custom table
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidTiers` if `tiers` is empty or a range has `min > max`.
    pub fn new(tiers: Vec<FrequencyRange>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::InvalidTiers("no tiers defined".to_string()));
        }
        if let Some((index, range)) = tiers
            .iter()
            .enumerate()
            .find(|(_, r)| r.max.is_some_and(|max| max < r.min))
        {
            return Err(CatalogError::InvalidTiers(format!(
                "tier {index} has min greater than max ({range:?})"
            )));
        }
        Ok(Self { tiers })
    }

    /// Parse a table from a JSON array of `{"min": .., "max": ..}` objects
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and `CatalogError::InvalidTiers` for
    /// a table that fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let tiers: Vec<FrequencyRange> = serde_json::from_str(json)?;
        Self::new(tiers)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as
    /// [`DifficultyTable::from_json_str`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), tiers = table.len(), "difficulty table loaded");
        Ok(table)
    }

    /// Frequency range of `tier`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTier` when `tier` is past the last tier.
    pub fn range(&self, tier: usize) -> Result<FrequencyRange, EngineError> {
        self.tiers
            .get(tier)
            .copied()
            .ok_or(EngineError::InvalidTier {
                tier,
                tiers: self.tiers.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    #[must_use]
    pub fn ranges(&self) -> &[FrequencyRange] {
        &self.tiers
    }

    /// Display name of `tier`, falling back to its number for custom tables
    #[must_use]
    pub fn tier_name(&self, tier: usize) -> String {
        TIER_NAMES
            .get(tier)
            .map_or_else(|| format!("Tier {tier}"), |name| (*name).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_ranges() {
        let table = DifficultyTable::default();
        assert_eq!(table.len(), 5);
        assert_eq!(table.range(0).unwrap(), FrequencyRange::bounded(1, 20));
        assert_eq!(table.range(1).unwrap(), FrequencyRange::bounded(21, 34));
        assert_eq!(table.range(2).unwrap(), FrequencyRange::bounded(35, 59));
        assert_eq!(table.range(3).unwrap(), FrequencyRange::bounded(60, 110));
        assert_eq!(table.range(4).unwrap(), FrequencyRange::unbounded(110));
    }

    #[test]
    fn out_of_range_tier_is_error() {
        let table = DifficultyTable::default();
        assert_eq!(
            table.range(5),
            Err(EngineError::InvalidTier { tier: 5, tiers: 5 })
        );
    }

    #[test]
    fn boundary_110_belongs_to_two_tiers() {
        let table = DifficultyTable::default();
        assert!(table.range(3).unwrap().contains(110));
        assert!(table.range(4).unwrap().contains(110));
    }

    #[test]
    fn range_is_inclusive() {
        let range = FrequencyRange::bounded(21, 34);
        assert!(!range.contains(20));
        assert!(range.contains(21));
        assert!(range.contains(34));
        assert!(!range.contains(35));
    }

    #[test]
    fn unbounded_range_has_no_ceiling() {
        let range = FrequencyRange::unbounded(110);
        assert!(!range.contains(109));
        assert!(range.contains(u64::MAX));
    }

    #[test]
    fn zero_count_is_outside_default_tiers() {
        let table = DifficultyTable::default();
        assert!(table.ranges().iter().all(|r| !r.contains(0)));
    }

    #[test]
    fn display_ranges() {
        assert_eq!(FrequencyRange::bounded(1, 20).to_string(), "1–20");
        assert_eq!(FrequencyRange::unbounded(110).to_string(), "110+");
    }

    #[test]
    fn parse_custom_table() {
        let table =
            DifficultyTable::from_json_str(r#"[{"min":0,"max":9},{"min":10,"max":null},{"min":50}]"#)
                .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.range(1).unwrap(), FrequencyRange::unbounded(10));
        assert_eq!(table.range(2).unwrap(), FrequencyRange::unbounded(50));
    }

    #[test]
    fn reject_empty_table() {
        assert!(matches!(
            DifficultyTable::from_json_str("[]"),
            Err(CatalogError::InvalidTiers(_))
        ));
    }

    #[test]
    fn reject_inverted_range() {
        assert!(matches!(
            DifficultyTable::new(vec![FrequencyRange::bounded(30, 10)]),
            Err(CatalogError::InvalidTiers(_))
        ));
    }

    #[test]
    fn bundled_tier_file_matches_default() {
        let table = DifficultyTable::from_json_str(include_str!("../../data/tiers.json")).unwrap();
        assert_eq!(table, DifficultyTable::default());
    }

    #[test]
    fn load_table_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"min":1,"max":99},{"min":100}]"#).unwrap();

        let table = DifficultyTable::load_from_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.range(1).unwrap(), FrequencyRange::unbounded(100));

        assert!(matches!(
            DifficultyTable::load_from_file("/definitely/not/here/tiers.json"),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn tier_names() {
        let table = DifficultyTable::default();
        assert_eq!(table.tier_name(0), "Huono");
        assert_eq!(table.tier_name(DEFAULT_TIER), "OK");
        assert_eq!(table.tier_name(7), "Tier 7");
    }
}
