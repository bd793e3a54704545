//! Embedded catalog
//!
//! Sample Finnish catalog compiled into the binary so the helper works without a data file.

/// JSON text of the default catalog
pub const EMBEDDED_CATALOG_JSON: &str = include_str!("../../data/words.json");
