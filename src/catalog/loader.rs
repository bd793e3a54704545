//! Catalog loading utilities
//!
//! Reads catalogs from disk. Validation of individual records beyond their JSON shape is
//! left to whoever produced the file.

use super::{CatalogError, WordCatalog};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or `CatalogError::Parse` if it is
/// not a JSON array of word records.
///
/// # Examples
/// ```no_run
/// use sanapeli::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog, CatalogError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading catalog");

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = WordCatalog::from_json_str(&content)?;

    info!(path = %path.display(), words = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Load the catalog named by the `--wordlist` flag
///
/// `"embedded"` selects the built-in catalog; anything else is a file path.
///
/// # Errors
///
/// Same as [`load_from_file`] for paths.
pub fn load_by_name(name: &str) -> Result<WordCatalog, CatalogError> {
    if name == "embedded" {
        let catalog = WordCatalog::embedded()?;
        info!(words = catalog.len(), "embedded catalog loaded");
        Ok(catalog)
    } else {
        load_from_file(name)
    }
}
