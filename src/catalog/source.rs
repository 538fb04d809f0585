use std::path::PathBuf;

use super::store::{CatalogError, FungusCatalog};

/// Anything that can supply a catalog in a stable order.
///
/// A persistent store plugs in here. Failures must surface as a
/// `CatalogError` before any ranking is attempted.
pub trait CatalogSource {
    /// Load the full catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` when the backing data cannot be reached,
    /// or a parse/validation error when it is malformed.
    fn load(&self) -> Result<FungusCatalog, CatalogError>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}

/// The catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<FungusCatalog, CatalogError> {
        FungusCatalog::load_embedded()
    }

    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }
}

/// A catalog read from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    pub path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<FungusCatalog, CatalogError> {
        FungusCatalog::load_from_file(&self.path)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_source() {
        let catalog = EmbeddedCatalog.load().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_file_source_round_trip() {
        let embedded = FungusCatalog::load_embedded().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(embedded.to_json().unwrap().as_bytes())
            .unwrap();

        let source = JsonFileCatalog::new(file.path());
        let loaded = source.load().unwrap();
        assert_eq!(loaded.records(), embedded.records());
        assert!(source.describe().contains("catalog file"));
    }

    #[test]
    fn test_file_source_missing() {
        let source = JsonFileCatalog::new("/nonexistent/catalog.json");
        assert!(matches!(source.load(), Err(CatalogError::Unavailable(_))));
    }
}
