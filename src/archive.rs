//! Archive handle tying a catalog source to its configuration.

use std::path::PathBuf;

use crate::catalog::source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};
use crate::catalog::store::{CatalogError, FungusCatalog};
use crate::core::traits::TraitSet;
use crate::matching::engine::{MatchResult, MatchingConfig, MatchingEngine};
use crate::utils::validation::{validate_table_name, ValidationError};

/// Default storage table name
pub const DEFAULT_TABLE_NAME: &str = "fungident_fungi";

/// Configuration for an [`Archive`]
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Table the records live in when backed by a relational store.
    /// Defaults to [`DEFAULT_TABLE_NAME`].
    pub table_name: String,

    /// JSON catalog to load instead of the embedded one
    pub catalog_path: Option<PathBuf>,

    /// Ranking options
    pub matching: MatchingConfig,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            catalog_path: None,
            matching: MatchingConfig::default(),
        }
    }
}

impl ArchiveConfig {
    #[must_use]
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_matching(mut self, matching: MatchingConfig) -> Self {
        self.matching = matching;
        self
    }
}

/// A loaded catalog plus the settings used to query it
#[derive(Debug)]
pub struct Archive {
    catalog: FungusCatalog,
    config: ArchiveConfig,
}

impl Archive {
    /// Load the catalog from `source`.
    ///
    /// # Errors
    ///
    /// Returns the source's `CatalogError` if the catalog cannot be loaded.
    pub fn new(source: &impl CatalogSource, config: ArchiveConfig) -> Result<Self, CatalogError> {
        let catalog = source.load()?;
        tracing::info!(
            source = %source.describe(),
            records = catalog.len(),
            "Loaded catalog"
        );
        Ok(Self { catalog, config })
    }

    /// Load from `config.catalog_path` if set, otherwise the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the catalog cannot be loaded.
    pub fn from_config(config: ArchiveConfig) -> Result<Self, CatalogError> {
        match config.catalog_path.clone() {
            Some(path) => Self::new(&JsonFileCatalog::new(path), config),
            None => Self::new(&EmbeddedCatalog, config),
        }
    }

    /// Rank the catalog against observed traits
    pub fn identify(&self, traits: &TraitSet) -> Vec<MatchResult<'_>> {
        MatchingEngine::with_config(&self.catalog, self.config.matching.clone())
            .find_matches(traits)
    }

    pub fn catalog(&self) -> &FungusCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Relational table definition for the configured table.
    ///
    /// This crate never executes it; it describes the layout a persistent
    /// catalog source is expected to store.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the table name is not a safe identifier.
    pub fn schema_statement(&self) -> Result<String, ValidationError> {
        schema_statement(&self.config.table_name)
    }
}

/// Render the `CREATE TABLE` statement for `table_name`.
///
/// # Errors
///
/// Returns a `ValidationError` if the table name is not a safe identifier.
pub fn schema_statement(table_name: &str) -> Result<String, ValidationError> {
    validate_table_name(table_name)?;
    Ok(format!(
        "CREATE TABLE {table_name} (\n    \
             fungus_id INTEGER PRIMARY KEY,\n    \
             common_names TEXT NOT NULL,\n    \
             genus_name VARCHAR(255) NOT NULL,\n    \
             species_name VARCHAR(255) NOT NULL,\n    \
             edibility VARCHAR(255) NOT NULL,\n    \
             spore_print_color VARCHAR(255) NOT NULL DEFAULT '',\n    \
             hymenium VARCHAR(255) NOT NULL DEFAULT ''\n\
         )"
    ))
}
