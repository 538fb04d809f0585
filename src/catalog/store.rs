use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::fungus::FungusRecord;
use crate::core::traits::Trait;
use crate::utils::validation::{check_record_limit, validate_record, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog record at index {index}: {reason}")]
    InvalidRecord {
        index: usize,
        reason: ValidationError,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub records: Vec<FungusRecord>,
}

/// An ordered collection of known fungi with lookup indexes.
///
/// Record order is significant: it is the tie-break order used when ranking.
#[derive(Debug, Default)]
pub struct FungusCatalog {
    /// All known records, in catalog order. Only `add_record` may grow this,
    /// so the indexes below always point at valid positions.
    records: Vec<FungusRecord>,

    /// Index: taxonomic name -> position of its first record
    name_to_index: HashMap<String, usize>,

    /// Index: (trait, value) -> ascending positions of records with that value
    trait_to_records: HashMap<(Trait, String), Vec<usize>>,
}

impl FungusCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, preserving their order
    pub fn from_records(records: impl IntoIterator<Item = FungusRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.add_record(record);
        }
        catalog
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/fungi.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string, validating every record
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for (index, record) in data.records.into_iter().enumerate() {
            check_record_limit(index)
                .and_then(|()| validate_record(&record))
                .map_err(|reason| CatalogError::InvalidRecord { index, reason })?;
            catalog.add_record(record);
        }

        tracing::debug!(records = catalog.len(), "Parsed catalog");
        Ok(catalog)
    }

    /// Append a record to the end of the catalog
    pub fn add_record(&mut self, record: FungusRecord) {
        let index = self.records.len();

        self.name_to_index
            .entry(record.taxonomic_name())
            .or_insert(index);

        for (t, value) in record.traits.specified() {
            self.trait_to_records
                .entry((t, value.to_string()))
                .or_default()
                .push(index);
        }

        self.records.push(record);
    }

    /// All records, in catalog order
    pub fn records(&self) -> &[FungusRecord] {
        &self.records
    }

    /// Get a record by taxonomic name (e.g., "Amanita Bisporigera")
    pub fn get(&self, taxonomic_name: &str) -> Option<&FungusRecord> {
        self.name_to_index
            .get(taxonomic_name)
            .map(|&idx| &self.records[idx])
    }

    /// Positions of records whose `t` trait equals `value`
    pub fn positions_with(&self, t: Trait, value: &str) -> &[usize] {
        self.trait_to_records
            .get(&(t, value.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            records: self.records.clone(),
        };
        serde_json::to_string_pretty(&data).map_err(CatalogError::Serialize)
    }

    /// Number of records in catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::TraitSet;
    use crate::core::types::Edibility;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = FungusCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 4);

        let names: Vec<_> = catalog
            .records()
            .iter()
            .filter_map(FungusRecord::primary_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Poison Pie",
                "Destroying Angel",
                "King Stropharia",
                "Violet-Toothed Polypore"
            ]
        );
    }

    #[test]
    fn test_catalog_get_by_taxonomic_name() {
        let catalog = FungusCatalog::load_embedded().unwrap();

        let angel = catalog.get("Amanita Bisporigera");
        assert!(angel.is_some());
        let angel = angel.unwrap();
        assert_eq!(angel.edibility, Edibility::DeadlyToxic);
        assert_eq!(angel.traits.spore_print_color, "white");
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = FungusCatalog::load_embedded().unwrap();
        assert!(catalog.get("Boletus edulis").is_none());
    }

    #[test]
    fn test_trait_index_in_catalog_order() {
        let catalog = FungusCatalog::load_embedded().unwrap();
        assert_eq!(catalog.positions_with(Trait::Hymenium, "gills"), &[0, 1, 2]);
        assert_eq!(
            catalog.positions_with(Trait::SporePrintColor, "white"),
            &[1, 3]
        );
        assert!(catalog.positions_with(Trait::Hymenium, "ridges").is_empty());
    }

    #[test]
    fn test_from_records_preserves_order() {
        let catalog = FungusCatalog::from_records([
            FungusRecord::new("Test Shroom", "Two", Edibility::Inedible),
            FungusRecord::new("Test Shroom", "One", Edibility::Inedible),
        ]);
        assert_eq!(catalog.records()[0].taxonomic_name(), "Test Shroom Two");
        assert_eq!(catalog.get("Test Shroom One"), Some(&catalog.records()[1]));
    }

    #[test]
    fn test_empty_traits_not_indexed() {
        let mut catalog = FungusCatalog::new();
        catalog.add_record(
            FungusRecord::new("Test", "Shroom", Edibility::Inedible)
                .with_traits(TraitSet::new().with_hymenium("ridges")),
        );
        assert!(catalog.positions_with(Trait::SporePrintColor, "").is_empty());
        assert_eq!(catalog.positions_with(Trait::Hymenium, "ridges"), &[0]);
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = FungusCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"records\""));
        assert!(json.contains("Deadly Toxic"));

        let reloaded = FungusCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.records(), catalog.records());
    }

    #[test]
    fn test_add_record_extends_loaded_index() {
        let mut catalog = FungusCatalog::load_embedded().unwrap();
        let before = catalog.positions_with(Trait::Hymenium, "gills").to_vec();

        catalog.add_record(
            FungusRecord::new("Cantharellus", "Cibarius", Edibility::ChoiceEdible)
                .with_traits(TraitSet::new().with_hymenium("ridges")),
        );

        assert_eq!(catalog.positions_with(Trait::Hymenium, "ridges"), &[4]);
        assert_eq!(catalog.positions_with(Trait::Hymenium, "gills"), before.as_slice());
        for &pos in catalog.positions_with(Trait::Hymenium, "ridges") {
            assert_eq!(catalog.records()[pos].genus_name, "Cantharellus");
        }
    }

    #[test]
    fn test_lowercase_edibility_survives_round_trip() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "records": [
                {"genus_name": "Hebeloma", "species_name": "Crustuliniforme", "edibility": "poisonous"}
            ]
        }"#;

        let catalog = FungusCatalog::from_json(json).unwrap();
        assert_eq!(
            catalog.records()[0].edibility,
            Edibility::Other("poisonous".to_string())
        );

        let exported = catalog.to_json().unwrap();
        assert!(exported.contains("\"edibility\": \"poisonous\""));
        assert!(!exported.contains("\"Poisonous\""));
    }

    #[test]
    fn test_from_json_rejects_missing_genus() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "records": [
                {"genus_name": "Amanita", "species_name": "Bisporigera", "edibility": "Deadly Toxic"},
                {"genus_name": "", "species_name": "Biforme", "edibility": "Inedible"}
            ]
        }"#;

        match FungusCatalog::from_json(json) {
            Err(CatalogError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert_eq!(reason, ValidationError::EmptyGenus);
            }
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_version_mismatch_still_loads() {
        let json = r#"{"version": "0.9.0", "created_at": "", "records": []}"#;
        let catalog = FungusCatalog::from_json(json).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let result = FungusCatalog::load_from_file(Path::new("/nonexistent/fungi.json"));
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }
}
