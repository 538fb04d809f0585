//! Centralized validation for catalog data and configuration.

use crate::core::fungus::FungusRecord;

/// Maximum number of records allowed in a single catalog
pub const MAX_RECORDS: usize = 100_000;

/// Maximum length of a storage table name
pub const MAX_TABLE_NAME_LENGTH: usize = 64;

/// Data-quality validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("genus name is empty")]
    EmptyGenus,
    #[error("species name is empty")]
    EmptySpecies,
    #[error("common name at position {0} is empty")]
    EmptyCommonName(usize),
    #[error("Too many records: exceeds maximum of {MAX_RECORDS}")]
    TooManyRecords,
    #[error("Table name too long: exceeds {MAX_TABLE_NAME_LENGTH} characters")]
    TableNameTooLong,
    #[error("Invalid table name '{0}': use letters, digits, and underscores, not starting with a digit")]
    InvalidTableName(String),
}

/// Check that a record carries the fields every consumer relies on.
///
/// Ranking never validates records; catalog sources call this on load so the
/// taxonomic name of every record they hand out is well-formed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyGenus` or `ValidationError::EmptySpecies` when a
/// taxonomic part is blank, or `ValidationError::EmptyCommonName` when a listed
/// common name is blank.
pub fn validate_record(record: &FungusRecord) -> Result<(), ValidationError> {
    if record.genus_name.trim().is_empty() {
        return Err(ValidationError::EmptyGenus);
    }
    if record.species_name.trim().is_empty() {
        return Err(ValidationError::EmptySpecies);
    }
    if let Some(pos) = record.common_names.iter().position(|n| n.trim().is_empty()) {
        return Err(ValidationError::EmptyCommonName(pos));
    }
    Ok(())
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
///
/// # Errors
///
/// Returns `ValidationError::TooManyRecords` if adding would exceed the limit.
pub fn check_record_limit(count: usize) -> Result<(), ValidationError> {
    if count >= MAX_RECORDS {
        Err(ValidationError::TooManyRecords)
    } else {
        Ok(())
    }
}

/// Validate a table name before it is interpolated into a schema statement.
///
/// # Errors
///
/// Returns `ValidationError::TableNameTooLong` or `ValidationError::InvalidTableName`.
pub fn validate_table_name(name: &str) -> Result<(), ValidationError> {
    if name.len() > MAX_TABLE_NAME_LENGTH {
        return Err(ValidationError::TableNameTooLong);
    }

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidTableName(name.to_string()));
    }

    Ok(())
}
