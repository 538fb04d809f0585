//! # fungident
//!
//! A library for identifying candidate fungi species from observed traits.
//!
//! Given what you can see on a specimen (the color of its spore print, the
//! shape of its spore-bearing surface), `fungident` scores a catalog of known
//! fungi and returns those that agree with at least one observation, best
//! matches first.
//!
//! ## Features
//!
//! - **Equal-weight scoring**: Every matching trait is worth one point
//! - **Unspecified traits ignored**: Leave a trait empty and it neither helps nor hurts
//! - **Deterministic ranking**: Ties keep catalog order
//! - **Swappable catalogs**: Embedded, JSON file, or any [`CatalogSource`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use fungident::{FungusCatalog, MatchingEngine, TraitSet};
//!
//! let catalog = FungusCatalog::load_embedded().unwrap();
//!
//! let query = TraitSet::new()
//!     .with_spore_print_color("white")
//!     .with_hymenium("gills");
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&query) {
//!     println!("{}: {}", m.record.taxonomic_name(), m.record.edibility);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage, indexing, and sources
//! - [`core`]: Core data types for records and traits
//! - [`matching`]: Scoring and ranking
//! - [`archive`]: Configured handle combining a catalog source and matching options
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Record and table-name validation

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use archive::{Archive, ArchiveConfig};
pub use catalog::source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};
pub use catalog::store::{CatalogError, FungusCatalog};
pub use core::fungus::FungusRecord;
pub use core::traits::{Trait, TraitSet};
pub use core::types::Edibility;
pub use matching::engine::{rank, MatchResult, MatchingConfig, MatchingEngine};
pub use matching::scoring::MatchScore;
