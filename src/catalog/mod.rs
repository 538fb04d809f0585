//! Fungus catalog storage and indexing.
//!
//! The catalog is an ordered list of known fungi with their traits. An
//! embedded catalog is compiled into the binary, but custom catalogs can
//! also be loaded from JSON files, or from any type implementing
//! [`CatalogSource`](source::CatalogSource).
//!
//! Order matters: records that score equally are ranked in catalog order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fungident::FungusCatalog;
//!
//! let catalog = FungusCatalog::load_embedded().unwrap();
//!
//! for record in catalog.records() {
//!     println!("{}", record.taxonomic_name());
//! }
//!
//! let angel = catalog.get("Amanita Bisporigera");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use fungident::FungusCatalog;
//! use std::path::Path;
//!
//! // Export to JSON
//! let catalog = FungusCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! // Load from custom file
//! let custom = FungusCatalog::load_from_file(Path::new("my_fungi.json")).unwrap();
//! ```

pub mod index;
pub mod source;
pub mod store;
