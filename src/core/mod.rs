//! Core data types for fungus identification.
//!
//! - [`FungusRecord`]: A known species with names, edibility, and traits
//! - [`TraitSet`]: Observed or known trait values (also used as a query)
//! - [`Trait`]: The individual matchable dimensions
//! - [`Edibility`]: Edibility classification
//!
//! ## Unspecified Traits
//!
//! An empty trait value means "not specified". It never contributes to, or
//! counts against, a match score.
//!
//! [`FungusRecord`]: fungus::FungusRecord
//! [`TraitSet`]: traits::TraitSet
//! [`Trait`]: traits::Trait
//! [`Edibility`]: types::Edibility

pub mod fungus;
pub mod traits;
pub mod types;
