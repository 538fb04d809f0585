//! Trait matching and ranking.
//!
//! - [`MatchingEngine`]: Ranks a [`FungusCatalog`] against a query
//! - [`rank`]: The same ranking over any slice of records
//! - [`MatchScore`]: Per-record score and the traits that earned it
//!
//! ## Algorithm
//!
//! 1. Each trait dimension where query and record share the same non-empty
//!    value earns exactly one point
//! 2. Records scoring zero are dropped
//! 3. Survivors are stably sorted by descending score, so ties keep catalog order
//!
//! ## Example
//!
//! ```rust,no_run
//! use fungident::{FungusCatalog, MatchingEngine, TraitSet};
//!
//! let catalog = FungusCatalog::load_embedded().unwrap();
//! let query = TraitSet::new().with_spore_print_color("white");
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&query) {
//!     println!("{} ({} points)", m.record.taxonomic_name(), m.score.score);
//! }
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`rank`]: engine::rank
//! [`MatchScore`]: scoring::MatchScore
//! [`FungusCatalog`]: crate::catalog::store::FungusCatalog

pub mod engine;
pub mod scoring;
