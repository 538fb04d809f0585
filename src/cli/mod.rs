//! Command-line interface for fungident.
//!
//! - **identify**: Rank catalog fungi against observed traits
//! - **catalog**: List, show, export, or describe the storage schema of the catalog
//!
//! ## Usage
//!
//! ```text
//! # White spore print
//! fungident identify --spore-print-color white
//!
//! # White spore print and gills, JSON output
//! fungident identify --spore-print-color white --hymenium gills --format json
//!
//! # Use a custom catalog
//! fungident identify --hymenium pores --catalog my_fungi.json
//!
//! # Show one record
//! fungident catalog show "Amanita Bisporigera"
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod identify;

#[derive(Parser)]
#[command(name = "fungident")]
#[command(version)]
#[command(about = "Identify candidate fungi from observed physical traits")]
#[command(
    long_about = "fungident scores a catalog of known fungi against the traits you observed (spore print color, hymenium type) and lists the candidates, best matches first.\n\nTraits you leave out are ignored. Fungi that match none of the given traits are not listed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify fungi matching observed traits
    Identify(identify::IdentifyArgs),

    /// Inspect the fungus catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
