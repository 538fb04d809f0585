use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::archive::{schema_statement, DEFAULT_TABLE_NAME};
use crate::catalog::source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};
use crate::catalog::store::FungusCatalog;
use crate::cli::OutputFormat;
use crate::core::fungus::FungusRecord;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all records in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by edibility (e.g., "Poisonous")
        #[arg(long)]
        edibility: Option<String>,
    },

    /// Show details of a single record
    Show {
        /// Taxonomic name (e.g., "Amanita Bisporigera")
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the table definition a persistent catalog should use
    Schema {
        /// Table name
        #[arg(long, default_value = DEFAULT_TABLE_NAME)]
        table_name: String,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, edibility } => {
            let catalog = load_catalog(catalog.as_deref())?;
            list_records(&catalog, edibility.as_deref(), format)?;
        }
        CatalogCommands::Show { name, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            show_record(&catalog, &name, format)?;
        }
        CatalogCommands::Export { output, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            std::fs::write(&output, catalog.to_json()?)?;
            eprintln!(
                "Exported {} records to {}",
                catalog.len(),
                output.display()
            );
        }
        CatalogCommands::Schema { table_name } => {
            println!("{}", schema_statement(&table_name)?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<FungusCatalog> {
    let catalog = match path {
        Some(p) => JsonFileCatalog::new(p).load()?,
        None => EmbeddedCatalog.load()?,
    };
    Ok(catalog)
}

fn list_records(
    catalog: &FungusCatalog,
    edibility: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records: Vec<&FungusRecord> = catalog
        .records()
        .iter()
        .filter(|r| {
            edibility.map_or(true, |e| {
                r.edibility.to_string().eq_ignore_ascii_case(e.trim())
            })
        })
        .collect();

    match format {
        OutputFormat::Text => {
            println!(
                "{:<28} {:<28} {:<14} {:<10} {:<8}",
                "Taxonomic Name", "Common Name", "Edibility", "Spores", "Hymenium"
            );
            println!("{}", "─".repeat(92));
            for r in &records {
                println!(
                    "{:<28} {:<28} {:<14} {:<10} {:<8}",
                    r.taxonomic_name(),
                    r.primary_name().unwrap_or("-"),
                    r.edibility.to_string(),
                    r.traits.spore_print_color,
                    r.traits.hymenium,
                );
            }
            println!("\nTotal: {} records", records.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Tsv => {
            println!("taxonomic_name\tcommon_names\tedibility\tspore_print_color\thymenium");
            for r in &records {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    r.taxonomic_name(),
                    r.common_names.join(","),
                    r.edibility,
                    r.traits.spore_print_color,
                    r.traits.hymenium,
                );
            }
        }
    }

    Ok(())
}

fn show_record(catalog: &FungusCatalog, name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let record = catalog
        .get(name.trim())
        .ok_or_else(|| anyhow::anyhow!("Record not found: {name}"))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Tsv => {
            println!("taxonomic_name\tcommon_names\tgenus_name\tspecies_name\tedibility\tspore_print_color\thymenium");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                record.taxonomic_name(),
                record.common_names.join(","),
                record.genus_name,
                record.species_name,
                record.edibility,
                record.traits.spore_print_color,
                record.traits.hymenium,
            );
        }
        OutputFormat::Text => {
            println!("{}", record.taxonomic_name());
            println!("   Common Names: {}", record.common_names.join(", "));
            println!("   Genus: {}", record.genus_name);
            println!("   Species: {}", record.species_name);
            println!("   Edibility: {}", record.edibility);
            println!("   Traits:");
            for (t, value) in record.traits.dimensions() {
                let value = if value.is_empty() { "(unspecified)" } else { value };
                println!("     {t}: {value}");
            }
        }
    }

    Ok(())
}
