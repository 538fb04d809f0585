use std::path::PathBuf;

use clap::Args;

use crate::archive::{Archive, ArchiveConfig};
use crate::cli::OutputFormat;
use crate::core::traits::{Trait, TraitSet};
use crate::matching::engine::{MatchResult, MatchingConfig};

#[derive(Args)]
pub struct IdentifyArgs {
    /// Observed spore print color (e.g., white, brown, purple)
    #[arg(long, default_value = "")]
    pub spore_print_color: String,

    /// Observed hymenium type (e.g., gills, pores, ridges)
    #[arg(long, default_value = "")]
    pub hymenium: String,

    /// Maximum number of matches to show (all by default)
    #[arg(short = 'n', long)]
    pub max_matches: Option<usize>,

    /// Minimum number of matching traits required
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub min_score: u32,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl IdentifyArgs {
    fn query(&self) -> TraitSet {
        TraitSet::new()
            .with_spore_print_color(self.spore_print_color.trim())
            .with_hymenium(self.hymenium.trim())
    }

    fn archive_config(&self) -> ArchiveConfig {
        let mut config = ArchiveConfig::default().with_matching(MatchingConfig {
            min_score: self.min_score,
            limit: self.max_matches,
        });
        if let Some(path) = &self.catalog {
            config = config.with_catalog_path(path);
        }
        config
    }
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or results cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let query = args.query();
    if query.is_empty() {
        tracing::warn!("No traits given; nothing can match");
    }

    let archive = Archive::from_config(args.archive_config())?;

    if archive.catalog().is_empty() {
        eprintln!("Warning: Catalog is empty, no fungi to match against.");
        return Ok(());
    }

    let matches = archive.identify(&query);

    if matches.is_empty() {
        eprintln!("No matching fungi found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&matches),
        OutputFormat::Json => print_json_results(&matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn matched_traits(result: &MatchResult<'_>) -> Vec<String> {
    result.score.matched.iter().map(Trait::to_string).collect()
}

fn print_text_results(matches: &[MatchResult<'_>]) {
    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        let record = result.record;
        let name = record.primary_name().unwrap_or("(no common name)");

        println!("\n#{} {}", i + 1, name);
        println!("   Common Names: {}", record.common_names.join(", "));
        println!("   Taxonomic Name: {}", record.taxonomic_name());
        println!("   Edibility: {}", record.edibility);
        println!(
            "   Score: {} (matched: {})",
            result.score.score,
            matched_traits(result).join(", ")
        );

        if record.edibility.is_toxic() {
            println!("\n   Warning: {} is {}", name, record.edibility);
        }
    }

    println!();
}

fn print_json_results(matches: &[MatchResult<'_>]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            serde_json::json!({
                "rank": i + 1,
                "record": {
                    "common_names": m.record.common_names,
                    "taxonomic_name": m.record.taxonomic_name(),
                    "genus_name": m.record.genus_name,
                    "species_name": m.record.species_name,
                    "edibility": m.record.edibility,
                    "traits": m.record.traits,
                },
                "score": m.score.score,
                "matched_traits": m.score.matched,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult<'_>]) {
    println!("rank\tprimary_name\ttaxonomic_name\tedibility\tscore\tmatched\tspore_print_color\thymenium");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            m.record.primary_name().unwrap_or(""),
            m.record.taxonomic_name(),
            m.record.edibility,
            m.score.score,
            matched_traits(m).join(","),
            m.record.traits.spore_print_color,
            m.record.traits.hymenium,
        );
    }
}
