use clap::Parser;
use tracing_subscriber::EnvFilter;

mod archive;
mod catalog;
mod cli;
mod core;
mod matching;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fungident=debug,info")
    } else {
        EnvFilter::new("fungident=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Identify(args) => {
            cli::identify::run(args, cli.format)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format)?;
        }
    }

    Ok(())
}
