//! revmark command-line entry point

use anyhow::Result;
use clap::Parser;
use revmark_cli::commands::Commands;

/// Highlight the changes a revision process claims to have made
#[derive(Debug, Parser)]
#[command(name = "revmark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reconcile(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}
