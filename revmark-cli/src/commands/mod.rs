//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod reconcile;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconcile change records against revised documents
    Reconcile(reconcile::ReconcileArgs),

    /// Check job files without rendering them
    Validate(validate::ValidateArgs),

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      - Document with [change][n] markers and footnotes");
                println!("  json      - JSON array of documents with segments");
                println!("  markdown  - Markdown with bold changes and a change list");
            }
        }
    }
}
