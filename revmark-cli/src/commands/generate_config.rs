//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template()?;

        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   revmark reconcile -i 'jobs/*.json' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# revmark configuration\n\
             #\n\
             # reconcile.strict         fail when a change record cannot be placed\n\
             # output.default_format    text | json | markdown\n\
             # performance.worker_threads  0 = one per CPU\n\
             \n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("revmark.toml");

        GenerateConfigArgs {
            output: path.clone(),
        }
        .execute()
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# revmark configuration"));
        assert_eq!(CliConfig::from_file(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unwritable_destination() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/revmark.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
