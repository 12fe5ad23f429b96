//! Validate command implementation

use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;
use clap::Args;
use revmark_core::Segmenter;
use std::path::Path;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Job files or patterns to validate (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let segmenter = Segmenter::new();
        let mut invalid = 0;

        for path in &files {
            match check_job(&segmenter, path) {
                Ok((records, dropped)) => {
                    println!("✓ {}", path.display());
                    println!("  Change records: {records}");
                    if dropped > 0 {
                        println!("  Would be dropped: {dropped}");
                    }
                }
                Err(e) => {
                    invalid += 1;
                    println!("✗ {}", path.display());
                    println!("  Error: {e:#}");
                }
            }
        }

        if invalid > 0 {
            anyhow::bail!("Validation failed: {invalid} of {} job file(s) invalid", files.len());
        }
        Ok(())
    }
}

/// Decode a job and run it once; returns (record count, dropped count)
fn check_job(segmenter: &Segmenter, path: &Path) -> Result<(usize, usize)> {
    let job = FileReader::read_job(path)?;
    let result = segmenter.reconcile(&job.document, &job.changes)?;
    Ok((job.changes.len(), result.dropped().len()))
}
