//! Job file reading

use anyhow::{Context, Result};
use revmark_core::Job;
use std::fs;
use std::path::Path;

/// Reads reconciliation job files from disk
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read and decode a JSON job file
    pub fn read_job(path: &Path) -> Result<Job> {
        let content = Self::read_text(path)?;
        let job = Job::from_json(&content)
            .with_context(|| format!("Failed to parse job file: {}", path.display()))?;

        log::debug!(
            "Loaded {} ({} bytes, {} change records)",
            path.display(),
            job.document.len(),
            job.changes.len()
        );
        Ok(job)
    }
}
