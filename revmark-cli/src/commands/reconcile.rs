//! Reconcile command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, BoxedWriter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use revmark_core::{reconcile_batch_with, Job};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Arguments for the reconcile command
#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Job files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: from config, else all CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Fail if any change record cannot be placed
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ReconcileArgs {
    /// Execute the reconcile command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting reconciliation");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let format = self.resolve_format(&config)?;
        let threads = self.threads.unwrap_or_else(|| config.worker_threads());
        if threads == 0 {
            return Err(CliError::ConfigError("threads must be greater than 0".into()).into());
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} job file(s)", files.len());

        let jobs = files
            .iter()
            .map(|path| FileReader::read_job(path))
            .collect::<Result<Vec<Job>>>()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker pool")?;

        let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
        progress.init_jobs(files.len() as u64);
        let outcomes = pool.install(|| {
            reconcile_batch_with(&jobs, |index| {
                progress.job_completed(&display_name(&files[index]))
            })
        });
        progress.finish();

        // Every job must succeed before anything is written
        let results = files
            .iter()
            .zip(&outcomes)
            .map(|(path, result)| {
                result.as_ref().map_err(|e| {
                    CliError::ProcessingError(format!("{}: {e}", path.display()))
                })
            })
            .collect::<std::result::Result<Vec<_>, CliError>>()?;

        let mut formatter = create_formatter(format, self.open_writer()?, &config.output);
        let mut dropped_total = 0;

        for (path, result) in files.iter().zip(results) {
            let source = path.display().to_string();

            let stats = result.stats();
            log::info!(
                "{source}: {} of {} change record(s) applied",
                stats.applied,
                stats.records
            );
            for dropped in result.dropped() {
                log::warn!(
                    "{source}: change record {} dropped ({})",
                    dropped.index,
                    dropped.reason
                );
            }
            dropped_total += stats.dropped;

            formatter.format_document(&source, result)?;
        }

        formatter.finish()?;

        if (self.strict || config.reconcile.strict) && dropped_total > 0 {
            return Err(CliError::UnresolvedRecords(dropped_total).into());
        }

        log::info!("Reconciliation complete");
        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::from_file(path),
            None => Ok(CliConfig::default()),
        }
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn open_writer(&self) -> Result<BoxedWriter> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
