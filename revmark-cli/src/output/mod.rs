//! Output formatting module

use crate::config::OutputConfig;
use anyhow::Result;
use revmark_core::Reconciliation;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one reconciled document
    fn format_document(&mut self, source: &str, result: &Reconciliation<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Document with inline markers and numbered footnotes
    Text,
    /// JSON array of documents with their segments
    Json,
    /// Markdown with bold changes and a change list
    Markdown,
}

/// Writer type accepted by [`create_formatter`]
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: BoxedWriter,
    options: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_dropped)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            options.pretty_json,
            options.include_dropped,
        )),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.include_dropped))
        }
    }
}

/// Escape `"` so fragments can be quoted on one line
pub(crate) fn quote(fragment: &str) -> String {
    format!("\"{}\"", fragment.replace('"', "\\\""))
}
