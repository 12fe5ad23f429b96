//! Plain text output formatter

use super::{quote, OutputFormatter};
use anyhow::Result;
use revmark_core::Reconciliation;
use std::io::Write;

/// Plain text formatter.
///
/// Changed spans are wrapped as `[text][n]` and explained in numbered
/// footnotes below the document.
pub struct TextFormatter<W: Write> {
    writer: W,
    include_dropped: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_dropped: bool) -> Self {
        Self {
            writer,
            include_dropped,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, result: &Reconciliation<'_>) -> Result<()> {
        writeln!(self.writer, "==> {source} <==")?;

        let mut notes = Vec::new();
        for segment in result.segments() {
            match segment.change_info() {
                Some(info) => {
                    notes.push((segment.text, info));
                    write!(self.writer, "[{}][{}]", segment.text, notes.len())?;
                }
                None => write!(self.writer, "{}", segment.text)?,
            }
        }
        writeln!(self.writer)?;

        if !notes.is_empty() {
            writeln!(self.writer)?;
        }
        for (n, (revised, info)) in notes.iter().enumerate() {
            writeln!(
                self.writer,
                "[{}] {} -> {}: {}",
                n + 1,
                quote(info.original_fragment),
                quote(revised),
                info.rationale
            )?;
        }

        if self.include_dropped {
            for dropped in result.dropped() {
                writeln!(
                    self.writer,
                    "dropped: record {} ({})",
                    dropped.index, dropped.reason
                )?;
            }
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
