//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use revmark_core::Reconciliation;
use std::io::Write;

/// Markdown formatter - bold changes with superscript references and a
/// numbered change list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_dropped: bool,
    change_count: usize,
    dropped_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_dropped: bool) -> Self {
        Self {
            writer,
            include_dropped,
            change_count: 0,
            dropped_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, result: &Reconciliation<'_>) -> Result<()> {
        writeln!(self.writer, "## {}", escape(source))?;
        writeln!(self.writer)?;

        let mut items = Vec::new();
        for segment in result.segments() {
            match segment.change_info() {
                Some(info) => {
                    items.push((segment.text, info));
                    write!(
                        self.writer,
                        "**{}**<sup>{}</sup>",
                        escape(segment.text),
                        items.len()
                    )?;
                }
                None => write!(self.writer, "{}", escape(segment.text))?,
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer)?;

        for (n, (revised, info)) in items.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. ~~{}~~ → **{}**: {}",
                n + 1,
                escape(info.original_fragment),
                escape(revised),
                escape(info.rationale)
            )?;
        }
        if !items.is_empty() {
            writeln!(self.writer)?;
        }

        if self.include_dropped && !result.dropped().is_empty() {
            for dropped in result.dropped() {
                writeln!(
                    self.writer,
                    "- dropped: record {} ({})",
                    dropped.index,
                    escape(dropped.reason.as_str())
                )?;
            }
            writeln!(self.writer)?;
        }

        self.change_count += items.len();
        self.dropped_count += result.dropped().len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total changes: {} (dropped: {})*",
            self.change_count, self.dropped_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Backslash-escape characters that would otherwise open emphasis, code,
/// strikethrough or inline HTML
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '*' | '_' | '~' | '`' | '<') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
