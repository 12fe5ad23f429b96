//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use revmark_core::{Reconciliation, SegmentKind};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all documents as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_dropped: bool,
    documents: Vec<DocumentData>,
}

/// One reconciled document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the job came from
    pub source: String,
    pub segments: Vec<SegmentData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropped: Option<Vec<DroppedData>>,
    pub stats: StatsData,
}

/// One segment of a document
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// `unchanged` or `changed`
    pub kind: String,
    pub text: String,
    /// Byte offset where the segment starts
    pub start: usize,
    /// Byte offset one past the segment end
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_fragment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DroppedData {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsData {
    pub records: usize,
    pub applied: usize,
    pub dropped: usize,
    pub changed_bytes: usize,
    pub document_bytes: usize,
}

impl DocumentData {
    fn from_result(source: &str, result: &Reconciliation<'_>, include_dropped: bool) -> Self {
        let segments = result
            .segments()
            .iter()
            .map(|segment| {
                let (kind, original_fragment, rationale) = match &segment.kind {
                    SegmentKind::Unchanged => ("unchanged", None, None),
                    SegmentKind::Changed(info) => (
                        "changed",
                        Some(info.original_fragment.to_string()),
                        Some(info.rationale.to_string()),
                    ),
                };
                SegmentData {
                    kind: kind.to_string(),
                    text: segment.text.to_string(),
                    start: segment.span.start,
                    end: segment.span.end,
                    original_fragment,
                    rationale,
                }
            })
            .collect();

        let dropped = include_dropped.then(|| {
            result
                .dropped()
                .iter()
                .map(|d| DroppedData {
                    index: d.index,
                    reason: d.reason.to_string(),
                })
                .collect()
        });

        let stats = result.stats();
        Self {
            source: source.to_string(),
            segments,
            dropped,
            stats: StatsData {
                records: stats.records,
                applied: stats.applied,
                dropped: stats.dropped,
                changed_bytes: stats.changed_bytes,
                document_bytes: stats.document_bytes,
            },
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, include_dropped: bool) -> Self {
        Self {
            writer,
            pretty,
            include_dropped,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, result: &Reconciliation<'_>) -> Result<()> {
        self.documents.push(DocumentData::from_result(
            source,
            result,
            self.include_dropped,
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
