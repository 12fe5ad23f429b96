//! Reconciliation results

use crate::types::Segment;

/// Why a change record did not produce a highlighted segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The revised fragment does not occur in the document
    NotFound,
    /// Every occurrence is already claimed or lies before the commit cursor
    Conflict,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::NotFound => "not_found",
            DropReason::Conflict => "conflict",
        }
    }
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change record left out of the highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DroppedRecord {
    /// Position of the record in the caller's list
    pub index: usize,
    pub reason: DropReason,
}

/// Summary counts for one reconciliation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Records supplied by the caller
    pub records: usize,
    /// Records that produced a changed segment
    pub applied: usize,
    /// Records left out of the output
    pub dropped: usize,
    /// Bytes of the document covered by changed segments
    pub changed_bytes: usize,
    /// Total document length in bytes
    pub document_bytes: usize,
}

/// Ordered segments for one document plus the records that were dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<'a> {
    document: &'a str,
    segments: Vec<Segment<'a>>,
    dropped: Vec<DroppedRecord>,
    record_count: usize,
}

impl<'a> Reconciliation<'a> {
    pub(crate) fn new(
        document: &'a str,
        segments: Vec<Segment<'a>>,
        dropped: Vec<DroppedRecord>,
        record_count: usize,
    ) -> Self {
        Self {
            document,
            segments,
            dropped,
            record_count,
        }
    }

    /// The document the segments were carved from
    pub fn document(&self) -> &'a str {
        self.document
    }

    /// Segments in document order
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment<'a>> {
        self.segments
    }

    /// Dropped records, ordered by their position in the input list
    pub fn dropped(&self) -> &[DroppedRecord] {
        &self.dropped
    }

    pub fn changed_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_changed()).count()
    }

    /// Concatenate the segment texts. Always equal to [`Self::document`].
    pub fn reconstruct(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    pub fn stats(&self) -> ReconcileStats {
        let changed_bytes = self
            .segments
            .iter()
            .filter(|s| s.is_changed())
            .map(|s| s.span.len())
            .sum();

        ReconcileStats {
            records: self.record_count,
            applied: self.changed_count(),
            dropped: self.dropped.len(),
            changed_bytes,
            document_bytes: self.document.len(),
        }
    }
}
