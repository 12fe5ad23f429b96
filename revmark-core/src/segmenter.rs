//! Carving a revised document into unchanged and changed segments
//!
//! Reconciliation runs in two phases. Every record is first located
//! independently to get a tentative position, and the records are sorted by
//! that position. The sorted records are then committed left to right, each
//! one searched for only after the end of the previous commit, so accepted
//! spans never overlap and the result does not depend on input order.

use std::cmp::Ordering;

use crate::error::{ReconcileError, Result};
use crate::matcher::{FragmentMatcher, LiteralMatcher};
use crate::output::{DropReason, DroppedRecord, Reconciliation};
use crate::types::{ChangeRecord, Segment, Span};

/// Reconciles change records against a revised document
#[derive(Debug, Clone, Default)]
pub struct Segmenter<M = LiteralMatcher> {
    matcher: M,
}

impl Segmenter<LiteralMatcher> {
    /// Create a segmenter using literal, case-sensitive matching
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: FragmentMatcher> Segmenter<M> {
    /// Create a segmenter with a custom fragment matcher
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// Map `records` onto `document`.
    ///
    /// Fails only when a record is structurally invalid. Records whose
    /// fragment cannot be placed are listed in [`Reconciliation::dropped`].
    pub fn reconcile<'a>(
        &self,
        document: &'a str,
        records: &'a [ChangeRecord],
    ) -> Result<Reconciliation<'a>> {
        validate(records)?;

        if records.is_empty() || document.is_empty() {
            let dropped = (0..records.len())
                .map(|index| drop_record(index, DropReason::NotFound))
                .collect();
            let segments = emit_segments(document, records, &[]);
            return Ok(Reconciliation::new(
                document,
                segments,
                dropped,
                records.len(),
            ));
        }

        let mut dropped = Vec::new();

        let mut tentative = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match self
                .matcher
                .find(document, &record.revised_fragment, 0, &[])
            {
                Some(span) => tentative.push((span, index)),
                None => dropped.push(drop_record(index, DropReason::NotFound)),
            }
        }
        tentative.sort_by(|a, b| tentative_order(records, a, b));

        let mut committed: Vec<Span> = Vec::with_capacity(tentative.len());
        let mut applied: Vec<(Span, usize)> = Vec::with_capacity(tentative.len());
        let mut cursor = 0;

        for (_, index) in tentative {
            let fragment = &records[index].revised_fragment;
            match self.matcher.find(document, fragment, cursor, &committed) {
                Some(span) if fits(document, span, &committed) => {
                    tracing::trace!(index, start = span.start, end = span.end, "committed");
                    committed.push(span);
                    applied.push((span, index));
                    cursor = span.end;
                }
                _ => dropped.push(drop_record(index, DropReason::Conflict)),
            }
        }

        applied.sort_by_key(|(span, _)| span.start);
        dropped.sort_by_key(|d| d.index);

        let segments = emit_segments(document, records, &applied);
        Ok(Reconciliation::new(
            document,
            segments,
            dropped,
            records.len(),
        ))
    }
}

/// Reconcile with the default literal matcher and return only the segments
pub fn reconcile<'a>(document: &'a str, records: &'a [ChangeRecord]) -> Result<Vec<Segment<'a>>> {
    Segmenter::new()
        .reconcile(document, records)
        .map(Reconciliation::into_segments)
}

fn validate(records: &[ChangeRecord]) -> Result<()> {
    match records.iter().position(|r| r.revised_fragment.is_empty()) {
        Some(index) => Err(ReconcileError::EmptyFragment { index }),
        None => Ok(()),
    }
}

fn drop_record(index: usize, reason: DropReason) -> DroppedRecord {
    tracing::debug!(index, %reason, "dropping change record");
    DroppedRecord { index, reason }
}

/// Earlier start first; at equal starts the longer fragment wins, then
/// record content decides, and input position only separates identical
/// records.
fn tentative_order(
    records: &[ChangeRecord],
    (a_span, a_index): &(Span, usize),
    (b_span, b_index): &(Span, usize),
) -> Ordering {
    let (a, b) = (&records[*a_index], &records[*b_index]);
    a_span
        .start
        .cmp(&b_span.start)
        .then_with(|| b_span.len().cmp(&a_span.len()))
        .then_with(|| a.revised_fragment.cmp(&b.revised_fragment))
        .then_with(|| a.original_fragment.cmp(&b.original_fragment))
        .then_with(|| a.rationale.cmp(&b.rationale))
        .then_with(|| a_index.cmp(b_index))
}

/// Guards against matchers that hand back spans the segmenter cannot use
fn fits(document: &str, span: Span, committed: &[Span]) -> bool {
    !span.is_empty()
        && span.end <= document.len()
        && document.is_char_boundary(span.start)
        && document.is_char_boundary(span.end)
        && !committed.iter().any(|c| c.overlaps(&span))
}

fn emit_segments<'a>(
    document: &'a str,
    records: &'a [ChangeRecord],
    applied: &[(Span, usize)],
) -> Vec<Segment<'a>> {
    let mut segments = Vec::with_capacity(applied.len() * 2 + 1);
    let mut last_end = 0;

    for &(span, index) in applied {
        if let Some(gap) = Span::new(last_end, span.start) {
            segments.push(Segment::unchanged(document, gap));
        }
        segments.push(Segment::changed(document, span, &records[index]));
        last_end = span.end;
    }

    if let Some(tail) = Span::new(last_end, document.len()) {
        segments.push(Segment::unchanged(document, tail));
    }

    segments
}
