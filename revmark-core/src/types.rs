//! Data model shared by the matcher and the segmenter

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a document.
///
/// Offsets are UTF-8 byte offsets. Spans produced by the matcher always lie
/// on `char` boundaries since they come from literal substring matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// First byte of the range
    pub start: usize,
    /// One past the last byte of the range
    pub end: usize,
}

impl Span {
    /// Create a non-empty span, or `None` if `start >= end`
    #[inline]
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two spans share at least one offset. Touching spans do not.
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The text this span covers in `document`
    #[inline]
    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }
}

/// One substitution claimed by the process that produced the revised text.
///
/// Records arriving in a list carry no ordering meaning; the segmenter
/// treats them as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChangeRecord {
    /// Fragment of the original document that was replaced
    #[cfg_attr(feature = "serde", serde(alias = "original_fragment"))]
    pub original_fragment: String,
    /// Fragment of the revised document that replaced it
    #[cfg_attr(feature = "serde", serde(alias = "revised_fragment"))]
    pub revised_fragment: String,
    /// Why the change was made
    pub rationale: String,
}

impl ChangeRecord {
    pub fn new(
        original_fragment: impl Into<String>,
        revised_fragment: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            original_fragment: original_fragment.into(),
            revised_fragment: revised_fragment.into(),
            rationale: rationale.into(),
        }
    }
}

/// Presentation data attached to a changed segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeInfo<'a> {
    pub original_fragment: &'a str,
    pub rationale: &'a str,
}

impl<'a> From<&'a ChangeRecord> for ChangeInfo<'a> {
    fn from(record: &'a ChangeRecord) -> Self {
        Self {
            original_fragment: &record.original_fragment,
            rationale: &record.rationale,
        }
    }
}

/// Whether a segment is plain text or a highlighted change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    Unchanged,
    Changed(ChangeInfo<'a>),
}

/// A contiguous run of the revised document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Where the run sits in the document
    pub span: Span,
    /// The document text covered by `span`
    pub text: &'a str,
    pub kind: SegmentKind<'a>,
}

impl<'a> Segment<'a> {
    pub(crate) fn unchanged(document: &'a str, span: Span) -> Self {
        Self {
            span,
            text: span.slice(document),
            kind: SegmentKind::Unchanged,
        }
    }

    pub(crate) fn changed(document: &'a str, span: Span, record: &'a ChangeRecord) -> Self {
        Self {
            span,
            text: span.slice(document),
            kind: SegmentKind::Changed(ChangeInfo::from(record)),
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self.kind, SegmentKind::Changed(_))
    }

    pub fn change_info(&self) -> Option<&ChangeInfo<'a>> {
        match &self.kind {
            SegmentKind::Changed(info) => Some(info),
            SegmentKind::Unchanged => None,
        }
    }
}
