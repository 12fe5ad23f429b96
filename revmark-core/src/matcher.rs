//! Locating a change record's revised fragment in the document

use crate::types::Span;

/// Finds where a fragment sits in a document.
///
/// Implementations are pure queries: the same arguments always produce the
/// same answer, and nothing is recorded between calls.
pub trait FragmentMatcher: Send + Sync {
    /// Return the leftmost occurrence of `fragment` starting at or after
    /// `cursor` that does not intersect any span in `committed`.
    fn find(
        &self,
        document: &str,
        fragment: &str,
        cursor: usize,
        committed: &[Span],
    ) -> Option<Span>;
}

/// Literal, case-sensitive substring matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralMatcher;

impl LiteralMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentMatcher for LiteralMatcher {
    fn find(
        &self,
        document: &str,
        fragment: &str,
        cursor: usize,
        committed: &[Span],
    ) -> Option<Span> {
        if fragment.is_empty() || !document.is_char_boundary(cursor) {
            return None;
        }

        let mut from = cursor;
        while let Some(found) = document[from..].find(fragment) {
            let start = from + found;
            let candidate = Span::new(start, start + fragment.len())?;

            if !committed.iter().any(|span| span.overlaps(&candidate)) {
                return Some(candidate);
            }

            // Retry one character further so overlapping occurrences
            // ("aa" in "aaa") are still considered.
            let step = document[start..].chars().next().map_or(1, char::len_utf8);
            from = start + step;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    #[test]
    fn test_finds_first_occurrence() {
        let matcher = LiteralMatcher::new();
        assert_eq!(
            matcher.find("Rain fell hard yesterday.", "hard", 0, &[]),
            Some(span(10, 14))
        );
    }

    #[test]
    fn test_respects_cursor() {
        let matcher = LiteralMatcher::new();
        assert_eq!(matcher.find("the the", "the", 0, &[]), Some(span(0, 3)));
        assert_eq!(matcher.find("the the", "the", 1, &[]), Some(span(4, 7)));
        assert_eq!(matcher.find("the the", "the", 5, &[]), None);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = LiteralMatcher::new();
        assert_eq!(matcher.find("The cat", "the", 0, &[]), None);
    }

    #[test]
    fn test_not_found() {
        let matcher = LiteralMatcher::new();
        assert_eq!(matcher.find("fast", "quickly", 0, &[]), None);
    }

    #[test]
    fn test_skips_committed_spans() {
        let matcher = LiteralMatcher::new();
        let committed = [span(0, 3)];
        assert_eq!(
            matcher.find("the the", "the", 0, &committed),
            Some(span(4, 7))
        );
    }

    #[test]
    fn test_partial_overlap_is_rejected() {
        let matcher = LiteralMatcher::new();
        // "cat" at 4..7 intersects the committed 5..9
        let committed = [span(5, 9)];
        assert_eq!(matcher.find("The cat sat.", "cat", 0, &committed), None);
    }

    #[test]
    fn test_overlapping_occurrences_are_tried() {
        let matcher = LiteralMatcher::new();
        // The first "aa" (0..2) is claimed; the next unclaimed one is 2..4,
        // but the overlapping occurrence at 1..3 must be examined on the way.
        let committed = [span(0, 2)];
        assert_eq!(matcher.find("aaaa", "aa", 0, &committed), Some(span(2, 4)));
        let committed = [span(0, 1)];
        assert_eq!(matcher.find("aaa", "aa", 0, &committed), Some(span(1, 3)));
    }

    #[test]
    fn test_multibyte_text() {
        let matcher = LiteralMatcher::new();
        let doc = "雨がとても強く降った";
        let found = matcher.find(doc, "強く", 0, &[]).unwrap();
        assert_eq!(found.slice(doc), "強く");

        // Retrying past a claimed multibyte match stays on char boundaries
        let doc = "強く強く";
        let committed = [span(0, 6)];
        assert_eq!(matcher.find(doc, "強く", 0, &committed), Some(span(6, 12)));
    }

    #[test]
    fn test_invalid_cursor() {
        let matcher = LiteralMatcher::new();
        assert_eq!(matcher.find("abc", "c", 10, &[]), None);
        // Inside a multibyte character
        assert_eq!(matcher.find("日本", "本", 1, &[]), None);
    }

    #[test]
    fn test_empty_fragment() {
        let matcher = LiteralMatcher::new();
        assert_eq!(matcher.find("abc", "", 0, &[]), None);
    }
}
