//! Property tests for reconciliation invariants

use proptest::prelude::*;
use revmark_core::{reconcile, ChangeRecord, Segmenter};

fn record_strategy() -> impl Strategy<Value = ChangeRecord> {
    (
        "[a-c]{1,3}",
        "[ab ]{1,3}",
        prop::sample::select(vec!["tone", "clarity", "brevity"]),
    )
        .prop_map(|(original, revised, rationale)| {
            ChangeRecord::new(original, revised, rationale)
        })
}

fn records_with_permutation() -> impl Strategy<Value = (Vec<ChangeRecord>, Vec<ChangeRecord>)> {
    prop::collection::vec(record_strategy(), 0..8).prop_flat_map(|records| {
        let shuffled = Just(records.clone()).prop_shuffle();
        (Just(records), shuffled)
    })
}

proptest! {
    #[test]
    fn segments_reconstruct_document(
        document in "[ab ]{0,40}",
        records in prop::collection::vec(record_strategy(), 0..8),
    ) {
        let segments = reconcile(&document, &records).unwrap();
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        prop_assert_eq!(rebuilt, document);
    }

    #[test]
    fn segments_tile_document_without_gaps(
        document in "[ab ]{0,40}",
        records in prop::collection::vec(record_strategy(), 0..8),
    ) {
        let segments = reconcile(&document, &records).unwrap();
        let mut expected_start = 0;
        for segment in &segments {
            prop_assert_eq!(segment.span.start, expected_start);
            prop_assert!(!segment.span.is_empty());
            prop_assert_eq!(segment.span.slice(&document), segment.text);
            expected_start = segment.span.end;
        }
        prop_assert_eq!(expected_start, document.len());
    }

    #[test]
    fn changed_spans_are_disjoint_and_increasing(
        document in "[ab ]{0,40}",
        records in prop::collection::vec(record_strategy(), 0..8),
    ) {
        let segments = reconcile(&document, &records).unwrap();
        let changed: Vec<_> = segments.iter().filter(|s| s.is_changed()).map(|s| s.span).collect();
        for pair in changed.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn input_order_does_not_matter(
        document in "[ab ]{0,40}",
        (records, shuffled) in records_with_permutation(),
    ) {
        let expected = reconcile(&document, &records).unwrap();
        let actual = reconcile(&document, &shuffled).unwrap();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn every_record_is_applied_or_dropped(
        document in "[ab ]{0,40}",
        records in prop::collection::vec(record_strategy(), 0..8),
    ) {
        let result = Segmenter::new().reconcile(&document, &records).unwrap();
        prop_assert_eq!(result.changed_count() + result.dropped().len(), records.len());
    }

    #[test]
    fn absent_fragment_changes_nothing(
        document in "[ab ]{0,40}",
        records in prop::collection::vec(record_strategy(), 0..8),
    ) {
        // 'z' never occurs in the generated documents
        let mut with_absent = records.clone();
        with_absent.push(ChangeRecord::new("y", "zz", "never placed"));

        let expected = reconcile(&document, &records).unwrap();
        let actual = reconcile(&document, &with_absent).unwrap();
        prop_assert_eq!(expected, actual);
    }
}

#[test]
fn no_records_yields_single_unchanged_segment() {
    let segments = reconcile("anything at all", &[]).unwrap();
    assert_eq!(segments.len(), 1);
    assert!(!segments[0].is_changed());
    assert_eq!(segments[0].text, "anything at all");

    assert!(reconcile("", &[]).unwrap().is_empty());
}
