//! End-to-end reconciliation scenarios

use revmark_core::{
    reconcile, ChangeRecord, DropReason, DroppedRecord, ReconcileError, Segment, SegmentKind,
    Segmenter, Span,
};

fn describe<'a>(segments: &[Segment<'a>]) -> Vec<(&'a str, Option<&'a str>)> {
    segments
        .iter()
        .map(|s| (s.text, s.change_info().map(|info| info.original_fragment)))
        .collect()
}

#[test]
fn test_identical_fragments_still_highlighted() {
    let records = vec![ChangeRecord::new("cat", "cat", "no change")];
    let segments = reconcile("The cat sat.", &records).unwrap();

    assert_eq!(
        describe(&segments),
        vec![("The ", None), ("cat", Some("cat")), (" sat.", None)]
    );
    assert_eq!(segments[1].change_info().unwrap().rationale, "no change");
}

#[test]
fn test_single_substitution() {
    let records = vec![ChangeRecord::new("a lot", "hard", "intensity")];
    let segments = reconcile("Rain fell hard yesterday.", &records).unwrap();

    assert_eq!(
        describe(&segments),
        vec![
            ("Rain fell ", None),
            ("hard", Some("a lot")),
            (" yesterday.", None)
        ]
    );
    assert_eq!(segments[1].span, Span { start: 10, end: 14 });
}

#[test]
fn test_repeated_fragment_claimed_left_to_right() {
    let first = ChangeRecord::new("a", "the", "first");
    let second = ChangeRecord::new("an", "the", "second");

    for records in [
        vec![first.clone(), second.clone()],
        vec![second.clone(), first.clone()],
    ] {
        let segments = reconcile("the the", &records).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].span, Span { start: 0, end: 3 });
        assert_eq!(segments[1].text, " ");
        assert_eq!(segments[2].span, Span { start: 4, end: 7 });
        assert!(segments[0].is_changed());
        assert!(segments[2].is_changed());
        // Content ordering decides which record takes the first occurrence
        assert_eq!(segments[0].change_info().unwrap().rationale, "first");
        assert_eq!(segments[2].change_info().unwrap().rationale, "second");
    }
}

#[test]
fn test_missing_fragment_dropped() {
    let records = vec![ChangeRecord::new("fast", "quickly", "adverb")];
    let result = Segmenter::new()
        .reconcile("He ran fast.", &records)
        .unwrap();

    assert_eq!(result.segments().len(), 1);
    assert_eq!(result.segments()[0].text, "He ran fast.");
    assert_eq!(result.segments()[0].kind, SegmentKind::Unchanged);
    assert_eq!(
        result.dropped(),
        &[DroppedRecord {
            index: 0,
            reason: DropReason::NotFound
        }]
    );
}

#[test]
fn test_unmatched_record_does_not_disturb_others() {
    let doc = "Rain fell hard yesterday.";
    let good = ChangeRecord::new("a lot", "hard", "intensity");
    let bad = ChangeRecord::new("today", "tomorrow", "time");

    let only_good = vec![good.clone()];
    let both = vec![bad, good];

    let alone = reconcile(doc, &only_good).unwrap();
    let mixed = reconcile(doc, &both).unwrap();
    assert_eq!(alone, mixed);
}

#[test]
fn test_overlapping_claims_resolve_to_one() {
    // Both records want text around "brown"; only the first by position wins
    let records = vec![
        ChangeRecord::new("red fox", "brown fox", "animal"),
        ChangeRecord::new("slow red", "quick brown", "speed"),
    ];
    let result = Segmenter::new()
        .reconcile("The quick brown fox jumps", &records)
        .unwrap();

    assert_eq!(
        describe(result.segments()),
        vec![
            ("The ", None),
            ("quick brown", Some("slow red")),
            (" fox jumps", None)
        ]
    );
    assert_eq!(result.dropped()[0].index, 0);
    assert_eq!(result.dropped()[0].reason, DropReason::Conflict);
}

#[test]
fn test_whole_document_change() {
    let records = vec![ChangeRecord::new("Hi.", "Hello.", "formal")];
    let segments = reconcile("Hello.", &records).unwrap();
    assert_eq!(describe(&segments), vec![("Hello.", Some("Hi."))]);
}

#[test]
fn test_multibyte_document() {
    let doc = "雨がとても強く降った。";
    let records = vec![
        ChangeRecord::new("たくさん", "とても強く", "強調"),
        ChangeRecord::new("降りました", "降った", "文体"),
    ];
    let result = Segmenter::new().reconcile(doc, &records).unwrap();

    assert_eq!(result.reconstruct(), doc);
    assert_eq!(
        describe(result.segments()),
        vec![
            ("雨が", None),
            ("とても強く", Some("たくさん")),
            ("降った", Some("降りました")),
            ("。", None)
        ]
    );
}

#[test]
fn test_structural_error_reports_index() {
    let records = vec![
        ChangeRecord::new("a", "b", "c"),
        ChangeRecord::new("d", "e", "f"),
        ChangeRecord::new("g", "", "i"),
    ];
    let err = reconcile("abcdef", &records).unwrap_err();
    assert_eq!(err, ReconcileError::EmptyFragment { index: 2 });
    assert!(err.to_string().contains("record 2"));
}

#[test]
fn test_stats() {
    let records = vec![
        ChangeRecord::new("a lot", "hard", "intensity"),
        ChangeRecord::new("x", "missing", "y"),
    ];
    let result = Segmenter::new()
        .reconcile("Rain fell hard yesterday.", &records)
        .unwrap();
    let stats = result.stats();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.dropped, 1);
    assert_eq!(stats.changed_bytes, 4);
    assert_eq!(stats.document_bytes, 25);
}
