use marksplice::core::document::{Document, LineEnding, split_lines};
use marksplice::core::splice::{Edit, apply_edit, apply_edits};
use marksplice::{LocateOptions, Region, SpliceError};

#[test]
fn test_parse_and_render_unmodified() {
    for text in [
        "",
        "\n",
        "one line",
        "a\nb\nc\n",
        "a\nb\nc",
        "a\n\n\nb\n",
        "a\r\nb\r\n",
        "a\r\nb",
    ] {
        assert_eq!(Document::parse(text).render(), text, "input: {:?}", text);
    }
}

#[test]
fn test_line_ending_detection() {
    assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
    assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
    assert_eq!(LineEnding::detect("no newline"), LineEnding::Lf);
    assert_eq!(LineEnding::detect("\nlead"), LineEnding::Lf);
}

#[test]
fn test_lines_exclude_terminators() {
    let doc = Document::parse("a\r\nMARK\r\nEND\r\n");

    assert_eq!(doc.lines(), ["a", "MARK", "END"]);
    assert_eq!(doc.line_ending(), LineEnding::CrLf);
    assert!(doc.has_trailing_newline());
}

#[test]
fn test_splice_preserves_lines_outside_region() {
    let mut doc = Document::parse("head\na\nMARK\nb\nEND\ntail\n");
    let region = Region {
        start: 1,
        marker: 2,
        end: 4,
    };

    let removed = doc
        .splice(&region, vec!["new 1".to_string(), "new 2".to_string()])
        .unwrap();

    assert_eq!(removed, ["a", "MARK", "b", "END"]);
    assert_eq!(doc.render(), "head\nnew 1\nnew 2\ntail\n");
}

#[test]
fn test_splice_out_of_bounds() {
    let mut doc = Document::parse("a\nb\n");
    let region = Region {
        start: 0,
        marker: 1,
        end: 5,
    };

    let err = doc.splice(&region, Vec::new()).unwrap_err();
    assert_eq!(
        err,
        SpliceError::RegionOutOfBounds {
            start: 0,
            end: 5,
            len: 2
        }
    );
    assert_eq!(doc.render(), "a\nb\n");
}

#[test]
fn test_split_lines_ignores_final_terminator() {
    assert_eq!(split_lines("x\ny\n"), ["x", "y"]);
    assert_eq!(split_lines("\nx"), ["", "x"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_apply_edit_replaces_region_keeping_crlf() {
    let mut doc = Document::parse("keep\r\n<div>\r\nMARK\r\nold\r\nEND\r\nkeep too");
    let edit = Edit::new(LocateOptions::new("MARK", "END"), "<section>\nnew\n</section>\n");

    let outcome = apply_edit(&mut doc, &edit).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.region.range(), 1..5);
    assert_eq!(outcome.removed, ["<div>", "MARK", "old", "END"]);
    assert_eq!(outcome.inserted, ["<section>", "new", "</section>"]);
    assert_eq!(
        doc.render(),
        "keep\r\n<section>\r\nnew\r\n</section>\r\nkeep too"
    );
}

#[test]
fn test_apply_edit_with_same_content_is_noop() {
    let text = "a\nMARK\nb\nEND\nz\n";
    let mut doc = Document::parse(text);
    let edit = Edit::new(LocateOptions::new("MARK", "END"), "a\nMARK\nb\nEND\n");

    let outcome = apply_edit(&mut doc, &edit).unwrap();

    assert!(!outcome.changed);
    assert_eq!(doc.render(), text);
}

#[test]
fn test_rerunning_marker_preserving_edit_is_idempotent() {
    let mut doc = Document::parse("a\nMARK\nold\nEND\n");
    let edit = Edit::new(LocateOptions::new("MARK", "END"), "a\nMARK\nnew\nEND");

    assert!(apply_edit(&mut doc, &edit).unwrap().changed);
    let once = doc.render();
    assert!(!apply_edit(&mut doc, &edit).unwrap().changed);
    assert_eq!(doc.render(), once);
    assert_eq!(once, "a\nMARK\nnew\nEND\n");
}

#[test]
fn test_apply_edit_missing_marker_leaves_document_untouched() {
    let text = "a\nMARK\nb\n";
    let mut doc = Document::parse(text);
    let edit = Edit::new(LocateOptions::new("MARK", "END"), "x");

    let err = apply_edit(&mut doc, &edit).unwrap_err();

    assert!(matches!(err, SpliceError::EndNotFound { .. }));
    assert_eq!(doc.render(), text);
}

#[test]
fn test_sequential_edits_see_previous_results() {
    let mut doc = Document::parse("top\nA\nbody\nA_END\nmid\nB\nbody\nB_END\n");
    let edits = vec![
        Edit::new(LocateOptions::new("A", "A_END").leading(0), "A\none\ntwo\nthree\nA_END"),
        Edit::new(LocateOptions::new("B", "B_END").leading(0), "B\nx\nB_END"),
    ];

    let outcomes = apply_edits(&mut doc, &edits).unwrap();

    assert_eq!(outcomes[0].region.range(), 1..4);
    assert_eq!(outcomes[1].region.range(), 7..10);
    assert_eq!(
        doc.render(),
        "top\nA\none\ntwo\nthree\nA_END\nmid\nB\nx\nB_END\n"
    );
}

#[test]
fn test_edit_can_consume_a_region_it_created() {
    let mut doc = Document::parse("x\nMARK\nEND\n");
    let edits = vec![
        Edit::new(LocateOptions::new("MARK", "END"), "NEXT\nbody\nNEXT_END"),
        Edit::new(LocateOptions::new("NEXT", "NEXT_END").leading(0), "done"),
    ];

    apply_edits(&mut doc, &edits).unwrap();
    assert_eq!(doc.render(), "done\n");
}

#[test]
fn test_mixed_line_endings_round_trip() {
    let text = "a\r\nb\nc\n";
    let doc = Document::parse(text);

    assert_eq!(doc.lines(), ["a", "b", "c"]);
    assert_eq!(doc.ending_of(0), Some(LineEnding::CrLf));
    assert_eq!(doc.ending_of(1), Some(LineEnding::Lf));
    assert_eq!(doc.render(), text);
}

#[test]
fn test_splice_keeps_mixed_endings_outside_region() {
    let mut doc = Document::parse("head\r\nMARK\nold\nEND\ntail\r\nlast\n");
    let edit = Edit::new(LocateOptions::new("MARK", "END").leading(0), "new 1\r\nnew 2");

    apply_edit(&mut doc, &edit).unwrap();

    assert_eq!(doc.render(), "head\r\nnew 1\nnew 2\ntail\r\nlast\n");
}

#[test]
fn test_splice_at_end_without_trailing_newline() {
    let mut doc = Document::parse("a\nMARK\nEND");
    let edit = Edit::new(LocateOptions::new("MARK", "END").leading(0), "x\ny\n");

    apply_edit(&mut doc, &edit).unwrap();
    assert_eq!(doc.render(), "a\nx\ny");

    let region = Region {
        start: 1,
        marker: 1,
        end: 2,
    };
    doc.splice(&region, Vec::new()).unwrap();
    assert_eq!(doc.render(), "a");
    assert!(!doc.has_trailing_newline());
}
