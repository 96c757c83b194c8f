//! Incremental update tests.
//!
//! Every case applies one edit to both the text and the document, then
//! compares the document with a fresh full parse of the new text.

use linelex::syntax::SearchStrategy;
use linelex::{CLike, Document, DocumentOptions, PlainText, TextEdit, TextRange, TextSize};
use rstest::rstest;

use crate::helpers::fixtures::{COMMENT_BLOCK, SIMPLE_STATEMENTS};
use crate::helpers::outline::{assert_matches_full_parse, parsed};

fn ts(n: usize) -> TextSize {
    TextSize::new(n as u32)
}

/// Replace `old_len` bytes at `start` with `insert`, returning the new text
/// and the matching notification.
fn apply(text: &str, start: usize, old_len: usize, insert: &str) -> (String, TextEdit) {
    let mut new_text = text.to_string();
    new_text.replace_range(start..start + old_len, insert);
    let edit = TextEdit::replace(TextRange::at(ts(start), ts(old_len)), ts(insert.len()));
    (new_text, edit)
}

// =============================================================================
// AGREEMENT WITH A FULL REPARSE
// =============================================================================

#[rstest]
#[case::insert_in_word(SIMPLE_STATEMENTS, 5, 0, "x")]
#[case::insert_at_start(SIMPLE_STATEMENTS, 0, 0, "// ")]
#[case::insert_at_end(SIMPLE_STATEMENTS, 35, 0, "\nz;")]
#[case::split_line(SIMPLE_STATEMENTS, 6, 0, "\n")]
#[case::join_lines(SIMPLE_STATEMENTS, 10, 1, "")]
#[case::delete_across_lines(SIMPLE_STATEMENTS, 4, 15, "")]
#[case::delete_everything(SIMPLE_STATEMENTS, 0, 35, "")]
#[case::replace_multiline(SIMPLE_STATEMENTS, 3, 10, "x;\ny;\nz")]
#[case::open_comment(SIMPLE_STATEMENTS, 0, 0, "/*")]
#[case::close_comment_early(COMMENT_BLOCK, 28, 0, "*/")]
#[case::remove_comment_close(COMMENT_BLOCK, 45, 2, "")]
#[case::remove_comment_open(COMMENT_BLOCK, 19, 2, "")]
#[case::type_into_string(COMMENT_BLOCK, 67, 0, "\" /*")]
#[case::insert_into_empty("", 0, 0, "a;\nb;")]
#[case::trailing_newline("a;\n", 2, 0, "\n\n")]
fn test_update_matches_full_parse(
    #[case] text: &str,
    #[case] start: usize,
    #[case] old_len: usize,
    #[case] insert: &str,
) {
    for search in [SearchStrategy::Hinted, SearchStrategy::Linear] {
        let options = DocumentOptions {
            search,
            ..DocumentOptions::default()
        };
        let mut doc = Document::with_options(CLike, options);
        doc.parse(text).unwrap();
        let (new_text, edit) = apply(text, start, old_len, insert);
        doc.update(&new_text, edit).unwrap();
        assert_matches_full_parse(&doc, &new_text);
        assert_eq!(doc.text_len(), ts(new_text.len()));
    }
}

#[test]
fn test_sequence_of_edits_stays_consistent() {
    let mut text = COMMENT_BLOCK.to_string();
    let mut doc = parsed(CLike, &text);
    let edits: &[(usize, usize, &str)] = &[
        (0, 0, "/*"),
        (30, 4, ""),
        (10, 0, "\n\n*/"),
        (5, 20, "x"),
        (0, 2, ""),
    ];
    for &(start, old_len, insert) in edits {
        let (new_text, edit) = apply(&text, start, old_len, insert);
        doc.update(&new_text, edit).unwrap();
        assert_matches_full_parse(&doc, &new_text);
        text = new_text;
    }
}

// =============================================================================
// HOW MUCH GETS RE-LEXED
// =============================================================================

#[test]
fn test_edit_inside_form_relexes_one_line() {
    let mut doc = parsed(CLike, SIMPLE_STATEMENTS);
    let (text, edit) = apply(SIMPLE_STATEMENTS, 15, 1, "20");
    let report = doc.update(&text, edit).unwrap();
    assert_eq!(report.relexed(), 1);
    assert_eq!(report.removed, 1);
    assert!(report.converged);
}

#[test]
fn test_edit_at_start_without_hint() {
    let options = DocumentOptions {
        track_current_line: false,
        ..DocumentOptions::default()
    };
    let mut doc = Document::with_options(CLike, options);
    doc.parse(SIMPLE_STATEMENTS).unwrap();
    assert_eq!(doc.current_line(), None);

    let (text, edit) = apply(SIMPLE_STATEMENTS, 0, 0, "const ");
    let report = doc.update(&text, edit).unwrap();
    assert_eq!(report.relexed(), 1);
    assert_eq!(report.first, doc.first_line());
    assert_eq!(doc.current_line(), None);
    assert_matches_full_parse(&doc, &text);
}

#[test]
fn test_deleting_a_line_removes_its_record() {
    let mut doc = parsed(CLike, SIMPLE_STATEMENTS);
    let before = doc.line_count();
    let (text, edit) = apply(SIMPLE_STATEMENTS, 11, 11, "");
    assert_eq!(text, "let a = 1;\nreturn a + b;");
    doc.update(&text, edit).unwrap();
    assert_eq!(doc.line_count(), before - 1);
    assert_matches_full_parse(&doc, &text);
}

#[test]
fn test_closing_comment_relexes_following_line() {
    let text = "x = 1; /* open\ny = 2;";
    let mut doc = parsed(CLike, text);
    let second = doc.lines().nth(1).unwrap().1;
    assert_eq!(second.entry_state().kind().as_str(), "block-comment");

    let (new_text, edit) = apply(text, 14, 0, " */");
    let report = doc.update(&new_text, edit).unwrap();
    assert_eq!(report.reparsed, 1);
    assert_eq!(report.propagated, 1);

    let second = doc.lines().nth(1).unwrap().1;
    assert_eq!(second.entry_state().kind().as_str(), "code");
    assert_eq!(second.forms()[0].kind.as_str(), "statement");
}

#[test]
fn test_propagation_never_exceeds_line_count() {
    let text = "a;\n".repeat(50);
    let mut doc = parsed(CLike, &text);
    let (new_text, edit) = apply(&text, 0, 0, "/*");
    let report = doc.update(&new_text, edit).unwrap();
    assert!(report.relexed() <= doc.line_count());
    assert_eq!(report.propagated, 50);
    assert!(!report.converged);
}

#[test]
fn test_edit_on_later_line_leaves_earlier_records() {
    let mut doc = parsed(PlainText, "one\ntwo\nthree");
    let first = doc.first_line().unwrap();
    let (text, edit) = apply("one\ntwo\nthree", 9, 0, "X");
    doc.update(&text, edit).unwrap();
    assert_eq!(doc.first_line(), Some(first));
    assert!(doc.line(first).is_some());
}
