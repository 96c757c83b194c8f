//! Full parse and lookup tests.

use linelex::syntax::SearchStrategy;
use linelex::{CLike, Document, DocumentOptions, Error, PlainText, TextSize};
use rstest::rstest;

use crate::helpers::fixtures::{COMMENT_BLOCK, PLAIN_PARAGRAPH, SIMPLE_STATEMENTS};
use crate::helpers::outline::{outline, parsed};

#[rstest]
#[case("", 1)]
#[case("x", 1)]
#[case("x\n", 2)]
#[case("\n\n\n", 4)]
#[case(SIMPLE_STATEMENTS, 3)]
#[case(COMMENT_BLOCK, 9)]
fn test_line_count_follows_newlines(#[case] text: &str, #[case] lines: usize) {
    let doc = parsed(CLike, text);
    assert_eq!(doc.line_count(), lines);
    assert_eq!(doc.text_len(), TextSize::new(text.len() as u32));
}

#[test]
fn test_lines_tile_the_buffer() {
    let doc = parsed(CLike, COMMENT_BLOCK);
    let mut expected_start = TextSize::new(0);
    for (_, line) in doc.lines() {
        assert_eq!(line.start(), expected_start);
        expected_start = line.end();
    }
    assert_eq!(expected_start, doc.text_len());
}

#[test]
fn test_entry_states_inside_block_comment() {
    let doc = parsed(CLike, COMMENT_BLOCK);
    let kinds: Vec<_> = doc
        .lines()
        .map(|(_, line)| line.entry_state().kind().to_string())
        .collect();
    assert_eq!(
        &kinds[..5],
        ["code", "code", "block-comment", "block-comment", "code"]
    );
}

#[test]
fn test_full_parse_is_idempotent() {
    let mut doc = parsed(CLike, COMMENT_BLOCK);
    let first = outline(&doc);
    doc.parse(COMMENT_BLOCK).unwrap();
    assert_eq!(outline(&doc), first);
    assert_eq!(doc.line_count(), 9);
}

#[test]
fn test_queries_before_parse() {
    let doc = Document::new(PlainText);
    assert!(!doc.is_parsed());
    assert_eq!(doc.line_at(TextSize::new(0)), Err(Error::NotParsed));
    assert_eq!(doc.form_at(TextSize::new(0)), None);
    assert_eq!(doc.lines().count(), 0);
    assert_eq!(doc.text_len(), TextSize::new(0));
}

#[rstest]
#[case(SearchStrategy::Hinted)]
#[case(SearchStrategy::Linear)]
fn test_line_at_every_offset(#[case] search: SearchStrategy) {
    let options = DocumentOptions {
        search,
        ..DocumentOptions::default()
    };
    let mut doc = Document::with_options(PlainText, options);
    doc.parse(PLAIN_PARAGRAPH).unwrap();
    let lines: Vec<_> = doc.lines().map(|(id, line)| (id, line.range())).collect();

    for offset in 0..=PLAIN_PARAGRAPH.len() as u32 {
        let offset = TextSize::new(offset);
        let id = doc.line_at(offset).unwrap();
        let (_, range) = lines
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .unwrap();
        let last = Some(id) == doc.last_line();
        assert!(
            range.contains(offset) || (last && offset == range.end()),
            "offset {offset:?} mapped to {range:?}"
        );
    }
}

#[test]
fn test_find_lines_spanning_several() {
    let doc = parsed(PlainText, PLAIN_PARAGRAPH);
    let ids: Vec<_> = doc.lines().map(|(id, _)| id).collect();
    // "fox\njumps" crosses from the first line into the second
    let (first, last) = doc
        .find_lines(TextSize::new(16), TextSize::new(9))
        .unwrap();
    assert_eq!((first, last), (ids[0], ids[1]));
    // a range ending exactly at a line start stays on the earlier line
    let (first, last) = doc
        .find_lines(TextSize::new(20), TextSize::new(11))
        .unwrap();
    assert_eq!((first, last), (ids[1], ids[1]));
}

#[test]
fn test_form_at_maps_into_lines() {
    let doc = parsed(PlainText, PLAIN_PARAGRAPH);
    let form = doc.form_at(TextSize::new(22)).unwrap();
    assert_eq!(
        form.range,
        linelex::TextRange::new(TextSize::new(0), TextSize::new(5))
    );
    assert!(doc.form_at(TextSize::new(31)).is_none());
}
