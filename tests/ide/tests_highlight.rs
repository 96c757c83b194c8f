//! Fontification tests.

use linelex::ide::{Face, FaceTable, Highlighter, fontify_line};
use linelex::parser::LexemeKind;
use linelex::{CLike, Document, TextEdit, TextRange, TextSize};

use crate::helpers::fixtures::{COMMENT_BLOCK, OPEN_COMMENT};
use crate::helpers::outline::parsed;

fn span(start: u32, end: u32, face: &str) -> (TextRange, String) {
    let range = TextRange::new(TextSize::new(start), TextSize::new(end));
    (range, face.to_string())
}

fn faces(doc: &Document<CLike>, table: &FaceTable, line: usize) -> Vec<String> {
    let (_, record) = doc.lines().nth(line).unwrap();
    fontify_line(record, table)
        .into_iter()
        .map(|span| span.face.to_string())
        .collect()
}

#[test]
fn test_spans_stay_inside_their_line() {
    let doc = parsed(CLike, COMMENT_BLOCK);
    let table = FaceTable::default();
    for (_, line) in doc.lines() {
        for span in fontify_line(line, &table) {
            assert!(line.range().contains_range(span.range), "{span:?}");
        }
    }
}

#[test]
fn test_comment_lines_render_as_comment() {
    let doc = parsed(CLike, COMMENT_BLOCK);
    let table = FaceTable::default();
    assert_eq!(faces(&doc, &table, 2), vec!["comment"]);
    assert_eq!(faces(&doc, &table, 3), vec!["comment"]);
    assert_eq!(faces(&doc, &table, 4)[0], "keyword");
}

#[test]
fn test_custom_faces_override_defaults() {
    let doc = parsed(CLike, "return x;");
    let mut table = FaceTable::default();
    table.register(LexemeKind::Keyword, Face::new("bold"));
    assert_eq!(
        faces(&doc, &table, 0),
        vec!["bold", "identifier", "delimiter"]
    );
}

#[test]
fn test_closing_comment_retags_next_line() {
    let mut doc = Document::new(CLike);
    let mut highlighter = Highlighter::for_grammar(&CLike);
    doc.parse_with(OPEN_COMMENT, &mut highlighter).unwrap();
    let second = doc.lines().nth(1).unwrap().0;
    let comment: Vec<_> = highlighter
        .spans(second)
        .iter()
        .map(|s| s.face.to_string())
        .collect();
    assert_eq!(comment, vec!["comment"]);
    highlighter.drain_dirty();

    let text = "x = 1; /* open */\ny = 2;";
    let edit = TextEdit::insert(TextSize::new(14), TextSize::new(3));
    doc.update_with(text, edit, &mut highlighter).unwrap();

    let dirty = highlighter.drain_dirty();
    let (second, record) = doc.lines().nth(1).unwrap();
    assert!(dirty.contains(&second));
    let faces: Vec<_> = highlighter
        .absolute_spans(second, record.start())
        .map(|span| (span.range, span.face.to_string()))
        .collect();
    assert_eq!(
        faces,
        vec![
            span(18, 19, "identifier"),
            span(20, 21, "operator"),
            span(22, 23, "number"),
            span(23, 24, "delimiter"),
        ]
    );
}
