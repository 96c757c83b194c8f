//! Line lexer tests over the built-in grammars.

use linelex::parser::{
    CLike, FormKind, Grammar, LexemeKind, PlainText, Symbol, lex_line,
};
use linelex::{TextRange, TextSize};
use rstest::rstest;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::new(start), TextSize::new(end))
}

// =============================================================================
// DEFAULT LEXING FUNCTION
// =============================================================================

#[rstest]
#[case("", vec![])]
#[case("   ", vec![])]
#[case("word", vec![range(0, 4)])]
#[case("  two words  ", vec![range(2, 5), range(6, 11)])]
#[case("tab\tseparated", vec![range(0, 3), range(4, 13)])]
fn test_plain_text_words(#[case] line: &str, #[case] expected: Vec<TextRange>) {
    let state = PlainText.initial_state();
    let lexed = lex_line(&PlainText, state, line).unwrap();
    let ranges: Vec<_> = lexed.forms.iter().map(|form| form.range).collect();
    assert_eq!(ranges, expected);
    assert!(lexed.forms.iter().all(|form| form.is_raw()));
    assert!(
        lexed
            .forms
            .iter()
            .all(|form| form.kind == FormKind::Untyped)
    );
}

#[test]
fn test_plain_text_state_never_changes() {
    let initial = PlainText.initial_state();
    let lexed = lex_line(&PlainText, initial.clone(), "a b c").unwrap();
    assert_eq!(lexed.state, initial);
}

// =============================================================================
// C-LIKE GRAMMAR
// =============================================================================

#[rstest]
#[case("x;", "statement")]
#[case("// note", "comment")]
#[case("/* one-liner */", "comment")]
#[case("#pragma once", "directive")]
#[case("if (a) {", "statement")]
fn test_clike_first_form(#[case] line: &str, #[case] kind: &str) {
    let lexed = lex_line(&CLike, CLike::code_state(), line).unwrap();
    assert_eq!(lexed.forms[0].kind.as_str(), kind);
}

#[rstest]
#[case("return", LexemeKind::Keyword)]
#[case("value", LexemeKind::Identifier)]
#[case("42", LexemeKind::Number)]
#[case("3.5", LexemeKind::Number)]
#[case(r#""text""#, LexemeKind::String)]
#[case("+", LexemeKind::Operator)]
#[case(",", LexemeKind::Delimiter)]
#[case("$", LexemeKind::Unknown)]
fn test_clike_lexeme_kinds(#[case] word: &str, #[case] kind: LexemeKind) {
    let lexed = lex_line(&CLike, CLike::code_state(), word).unwrap();
    let form = &lexed.forms[0];
    assert_eq!(form.children.len(), 1);
    let lexeme = form.children[0].as_lexeme().unwrap();
    assert_eq!(lexeme.kind, kind);
    assert_eq!(lexeme.range, range(0, word.len() as u32));
}

#[test]
fn test_forms_cover_children_and_stay_in_line() {
    let line = r#"  let s = "a;b"; /* c */ f(x, 2) // end"#;
    let lexed = lex_line(&CLike, CLike::code_state(), line).unwrap();
    let line_range = range(0, line.len() as u32);
    for form in &lexed.forms {
        assert!(form.covers_children(), "{form:?}");
        assert!(line_range.contains_range(form.range));
    }
    let kinds: Vec<_> = lexed.forms.iter().map(|form| form.kind.as_str()).collect();
    assert_eq!(kinds, vec!["statement", "comment", "statement", "comment"]);
}

#[test]
fn test_forms_are_in_source_order() {
    let lexed = lex_line(&CLike, CLike::code_state(), "a; b; c;").unwrap();
    let starts: Vec<_> = lexed.forms.iter().map(|form| form.range.start()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(lexed.forms.len(), 3);
}

#[test]
fn test_block_comment_state_carries_across_lines() {
    let first = lex_line(&CLike, CLike::code_state(), "a; /* open").unwrap();
    assert!(first.state.is_equivalent(&CLike::block_comment_state()));
    assert_eq!(first.state.depth(), 2);

    let second = lex_line(&CLike, first.state, "inside */ b;").unwrap();
    assert!(second.state.is_equivalent(&CLike::code_state()));
    let comment = Symbol::Form(second.forms[0].clone());
    assert_eq!(comment.kind_name(), "comment");
    assert_eq!(comment.range(), range(0, 9));
}
