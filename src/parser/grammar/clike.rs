//! A C-like sample grammar
//!
//! Covers what an editor needs from a brace language: `//` line comments,
//! `/* */` block comments spanning any number of lines, `#` directives,
//! string and number literals, keywords, identifiers, delimiters, and
//! operators. Tokens are recognized with logos; comments are handled before
//! logos sees the input because they decide the lexer state.
//!
//! States:
//! - `code` reduces lexemes into `statement` forms at `;`, `{`, `}` and at
//!   the end of every line
//! - `block-comment` (continuing with `code`) reduces comment text into
//!   `comment` forms at `*/` and at the end of every line

use logos::Logos;

use super::{Grammar, Step};
use crate::parser::cursor::Cursor;
use crate::parser::faces::{Face, FaceTable};
use crate::parser::state::{LexerState, StateKind};
use crate::parser::symbol::{Form, Lexeme};
use crate::parser::syntax_kind::{FormKind, LexemeKind};

const CODE: &str = "code";
const BLOCK_COMMENT: &str = "block-comment";
const DIRECTIVE: &str = "directive";

const KEYWORDS: &[&str] = &[
    "break", "case", "const", "continue", "default", "do", "else", "enum", "for", "fn", "if",
    "let", "return", "static", "struct", "switch", "while",
];

/// Logos token enum - maps to LexemeKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum LogosToken {
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token(";")]
    Semicolon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[regex(r"[()\[\],.]")]
    Delimiter,

    // Single characters so that `/` never swallows a following `*` or `/`
    #[regex(r"[-+*/%=<>!&|^~?:#@]")]
    Operator,
}

impl LogosToken {
    fn ends_statement(self) -> bool {
        matches!(self, Self::Semicolon | Self::LBrace | Self::RBrace)
    }
}

/// Sample grammar for brace-and-semicolon languages
#[derive(Debug, Clone, Copy, Default)]
pub struct CLike;

impl CLike {
    pub fn code_state() -> LexerState {
        LexerState::new(StateKind::new(CODE), FormKind::named("statement"))
    }

    /// The state active inside an unterminated `/*`.
    pub fn block_comment_state() -> LexerState {
        Self::code_state().enter(StateKind::new(BLOCK_COMMENT), FormKind::named("comment"))
    }

    pub fn is_keyword(word: &str) -> bool {
        KEYWORDS.contains(&word)
    }

    fn step_code(&self, mut state: LexerState, cursor: &mut Cursor<'_>) -> Step {
        cursor.skip_whitespace();
        if cursor.is_eol() {
            return Step::done(state);
        }

        let mut forms = Vec::new();

        if cursor.starts_with("//") {
            forms.extend(state.reduce());
            let range = cursor.eat_to_end();
            forms.extend(Form::from_lexemes(
                FormKind::named("comment"),
                vec![Lexeme::new(LexemeKind::Comment, range)],
            ));
            return Step::new(state, forms, false);
        }

        if cursor.starts_with("#") && !state.has_pending() {
            let range = cursor.eat_to_end();
            forms.extend(Form::from_lexemes(
                FormKind::named(DIRECTIVE),
                vec![Lexeme::new(LexemeKind::custom(DIRECTIVE), range)],
            ));
            return Step::new(state, forms, false);
        }

        if cursor.starts_with("/*") {
            forms.extend(state.reduce());
            let range = cursor.advance(2);
            let mut state =
                state.enter(StateKind::new(BLOCK_COMMENT), FormKind::named("comment"));
            state.push(Lexeme::new(LexemeKind::Comment, range));
            let more = !cursor.is_eol();
            return Step::new(state, forms, more);
        }

        let rest = cursor.rest();
        let mut lexer = LogosToken::lexer(rest);
        let token = lexer.next();
        // logos always consumes at least one byte on a non-empty input
        let len = lexer.span().end.max(1);
        let range = cursor.advance(len);
        let word = &cursor.text()[range];

        let kind = match token {
            Some(Ok(LogosToken::Ident)) if Self::is_keyword(word) => LexemeKind::Keyword,
            Some(Ok(LogosToken::Ident)) => LexemeKind::Identifier,
            Some(Ok(LogosToken::String)) => LexemeKind::String,
            Some(Ok(LogosToken::Number)) => LexemeKind::Number,
            Some(Ok(
                LogosToken::Semicolon
                | LogosToken::LBrace
                | LogosToken::RBrace
                | LogosToken::Delimiter,
            )) => LexemeKind::Delimiter,
            Some(Ok(LogosToken::Operator)) => LexemeKind::Operator,
            Some(Err(())) | None => LexemeKind::Unknown,
        };
        state.push(Lexeme::new(kind, range));

        if let Some(Ok(token)) = token {
            if token.ends_statement() {
                forms.extend(state.reduce());
            }
        }

        let more = !cursor.rest_is_blank();
        Step::new(state, forms, more)
    }

    fn step_block_comment(&self, mut state: LexerState, cursor: &mut Cursor<'_>) -> Step {
        if cursor.is_eol() {
            return Step::done(state);
        }
        match cursor.rest().find("*/") {
            Some(idx) => {
                let range = cursor.advance(idx + 2);
                state.push(Lexeme::new(LexemeKind::Comment, range));
                let (form, state) = state.pop();
                let more = !cursor.is_eol();
                Step::new(state, form.into_iter().collect(), more)
            }
            None => {
                let range = cursor.eat_to_end();
                state.push(Lexeme::new(LexemeKind::Comment, range));
                Step::new(state, Vec::new(), false)
            }
        }
    }
}

impl Grammar for CLike {
    fn name(&self) -> &str {
        "c-like"
    }

    fn initial_state(&self) -> LexerState {
        Self::code_state()
    }

    fn step(&self, state: LexerState, cursor: &mut Cursor<'_>) -> Step {
        if state.kind().as_str() == BLOCK_COMMENT {
            self.step_block_comment(state, cursor)
        } else {
            self.step_code(state, cursor)
        }
    }

    fn register_faces(&self, faces: &mut FaceTable) {
        faces.register(LexemeKind::custom(DIRECTIVE), Face::new("preprocessor"));
    }
}
