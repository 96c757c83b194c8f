//! Pluggable grammars
//!
//! A [`Grammar`] supplies the lexing function the line lexer drives: given a
//! [`LexerState`] and a [`Cursor`] on the current line, consume some input
//! and report the resulting state, any completed forms, and whether more
//! work remains on the line.
//!
//! Grammars must always classify something and never fail: text they cannot
//! make sense of becomes an [`Unknown`](super::LexemeKind::Unknown) lexeme or
//! an untyped form. A step that consumes nothing while asking to continue is
//! a grammar defect and is reported as [`Error::NoProgress`](crate::Error).

pub mod clike;

use super::cursor::Cursor;
use super::faces::FaceTable;
use super::state::{LexerState, StateKind};
use super::symbol::Form;
use super::syntax_kind::FormKind;

pub use clike::CLike;

/// Result of one lexing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: LexerState,
    pub forms: Vec<Form>,
    /// More input remains to be lexed on this line
    pub more: bool,
}

impl Step {
    pub fn new(state: LexerState, forms: Vec<Form>, more: bool) -> Self {
        Self { state, forms, more }
    }

    /// Nothing consumed, nothing produced, line finished.
    pub fn done(state: LexerState) -> Self {
        Self::new(state, Vec::new(), false)
    }
}

/// A grammar definition: lexer states, categories, and the lexing function
pub trait Grammar {
    /// Short name for logging.
    fn name(&self) -> &str {
        "plain"
    }

    /// The state a fresh parse begins in.
    fn initial_state(&self) -> LexerState;

    /// One invocation of the lexing function.
    ///
    /// The default skips whitespace and emits the next run of non-whitespace
    /// as a single untyped form.
    fn step(&self, state: LexerState, cursor: &mut Cursor<'_>) -> Step {
        default_step(state, cursor)
    }

    /// Called once at the end of every line, after the last step.
    ///
    /// Lexeme ranges are line-relative, so nothing may stay pending across a
    /// line break. The default reduces every pending lexeme in the chain.
    fn finish_line(&self, mut state: LexerState) -> (LexerState, Vec<Form>) {
        let forms = state.reduce_chain();
        (state, forms)
    }

    /// Register presentation tags for grammar-specific categories.
    fn register_faces(&self, _faces: &mut FaceTable) {}
}

/// The whitespace-separated-words lexing function.
pub fn default_step(state: LexerState, cursor: &mut Cursor<'_>) -> Step {
    cursor.skip_whitespace();
    if cursor.is_eol() {
        return Step::done(state);
    }
    let word = cursor.eat_while(|c| !c.is_whitespace());
    let more = !cursor.rest_is_blank();
    Step::new(state, vec![Form::raw(FormKind::Untyped, word)], more)
}

/// Grammar that only splits lines into untyped words
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl PlainText {
    pub const STATE: &'static str = "text";
}

impl Grammar for PlainText {
    fn initial_state(&self) -> LexerState {
        LexerState::new(StateKind::new(Self::STATE), FormKind::Untyped)
    }
}

impl<G: Grammar + ?Sized> Grammar for &G {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initial_state(&self) -> LexerState {
        (**self).initial_state()
    }

    fn step(&self, state: LexerState, cursor: &mut Cursor<'_>) -> Step {
        (**self).step(state, cursor)
    }

    fn finish_line(&self, state: LexerState) -> (LexerState, Vec<Form>) {
        (**self).finish_line(state)
    }

    fn register_faces(&self, faces: &mut FaceTable) {
        (**self).register_faces(faces)
    }
}

impl<G: Grammar + ?Sized> Grammar for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initial_state(&self) -> LexerState {
        (**self).initial_state()
    }

    fn step(&self, state: LexerState, cursor: &mut Cursor<'_>) -> Step {
        (**self).step(state, cursor)
    }

    fn finish_line(&self, state: LexerState) -> (LexerState, Vec<Form>) {
        (**self).finish_line(state)
    }

    fn register_faces(&self, faces: &mut FaceTable) {
        (**self).register_faces(faces)
    }
}
