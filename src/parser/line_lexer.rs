//! Line lexer
//!
//! Drives a grammar's lexing function across one line of text.

use super::cursor::Cursor;
use crate::base::checked_len;
use super::errors::{Error, Result};
use super::grammar::Grammar;
use super::state::LexerState;
use super::symbol::Form;

/// Result of lexing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLex {
    /// Completed forms, in source order
    pub forms: Vec<Form>,
    /// The state to carry into the next line
    pub state: LexerState,
    /// Number of lexing-function invocations
    pub steps: usize,
}

/// Lex `text` (one line, terminator excluded) starting in `state`.
///
/// Steps until the grammar reports the line finished or the cursor reaches
/// the end of the line, then lets the grammar close the line. A step that
/// asks to continue without consuming anything is a grammar defect and
/// yields [`Error::NoProgress`] instead of looping.
pub fn lex_line<G: Grammar + ?Sized>(
    grammar: &G,
    state: LexerState,
    text: &str,
) -> Result<LineLex> {
    if checked_len(text.len()).is_none() {
        return Err(Error::TextTooLarge { len: text.len() });
    }
    let mut cursor = Cursor::new(text);
    let mut state = state;
    let mut forms = Vec::new();
    let mut steps = 0;

    while !cursor.is_eol() {
        let before = cursor.offset();
        let step = grammar.step(state, &mut cursor);
        steps += 1;
        state = step.state;
        forms.extend(step.forms);

        if !step.more {
            break;
        }
        if cursor.offset() == before {
            tracing::error!(
                grammar = grammar.name(),
                state = %state.kind(),
                column = ?before,
                "lexing step made no progress"
            );
            return Err(Error::NoProgress {
                column: before,
                state: state.kind().clone(),
            });
        }
    }

    let (state, tail) = grammar.finish_line(state);
    forms.extend(tail);

    Ok(LineLex {
        forms,
        state,
        steps,
    })
}
