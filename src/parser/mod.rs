//! Incremental lexing engine
//!
//! The grammar-agnostic half of the engine: everything needed to lex a
//! single line, independent of how lines are stored.
//!
//! ## Architecture
//!
//! ```text
//! Grammar (lexing function, pluggable)
//!     ↓
//! Line lexer → drives the grammar across one line
//!     ↓
//! LexerState → carried from line to line, compared to stop re-lexing
//!     ↓
//! Symbols → Lexemes (leaves) reduced into Forms
//! ```
//!
//! The document layer in [`crate::syntax`] stores one line's worth of forms
//! per record and decides which lines need re-lexing after an edit.

pub mod cursor;
pub mod errors;
pub mod faces;
pub mod grammar;
pub mod line_lexer;
mod state;
mod symbol;
mod syntax_kind;

pub use cursor::Cursor;
pub use errors::{Error, Result};
pub use faces::{Face, FaceTable};
pub use grammar::{CLike, Grammar, PlainText, Step, default_step};
pub use line_lexer::{LineLex, lex_line};
pub use state::{LexerState, StateKind, StateSignature};
pub use symbol::{Form, Lexeme, Symbol};
pub use syntax_kind::{FormKind, LexemeKind};
