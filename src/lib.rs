//! # linelex
//!
//! Incremental, line-oriented lexing for editor buffers.
//!
//! A [`Document`] keeps one parse record per line. After an edit only the
//! touched lines are re-lexed, and re-lexing continues into following lines
//! only while the lexer state leaving the edited region differs from the
//! state those lines were lexed in.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Fontification, DocumentHost
//!   ↓
//! syntax    → Line records, Document, incremental update
//!   ↓
//! parser    → Grammar trait, line lexer, lexer states, symbols
//!   ↓
//! base      → Positions and edit notifications
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → ide)
// ============================================================================

/// Foundation types: Position markers, TextEdit, TextRange
pub mod base;

/// Lexing: grammars, the line lexer, lexer states and symbols
pub mod parser;

/// Document parse tree and incremental update
pub mod syntax;

/// Highlighting and buffer hosting
pub mod ide;

// Re-export foundation types
pub use base::{Position, TextEdit, TextRange, TextSize};

pub use ide::{DocumentHost, Highlighter, SharedDocumentHost};
pub use parser::{CLike, Error, Grammar, LexerState, PlainText, Result};
pub use syntax::{Document, DocumentOptions, LineId, LineRecord, UpdateReport};
