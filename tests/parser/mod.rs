//! Lexing tests
//!
//! Tests for:
//! - The line lexer over the built-in grammars
//! - Grammars written against the public `Grammar` trait

pub mod tests_line_lexer;
