//! Engine error type

use text_size::TextSize;
use thiserror::Error;

use crate::base::LineId;
use crate::parser::StateKind;

/// Errors surfaced by parsing and incremental updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The document has no line records yet; run a full parse first.
    #[error("document has not been parsed")]
    NotParsed,

    /// A lexing step asked to continue without consuming any input.
    #[error("lexing step in state `{state}` made no progress at column {column:?}")]
    NoProgress { column: TextSize, state: StateKind },

    /// An edit notification inconsistent with the buffer it describes.
    #[error("edit {start:?}..{end:?} does not fit a buffer of length {len:?}")]
    EditOutOfBounds {
        start: TextSize,
        end: TextSize,
        len: TextSize,
    },

    /// The buffer does not fit the 32-bit offset space.
    #[error("buffer of {len} bytes exceeds the 4 GiB offset limit")]
    TextTooLarge { len: usize },

    /// A line handle whose record has been spliced out.
    #[error("line {0:?} is no longer part of the document")]
    StaleLine(LineId),
}

impl Error {
    /// True for errors caused by a grammar rather than by the caller.
    pub fn is_grammar_defect(&self) -> bool {
        matches!(self, Self::NoProgress { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
