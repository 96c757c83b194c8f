//! Foundation types for the linelex engine.
//!
//! This module provides the primitives every other layer builds on:
//! - [`TextRange`], [`TextSize`] - byte offsets into the host buffer
//! - [`Position`] - a buffer offset with marker semantics
//! - [`TextEdit`] - an after-change notification from the host
//! - [`LineId`] - a generation-checked handle to a line record
//!
//! This module has NO dependencies on other linelex modules.

mod edit;
mod line_id;
mod position;

pub use edit::TextEdit;
pub use line_id::LineId;
pub use position::Position;
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

/// Convert a `usize` byte length into a [`TextSize`].
///
/// Buffers are addressed with 32-bit offsets, like every `text-size` consumer.
/// Only lengths bounded by a buffer that passed [`checked_len`] may come here.
#[inline]
pub(crate) fn size_of_len(len: usize) -> TextSize {
    debug_assert!(checked_len(len).is_some(), "length {len} exceeds u32");
    TextSize::new(len as u32)
}

/// `len` as a [`TextSize`], or `None` past the 32-bit offset space.
#[inline]
pub(crate) fn checked_len(len: usize) -> Option<TextSize> {
    TextSize::try_from(len).ok()
}
