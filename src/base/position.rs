//! Buffer positions with marker semantics.
//!
//! A [`Position`] tracks a byte offset across edits made elsewhere in the
//! buffer: an edit entirely before it shifts it, an edit starting at or
//! after it leaves it alone, and a deletion across it pulls it back to the
//! start of the deleted region.

use text_size::TextSize;

use super::TextEdit;

/// A byte offset that auto-adjusts across edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    offset: TextSize,
}

impl Position {
    pub fn new(offset: TextSize) -> Self {
        Self { offset }
    }

    pub fn offset(self) -> TextSize {
        self.offset
    }

    /// Move this marker to account for `edit`.
    pub fn adjust(&mut self, edit: &TextEdit) {
        if self.offset <= edit.start {
            return;
        }
        let old_end = edit.old_range().end();
        self.offset = if self.offset >= old_end {
            edit.shift(self.offset)
        } else {
            edit.start
        };
    }

    /// Copy of this marker after `edit`.
    pub fn adjusted(mut self, edit: &TextEdit) -> Self {
        self.adjust(edit);
        self
    }
}

impl From<TextSize> for Position {
    fn from(offset: TextSize) -> Self {
        Self::new(offset)
    }
}
