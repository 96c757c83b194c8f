//! Edit notifications.

use text_size::{TextRange, TextSize};

/// A single change to the host buffer, as reported after it happened.
///
/// `[start, end)` is the replacement text in post-edit coordinates and
/// `old_len` is the length of the text it replaced. A pure insertion has
/// `old_len == 0`; a pure deletion has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextEdit {
    pub start: TextSize,
    pub end: TextSize,
    pub old_len: TextSize,
}

impl TextEdit {
    pub fn new(start: TextSize, end: TextSize, old_len: TextSize) -> Self {
        Self {
            start,
            end,
            old_len,
        }
    }

    /// Insertion of `len` bytes at `at`.
    pub fn insert(at: TextSize, len: TextSize) -> Self {
        Self::new(at, at + len, TextSize::new(0))
    }

    /// Deletion of the pre-edit `range`.
    pub fn delete(range: TextRange) -> Self {
        Self::new(range.start(), range.start(), range.len())
    }

    /// Replacement of the pre-edit `range` by `new_len` bytes.
    pub fn replace(range: TextRange, new_len: TextSize) -> Self {
        Self::new(range.start(), range.start() + new_len, range.len())
    }

    /// Length of the inserted text. Zero for a malformed edit with `end < start`.
    pub fn new_len(&self) -> TextSize {
        self.end.checked_sub(self.start).unwrap_or_default()
    }

    /// The replaced region, in pre-edit coordinates.
    pub fn old_range(&self) -> TextRange {
        TextRange::at(self.start, self.old_len)
    }

    /// The inserted region, in post-edit coordinates.
    pub fn new_range(&self) -> TextRange {
        TextRange::at(self.start, self.new_len())
    }

    /// Signed change in buffer length.
    pub fn delta(&self) -> i64 {
        i64::from(u32::from(self.new_len())) - i64::from(u32::from(self.old_len))
    }

    /// Buffer length before the edit, given the length after it.
    pub fn old_text_len(&self, new_text_len: TextSize) -> Option<TextSize> {
        new_text_len
            .checked_sub(self.new_len())
            .map(|len| len + self.old_len)
    }

    /// Translate a pre-edit offset at or after the end of the replaced region.
    pub fn shift(&self, offset: TextSize) -> TextSize {
        debug_assert!(offset >= self.old_range().end());
        offset - self.old_len + self.new_len()
    }
}
