//! Read cursor over the text of a single line.

use text_size::{TextRange, TextSize};

use crate::base::size_of_len;

/// A forward-only read position within one line (terminator excluded)
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The whole line.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Line-relative offset.
    pub fn offset(&self) -> TextSize {
        size_of_len(self.pos)
    }

    pub fn is_eol(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// True if only whitespace remains.
    pub fn rest_is_blank(&self) -> bool {
        self.rest().chars().all(char::is_whitespace)
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `len` bytes (clamped to the line, rounded up to a char
    /// boundary) and return the consumed range.
    pub fn advance(&mut self, len: usize) -> TextRange {
        let start = self.pos;
        let mut end = (start + len).min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end += 1;
        }
        self.pos = end;
        self.range_from(start)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> TextRange {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.range_from(start)
    }

    pub fn skip_whitespace(&mut self) -> TextRange {
        self.eat_while(char::is_whitespace)
    }

    /// Consume the remainder of the line.
    pub fn eat_to_end(&mut self) -> TextRange {
        let start = self.pos;
        self.pos = self.text.len();
        self.range_from(start)
    }

    fn range_from(&self, start: usize) -> TextRange {
        TextRange::new(size_of_len(start), size_of_len(self.pos))
    }
}
