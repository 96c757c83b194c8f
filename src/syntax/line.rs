//! Per-line parse records

use text_size::{TextRange, TextSize};

use crate::base::{LineId, Position, TextEdit};
use crate::parser::{Form, LexerState};

/// The parse of one line of the buffer
///
/// Records are never edited in place once lexed: when a line's content or
/// entry state changes, the document swaps in a freshly lexed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    position: Position,
    len: TextSize,
    forms: Vec<Form>,
    entry_state: LexerState,
    pub(crate) prev: Option<LineId>,
    pub(crate) next: Option<LineId>,
}

impl LineRecord {
    pub(crate) fn new(
        start: TextSize,
        len: TextSize,
        forms: Vec<Form>,
        entry_state: LexerState,
    ) -> Self {
        Self {
            position: Position::new(start),
            len,
            forms,
            entry_state,
            prev: None,
            next: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn start(&self) -> TextSize {
        self.position.offset()
    }

    /// Length including the `\n` terminator, if any.
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::new(0)
    }

    pub fn end(&self) -> TextSize {
        self.start() + self.len
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(self.start(), self.len)
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// The state that was active before this line was lexed.
    pub fn entry_state(&self) -> &LexerState {
        &self.entry_state
    }

    pub fn prev(&self) -> Option<LineId> {
        self.prev
    }

    pub fn next(&self) -> Option<LineId> {
        self.next
    }

    /// The form whose absolute range contains `offset`.
    pub fn form_at(&self, offset: TextSize) -> Option<&Form> {
        let relative = offset.checked_sub(self.start())?;
        self.forms
            .iter()
            .find(|form| form.range.contains_inclusive(relative))
    }

    /// The forms with their buffer-absolute ranges.
    pub fn absolute_forms(&self) -> impl Iterator<Item = (TextRange, &Form)> {
        let start = self.start();
        self.forms.iter().map(move |form| (form.range + start, form))
    }

    pub(crate) fn adjust(&mut self, edit: &TextEdit) {
        self.position.adjust(edit);
    }
}
