//! DocumentHost: owns a buffer and keeps its parse and highlighting current.
//!
//! ```ignore
//! let mut host = DocumentHost::new(CLike, "a = 1; /* open\nb = 2;")?;
//! host.insert(TextSize::new(14), " */")?;
//! for id in host.highlighter_mut().drain_dirty() {
//!     // repaint line `id`
//! }
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use text_size::{TextRange, TextSize};
use tracing::debug;

use super::highlight::Highlighter;
use crate::base::{TextEdit, checked_len, size_of_len};
use crate::parser::{Error, Grammar, PlainText, Result};
use crate::syntax::{Document, DocumentOptions, ParsedRun, UpdateReport};

/// A host shared between threads; the mutex serializes edits.
pub type SharedDocumentHost<G = PlainText> = Arc<Mutex<DocumentHost<G>>>;

/// Owns the text of one buffer together with its [`Document`] and
/// [`Highlighter`].
///
/// Every edit goes through [`replace`](Self::replace), which applies it to the
/// text, builds the matching [`TextEdit`], and runs the incremental update
/// with the highlighter observing.
#[derive(Debug)]
pub struct DocumentHost<G = PlainText> {
    text: String,
    document: Document<G>,
    highlighter: Highlighter,
}

impl<G: Grammar> DocumentHost<G> {
    pub fn new(grammar: G, text: impl Into<String>) -> Result<Self> {
        Self::with_options(grammar, DocumentOptions::default(), text)
    }

    pub fn with_options(
        grammar: G,
        options: DocumentOptions,
        text: impl Into<String>,
    ) -> Result<Self> {
        let highlighter = Highlighter::for_grammar(&grammar);
        let mut host = Self {
            text: text.into(),
            document: Document::with_options(grammar, options),
            highlighter,
        };
        host.reparse()?;
        Ok(host)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn document(&self) -> &Document<G> {
        &self.document
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn highlighter_mut(&mut self) -> &mut Highlighter {
        &mut self.highlighter
    }

    /// Replace the pre-edit `range` with `insert`.
    ///
    /// If the update fails the document is left unparsed and the highlighter
    /// empty; call [`reparse`](Self::reparse) once the grammar is fixed.
    pub fn replace(&mut self, range: TextRange, insert: &str) -> Result<UpdateReport> {
        let (start, end) = (usize::from(range.start()), usize::from(range.end()));
        if end > self.text.len()
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(end)
        {
            return Err(Error::EditOutOfBounds {
                start: range.start(),
                end: range.end(),
                len: size_of_len(self.text.len()),
            });
        }

        let kept = self.text.len() - (end - start);
        let new_len = kept.saturating_add(insert.len());
        if checked_len(new_len).is_none() {
            return Err(Error::TextTooLarge { len: new_len });
        }

        self.text.replace_range(start..end, insert);
        let edit = TextEdit::replace(range, size_of_len(insert.len()));
        self.document
            .update_with(&self.text, edit, &mut self.highlighter)
    }

    pub fn insert(&mut self, offset: TextSize, text: &str) -> Result<UpdateReport> {
        self.replace(TextRange::empty(offset), text)
    }

    pub fn delete(&mut self, range: TextRange) -> Result<UpdateReport> {
        self.replace(range, "")
    }

    /// Parse the whole buffer again, refreshing every line's highlighting.
    pub fn reparse(&mut self) -> Result<ParsedRun> {
        let run = self.document.parse_with(&self.text, &mut self.highlighter)?;
        debug!(lines = run.lines, "host reparsed buffer");
        Ok(run)
    }

    pub fn into_shared(self) -> SharedDocumentHost<G> {
        Arc::new(Mutex::new(self))
    }
}
