//! The document parse tree
//!
//! A [`Document`] owns one [`LineRecord`] per line of the host buffer, kept
//! in a doubly linked sequence inside an arena. It supports full-buffer
//! parses, lookup of the lines an edit touches, and read access for editing
//! commands. Incremental updates are implemented in `update.rs`.

use text_size::TextSize;
use tracing::debug;

use super::arena::LineArena;
use super::line::LineRecord;
use super::options::{DocumentOptions, SearchStrategy};
use crate::base::{LineId, checked_len, size_of_len};
use crate::parser::{Error, Form, Grammar, LexerState, PlainText, Result, lex_line};

/// Receives every line record the document lexes, so the host can repaint
pub trait LineObserver {
    fn line_lexed(&mut self, id: LineId, line: &LineRecord);

    /// A record left the document (replaced or deleted).
    fn line_removed(&mut self, _id: LineId) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LineObserver for NoopObserver {
    fn line_lexed(&mut self, _id: LineId, _line: &LineRecord) {}
}

impl<F: FnMut(LineId, &LineRecord)> LineObserver for F {
    fn line_lexed(&mut self, id: LineId, line: &LineRecord) {
        self(id, line)
    }
}

/// The length of `text` as a buffer offset.
pub(crate) fn buffer_len(text: &str) -> Result<TextSize> {
    checked_len(text.len()).ok_or(Error::TextTooLarge { len: text.len() })
}

/// A run of freshly lexed, linked lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRun {
    pub first: Option<LineId>,
    pub last: Option<LineId>,
    /// The state that would begin the following line
    pub exit_state: LexerState,
    /// Offset just past the last lexed line
    pub end: TextSize,
    /// The last lexed line ran to the end of the buffer
    pub at_eof: bool,
    pub lines: usize,
}

/// Where a line search starts
#[derive(Debug, Clone, Copy)]
enum Scan {
    Forward(LineId),
    Backward(LineId),
}

/// Line-oriented parse state for one buffer
#[derive(Debug)]
pub struct Document<G = PlainText> {
    pub(crate) grammar: G,
    pub(crate) options: DocumentOptions,
    pub(crate) lines: LineArena,
    pub(crate) first_line: Option<LineId>,
    pub(crate) last_line: Option<LineId>,
    pub(crate) current_line: Option<LineId>,
    default_entry_state: LexerState,
}

impl<G: Grammar> Document<G> {
    pub fn new(grammar: G) -> Self {
        Self::with_options(grammar, DocumentOptions::default())
    }

    pub fn with_options(grammar: G, options: DocumentOptions) -> Self {
        let default_entry_state = grammar.initial_state();
        Self {
            grammar,
            options,
            lines: LineArena::default(),
            first_line: None,
            last_line: None,
            current_line: None,
            default_entry_state,
        }
    }

    // =========================================================================
    // Full parse
    // =========================================================================

    /// Parse the whole buffer, replacing any previous structure.
    pub fn parse(&mut self, text: &str) -> Result<ParsedRun> {
        self.parse_with(text, &mut NoopObserver)
    }

    /// [`parse`](Self::parse), reporting every lexed line to `observer`.
    ///
    /// The records of any previous parse are reported removed first.
    pub fn parse_with(
        &mut self,
        text: &str,
        observer: &mut impl LineObserver,
    ) -> Result<ParsedRun> {
        self.reset_with(observer);
        match self.parse_buffer(text, observer) {
            Ok(run) => {
                self.first_line = run.first;
                self.last_line = run.last;
                debug!(
                    grammar = self.grammar.name(),
                    lines = run.lines,
                    len = ?run.end,
                    "full parse"
                );
                Ok(run)
            }
            Err(err) => {
                self.reset_with(observer);
                Err(err)
            }
        }
    }

    fn parse_buffer(&mut self, text: &str, observer: &mut impl LineObserver) -> Result<ParsedRun> {
        buffer_len(text)?;
        let state = self.default_entry_state.clone();
        self.parse_range(text, TextSize::new(0), state, None, observer)
    }

    /// Lex lines from `start` in `state` until the cursor reaches or passes
    /// `end` (or the buffer ends, when `end` is `None`).
    ///
    /// At least one line is always lexed. The new records are linked to each
    /// other but not to the document; the caller splices them in.
    pub(crate) fn parse_range(
        &mut self,
        text: &str,
        start: TextSize,
        mut state: LexerState,
        end: Option<TextSize>,
        observer: &mut impl LineObserver,
    ) -> Result<ParsedRun> {
        let mut cursor = start;
        let mut first = None;
        let mut last: Option<LineId> = None;
        let mut lines = 0;

        loop {
            let (mut record, exit_state, at_eof) = self.lex_record(text, cursor, state)?;
            cursor = record.end();
            state = exit_state;
            record.prev = last;

            let id = self.lines.alloc(record);
            if let Some(prev) = last.and_then(|prev| self.lines.get_mut(prev)) {
                prev.next = Some(id);
            }
            if let Some(record) = self.lines.get(id) {
                observer.line_lexed(id, record);
            }
            first.get_or_insert(id);
            last = Some(id);
            lines += 1;

            let reached_end = end.is_some_and(|end| cursor >= end);
            if at_eof || reached_end {
                return Ok(ParsedRun {
                    first,
                    last,
                    exit_state: state,
                    end: cursor,
                    at_eof,
                    lines,
                });
            }
        }
    }

    /// Lex the single line starting at `start`.
    ///
    /// Returns the unlinked record, the state to carry forward, and whether
    /// the line ran to the end of the buffer.
    pub(crate) fn lex_record(
        &self,
        text: &str,
        start: TextSize,
        state: LexerState,
    ) -> Result<(LineRecord, LexerState, bool)> {
        let rest = text
            .get(usize::from(start)..)
            .ok_or_else(|| Error::EditOutOfBounds {
                start,
                end: start,
                len: size_of_len(text.len()),
            })?;
        let (content, len, at_eof) = match rest.find('\n') {
            Some(newline) => (&rest[..newline], newline + 1, false),
            None => (rest, rest.len(), true),
        };

        let lexed = lex_line(&self.grammar, state.clone(), content)?;
        tracing::trace!(
            start = ?start,
            forms = lexed.forms.len(),
            steps = lexed.steps,
            "lexed line"
        );

        let record = LineRecord::new(start, size_of_len(len), lexed.forms, state);
        Ok((record, lexed.state, at_eof))
    }

    /// Forget every record; the document is unparsed afterwards.
    pub fn reset(&mut self) {
        self.reset_with(&mut NoopObserver);
    }

    /// [`reset`](Self::reset), reporting every dropped record to `observer`.
    pub fn reset_with(&mut self, observer: &mut impl LineObserver) {
        let dropped: Vec<LineId> = self.lines.ids().collect();
        self.lines.clear();
        self.first_line = None;
        self.last_line = None;
        self.current_line = None;
        for id in dropped {
            observer.line_removed(id);
        }
    }

    // =========================================================================
    // Affected-range search
    // =========================================================================

    /// The contiguous run of lines whose spans intersect the pre-edit range
    /// `[edit_start, edit_start + edit_len)`.
    ///
    /// An empty range selects the line containing `edit_start`; the buffer
    /// end belongs to the last line. A range running past the offset space
    /// extends to the last line.
    pub fn find_lines(&self, edit_start: TextSize, edit_len: TextSize) -> Result<(LineId, LineId)> {
        let first = self.locate(edit_start)?;
        let edit_end = edit_start
            .checked_add(edit_len)
            .unwrap_or(TextSize::new(u32::MAX));

        let mut last = first;
        while let Some(next) = self.record(last)?.next {
            if self.record(next)?.start() >= edit_end {
                break;
            }
            last = next;
        }
        Ok((first, last))
    }

    /// The line containing `offset` (clamped to the buffer).
    pub fn line_at(&self, offset: TextSize) -> Result<LineId> {
        self.locate(offset)
    }

    fn locate(&self, offset: TextSize) -> Result<LineId> {
        let (Some(first), Some(last)) = (self.first_line, self.last_line) else {
            return Err(Error::NotParsed);
        };
        let offset = offset.min(self.text_len());

        let scan = match self.options.search {
            SearchStrategy::Linear => Scan::Forward(first),
            SearchStrategy::Hinted => self.scan_start(offset, first, last),
        };

        match scan {
            Scan::Forward(mut id) => loop {
                let record = self.record(id)?;
                match record.next {
                    Some(next) if offset >= record.end() => id = next,
                    _ => return Ok(id),
                }
            },
            Scan::Backward(mut id) => loop {
                let record = self.record(id)?;
                match record.prev {
                    Some(prev) if offset < record.start() => id = prev,
                    _ => return Ok(id),
                }
            },
        }
    }

    /// Pick the scan origin from the quarter of the buffer the offset falls
    /// in relative to the current-line hint. Every origin returned is on the
    /// correct side of `offset`, so the scan is always exact.
    fn scan_start(&self, offset: TextSize, first: LineId, last: LineId) -> Scan {
        let len = u32::from(self.text_len());
        let quarter = len / 4;
        let offset_raw = u32::from(offset);
        let near_start = offset_raw < quarter;
        let near_end = offset_raw >= len - quarter;

        let hint = self
            .current_line
            .and_then(|id| self.lines.get(id).map(|record| (id, record)));

        match hint {
            None if near_end => Scan::Backward(last),
            None => Scan::Forward(first),
            Some((_, record)) if near_start && offset < record.start() => Scan::Forward(first),
            Some((_, record)) if near_end && offset >= record.end() => Scan::Backward(last),
            Some((id, record)) if offset >= record.start() => Scan::Forward(id),
            Some((id, _)) => Scan::Backward(id),
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// The state a fresh parse begins with.
    pub fn default_entry_state(&self) -> &LexerState {
        &self.default_entry_state
    }

    pub fn is_parsed(&self) -> bool {
        self.first_line.is_some()
    }

    pub fn first_line(&self) -> Option<LineId> {
        self.first_line
    }

    pub fn last_line(&self) -> Option<LineId> {
        self.last_line
    }

    /// The most recently touched line, used as a search hint.
    pub fn current_line(&self) -> Option<LineId> {
        self.current_line
    }

    pub fn line(&self, id: LineId) -> Option<&LineRecord> {
        self.lines.get(id)
    }

    pub(crate) fn record(&self, id: LineId) -> Result<&LineRecord> {
        self.lines.get(id).ok_or(Error::StaleLine(id))
    }

    pub fn next(&self, id: LineId) -> Option<LineId> {
        self.lines.get(id)?.next
    }

    pub fn prev(&self, id: LineId) -> Option<LineId> {
        self.lines.get(id)?.prev
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Buffer length as of the last parse or update.
    pub fn text_len(&self) -> TextSize {
        self.last_line
            .and_then(|id| self.lines.get(id))
            .map_or(TextSize::new(0), LineRecord::end)
    }

    /// Zero-based line number of `id`; walks from the first line.
    pub fn line_number(&self, id: LineId) -> Option<usize> {
        self.lines().position(|(candidate, _)| candidate == id)
    }

    /// The form under `offset`, if any.
    pub fn form_at(&self, offset: TextSize) -> Option<&Form> {
        let id = self.locate(offset).ok()?;
        self.lines.get(id)?.form_at(offset)
    }

    /// Lines in buffer order.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            arena: &self.lines,
            next: self.first_line,
        }
    }
}

/// Iterator over a document's lines in buffer order
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    arena: &'a LineArena,
    next: Option<LineId>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (LineId, &'a LineRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let record = self.arena.get(id)?;
        self.next = record.next;
        Some((id, record))
    }
}
