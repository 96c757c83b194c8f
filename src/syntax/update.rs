//! Incremental update
//!
//! An edit is absorbed in four phases:
//!
//! 1. **Locate** the old lines whose spans intersect the replaced text.
//! 2. **Reparse** from the first of them, in its stored entry state, up to
//!    the post-edit end of the last one. Old lines the new lines run over
//!    (a joined line, a deleted newline) are swallowed.
//! 3. **Splice** the new records in place of the old ones and shift the
//!    markers of every following line.
//! 4. **Converge-check**: while the state leaving the new lines is not
//!    equivalent to the next line's stored entry state, that line is stale;
//!    re-lex it and move on. Stops at the first equivalent line or at the
//!    end of the buffer.

use tracing::{debug, trace};

use super::document::{Document, LineObserver, NoopObserver, buffer_len};
use super::line::LineRecord;
use crate::base::{LineId, TextEdit};
use crate::parser::{Error, Grammar, Result};

/// What an update touched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateReport {
    /// Lines lexed while re-parsing the edited range
    pub reparsed: usize,
    /// Following lines re-lexed because their entry state went stale
    pub propagated: usize,
    /// Old records spliced out
    pub removed: usize,
    /// Propagation stopped at a line whose entry state still matched,
    /// rather than at the end of the buffer
    pub converged: bool,
    /// First record lexed by this update
    pub first: Option<LineId>,
    /// Last record lexed by this update
    pub last: Option<LineId>,
}

impl UpdateReport {
    /// Total number of lines lexed.
    pub fn relexed(&self) -> usize {
        self.reparsed + self.propagated
    }
}

impl<G: Grammar> Document<G> {
    /// Bring the structure up to date with `text` after `edit`.
    pub fn update(&mut self, text: &str, edit: TextEdit) -> Result<UpdateReport> {
        self.update_with(text, edit, &mut NoopObserver)
    }

    /// [`update`](Self::update), reporting every lexed and removed line to
    /// `observer`.
    ///
    /// On error the document is reset to the unparsed state and every record
    /// it held is reported removed; a half-applied update is never left
    /// behind.
    pub fn update_with(
        &mut self,
        text: &str,
        edit: TextEdit,
        observer: &mut impl LineObserver,
    ) -> Result<UpdateReport> {
        let result = self.apply_edit(text, edit, observer);
        if let Err(err) = &result {
            debug!(error = %err, "incremental update failed, document reset");
            self.reset_with(observer);
        }
        result
    }

    fn apply_edit(
        &mut self,
        text: &str,
        edit: TextEdit,
        observer: &mut impl LineObserver,
    ) -> Result<UpdateReport> {
        if !self.is_parsed() {
            return Err(Error::NotParsed);
        }
        self.check_edit(text, &edit)?;

        // Locate
        let (first, last) = self.find_lines(edit.start, edit.old_len)?;
        let first_record = self.record(first)?;
        let before = first_record.prev;
        let start = first_record.start();
        let mut state = first_record.entry_state().clone();
        let last_record = self.record(last)?;
        let bound = edit.shift(last_record.end());
        let mut follower = last_record.next;

        let mut removed = vec![first];
        let mut id = first;
        while id != last {
            id = self.record(id)?.next.ok_or(Error::StaleLine(id))?;
            removed.push(id);
        }

        // Reparse
        let mut new_lines: Vec<LineId> = Vec::new();
        let mut cursor = start;
        let mut at_eof = false;
        loop {
            while let Some(old) = follower {
                let record = self.record(old)?;
                if !at_eof && edit.shift(record.start()) >= cursor {
                    break;
                }
                removed.push(old);
                follower = record.next;
            }
            if at_eof || (follower.is_some() && cursor >= bound) {
                break;
            }
            let end = follower.map(|_| bound);
            let run = self.parse_range(text, cursor, state, end, observer)?;
            let mut id = run.first;
            while let Some(line) = id {
                new_lines.push(line);
                id = if Some(line) == run.last {
                    None
                } else {
                    self.next(line)
                };
            }
            cursor = run.end;
            state = run.exit_state;
            at_eof = run.at_eof;
        }

        // Splice
        let removed_count = removed.len();
        for old in removed {
            self.lines.remove(old);
            observer.line_removed(old);
        }
        self.link_run(before, &new_lines, follower);

        let mut shifted = follower;
        while let Some(id) = shifted {
            let record = self.lines.get_mut(id).ok_or(Error::StaleLine(id))?;
            record.adjust(&edit);
            shifted = record.next;
        }

        let mut report = UpdateReport {
            reparsed: new_lines.len(),
            removed: removed_count,
            first: new_lines.first().copied(),
            last: new_lines.last().copied(),
            ..UpdateReport::default()
        };

        // Converge-check
        let mut next = follower;
        while let Some(id) = next {
            let record = self.record(id)?;
            if record.entry_state().is_equivalent(&state) {
                trace!(state = %state.signature(), "entry state converged");
                report.converged = true;
                break;
            }
            trace!(
                was = %record.entry_state().signature(),
                now = %state.signature(),
                "entry state stale, re-lexing"
            );
            let (fresh, exit_state, _) = self.lex_record(text, record.start(), state)?;
            state = exit_state;
            let fresh_id = self.replace_line(id, fresh)?;
            observer.line_removed(id);
            if let Some(line) = self.lines.get(fresh_id) {
                observer.line_lexed(fresh_id, line);
            }
            report.propagated += 1;
            report.first.get_or_insert(fresh_id);
            report.last = Some(fresh_id);
            next = self.next(fresh_id);
        }

        if self.options.track_current_line {
            self.current_line = report.last.or(follower).or(before);
        }

        debug!(
            grammar = self.grammar.name(),
            edit = ?edit.old_range(),
            reparsed = report.reparsed,
            propagated = report.propagated,
            removed = report.removed,
            converged = report.converged,
            "incremental update"
        );
        Ok(report)
    }

    fn check_edit(&self, text: &str, edit: &TextEdit) -> Result<()> {
        let len = buffer_len(text)?;
        let fits = edit.start <= edit.end
            && edit.end <= len
            && edit.old_range().end() <= self.text_len()
            && edit.old_text_len(len) == Some(self.text_len());
        if fits {
            Ok(())
        } else {
            Err(Error::EditOutOfBounds {
                start: edit.start,
                end: edit.end,
                len,
            })
        }
    }

    /// Link `run` between `before` and `after`, updating the sequence bounds.
    fn link_run(&mut self, before: Option<LineId>, run: &[LineId], after: Option<LineId>) {
        let mut prev = before;
        for &id in run {
            if let Some(record) = self.lines.get_mut(id) {
                record.prev = prev;
            }
            self.set_next(prev, Some(id));
            prev = Some(id);
        }
        self.set_next(prev, after);
        if let Some(record) = after.and_then(|id| self.lines.get_mut(id)) {
            record.prev = prev;
        }
        if before.is_none() {
            self.first_line = run.first().copied().or(after);
        }
        if after.is_none() {
            self.last_line = prev;
        }
    }

    fn set_next(&mut self, id: Option<LineId>, next: Option<LineId>) {
        if let Some(record) = id.and_then(|id| self.lines.get_mut(id)) {
            record.next = next;
        }
    }

    /// Swap a freshly lexed record in for `old`, keeping its neighbors.
    fn replace_line(&mut self, old: LineId, mut fresh: LineRecord) -> Result<LineId> {
        let record = self.lines.remove(old).ok_or(Error::StaleLine(old))?;
        debug_assert_eq!(record.range(), fresh.range());
        fresh.prev = record.prev;
        fresh.next = record.next;
        let id = self.lines.alloc(fresh);
        self.set_next(record.prev, Some(id));
        if let Some(next) = record.next.and_then(|next| self.lines.get_mut(next)) {
            next.prev = Some(id);
        }
        if self.first_line == Some(old) {
            self.first_line = Some(id);
        }
        if self.last_line == Some(old) {
            self.last_line = Some(id);
        }
        if self.current_line == Some(old) {
            self.current_line = Some(id);
        }
        Ok(id)
    }
}
