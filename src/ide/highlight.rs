//! Fontification: presentation tags for lexed lines.
//!
//! Tags live on leaves. A [`Lexeme`] gets the face its category maps to in
//! the [`FaceTable`]; a [`Form`] contributes only through its children, and a
//! childless form renders plain.

use rustc_hash::FxHashMap;
use text_size::{TextRange, TextSize};

use crate::parser::{Face, FaceTable, Form, Grammar, Symbol};
use crate::syntax::{LineId, LineObserver, LineRecord};

/// A tagged span of the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightSpan {
    pub range: TextRange,
    pub face: Face,
}

/// Walk `symbol`, handing every tagged leaf to `sink` with its range shifted
/// by `line_start`.
pub fn fontify<F>(symbol: &Symbol, line_start: TextSize, faces: &FaceTable, sink: &mut F)
where
    F: FnMut(TextRange, &Face),
{
    match symbol {
        Symbol::Lexeme(lexeme) => {
            if let Some(face) = faces.get(&lexeme.kind) {
                sink(lexeme.range + line_start, face);
            }
        }
        Symbol::Form(form) => fontify_form(form, line_start, faces, sink),
    }
}

/// [`fontify`] for a form without wrapping it in a [`Symbol`].
pub fn fontify_form<F>(form: &Form, line_start: TextSize, faces: &FaceTable, sink: &mut F)
where
    F: FnMut(TextRange, &Face),
{
    for child in &form.children {
        fontify(child, line_start, faces, sink);
    }
}

/// Tagged spans of one line, buffer-absolute and in source order.
pub fn fontify_line(line: &LineRecord, faces: &FaceTable) -> Vec<HighlightSpan> {
    collect_spans(line, line.start(), faces)
}

fn collect_spans(line: &LineRecord, start: TextSize, faces: &FaceTable) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    for form in line.forms() {
        fontify_form(form, start, faces, &mut |range, face: &Face| {
            spans.push(HighlightSpan {
                range,
                face: face.clone(),
            })
        });
    }
    spans
}

/// Collects highlight spans as lines are lexed
///
/// Pass it as the observer of [`Document::parse_with`] and
/// [`Document::update_with`]; afterwards [`drain_dirty`](Self::drain_dirty)
/// names the lines to repaint. Spans are stored relative to their line start
/// so lines shifted by an edit elsewhere stay valid without re-fontifying.
///
/// [`Document::parse_with`]: crate::syntax::Document::parse_with
/// [`Document::update_with`]: crate::syntax::Document::update_with
#[derive(Debug, Clone)]
pub struct Highlighter {
    faces: FaceTable,
    spans: FxHashMap<LineId, Vec<HighlightSpan>>,
    dirty: Vec<LineId>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(FaceTable::default())
    }
}

impl Highlighter {
    pub fn new(faces: FaceTable) -> Self {
        Self {
            faces,
            spans: FxHashMap::default(),
            dirty: Vec::new(),
        }
    }

    /// Built-in faces plus whatever `grammar` registers.
    pub fn for_grammar<G: Grammar + ?Sized>(grammar: &G) -> Self {
        let mut faces = FaceTable::default();
        grammar.register_faces(&mut faces);
        Self::new(faces)
    }

    pub fn faces(&self) -> &FaceTable {
        &self.faces
    }

    /// Spans of `id`, relative to its line start.
    pub fn spans(&self, id: LineId) -> &[HighlightSpan] {
        self.spans.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Spans of `id` shifted to buffer offsets.
    pub fn absolute_spans(
        &self,
        id: LineId,
        line_start: TextSize,
    ) -> impl Iterator<Item = HighlightSpan> + '_ {
        self.spans(id).iter().map(move |span| HighlightSpan {
            range: span.range + line_start,
            face: span.face.clone(),
        })
    }

    /// Lines fontified since the last call, in the order they were lexed.
    pub fn drain_dirty(&mut self) -> Vec<LineId> {
        std::mem::take(&mut self.dirty)
    }

    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    pub fn clear(&mut self) {
        self.spans.clear();
        self.dirty.clear();
    }
}

impl LineObserver for Highlighter {
    fn line_lexed(&mut self, id: LineId, line: &LineRecord) {
        let spans = collect_spans(line, TextSize::new(0), &self.faces);
        self.spans.insert(id, spans);
        self.dirty.push(id);
    }

    fn line_removed(&mut self, id: LineId) {
        self.spans.remove(&id);
        self.dirty.retain(|dirty| *dirty != id);
    }
}
