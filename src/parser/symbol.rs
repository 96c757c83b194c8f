//! Symbol model: lexemes and forms
//!
//! Symbol ranges are relative to the start of the line they were lexed on,
//! so edits on earlier lines never touch them; only the owning line's
//! start [`Position`](crate::base::Position) moves.

use text_size::{TextRange, TextSize};

use super::syntax_kind::{FormKind, LexemeKind};

/// A classified leaf token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub range: TextRange,
}

impl Lexeme {
    pub fn new(kind: LexemeKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

/// A reduction of one or more symbols, or a run of raw text
///
/// A form with children covers exactly the span from its first child's
/// start to its last child's end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Form {
    pub kind: FormKind,
    pub range: TextRange,
    pub children: Vec<Symbol>,
}

impl Form {
    /// A childless form over unclassified text.
    pub fn raw(kind: FormKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            children: Vec::new(),
        }
    }

    /// Reduce `children` into a form covering them. `None` if there are none.
    pub fn reduce(kind: FormKind, children: Vec<Symbol>) -> Option<Self> {
        let range = children.iter().map(Symbol::range).reduce(TextRange::cover)?;
        Some(Self {
            kind,
            range,
            children,
        })
    }

    /// Reduce a run of lexemes.
    pub fn from_lexemes(kind: FormKind, lexemes: Vec<Lexeme>) -> Option<Self> {
        Self::reduce(kind, lexemes.into_iter().map(Symbol::Lexeme).collect())
    }

    pub fn is_raw(&self) -> bool {
        self.children.is_empty()
    }

    /// Check that children are ordered, non-overlapping, and exactly spanned.
    pub fn covers_children(&self) -> bool {
        let (Some(first), Some(last)) = (self.children.first(), self.children.last()) else {
            return true;
        };
        if first.range().start() != self.range.start() || last.range().end() != self.range.end() {
            return false;
        }
        self.children
            .windows(2)
            .all(|pair| pair[0].range().end() <= pair[1].range().start())
            && self
                .children
                .iter()
                .all(|child| child.as_form().is_none_or(Form::covers_children))
    }
}

/// Either kind of node in a line's parse
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Lexeme(Lexeme),
    Form(Form),
}

impl Symbol {
    /// Line-relative range.
    pub fn range(&self) -> TextRange {
        match self {
            Symbol::Lexeme(lexeme) => lexeme.range,
            Symbol::Form(form) => form.range,
        }
    }

    /// Buffer-absolute range given the owning line's start.
    pub fn absolute_range(&self, line_start: TextSize) -> TextRange {
        self.range() + line_start
    }

    pub fn children(&self) -> &[Symbol] {
        match self {
            Symbol::Lexeme(_) => &[],
            Symbol::Form(form) => &form.children,
        }
    }

    /// Category name of either kind.
    pub fn kind_name(&self) -> &str {
        match self {
            Symbol::Lexeme(lexeme) => lexeme.kind.as_str(),
            Symbol::Form(form) => form.kind.as_str(),
        }
    }

    pub fn as_lexeme(&self) -> Option<&Lexeme> {
        match self {
            Symbol::Lexeme(lexeme) => Some(lexeme),
            Symbol::Form(_) => None,
        }
    }

    pub fn as_form(&self) -> Option<&Form> {
        match self {
            Symbol::Lexeme(_) => None,
            Symbol::Form(form) => Some(form),
        }
    }

    /// All leaf lexemes under this symbol, in order.
    pub fn lexemes(&self) -> Vec<&Lexeme> {
        let mut out = Vec::new();
        collect_lexemes(self, &mut out);
        out
    }
}

fn collect_lexemes<'a>(symbol: &'a Symbol, out: &mut Vec<&'a Lexeme>) {
    match symbol {
        Symbol::Lexeme(lexeme) => out.push(lexeme),
        Symbol::Form(form) => {
            for child in &form.children {
                collect_lexemes(child, out);
            }
        }
    }
}

impl From<Lexeme> for Symbol {
    fn from(lexeme: Lexeme) -> Self {
        Symbol::Lexeme(lexeme)
    }
}

impl From<Form> for Symbol {
    fn from(form: Form) -> Self {
        Symbol::Form(form)
    }
}
