//! Lexer states and the continuation chain
//!
//! A [`LexerState`] says which lexical mode is active, which lexemes are
//! waiting to be reduced, what they reduce to, and which state takes over
//! once this one is popped. Equivalence for stopping an incremental update
//! only looks one level down the chain, see [`StateSignature`].

use std::fmt;

use smol_str::SmolStr;

use super::symbol::{Form, Lexeme};
use super::syntax_kind::FormKind;

/// Name of a lexical mode, supplied by the grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKind(SmolStr);

impl StateKind {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The part of a state compared when deciding whether re-lexing can stop:
/// its own kind and the kind of its continuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateSignature {
    pub current: StateKind,
    pub next: Option<StateKind>,
}

impl fmt::Display for StateSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.next {
            Some(next) => write!(f, "{} > {}", self.current, next),
            None => write!(f, "{}", self.current),
        }
    }
}

/// Where lexing is between two lexemes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerState {
    kind: StateKind,
    pending: Vec<Lexeme>,
    reduce_to: FormKind,
    next: Option<Box<LexerState>>,
}

impl LexerState {
    pub fn new(kind: StateKind, reduce_to: FormKind) -> Self {
        Self {
            kind,
            pending: Vec::new(),
            reduce_to,
            next: None,
        }
    }

    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    pub fn reduce_to(&self) -> &FormKind {
        &self.reduce_to
    }

    pub fn next(&self) -> Option<&LexerState> {
        self.next.as_deref()
    }

    pub fn pending(&self) -> &[Lexeme] {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of states in the chain, this one included.
    pub fn depth(&self) -> usize {
        1 + self.next.as_ref().map_or(0, |next| next.depth())
    }

    /// Append a lexeme awaiting reduction.
    pub fn push(&mut self, lexeme: Lexeme) {
        debug_assert!(
            self.pending
                .last()
                .is_none_or(|last| last.range.end() <= lexeme.range.start()),
            "pending lexemes must stay in source order"
        );
        self.pending.push(lexeme);
    }

    /// Reduce the pending lexemes into a form and stay in this state.
    pub fn reduce(&mut self) -> Option<Form> {
        let pending = std::mem::take(&mut self.pending);
        Form::from_lexemes(self.reduce_to.clone(), pending)
    }

    /// Reduce the pending lexemes of every state in the chain, outermost
    /// continuation first.
    pub fn reduce_chain(&mut self) -> Vec<Form> {
        let mut forms = match self.next.as_deref_mut() {
            Some(next) => next.reduce_chain(),
            None => Vec::new(),
        };
        forms.extend(self.reduce());
        forms
    }

    /// Enter `kind`, continuing with `self` once the new state is popped.
    pub fn enter(self, kind: StateKind, reduce_to: FormKind) -> LexerState {
        LexerState {
            kind,
            pending: Vec::new(),
            reduce_to,
            next: Some(Box::new(self)),
        }
    }

    /// Reduce the pending lexemes and yield to the continuation.
    ///
    /// A state without a continuation stays in control, emptied.
    pub fn pop(mut self) -> (Option<Form>, LexerState) {
        let form = self.reduce();
        match self.next.take() {
            Some(next) => (form, *next),
            None => (form, self),
        }
    }

    pub fn signature(&self) -> StateSignature {
        StateSignature {
            current: self.kind.clone(),
            next: self.next.as_ref().map(|next| next.kind.clone()),
        }
    }

    /// Same kind, and same continuation kind one level down.
    pub fn is_equivalent(&self, other: &LexerState) -> bool {
        self.kind == other.kind
            && self.next.as_ref().map(|next| &next.kind)
                == other.next.as_ref().map(|next| &next.kind)
    }
}
