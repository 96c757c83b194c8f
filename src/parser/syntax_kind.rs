//! Lexeme and form categories
//!
//! Built-in lexical categories form a closed enum; grammars extend it with
//! [`LexemeKind::Custom`] tags and register presentation for them in a
//! [`FaceTable`](super::FaceTable).

use smol_str::SmolStr;

/// Lexical category of a leaf lexeme
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeKind {
    Comment,
    String,
    Keyword,
    Identifier,
    Number,
    Delimiter,
    Operator,
    /// Fallback for text a grammar could not classify
    Unknown,
    /// Grammar-defined category
    Custom(SmolStr),
}

impl LexemeKind {
    /// Every built-in category, in declaration order.
    pub const BUILTIN: [LexemeKind; 8] = [
        LexemeKind::Comment,
        LexemeKind::String,
        LexemeKind::Keyword,
        LexemeKind::Identifier,
        LexemeKind::Number,
        LexemeKind::Delimiter,
        LexemeKind::Operator,
        LexemeKind::Unknown,
    ];

    pub fn custom(name: impl Into<SmolStr>) -> Self {
        Self::Custom(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Delimiter => "delimiter",
            Self::Operator => "operator",
            Self::Unknown => "unknown",
            Self::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Semantic category of a form (a reduction of lexemes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormKind {
    /// Raw text no grammar rule claimed
    #[default]
    Untyped,
    Named(SmolStr),
}

impl FormKind {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self::Named(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Untyped => "untyped",
            Self::Named(name) => name,
        }
    }

    pub fn is_untyped(&self) -> bool {
        matches!(self, Self::Untyped)
    }
}
