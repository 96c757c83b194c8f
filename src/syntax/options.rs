//! Document options

/// How [`Document::find_lines`](super::Document::find_lines) walks the line
/// sequence to find an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Start from whichever of the first line, the last line, or the
    /// current-line hint is closest to the edit
    #[default]
    Hinted,
    /// Always scan forward from the first line
    Linear,
}

/// Options for a [`Document`](super::Document)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentOptions {
    /// Line search strategy for edits and offset lookups
    pub search: SearchStrategy,
    /// Remember the most recently touched line as a search hint
    pub track_current_line: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            search: SearchStrategy::Hinted,
            track_current_line: true,
        }
    }
}

impl DocumentOptions {
    /// Options that never use a search hint.
    pub fn linear() -> Self {
        Self {
            search: SearchStrategy::Linear,
            track_current_line: false,
        }
    }
}
