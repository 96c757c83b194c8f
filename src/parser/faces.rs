//! Presentation tags and the category → tag table.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::syntax_kind::LexemeKind;

/// A presentation tag the host maps to colors/fonts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face(SmolStr);

impl Face {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup table from lexeme category to presentation tag.
///
/// `FaceTable::default()` carries a tag for every built-in category;
/// grammars add tags for their [`LexemeKind::Custom`] categories with
/// [`register`](Self::register). Iteration follows registration order.
#[derive(Debug, Clone)]
pub struct FaceTable {
    faces: IndexMap<LexemeKind, Face, FxBuildHasher>,
}

impl Default for FaceTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for kind in LexemeKind::BUILTIN {
            let face = Face::new(kind.as_str());
            table.register(kind, face);
        }
        table
    }
}

impl FaceTable {
    /// A table with no tags at all; every lexeme renders plain.
    pub fn empty() -> Self {
        Self {
            faces: IndexMap::with_hasher(FxBuildHasher),
        }
    }

    /// Map `kind` to `face`, returning the tag it replaced.
    pub fn register(&mut self, kind: LexemeKind, face: Face) -> Option<Face> {
        self.faces.insert(kind, face)
    }

    /// Drop the tag for `kind` so it renders plain.
    pub fn unregister(&mut self, kind: &LexemeKind) -> Option<Face> {
        self.faces.shift_remove(kind)
    }

    pub fn get(&self, kind: &LexemeKind) -> Option<&Face> {
        self.faces.get(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LexemeKind, &Face)> {
        self.faces.iter()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
