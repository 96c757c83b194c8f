//! Handles to line records

/// Stable handle to a line record
///
/// A handle carries the generation of the arena slot it was issued from, so
/// once its record is gone it stays stale even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId {
    index: u32,
    generation: u32,
}

impl LineId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> u32 {
        self.index
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}
