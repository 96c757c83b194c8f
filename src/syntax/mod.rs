//! Document parse tree and incremental update
//!
//! ```text
//! Document ─ first_line ─▶ LineRecord ⇄ … ⇄ LineRecord ◀─ last_line
//!                           │ entry_state, forms, position
//!                           ▼
//!                        LineArena (generation-checked LineId slots)
//! ```

mod arena;
mod document;
mod line;
mod options;
mod update;

pub use crate::base::LineId;
pub use document::{Document, LineObserver, Lines, NoopObserver, ParsedRun};
pub use line::LineRecord;
pub use options::{DocumentOptions, SearchStrategy};
pub use update::UpdateReport;
