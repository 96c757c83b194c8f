//! Editor-facing layer: highlighting and buffer hosting.
//!
//! Everything here consumes the line structure built by [`crate::syntax`];
//! nothing feeds back into lexing.
//!
//! ## Usage
//!
//! ```ignore
//! use linelex::ide::DocumentHost;
//! use linelex::parser::CLike;
//!
//! let mut host = DocumentHost::new(CLike, "x = 1;")?;
//! host.insert(TextSize::new(6), "\ny = 2;")?;
//!
//! for id in host.highlighter_mut().drain_dirty() {
//!     let spans = host.highlighter().spans(id);
//! }
//! ```

mod highlight;
mod host;

pub use crate::parser::{Face, FaceTable};
pub use highlight::{HighlightSpan, Highlighter, fontify, fontify_form, fontify_line};
pub use host::{DocumentHost, SharedDocumentHost};
