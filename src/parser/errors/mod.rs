//! Error handling for the lexing engine
//!
//! The engine has no recoverable runtime errors in normal operation; every
//! variant here is a broken contract between the host, the grammar, and the
//! document:
//! - a grammar step that claims more work without consuming input
//! - a query or update on a document that was never parsed
//! - an edit notification that does not match the supplied text
//! - a buffer too large for 32-bit offsets
//! - a stale line handle

mod error;

pub use error::{Error, Result};
