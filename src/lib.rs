//! restyle - an incremental lexical classifier for editor syntax styling
//!
//! The host editor implements [`TextBuffer`]; a [`Restyler`] then styles
//! requested ranges through it, choosing between a local and a full
//! rescan from the edits made since the previous call.
//!
//! ```
//! use restyle::{Restyler, SourceBuffer, StyleCode, TextBuffer};
//!
//! let mut restyler = Restyler::default();
//! restyler.configure("if return", "", "", "", false);
//!
//! let mut buf = SourceBuffer::from_text("if (x) { return; }");
//! let end = buf.len();
//! restyler.restyle(&mut buf, end, &[]);
//! assert_eq!(buf.style_at(0), Some(StyleCode::Keyword));
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod syntax;
pub mod terminal;

pub use buffer::SourceBuffer;
pub use config::Config;
pub use error::{RestyleError, Result};
pub use syntax::{
    EditKind, EditNotification, KeywordRegistry, Restyler, Scope, StyleCode, StyleSpan,
    TextBuffer,
};
