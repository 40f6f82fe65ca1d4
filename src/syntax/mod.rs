//! Syntax and styling module
//!
//! This module provides the lexical classifier:
//! - Style codes and display styles
//! - Keyword registry and phrase matching
//! - The style engine and restyle-scope policy
//! - The text buffer adapter the host implements

pub mod adapter;
pub mod builtin;
pub mod engine;
pub mod keywords;
mod manager;
pub mod phrases;
pub mod rules;
pub mod scope;
pub mod style;
pub mod tokens;

pub use adapter::{TextBuffer, Word};
pub use builtin::Profile;
pub use engine::{ScanOutcome, StyleEngine};
pub use keywords::KeywordRegistry;
pub use manager::Restyler;
pub use phrases::PhraseIndex;
pub use rules::{LexState, LineState, OperatorTable};
pub use scope::{EditKind, EditNotification, Scope};
pub use style::{coalesce, Color, Style, StyleSpan};
pub use tokens::StyleCode;
