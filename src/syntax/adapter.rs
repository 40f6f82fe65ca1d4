//! Text buffer adapter
//!
//! The capability set the style engine needs from the hosting editor.
//! All positions are character offsets. Styling is append-only: after
//! `begin_styling(pos)` each `append_style` covers the next `length`
//! characters and advances the host's cursor.

use super::tokens::StyleCode;

/// A word found around a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// First character of the word
    pub start: usize,
    /// Position just past the word
    pub end: usize,
}

/// Host text buffer, read and styled by the engine
pub trait TextBuffer {
    /// Number of characters in the buffer
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `pos`, `None` past the end
    fn char_at(&self, pos: usize) -> Option<char>;

    /// Up to `len` characters starting at `start`
    fn text_range(&self, start: usize, len: usize) -> String;

    /// Line index containing `pos` (the last line for `pos == len()`)
    fn line_of_position(&self, pos: usize) -> usize;

    /// Position of the first character of `line`
    fn line_start(&self, line: usize) -> usize;

    /// Position of the line terminator of `line` (or `len()` for the last line)
    fn line_end(&self, line: usize) -> usize;

    fn line_count(&self) -> usize;

    /// The word touching `pos`, if `pos` is on a word character
    fn word_at(&self, pos: usize) -> Option<Word>;

    /// Position of the brace matching the one at `pos`
    fn brace_match(&self, pos: usize) -> Option<usize>;

    /// Style currently applied at `pos`
    fn style_at(&self, pos: usize) -> Option<StyleCode>;

    /// Position up to which the current styling is valid
    fn end_styled(&self) -> usize;

    /// Move the styling cursor to `pos`
    fn begin_styling(&mut self, pos: usize);

    /// Style the next `length` characters and advance the cursor
    fn append_style(&mut self, length: usize, code: StyleCode);
}
