//! Source buffer - in-memory text with per-character styles
//!
//! A reference implementation of the text buffer adapter, used by the
//! command-line front end and by tests. Positions are character offsets.

use std::path::Path;

use crate::error::{RestyleError, Result};
use crate::syntax::{EditNotification, StyleCode, TextBuffer, Word};
use crate::syntax::rules::is_word_char;

/// A buffer containing text, styles and metadata
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    /// Text as characters
    chars: Vec<char>,
    /// Position of the first character of each line
    line_starts: Vec<usize>,
    /// One style per character
    styles: Vec<StyleCode>,
    /// Where the next `append_style` lands
    style_cursor: usize,
    /// Styling is valid before this position
    end_styled: usize,
}

impl SourceBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer holding `text`
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let styles = vec![StyleCode::Default; chars.len()];
        let mut buffer = Self {
            chars,
            line_starts: Vec::new(),
            styles,
            style_cursor: 0,
            end_styled: 0,
        };
        buffer.rebuild_lines();
        buffer
    }

    /// Create a buffer from file contents
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// The whole text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Styles of every character
    pub fn styles(&self) -> &[StyleCode] {
        &self.styles
    }

    /// Insert `text` at `pos`
    pub fn insert(&mut self, pos: usize, text: &str) -> Result<EditNotification> {
        self.check_position(pos)?;
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.chars.splice(pos..pos, inserted);
        self.styles
            .splice(pos..pos, std::iter::repeat(StyleCode::Default).take(count));
        self.after_edit(pos);
        Ok(EditNotification::insert(text))
    }

    /// Delete `len` characters starting at `pos`
    pub fn delete(&mut self, pos: usize, len: usize) -> Result<EditNotification> {
        self.check_position(pos)?;
        let end = pos.checked_add(len).filter(|&end| end <= self.chars.len()).ok_or(
            RestyleError::OutOfRange {
                pos: pos.saturating_add(len),
                len: self.chars.len(),
            },
        )?;
        let deleted: String = self.chars.drain(pos..end).collect();
        self.styles.drain(pos..end);
        self.after_edit(pos);
        Ok(EditNotification::delete(deleted))
    }

    fn check_position(&self, pos: usize) -> Result<()> {
        if pos > self.chars.len() {
            return Err(RestyleError::OutOfRange {
                pos,
                len: self.chars.len(),
            });
        }
        Ok(())
    }

    fn after_edit(&mut self, pos: usize) {
        self.rebuild_lines();
        self.end_styled = self.end_styled.min(pos);
        self.style_cursor = self.style_cursor.min(self.chars.len());
    }

    fn rebuild_lines(&mut self) {
        self.line_starts.clear();
        self.line_starts.push(0);
        for (i, &ch) in self.chars.iter().enumerate() {
            if ch == '\n' {
                self.line_starts.push(i + 1);
            }
        }
    }

    /// Search for the partner of the bracket at `pos`, counting nesting
    /// of the same bracket kind only. Styling is not consulted.
    fn find_partner(&self, pos: usize) -> Option<usize> {
        let ch = *self.chars.get(pos)?;
        let (partner, forward) = match ch {
            '(' => (')', true),
            '[' => (']', true),
            '{' => ('}', true),
            ')' => ('(', false),
            ']' => ('[', false),
            '}' => ('{', false),
            _ => return None,
        };

        let mut depth = 0usize;
        let mut at = pos;
        loop {
            if forward {
                at += 1;
                if at >= self.chars.len() {
                    return None;
                }
            } else {
                at = at.checked_sub(1)?;
            }
            let c = self.chars[at];
            if c == ch {
                depth += 1;
            } else if c == partner {
                if depth == 0 {
                    return Some(at);
                }
                depth -= 1;
            }
        }
    }
}

impl Default for SourceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for SourceBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    fn text_range(&self, start: usize, len: usize) -> String {
        let start = start.min(self.chars.len());
        let end = start.saturating_add(len).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }

    fn line_of_position(&self, pos: usize) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        }
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.chars.len())
    }

    fn line_end(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.chars.len(),
        }
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn word_at(&self, pos: usize) -> Option<Word> {
        if !is_word_char(*self.chars.get(pos)?) {
            return None;
        }
        let mut start = pos;
        while start > 0 && is_word_char(self.chars[start - 1]) {
            start -= 1;
        }
        let mut end = pos + 1;
        while end < self.chars.len() && is_word_char(self.chars[end]) {
            end += 1;
        }
        Some(Word {
            text: self.chars[start..end].iter().collect(),
            start,
            end,
        })
    }

    fn brace_match(&self, pos: usize) -> Option<usize> {
        self.find_partner(pos)
    }

    fn style_at(&self, pos: usize) -> Option<StyleCode> {
        self.styles.get(pos).copied()
    }

    fn end_styled(&self) -> usize {
        self.end_styled
    }

    fn begin_styling(&mut self, pos: usize) {
        self.style_cursor = pos.min(self.chars.len());
    }

    fn append_style(&mut self, length: usize, code: StyleCode) {
        let start = self.style_cursor.min(self.chars.len());
        let end = start.saturating_add(length).min(self.chars.len());
        for style in &mut self.styles[start..end] {
            *style = code;
        }
        self.style_cursor = end;
        // Only a run touching the valid prefix extends it
        if start <= self.end_styled && end > self.end_styled {
            self.end_styled = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::EditKind;

    #[test]
    fn test_lines() {
        let buf = SourceBuffer::from_text("ab\ncd\n\nef");
        assert_eq!(buf.line_count(), 4);
        assert_eq!(buf.line_start(1), 3);
        assert_eq!(buf.line_end(1), 5);
        assert_eq!(buf.line_start(2), 6);
        assert_eq!(buf.line_end(2), 6);
        assert_eq!(buf.line_end(3), 9);
        assert_eq!(buf.line_of_position(0), 0);
        assert_eq!(buf.line_of_position(2), 0);
        assert_eq!(buf.line_of_position(3), 1);
        assert_eq!(buf.line_of_position(7), 3);
        assert_eq!(buf.line_of_position(9), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = SourceBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_of_position(0), 0);
        assert_eq!(buf.line_end(0), 0);
        assert_eq!(buf.char_at(0), None);
    }

    #[test]
    fn test_text_range_is_clamped() {
        let buf = SourceBuffer::from_text("héllo");
        assert_eq!(buf.text_range(1, 3), "éll");
        assert_eq!(buf.text_range(3, 99), "lo");
        assert_eq!(buf.text_range(99, 1), "");
    }

    #[test]
    fn test_word_at() {
        let buf = SourceBuffer::from_text("foo.bar_baz(1)");
        let word = buf.word_at(5).unwrap();
        assert_eq!(word.text, "bar_baz");
        assert_eq!((word.start, word.end), (4, 11));
        assert_eq!(buf.word_at(3), None);
        assert_eq!(buf.word_at(0).map(|w| w.end), Some(3));
    }

    #[test]
    fn test_brace_match() {
        let buf = SourceBuffer::from_text("{ a(b[c]) { } }");
        assert_eq!(buf.brace_match(0), Some(14));
        assert_eq!(buf.brace_match(14), Some(0));
        assert_eq!(buf.brace_match(10), Some(12));
        assert_eq!(buf.brace_match(3), Some(8));
        assert_eq!(buf.brace_match(5), Some(7));
        assert_eq!(buf.brace_match(2), None);

        let buf = SourceBuffer::from_text("} {");
        assert_eq!(buf.brace_match(0), None);
        assert_eq!(buf.brace_match(2), None);
    }

    #[test]
    fn test_insert_and_delete_report_edits() {
        let mut buf = SourceBuffer::from_text("ab");
        let edit = buf.insert(1, "{x").unwrap();
        assert_eq!(edit.kind, EditKind::Insert);
        assert_eq!(edit.text, "{x");
        assert_eq!(buf.text(), "a{xb");

        let edit = buf.delete(1, 2).unwrap();
        assert_eq!(edit.kind, EditKind::Delete);
        assert_eq!(edit.text, "{x");
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Program.cs");
        std::fs::write(&path, "int a;\nint b;").unwrap();

        let buf = SourceBuffer::from_file(&path).unwrap();
        assert_eq!(buf.text(), "int a;\nint b;");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.end_styled(), 0);

        assert!(matches!(
            SourceBuffer::from_file(&dir.path().join("absent.cs")),
            Err(RestyleError::Io(_))
        ));
    }

    #[test]
    fn test_edits_out_of_range() {
        let mut buf = SourceBuffer::from_text("ab");
        assert!(matches!(
            buf.insert(3, "x"),
            Err(RestyleError::OutOfRange { pos: 3, len: 2 })
        ));
        assert!(buf.delete(1, 2).is_err());
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn test_styling_cursor_and_invalidation() {
        let mut buf = SourceBuffer::from_text("abc\ndef");
        buf.begin_styling(0);
        buf.append_style(3, StyleCode::Keyword);
        buf.append_style(4, StyleCode::Default);
        assert_eq!(buf.end_styled(), 7);
        assert_eq!(buf.style_at(1), Some(StyleCode::Keyword));

        buf.insert(5, "x").unwrap();
        assert_eq!(buf.end_styled(), 5);
        assert_eq!(buf.style_at(5), Some(StyleCode::Default));
        assert_eq!(buf.style_at(0), Some(StyleCode::Keyword));
    }

    #[test]
    fn test_styling_past_a_gap_does_not_extend_valid_prefix() {
        let mut buf = SourceBuffer::from_text("abcdef");
        buf.begin_styling(4);
        buf.append_style(2, StyleCode::Number);
        assert_eq!(buf.end_styled(), 0);
    }
}
