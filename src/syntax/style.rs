//! Style types for rendering and style spans
//!
//! `Color` and `Style` describe how a host may render a style code;
//! `StyleSpan` is the unit the style engine emits.

use super::tokens::StyleCode;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of characters sharing one style code
///
/// Positions are character offsets into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// First character covered
    pub start: usize,
    /// Number of characters covered
    pub length: usize,
    /// Style code applied
    pub code: StyleCode,
}

impl StyleSpan {
    /// Create a new span
    pub fn new(start: usize, length: usize, code: StyleCode) -> Self {
        Self { start, length, code }
    }

    /// Position just past the last covered character
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Check if this span contains a position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }
}

/// Merge adjacent spans that carry the same code.
///
/// Rendering is unchanged; useful when comparing span sequences.
pub fn coalesce(spans: &[StyleSpan]) -> Vec<StyleSpan> {
    let mut merged: Vec<StyleSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.code == span.code && last.end() == span.start => {
                last.length += span.length;
            }
            _ => merged.push(*span),
        }
    }
    merged
}
