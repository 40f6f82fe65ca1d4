//! Style codes for syntax styling
//!
//! This module defines the categories the style engine assigns to
//! characters and their default visual styles. The integer tags are
//! stable; hosts map them to colours.

use super::style::{Color, Style};

/// Style category assigned to a run of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum StyleCode {
    /// Plain text, whitespace, unrecognised punctuation
    #[default]
    Default = 0,
    /// Primary keywords
    Keyword = 1,
    /// Words with no other classification
    Identifier = 2,
    /// Numeric literals
    Number = 3,
    /// Double-quoted strings
    String = 4,
    /// Line and block comments
    Comment = 5,
    /// Words followed directly by `(`
    Procedure = 6,
    /// Contextual keywords and ambient type names
    Contextual = 7,
    /// `@"..."` and `$@"..."` strings
    Verbatim = 8,
    /// `#` lines
    Preprocessor = 9,
    /// Escape sequences inside strings (`\n`, `\"`)
    EscapeSequence = 10,
    /// Configured operators
    Operator = 11,
    /// Matched `{` / `}`
    Braces = 12,
    /// Unmatched braces
    Error = 13,
    /// User keywords
    User = 14,
    /// Words followed by `<`, `[` or `.`
    ProcedureContainer = 15,
    /// Words preceded by `.`
    ContainerProcedure = 16,
    /// Configured multi-word phrases
    MultiIdentifier = 17,
    /// Single-quoted character literals
    QuotedString = 18,
}

impl StyleCode {
    /// Every style code, in tag order
    pub const ALL: [StyleCode; 19] = [
        StyleCode::Default,
        StyleCode::Keyword,
        StyleCode::Identifier,
        StyleCode::Number,
        StyleCode::String,
        StyleCode::Comment,
        StyleCode::Procedure,
        StyleCode::Contextual,
        StyleCode::Verbatim,
        StyleCode::Preprocessor,
        StyleCode::EscapeSequence,
        StyleCode::Operator,
        StyleCode::Braces,
        StyleCode::Error,
        StyleCode::User,
        StyleCode::ProcedureContainer,
        StyleCode::ContainerProcedure,
        StyleCode::MultiIdentifier,
        StyleCode::QuotedString,
    ];

    /// Stable integer tag
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a style code by its integer tag
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Whether this style, when found on a line terminator, means the
    /// next line starts inside a comment or string
    pub fn carries_across_lines(self) -> bool {
        matches!(
            self,
            StyleCode::Comment | StyleCode::String | StyleCode::Verbatim | StyleCode::QuotedString
        )
    }

    /// Get the default style for this code
    pub fn default_style(&self) -> Style {
        match self {
            StyleCode::Default => Style::default(),
            StyleCode::Keyword => Style::fg(Color::Cyan).with_bold(),
            StyleCode::Identifier => Style::default(),
            StyleCode::Number => Style::fg(Color::Magenta),
            StyleCode::String => Style::fg(Color::Red),
            StyleCode::Comment => Style::fg(Color::Yellow).with_italic(),
            StyleCode::Procedure => Style::fg(Color::Green),
            StyleCode::Contextual => Style::fg(Color::BrightGreen),
            StyleCode::Verbatim => Style::fg(Color::BrightYellow),
            StyleCode::Preprocessor => Style::fg(Color::BrightBlack),
            StyleCode::EscapeSequence => Style::fg(Color::Yellow).with_bold(),
            StyleCode::Operator => Style::fg(Color::BrightMagenta),
            StyleCode::Braces => Style::fg(Color::BrightGreen).with_bold(),
            StyleCode::Error => Style::fg(Color::BrightWhite).with_bg(Color::Red),
            StyleCode::User => Style::fg(Color::Yellow),
            StyleCode::ProcedureContainer => Style::fg(Color::BrightGreen),
            StyleCode::ContainerProcedure => Style::fg(Color::BrightMagenta),
            StyleCode::MultiIdentifier => Style::fg(Color::BrightRed).with_underline(),
            StyleCode::QuotedString => Style::fg(Color::BrightRed),
        }
    }

    /// Get a human-readable name for this style code
    pub fn name(&self) -> &'static str {
        match self {
            StyleCode::Default => "Default",
            StyleCode::Keyword => "Keyword",
            StyleCode::Identifier => "Identifier",
            StyleCode::Number => "Number",
            StyleCode::String => "String",
            StyleCode::Comment => "Comment",
            StyleCode::Procedure => "Procedure",
            StyleCode::Contextual => "Contextual",
            StyleCode::Verbatim => "Verbatim",
            StyleCode::Preprocessor => "Preprocessor",
            StyleCode::EscapeSequence => "EscapeSequence",
            StyleCode::Operator => "Operator",
            StyleCode::Braces => "Braces",
            StyleCode::Error => "Error",
            StyleCode::User => "User",
            StyleCode::ProcedureContainer => "ProcedureContainer",
            StyleCode::ContainerProcedure => "ContainerProcedure",
            StyleCode::MultiIdentifier => "MultiIdentifier",
            StyleCode::QuotedString => "QuotedString",
        }
    }

    /// Parse a style code from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.name() == name)
    }
}
