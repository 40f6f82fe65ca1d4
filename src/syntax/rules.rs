//! Lexical rules for the style engine
//!
//! Character classes, the operator table, and the state types the
//! engine carries while it walks a range.

use super::tokens::StyleCode;

/// Characters allowed to continue a number once one has started
pub fn is_number_char(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, 'x' | '-' | '.')
}

/// Characters that may follow `\` to form an escape sequence
pub fn is_escape_char(c: char) -> bool {
    matches!(c, '\'' | '"' | '\\' | '0' | 'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v')
}

/// Characters that make up a word
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that follow a type-like name (`List<`, `args[`, `Console.`)
pub fn is_container_marker(c: char) -> bool {
    matches!(c, '<' | '[' | '.')
}

/// Operators recognised when nothing else claims a symbol
pub const DEFAULT_OPERATORS: &[&str] = &[
    "<<", ">>", "<=", ">=", "+=", "-=", "*=", "&=", "|=", "!=", "^=", "->", "??", "=>", "++",
    "--", "==", "&&", "||", "+", "-", "*", "&", "!", "|", "^", "~", "=", "<", ">",
];

/// One- and two-character operator table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    singles: Vec<char>,
    pairs: Vec<(char, char)>,
}

impl OperatorTable {
    /// Build a table from operator spellings; anything longer than two
    /// characters (or empty) is ignored
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self {
            singles: Vec::new(),
            pairs: Vec::new(),
        };
        for op in operators {
            let mut chars = op.as_ref().chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), None, _) => table.singles.push(a),
                (Some(a), Some(b), None) => table.pairs.push((a, b)),
                _ => tracing::warn!("ignoring operator {:?}", op.as_ref()),
            }
        }
        table
    }

    /// Length of the operator starting with `c` (and optionally `d`),
    /// preferring the two-character form
    pub fn match_len(&self, c: char, d: Option<char>) -> Option<usize> {
        if let Some(d) = d {
            if self.pairs.contains(&(c, d)) {
                return Some(2);
            }
        }
        self.singles.contains(&c).then_some(1)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATORS.iter().copied())
    }
}

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    #[default]
    Unknown,
    Identifier,
    MultiIdentifier,
    Number,
    String,
    MultilineComment,
}

/// Flags describing the string currently being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringMode {
    /// `@"..."` or `$@"..."`: doubled quotes embed a quote
    pub verbatim: bool,
    /// `'...'`: character literal
    pub quoted: bool,
    /// Open interpolation braces; tracked in every non-quoted string
    pub brace_depth: u32,
}

impl StringMode {
    /// Mode for a string opened by the given prefix
    pub fn from_prefix(prefix: &str) -> Self {
        Self {
            verbatim: prefix.starts_with('@') || prefix.starts_with("$@"),
            quoted: prefix == "'",
            brace_depth: 0,
        }
    }

    /// Style code for the string body
    pub fn style(&self) -> StyleCode {
        if self.verbatim {
            StyleCode::Verbatim
        } else if self.quoted {
            StyleCode::QuotedString
        } else {
            StyleCode::String
        }
    }
}

/// Whether a position sits inside a construct that spans line ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// Normal text, or the state still open
    pub open: LexState,
}

impl LineState {
    /// Create state for being inside a carried-over construct
    pub fn inside(state: LexState) -> Self {
        match state {
            LexState::String | LexState::MultilineComment => Self { open: state },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_chars() {
        for c in "0123456789abcdefABCDEFx-.".chars() {
            assert!(is_number_char(c), "{c:?}");
        }
        assert!(!is_number_char('g'));
        assert!(!is_number_char('X'));
        assert!(!is_number_char(' '));
        assert!(!is_number_char(';'));
    }

    #[test]
    fn test_escape_chars() {
        assert!(is_escape_char('n'));
        assert!(is_escape_char('"'));
        assert!(is_escape_char('\\'));
        assert!(!is_escape_char('q'));
        assert!(!is_escape_char('x'));
    }

    #[test]
    fn test_operator_table_prefers_pairs() {
        let table = OperatorTable::default();
        assert_eq!(table.match_len('=', Some('=')), Some(2));
        assert_eq!(table.match_len('=', Some('>')), Some(2));
        assert_eq!(table.match_len('=', Some('-')), Some(1));
        assert_eq!(table.match_len('?', Some('?')), Some(2));
        assert_eq!(table.match_len('?', Some(' ')), None);
        assert_eq!(table.match_len('+', None), Some(1));
        assert_eq!(table.match_len('/', None), None);
    }

    #[test]
    fn test_operator_table_custom() {
        let table = OperatorTable::new(["::", "%", "too-long", ""]);
        assert_eq!(table.match_len(':', Some(':')), Some(2));
        assert_eq!(table.match_len('%', Some('=')), Some(1));
        assert_eq!(table.match_len('+', None), None);
    }

    #[test]
    fn test_string_mode_from_prefix() {
        let plain = StringMode::from_prefix("\"");
        assert!(!plain.verbatim && !plain.quoted);
        assert_eq!(plain.style(), StyleCode::String);

        let verbatim = StringMode::from_prefix("@\"");
        assert!(verbatim.verbatim && !verbatim.quoted);
        assert_eq!(verbatim.style(), StyleCode::Verbatim);

        let formatted = StringMode::from_prefix("$\"");
        assert!(!formatted.verbatim && !formatted.quoted);
        assert_eq!(formatted.style(), StyleCode::String);

        let both = StringMode::from_prefix("$@\"");
        assert!(both.verbatim);
        assert_eq!(both.style(), StyleCode::Verbatim);

        let quoted = StringMode::from_prefix("'");
        assert!(quoted.quoted && !quoted.verbatim);
        assert_eq!(quoted.style(), StyleCode::QuotedString);
    }

    #[test]
    fn test_line_state() {
        assert_eq!(LineState::default().open, LexState::Unknown);
        assert_eq!(
            LineState::inside(LexState::MultilineComment).open,
            LexState::MultilineComment
        );
        assert_eq!(LineState::inside(LexState::String).open, LexState::String);

        // Single-step states never carry over
        assert_eq!(LineState::inside(LexState::Number), LineState::default());
    }
}
