//! Restyle-scope policy
//!
//! Decides, from the edits made since the last restyle, whether the next
//! scan may stay local to the edited lines or must cover the whole
//! buffer, and turns that decision into a concrete range.

use std::ops::Range;

use super::adapter::TextBuffer;

/// Characters whose insertion or removal can move comment, string or
/// brace boundaries outside the edited line
const STRUCTURAL_CHARS: [char; 4] = ['*', '/', '{', '}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// One edit reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditNotification {
    pub kind: EditKind,
    /// Inserted or deleted text
    pub text: String,
}

impl EditNotification {
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            text: text.into(),
        }
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            text: text.into(),
        }
    }

    /// Whether this edit may change lexical structure beyond its line
    pub fn is_structural(&self) -> bool {
        let touches_structure = self.text.contains(STRUCTURAL_CHARS);
        match self.kind {
            EditKind::Insert => touches_structure,
            EditKind::Delete => touches_structure || self.text.contains('"'),
        }
    }
}

/// How much of the buffer the next scan covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// From the start of the edited line to the requested end
    Local,
    /// The entire buffer
    Full,
}

/// Scope required by the edits since the last restyle
pub fn decide(edits: &[EditNotification]) -> Scope {
    if edits.iter().any(EditNotification::is_structural) {
        Scope::Full
    } else {
        Scope::Local
    }
}

/// Concrete scan range for a scope and a requested range.
///
/// Local ranges start at the beginning of the line holding
/// `requested.start`. With `extend_to_enclosing`, the start moves back
/// while the terminator of the previous line carries comment or string
/// styling, so a scan never begins inside one.
pub fn resolve<B>(scope: Scope, buf: &B, requested: Range<usize>, extend_to_enclosing: bool) -> Range<usize>
where
    B: TextBuffer + ?Sized,
{
    let len = buf.len();
    match scope {
        Scope::Full => 0..len,
        Scope::Local => {
            let end = requested.end.min(len);
            let mut line = buf.line_of_position(requested.start.min(end));
            if extend_to_enclosing {
                while line > 0 && starts_inside_construct(buf, line) {
                    line -= 1;
                }
            }
            buf.line_start(line)..end
        }
    }
}

/// Whether `line` begins inside a comment or string, judged by the style
/// left on the previous line's terminator
fn starts_inside_construct<B>(buf: &B, line: usize) -> bool
where
    B: TextBuffer + ?Sized,
{
    let start = buf.line_start(line);
    start
        .checked_sub(1)
        .and_then(|terminator| buf.style_at(terminator))
        .is_some_and(|code| code.carries_across_lines())
}
