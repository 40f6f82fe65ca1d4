//! Restyle coordination
//!
//! The `Restyler` is one styling instance: it owns a keyword registry and
//! answers the host's "style up to here" requests by running the scope
//! policy, building the phrase index for the chosen range, and driving
//! the style engine.

use std::ops::Range;

use super::adapter::TextBuffer;
use super::engine::{ScanOutcome, StyleEngine};
use super::keywords::KeywordRegistry;
use super::phrases;
use super::scope::{self, EditNotification, Scope};
use super::style::StyleSpan;

/// Styling instance for one editor
#[derive(Debug, Clone)]
pub struct Restyler {
    registry: KeywordRegistry,
    /// Move local scans back out of comments and strings
    pub extend_to_enclosing: bool,
    /// Whether styling is enabled
    pub enabled: bool,
}

impl Restyler {
    /// Create a restyler with the given configuration
    pub fn new(registry: KeywordRegistry) -> Self {
        Self {
            registry,
            extend_to_enclosing: true,
            enabled: true,
        }
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    /// Replace the word classes of the owned registry
    pub fn configure(
        &mut self,
        primary: &str,
        contextual: &str,
        user: &str,
        phrases: &str,
        autofill_contextual: bool,
    ) {
        self.registry
            .configure(primary, contextual, user, phrases, autofill_contextual);
    }

    /// Restyle from the buffer's end of valid styling up to `requested_end`.
    ///
    /// `edits` are the edit notifications received since the previous call.
    pub fn restyle<B>(&self, buf: &mut B, requested_end: usize, edits: &[EditNotification]) -> Vec<StyleSpan>
    where
        B: TextBuffer + ?Sized,
    {
        let start = buf.end_styled();
        self.restyle_range(buf, start..requested_end, edits)
    }

    /// Restyle an explicit requested range
    pub fn restyle_range<B>(
        &self,
        buf: &mut B,
        requested: Range<usize>,
        edits: &[EditNotification],
    ) -> Vec<StyleSpan>
    where
        B: TextBuffer + ?Sized,
    {
        if !self.enabled {
            return Vec::new();
        }
        self.scan(buf, requested, edits).spans
    }

    /// Run one restyle and return the full scan outcome
    pub fn scan<B>(&self, buf: &mut B, requested: Range<usize>, edits: &[EditNotification]) -> ScanOutcome
    where
        B: TextBuffer + ?Sized,
    {
        let scope = scope::decide(edits);
        let range = scope::resolve(scope, buf, requested.clone(), self.extend_to_enclosing);

        tracing::debug!(
            ?scope,
            requested_start = requested.start,
            requested_end = requested.end,
            start = range.start,
            end = range.end,
            edits = edits.len(),
            "restyle"
        );

        let index = if self.registry.phrases().is_empty() {
            phrases::PhraseIndex::default()
        } else {
            let text = buf.text_range(range.start, range.end.saturating_sub(range.start));
            phrases::index(self.registry.phrases(), &text, range.start)
        };

        StyleEngine::new(&self.registry).scan(buf, range, &index)
    }

    /// Style the whole buffer regardless of edits
    pub fn restyle_all<B>(&self, buf: &mut B) -> Vec<StyleSpan>
    where
        B: TextBuffer + ?Sized,
    {
        let len = buf.len();
        if !self.enabled {
            return Vec::new();
        }
        let index = phrases::index(self.registry.phrases(), &buf.text_range(0, len), 0);
        tracing::debug!(scope = ?Scope::Full, end = len, "restyle all");
        StyleEngine::new(&self.registry).scan(buf, 0..len, &index).spans
    }

    /// Toggle styling on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for Restyler {
    fn default() -> Self {
        Self::new(KeywordRegistry::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SourceBuffer;
    use crate::syntax::tokens::StyleCode;

    fn restyler() -> Restyler {
        let mut restyler = Restyler::default();
        restyler.configure("int if return", "var", "", "New York", false);
        restyler
    }

    fn covered(spans: &[StyleSpan]) -> Option<Range<usize>> {
        Some(spans.first()?.start..spans.last()?.end())
    }

    #[test]
    fn test_initial_restyle_covers_request() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("int a;\nint b;\nint c;");
        let spans = restyler.restyle(&mut buf, 13, &[]);
        assert_eq!(covered(&spans), Some(0..13));
        assert_eq!(buf.end_styled(), 13);
        assert_eq!(buf.style_at(7), Some(StyleCode::Keyword));
    }

    #[test]
    fn test_local_restyle_starts_at_edited_line() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("int a;\nint b;\nint c;");
        restyler.restyle_all(&mut buf);

        let edit = buf.insert(12, "x").unwrap();
        let len = buf.len();
        let spans = restyler.restyle(&mut buf, len, &[edit]);
        assert_eq!(covered(&spans), Some(7..len));
    }

    #[test]
    fn test_deleting_brace_forces_full_restyle() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("if (a) {\n  return;\n}\nint z;");
        restyler.restyle_all(&mut buf);
        assert_eq!(buf.style_at(19), Some(StyleCode::Braces));

        let edit = buf.delete(7, 1).unwrap();
        let len = buf.len();
        let spans = restyler.restyle(&mut buf, len, &[edit]);
        assert_eq!(covered(&spans), Some(0..len));
        // The closing brace lost its partner
        assert_eq!(buf.style_at(18), Some(StyleCode::Error));
    }

    #[test]
    fn test_inserting_comment_opener_restyles_everything() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("int a;\nint b;");
        restyler.restyle_all(&mut buf);

        let first = buf.insert(0, "/").unwrap();
        let second = buf.insert(1, "*").unwrap();
        let len = buf.len();
        restyler.restyle(&mut buf, 3, &[first, second]);
        assert!(buf.styles().iter().all(|&s| s == StyleCode::Comment));
        assert_eq!(buf.end_styled(), len);
    }

    #[test]
    fn test_local_restyle_backs_out_of_open_comment() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("int a; /* open\nstill\nclosed */ int b;");
        restyler.restyle_all(&mut buf);

        // Typing inside the comment's last line must not restart at that line
        let edit = buf.insert(21, "x").unwrap();
        let len = buf.len();
        let spans = restyler.restyle(&mut buf, len, &[edit]);
        assert_eq!(covered(&spans), Some(0..len));
        assert_eq!(buf.style_at(21), Some(StyleCode::Comment));
        assert_eq!(buf.style_at(len - 2), Some(StyleCode::Identifier));
    }

    #[test]
    fn test_local_restyle_backs_out_of_verbatim_string() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("int a;\nvar s = @\"one\ntwo\nthree\";\nint b;");
        restyler.restyle_all(&mut buf);
        assert_eq!(buf.style_at(20), Some(StyleCode::Verbatim));

        // Line 3 opens inside the string that started on line 1
        let edit = buf.insert(26, "z").unwrap();
        let len = buf.len();
        let spans = restyler.restyle(&mut buf, len, &[edit]);
        assert_eq!(covered(&spans), Some(7..len));
        assert_eq!(buf.style_at(26), Some(StyleCode::Verbatim));
        assert_eq!(buf.style_at(34), Some(StyleCode::Keyword));
    }

    #[test]
    fn test_local_restyle_backs_out_of_unterminated_string() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("int a;\ns = \"open\nmore");
        restyler.restyle_all(&mut buf);
        assert_eq!(buf.style_at(16), Some(StyleCode::String));

        let edit = buf.insert(19, "x").unwrap();
        let len = buf.len();
        let spans = restyler.restyle(&mut buf, len, &[edit]);
        assert_eq!(covered(&spans), Some(7..len));
        assert_eq!(buf.style_at(19), Some(StyleCode::String));
        assert_eq!(buf.style_at(0), Some(StyleCode::Keyword));
    }

    #[test]
    fn test_without_extension_local_scan_restarts_mid_comment() {
        let mut restyler = restyler();
        restyler.extend_to_enclosing = false;
        let mut buf = SourceBuffer::from_text("/* a\nint b */");
        restyler.restyle_all(&mut buf);

        let edit = buf.insert(5, " ").unwrap();
        let len = buf.len();
        let spans = restyler.restyle(&mut buf, len, &[edit]);
        assert_eq!(covered(&spans), Some(5..len));
        assert_eq!(buf.style_at(6), Some(StyleCode::Keyword));
    }

    #[test]
    fn test_phrases_indexed_for_scan_range() {
        let restyler = restyler();
        let mut buf = SourceBuffer::from_text("I live in New York now");
        let spans = restyler.restyle(&mut buf, 22, &[]);
        assert!(spans.contains(&StyleSpan::new(10, 8, StyleCode::MultiIdentifier)));
    }

    #[test]
    fn test_disabled_restyler_emits_nothing() {
        let mut restyler = restyler();
        restyler.toggle();
        let mut buf = SourceBuffer::from_text("int a;");
        assert!(restyler.restyle(&mut buf, 6, &[]).is_empty());
        assert!(restyler.restyle_all(&mut buf).is_empty());
        assert_eq!(buf.end_styled(), 0);
    }
}
