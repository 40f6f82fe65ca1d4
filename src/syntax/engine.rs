//! The style engine
//!
//! Walks `[start, end)` one character at a time and emits a gap-free
//! sequence of style spans through the adapter. Every call starts in
//! `LexState::Unknown`; the scope policy is responsible for starting
//! the range outside any comment or string.

use std::ops::Range;

use super::adapter::TextBuffer;
use super::keywords::KeywordRegistry;
use super::phrases::PhraseIndex;
use super::rules::{is_container_marker, is_escape_char, is_number_char, LexState, LineState, StringMode};
use super::style::StyleSpan;
use super::tokens::StyleCode;

/// Result of one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Spans in position order, covering the scanned range exactly
    pub spans: Vec<StyleSpan>,
    /// Construct still open when the range ended
    pub end_state: LineState,
}

/// Scanner bound to one keyword registry
pub struct StyleEngine<'r> {
    registry: &'r KeywordRegistry,
}

impl<'r> StyleEngine<'r> {
    pub fn new(registry: &'r KeywordRegistry) -> Self {
        Self { registry }
    }

    /// Style `range` of `buf`, emitting spans through the adapter.
    ///
    /// The range is clamped to the buffer. `phrases` must have been built
    /// over the same range.
    pub fn scan<B>(&self, buf: &mut B, range: Range<usize>, phrases: &PhraseIndex) -> ScanOutcome
    where
        B: TextBuffer + ?Sized,
    {
        let end = range.end.min(buf.len());
        let start = range.start.min(end);
        buf.begin_styling(start);

        let mut scan = Scan {
            buf,
            registry: self.registry,
            phrases,
            pos: start,
            cursor: start,
            end,
            state: LexState::Unknown,
            mode: StringMode::default(),
            spans: Vec::new(),
        };
        scan.run();
        let end_state = scan.finish();

        tracing::trace!(start, end, spans = scan.spans.len(), ?end_state, "scan complete");

        ScanOutcome {
            spans: scan.spans,
            end_state,
        }
    }
}

/// In-flight scan state
struct Scan<'a, B: ?Sized> {
    buf: &'a mut B,
    registry: &'a KeywordRegistry,
    phrases: &'a PhraseIndex,
    /// Next character to examine
    pos: usize,
    /// Start of the pending (not yet emitted) run
    cursor: usize,
    end: usize,
    state: LexState,
    mode: StringMode,
    spans: Vec<StyleSpan>,
}

impl<B: TextBuffer + ?Sized> Scan<'_, B> {
    fn run(&mut self) {
        while self.pos < self.end {
            let Some(c) = self.buf.char_at(self.pos) else {
                break;
            };
            let d = self.buf.char_at(self.pos + 1);

            match self.state {
                LexState::Unknown => self.step_unknown(c, d),
                LexState::Identifier => self.resolve_identifier(),
                LexState::MultiIdentifier => self.resolve_phrase(),
                LexState::Number => self.step_number(c),
                LexState::String => self.step_string(c, d),
                LexState::MultilineComment => self.step_comment(c, d),
            }
        }
    }

    /// Flush whatever run is still open and report the carried state
    fn finish(&mut self) -> LineState {
        let end_state = LineState::inside(self.state);
        let code = match self.state {
            LexState::String => self.mode.style(),
            LexState::Number => StyleCode::Number,
            LexState::MultilineComment => StyleCode::Comment,
            _ => StyleCode::Default,
        };
        self.emit_until(self.end, code);
        self.reset();
        end_state
    }

    fn reset(&mut self) {
        self.state = LexState::Unknown;
        self.mode = StringMode::default();
    }

    /// Style everything from the cursor up to `to` (clamped to the range)
    fn emit_until(&mut self, to: usize, code: StyleCode) {
        let to = to.min(self.end);
        if to <= self.cursor {
            return;
        }
        let length = to - self.cursor;
        self.buf.append_style(length, code);
        self.spans.push(StyleSpan::new(self.cursor, length, code));
        self.cursor = to;
    }

    /// Consume `len` characters as one span
    fn emit_token(&mut self, len: usize, code: StyleCode) {
        self.pos += len;
        self.emit_until(self.pos, code);
    }

    fn step_unknown(&mut self, c: char, d: Option<char>) {
        let d_is_digit = d.is_some_and(|d| d.is_ascii_digit());

        if c == ' ' {
            self.emit_token(1, StyleCode::Default);
        } else if c == '{' || c == '}' {
            let code = if self.buf.brace_match(self.pos).is_some() {
                StyleCode::Braces
            } else {
                StyleCode::Error
            };
            self.emit_token(1, code);
        } else if c.is_alphabetic() {
            self.state = if self.phrases.match_at(self.pos).is_some() {
                LexState::MultiIdentifier
            } else {
                LexState::Identifier
            };
        } else if let Some(prefix_len) = string_prefix_len(c, d) {
            let prefix = self.buf.text_range(self.pos, prefix_len);
            self.mode = StringMode::from_prefix(&prefix);
            self.emit_token(prefix_len, self.mode.style());
            self.state = LexState::String;
        } else if c.is_ascii_digit() || (c == '-' || c == '.') && d_is_digit {
            self.pos += 1;
            self.state = LexState::Number;
        } else if c == '/' && d == Some('/') {
            self.emit_rest_of_line(StyleCode::Comment);
        } else if c == '/' && d == Some('*') {
            self.emit_token(2, StyleCode::Comment);
            self.state = LexState::MultilineComment;
        } else if c == '#' {
            self.emit_rest_of_line(StyleCode::Preprocessor);
        } else if let Some(len) = self.registry.operators().match_len(c, d) {
            self.emit_token(len, StyleCode::Operator);
        } else {
            self.emit_token(1, StyleCode::Default);
        }
    }

    /// Style up to the first character of the line ending
    fn emit_rest_of_line(&mut self, code: StyleCode) {
        let line = self.buf.line_of_position(self.pos);
        let mut stop = self.buf.line_end(line);
        if self.buf.char_at(stop) == Some('\n') && stop > self.pos && self.buf.char_at(stop - 1) == Some('\r') {
            stop -= 1;
        }
        let stop = stop.max(self.pos + 1);
        self.pos = stop;
        self.emit_until(stop, code);
    }

    fn resolve_identifier(&mut self) {
        let start = self.pos;
        let end = self
            .buf
            .word_at(start)
            .map(|word| word.end)
            .filter(|&end| end > start)
            .unwrap_or(start + 1);
        let word = self.buf.text_range(start, end - start);
        let code = self.classify(&word, start, end);

        self.pos = end;
        self.emit_until(end, code);
        self.reset();
    }

    /// Decide what kind of word `word` (at `[start, end)`) is
    fn classify(&self, word: &str, start: usize, end: usize) -> StyleCode {
        let next = self.buf.char_at(end);
        let prev = start.checked_sub(1).and_then(|p| self.buf.char_at(p));

        if next == Some('(') {
            StyleCode::Procedure
        } else if self.registry.is_primary(word) {
            StyleCode::Keyword
        } else if self.registry.is_contextual(word) {
            StyleCode::Contextual
        } else if self.registry.is_user(word) {
            StyleCode::User
        } else if next.is_some_and(is_container_marker) && !self.on_import_line(start) {
            StyleCode::ProcedureContainer
        } else if prev == Some('.') && !self.on_import_line(start) {
            StyleCode::ContainerProcedure
        } else {
            StyleCode::Identifier
        }
    }

    fn on_import_line(&self, pos: usize) -> bool {
        let line = self.buf.line_of_position(pos);
        let start = self.buf.line_start(line);
        let end = self.buf.line_end(line);
        let text = self.buf.text_range(start, end.saturating_sub(start));
        self.registry.is_import_line(&text)
    }

    fn resolve_phrase(&mut self) {
        match self.phrases.match_at(self.pos) {
            Some(len) => {
                self.emit_token(len, StyleCode::MultiIdentifier);
                self.reset();
            }
            None => self.state = LexState::Identifier,
        }
    }

    fn step_number(&mut self, c: char) {
        if is_number_char(c) {
            self.pos += 1;
        } else {
            // The terminating character is examined again in Unknown
            self.emit_until(self.pos, StyleCode::Number);
            self.reset();
        }
    }

    fn step_string(&mut self, c: char, d: Option<char>) {
        let code = self.mode.style();

        // Inside braces no terminator is recognised
        if !self.mode.quoted {
            if c == '{' {
                self.mode.brace_depth += 1;
                self.pos += 1;
                return;
            }
            if self.mode.brace_depth > 0 {
                if c == '}' {
                    self.mode.brace_depth -= 1;
                }
                self.pos += 1;
                return;
            }
        }

        if self.mode.quoted {
            match c {
                '\'' => {
                    self.emit_token(1, code);
                    self.reset();
                }
                // Escapes in char literals are consumed without their own style
                '\\' => self.pos += 2,
                _ => self.pos += 1,
            }
            return;
        }

        if self.mode.verbatim && c == '"' && d == Some('"') {
            self.pos += 2;
        } else if c == '"' {
            self.emit_token(1, code);
            self.reset();
        } else if c == '\\' && d.is_some_and(is_escape_char) {
            self.emit_until(self.pos, code);
            self.emit_token(2, StyleCode::EscapeSequence);
        } else {
            self.pos += 1;
        }
    }

    fn step_comment(&mut self, c: char, d: Option<char>) {
        if c == '*' && d == Some('/') {
            self.emit_token(2, StyleCode::Comment);
            self.reset();
        } else {
            self.pos += 1;
        }
    }
}

/// Length of the string opener at `c`, if one starts here:
/// `"`, `'`, `@"`, `$"` or `$@"`
fn string_prefix_len(c: char, d: Option<char>) -> Option<usize> {
    match (c, d) {
        ('"', _) | ('\'', _) => Some(1),
        ('@', Some('"')) | ('$', Some('"')) => Some(2),
        ('$', Some('@')) => Some(3),
        _ => None,
    }
}
