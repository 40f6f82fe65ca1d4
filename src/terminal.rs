//! Styled terminal output using crossterm
//!
//! Renders styled text to any writer. Colours are queued as ANSI
//! commands and reset at every line end, so a styled run never bleeds
//! into the next line.

use std::io::Write;

use crossterm::{
    queue,
    style::{self as ct, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, Style, StyleSpan};

/// Map a palette colour to its crossterm equivalent
fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Default => ct::Color::Reset,
        Color::Black => ct::Color::Black,
        Color::Red => ct::Color::DarkRed,
        Color::Green => ct::Color::DarkGreen,
        Color::Yellow => ct::Color::DarkYellow,
        Color::Blue => ct::Color::DarkBlue,
        Color::Magenta => ct::Color::DarkMagenta,
        Color::Cyan => ct::Color::DarkCyan,
        Color::White => ct::Color::Grey,
        Color::BrightBlack => ct::Color::DarkGrey,
        Color::BrightRed => ct::Color::Red,
        Color::BrightGreen => ct::Color::Green,
        Color::BrightYellow => ct::Color::Yellow,
        Color::BrightBlue => ct::Color::Blue,
        Color::BrightMagenta => ct::Color::Magenta,
        Color::BrightCyan => ct::Color::Cyan,
        Color::BrightWhite => ct::Color::White,
    }
}

/// Writer wrapper that applies styles to text
pub struct StyledWriter<W: Write> {
    out: W,
    /// Emit colour and attribute commands
    colored: bool,
}

impl<W: Write> StyledWriter<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Write `text` in `style`, resetting before each newline
    pub fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            if !line.is_empty() {
                self.set_style(style)?;
                queue!(self.out, Print(line))?;
                self.reset_attributes()?;
            }
            if lines.peek().is_some() {
                queue!(self.out, Print('\n'))?;
            }
        }
        Ok(())
    }

    fn set_style(&mut self, style: Style) -> Result<()> {
        if !self.colored || style.is_default() {
            return Ok(());
        }
        if style.fg != Color::Default {
            queue!(self.out, SetForegroundColor(to_crossterm(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(self.out, SetBackgroundColor(to_crossterm(style.bg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    /// Reset all attributes
    fn reset_attributes(&mut self) -> Result<()> {
        if self.colored {
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    /// Flush output
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render `text` with the default style of each span's code
pub fn render<W: Write>(writer: &mut StyledWriter<W>, text: &[char], spans: &[StyleSpan]) -> Result<()> {
    let mut at = 0;
    for span in spans {
        let start = span.start.min(text.len());
        let end = span.end().min(text.len());
        // Anything a span list skipped is written unstyled
        if start > at {
            let gap: String = text[at..start].iter().collect();
            writer.write_styled(&gap, Style::default())?;
        }
        let run: String = text[start.max(at)..end.max(at)].iter().collect();
        writer.write_styled(&run, span.code.default_style())?;
        at = at.max(end);
    }
    if at < text.len() {
        let rest: String = text[at..].iter().collect();
        writer.write_styled(&rest, Style::default())?;
    }
    writer.flush()
}

/// Write one `start length Name` line per span
pub fn write_span_listing<W: Write>(out: &mut W, spans: &[StyleSpan]) -> Result<()> {
    for span in spans {
        writeln!(out, "{} {} {}", span.start, span.length, span.code.name())?;
    }
    out.flush()?;
    Ok(())
}
