//! Terminal output for classified source
//!
//! Resolves each span's role through a Theme and writes it with
//! crossterm style commands. Text outside spans is written as-is.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::error::Result;
use crate::scanner::Lexeme;
use crate::syntax::{Color, Span, Style, SyntaxEngine, Theme};

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => style::Color::Reset,
            Color::Black => style::Color::Black,
            Color::Red => style::Color::DarkRed,
            Color::Green => style::Color::DarkGreen,
            Color::Yellow => style::Color::DarkYellow,
            Color::Blue => style::Color::DarkBlue,
            Color::Magenta => style::Color::DarkMagenta,
            Color::Cyan => style::Color::DarkCyan,
            Color::White => style::Color::Grey,
            Color::BrightBlack => style::Color::DarkGrey,
            Color::BrightRed => style::Color::Red,
            Color::BrightGreen => style::Color::Green,
            Color::BrightYellow => style::Color::Yellow,
            Color::BrightBlue => style::Color::Blue,
            Color::BrightMagenta => style::Color::Magenta,
            Color::BrightCyan => style::Color::Cyan,
            Color::BrightWhite => style::Color::White,
        }
    }
}

fn write_styled<W: Write>(out: &mut W, text: &str, style: &Style) -> Result<()> {
    if style.is_default() {
        queue!(out, Print(text))?;
        return Ok(());
    }
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(style.fg.into()))?;
    }
    if style.bg != Color::Default {
        queue!(out, SetBackgroundColor(style.bg.into()))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Write `source` with every span styled by `theme`
///
/// Spans must be sorted by start offset; overlapping or out-of-range
/// spans are skipped. With `color` off the source is written unchanged.
pub fn render_source<W: Write>(
    out: &mut W,
    source: &str,
    spans: &[Span],
    theme: &Theme,
    color: bool,
) -> Result<()> {
    if !color {
        out.write_all(source.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let mut pos = 0;
    for span in spans {
        if span.start < pos {
            continue;
        }
        let (Some(before), Some(text)) = (source.get(pos..span.start), source.get(span.start..span.end))
        else {
            continue;
        };
        queue!(out, Print(before))?;
        write_styled(out, text, &theme.style_of(span.role))?;
        pos = span.end;
    }
    queue!(out, Print(&source[pos..]))?;
    out.flush()?;
    Ok(())
}

/// Write one line per token: position, text, category and role
pub fn write_token_listing<W: Write>(
    out: &mut W,
    lexemes: &[Lexeme<'_>],
    engine: &SyntaxEngine,
) -> Result<()> {
    for lexeme in lexemes {
        let category = engine.classify(lexeme.token.text);
        let role = engine
            .binding()
            .style_for(category)
            .map_or("-", |role| role.as_str());
        writeln!(
            out,
            "{}:{}\t{}\t{}\t{}",
            lexeme.line,
            lexeme.column,
            lexeme.token.text,
            category.name(),
            role
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;
    use crate::syntax::{Category, RoleName};

    #[test]
    fn test_render_without_color_is_verbatim() {
        let source = "1 2 swap\nprintln\n";
        let spans = [Span::new(4, 8, Category::Keyword, RoleName::KEYWORD)];
        let mut out = Vec::new();
        render_source(&mut out, source, &spans, &Theme::default(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), source);
    }

    #[test]
    fn test_render_with_color_wraps_spans() {
        let source = "x dup y";
        let spans = [Span::new(2, 5, Category::Keyword, RoleName::KEYWORD)];
        let mut out = Vec::new();
        render_source(&mut out, source, &spans, &Theme::default(), true).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.starts_with("x "));
        assert!(rendered.ends_with(" y"));
        assert!(rendered.contains("dup"));
        assert!(rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_render_skips_out_of_range_span() {
        let source = "abc";
        let spans = [Span::new(1, 10, Category::Keyword, RoleName::KEYWORD)];
        let mut out = Vec::new();
        render_source(&mut out, source, &spans, &Theme::default(), true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abc");
    }

    #[test]
    fn test_token_listing() {
        let engine = SyntaxEngine::default();
        let lexemes = Scanner::new("true 7\nfoo").scan_all();
        let mut out = Vec::new();
        write_token_listing(&mut out, &lexemes, &engine).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1:1\ttrue\tBooleanLiteral\tBoolean\n\
             1:6\t7\tNumericLiteral\tNumber\n\
             2:1\tfoo\tUnclassified\t-\n"
        );
    }
}
