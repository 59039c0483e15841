//! Syntax-highlighted code blocks.
//!
//! Highlighting uses `syntect`'s bundled syntaxes and themes, loaded once on
//! first use. A lexer name `syntect` does not know falls back to plain text;
//! an unknown theme falls back to [`DEFAULT_THEME`].

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{self, FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::{trace, warn};

use crate::console::ConsoleOptions;
use crate::error::RenderError;
use crate::measure::Measurement;
use crate::segment::{apply_base_style, blank_line, fit_line, Line, Segment};
use crate::style::{Color, Style};
use crate::text::{Justify, Overflow, Text};
use crate::util::{char_width, dedent, display_width};

/// Theme used when none is given or the given one is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Returns true if `token` names a bundled syntax (by name or extension).
pub fn is_known_lexer(token: &str) -> bool {
    SYNTAXES.find_syntax_by_token(token).is_some()
}

/// Names of the bundled themes.
pub fn theme_names() -> Vec<&'static str> {
    THEMES.themes.keys().map(String::as_str).collect()
}

/// A block of source code.
///
/// ```rust
/// use trellis_render::{render_to_string, ConsoleOptions, OutputMode, Syntax};
///
/// let code = Syntax::new("fn main() {}", "rs").line_numbers(true);
/// let options = ConsoleOptions::default().width(30).mode(OutputMode::Text);
/// assert_eq!(render_to_string(&code.into(), &options), "  1 fn main() {}\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syntax {
    code: String,
    lexer: String,
    pub theme: String,
    pub line_numbers: bool,
    /// Number shown beside the first line.
    pub start_line: usize,
    /// Line numbers (as displayed) marked with a pointer.
    pub highlight_lines: BTreeSet<usize>,
    pub tab_size: usize,
    pub word_wrap: bool,
    /// Overrides the theme's background.
    pub background_color: Option<Color>,
    /// Width of the code area; `None` fills the available width.
    pub code_width: Option<usize>,
    /// Strip the indentation shared by all lines.
    pub dedent: bool,
}

impl Syntax {
    pub fn new(code: impl Into<String>, lexer: impl Into<String>) -> Self {
        Syntax {
            code: code.into(),
            lexer: lexer.into(),
            theme: DEFAULT_THEME.to_string(),
            line_numbers: false,
            start_line: 1,
            highlight_lines: BTreeSet::new(),
            tab_size: 4,
            word_wrap: false,
            background_color: None,
            code_width: None,
            dedent: false,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn lexer(&self) -> &str {
        &self.lexer
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = on;
        self
    }

    pub fn start_line(mut self, line: usize) -> Self {
        self.start_line = line;
        self
    }

    pub fn highlight_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.highlight_lines = lines.into_iter().collect();
        self
    }

    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn word_wrap(mut self, on: bool) -> Self {
        self.word_wrap = on;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn code_width(mut self, width: usize) -> Self {
        self.code_width = Some(width);
        self
    }

    pub fn dedent(mut self, on: bool) -> Self {
        self.dedent = on;
        self
    }

    fn resolved_theme(&self) -> Option<&'static Theme> {
        THEMES.themes.get(&self.theme).or_else(|| {
            trace!(theme = %self.theme, "unknown theme, using {}", DEFAULT_THEME);
            THEMES.themes.get(DEFAULT_THEME)
        })
    }

    /// Code with indentation stripped (if requested), tabs expanded and the
    /// trailing newline removed.
    fn processed_code(&self) -> String {
        let code = if self.dedent {
            dedent(&self.code)
        } else {
            self.code.clone()
        };
        let tab_size = self.tab_size.max(1);
        code.trim_end_matches('\n')
            .split('\n')
            .map(|line| expand_tabs(line, tab_size))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn line_count(&self) -> usize {
        self.processed_code().split('\n').count()
    }

    /// Width of the line number gutter: pointer, number and a space.
    fn gutter_width(&self) -> usize {
        if !self.line_numbers {
            return 0;
        }
        let last = self.start_line + self.line_count().saturating_sub(1);
        last.to_string().len() + 3
    }

    fn background(&self, theme: Option<&Theme>) -> Style {
        let color = self.background_color.or_else(|| {
            theme
                .and_then(|t| t.settings.background)
                .map(|c| Color::Rgb(c.r, c.g, c.b))
        });
        match color {
            Some(color) => Style::new().bgcolor(color),
            None => Style::new(),
        }
    }

    /// Highlights the code into one text run per source line.
    pub fn highlight(&self) -> Result<Vec<Text>, RenderError> {
        let code = self.processed_code();
        let theme = self.resolved_theme();
        let syntax = SYNTAXES.find_syntax_by_token(&self.lexer).unwrap_or_else(|| {
            trace!(lexer = %self.lexer, "unknown lexer, highlighting as plain text");
            SYNTAXES.find_syntax_plain_text()
        });

        let Some(theme) = theme else {
            return Ok(code.split('\n').map(Text::plain).collect());
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(&code) {
            let ranges = highlighter.highlight_line(line, &SYNTAXES)?;
            let mut text = Text::new();
            for (style, piece) in ranges {
                text.append(piece.trim_end_matches(['\n', '\r']), convert_style(style));
            }
            lines.push(text);
        }
        if lines.is_empty() {
            lines.push(Text::new());
        }
        Ok(lines)
    }

    pub fn measure(&self, options: &ConsoleOptions) -> Measurement {
        let gutter = self.gutter_width();
        let code = match self.code_width {
            Some(width) => width,
            None => self
                .processed_code()
                .split('\n')
                .map(display_width)
                .max()
                .unwrap_or(0),
        };
        Measurement::new(gutter, gutter + code).clamp_to(options.width)
    }

    pub fn render_lines(&self, options: &ConsoleOptions) -> Vec<Line> {
        let theme = self.resolved_theme();
        let background = self.background(theme);
        let gutter = self.gutter_width();
        let available = options.width.saturating_sub(gutter);
        let code_width = self.code_width.map_or(available, |w| w.min(available));

        let highlighted = self.highlight().unwrap_or_else(|err| {
            warn!(error = %err, "highlighting failed, rendering plain code");
            self.processed_code().split('\n').map(Text::plain).collect()
        });

        let number_style = match theme.and_then(|t| t.settings.gutter_foreground) {
            Some(c) => background.clone().color(Color::Rgb(c.r, c.g, c.b)),
            None => background.clone().dim(true),
        };
        let digits = gutter.saturating_sub(3);

        let mut out = Vec::new();
        for (offset, text) in highlighted.into_iter().enumerate() {
            let number = self.start_line + offset;
            let wrapped = if self.word_wrap {
                text.render_lines(code_width, self.tab_size)
            } else {
                text.no_wrap(true)
                    .overflow(Overflow::Crop)
                    .render_lines(code_width, self.tab_size)
            };
            for (part, mut line) in wrapped.into_iter().enumerate() {
                apply_base_style(&mut line, &background);
                let mut row: Line = Vec::new();
                if self.line_numbers {
                    if part > 0 {
                        row.extend(blank_line(gutter, &background));
                    } else if self.highlight_lines.contains(&number) {
                        row.push(Segment::new("❱ ", background.clone().color(Color::Ansi(1))));
                        row.push(Segment::new(
                            format!("{:>digits$} ", number),
                            number_style.clone().bold(true),
                        ));
                    } else {
                        row.push(Segment::new("  ", number_style.clone()));
                        row.push(Segment::new(format!("{:>digits$} ", number), number_style.clone()));
                    }
                }
                row.extend(fit_line(line, code_width, Justify::Left, &background));
                out.push(row);
            }
        }
        out
    }
}

fn convert_style(style: highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::new().color(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.bold(true);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.italic(true);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.underline(true);
    }
    out
}

fn expand_tabs(line: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let spaces = tab_size - column % tab_size;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(c);
            column += char_width(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{render_to_string, OutputMode};
    use crate::segment::line_text;

    fn plain(width: usize) -> ConsoleOptions {
        ConsoleOptions::default().width(width).mode(OutputMode::Text)
    }

    #[test]
    fn test_known_lexers() {
        assert!(is_known_lexer("py"));
        assert!(is_known_lexer("rs"));
        assert!(!is_known_lexer("definitely-not-a-language"));
    }

    #[test]
    fn test_default_theme_is_bundled() {
        assert!(theme_names().contains(&DEFAULT_THEME));
    }

    #[test]
    fn test_highlight_keeps_text() {
        let lines = Syntax::new("x = 1\ny = 2\n", "py").highlight().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].plain_text(), "x = 1");
        assert!(lines[0].fragments().len() > 1);
    }

    #[test]
    fn test_unknown_lexer_is_plain_text() {
        let lines = Syntax::new("some words", "nope").highlight().unwrap();
        assert_eq!(lines[0].plain_text(), "some words");
    }

    #[test]
    fn test_line_numbers_and_pointer() {
        let code = Syntax::new("a\nb", "txt")
            .line_numbers(true)
            .start_line(9)
            .highlight_lines([10]);
        let lines = code.render_lines(&plain(20));
        assert_eq!(line_text(&lines[0]).trim_end(), "   9 a");
        assert_eq!(line_text(&lines[1]).trim_end(), "❱ 10 b");
    }

    #[test]
    fn test_dedent_and_tabs() {
        let code = Syntax::new("    if x:\n    \tpass", "py")
            .dedent(true)
            .tab_size(2);
        let out = render_to_string(&code.into(), &plain(30));
        assert_eq!(out, "if x:\n  pass\n");
    }

    #[test]
    fn test_crop_and_wrap() {
        let long = "abcdefghij";
        let cropped = Syntax::new(long, "txt").render_lines(&plain(4));
        assert_eq!(cropped.len(), 1);
        let wrapped = Syntax::new(long, "txt").word_wrap(true).render_lines(&plain(4));
        assert_eq!(wrapped.len(), 3);
    }

    #[test]
    fn test_measure() {
        let code = Syntax::new("ab\nabcd", "txt").line_numbers(true);
        assert_eq!(code.measure(&plain(80)), Measurement::new(4, 8));
    }
}
