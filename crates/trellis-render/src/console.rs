//! Printing renderables to a terminal or any writer.
//!
//! [`ConsoleOptions`] carries the width and output mode. [`Console`] lays a
//! [`Renderable`] out at that width and writes it line by line, styled with
//! ANSI codes in [`OutputMode::Term`] and as plain text in
//! [`OutputMode::Text`].

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::renderable::Renderable;
use crate::segment::{line_text, Line};
use crate::text::Overflow;

/// Width used when neither the terminal nor `COLUMNS` reports one.
pub const DEFAULT_WIDTH: usize = 80;

/// Whether output carries ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Style when the terminal supports it (TTY, no `NO_COLOR`).
    #[default]
    Auto,
    /// Always style.
    Term,
    /// Never style.
    Text,
}

impl OutputMode {
    /// Resolves `Auto` against the current terminal.
    pub fn is_styled(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Layout settings for one print.
///
/// Deserializes from configuration with every field optional:
///
/// ```rust
/// use trellis_render::{ConsoleOptions, OutputMode};
///
/// let options: ConsoleOptions = serde_json::from_str(r#"{"width": 100, "mode": "text"}"#).unwrap();
/// assert_eq!(options.width, 100);
/// assert_eq!(options.mode, OutputMode::Text);
/// assert_eq!(options.tab_size, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleOptions {
    /// Available width in columns.
    pub width: usize,
    pub mode: OutputMode,
    pub tab_size: usize,
    /// Set by containers: forbid wrapping of text.
    #[serde(skip)]
    pub no_wrap: bool,
    /// Set by containers: override text overflow.
    #[serde(skip)]
    pub overflow: Option<Overflow>,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            width: DEFAULT_WIDTH,
            mode: OutputMode::Auto,
            tab_size: 8,
            no_wrap: false,
            overflow: None,
        }
    }
}

impl ConsoleOptions {
    /// Options for the current terminal.
    pub fn detect() -> Self {
        Self::default().width(detect_width())
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }
}

/// Terminal width, then `COLUMNS`, then [`DEFAULT_WIDTH`].
pub fn detect_width() -> usize {
    terminal_width()
        .or_else(columns_from_env)
        .unwrap_or(DEFAULT_WIDTH)
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|w| *w > 0)
}

/// Lays a renderable out at `options.width`.
pub fn render_lines(renderable: &Renderable, options: &ConsoleOptions) -> Vec<Line> {
    renderable.render_lines(options)
}

/// Renders to a string, one `\n`-terminated line per rendered line.
///
/// In text mode trailing spaces are dropped from every line.
pub fn render_to_string(renderable: &Renderable, options: &ConsoleOptions) -> String {
    let styled = options.mode.is_styled();
    let mut out = String::new();
    for line in render_lines(renderable, options) {
        if styled {
            for segment in &line {
                out.push_str(&segment.style.paint(&segment.text));
            }
        } else {
            out.push_str(line_text(&line).trim_end_matches(' '));
        }
        out.push('\n');
    }
    out
}

/// Writes renderables to an output stream.
pub struct Console<W: Write> {
    writer: W,
    options: ConsoleOptions,
}

impl Console<io::Stdout> {
    /// A console on standard output sized to the terminal.
    pub fn stdout() -> Self {
        Console::new(io::stdout(), ConsoleOptions::detect())
    }
}

impl Console<Vec<u8>> {
    /// A console that captures output in memory.
    pub fn buffer(options: ConsoleOptions) -> Self {
        Console::new(Vec::new(), options)
    }

    /// Everything printed so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, options: ConsoleOptions) -> Self {
        Console { writer, options }
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ConsoleOptions {
        &mut self.options
    }

    /// Lays out and writes one renderable.
    pub fn print(&mut self, renderable: &Renderable) -> Result<(), RenderError> {
        let rendered = render_to_string(renderable, &self.options);
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::text::Text;
    use serial_test::serial;

    #[test]
    fn test_text_mode_is_plain_and_trimmed() {
        let text = Text::styled("hi", Style::new().bold(true));
        let options = ConsoleOptions::default().mode(OutputMode::Text);
        assert_eq!(render_to_string(&text.into(), &options), "hi\n");
    }

    #[test]
    fn test_term_mode_is_styled() {
        let text = Text::styled("hi", Style::new().bold(true));
        let options = ConsoleOptions::default().mode(OutputMode::Term);
        let out = render_to_string(&text.into(), &options);
        assert!(out.contains("\x1b["), "{:?}", out);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_buffer_console_captures() {
        let mut console = Console::buffer(ConsoleOptions::default().mode(OutputMode::Text));
        console.print(&"one".into()).unwrap();
        console.print(&"two".into()).unwrap();
        assert_eq!(console.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_options_from_partial_config() {
        let options: ConsoleOptions = serde_json::from_str(r#"{"tab_size": 2}"#).unwrap();
        assert_eq!(options.width, DEFAULT_WIDTH);
        assert_eq!(options.mode, OutputMode::Auto);
        assert_eq!(options.tab_size, 2);
    }

    #[test]
    #[serial]
    fn test_columns_from_env() {
        std::env::set_var("COLUMNS", "123");
        assert_eq!(columns_from_env(), Some(123));
        std::env::set_var("COLUMNS", "wide");
        assert_eq!(columns_from_env(), None);
        std::env::remove_var("COLUMNS");
        assert_eq!(columns_from_env(), None);
    }
}
