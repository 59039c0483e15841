//! Text styles.
//!
//! A [`Style`] is a set of optional attributes. `None` means "inherit": when
//! styles are layered with [`Style::combine`], `Some` values on the right
//! replace values on the left and `None` values keep them.
//!
//! ```rust
//! use trellis_render::{Color, Style};
//!
//! let base = Style::new().bold(true).color(Color::Ansi(1));
//! let over = Style::new().color(Color::Ansi(4));
//!
//! let merged = base.combine(&over);
//! assert_eq!(merged.bold, Some(true));
//! assert_eq!(merged.color, Some(Color::Ansi(4)));
//! ```
//!
//! Styles also parse from compact definitions such as `"bold red on white"`,
//! `"not italic"` or `"dim"`.

mod color;
mod error;

use std::str::FromStr;

pub use color::Color;
pub use error::StyleError;

/// Optional text attributes plus foreground and background colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Bold text.
    pub bold: Option<bool>,
    /// Dimmed/faded text.
    pub dim: Option<bool>,
    /// Italic text.
    pub italic: Option<bool>,
    /// Underlined text.
    pub underline: Option<bool>,
    /// Struck-through text.
    pub strike: Option<bool>,
    /// Line above the text.
    pub overline: Option<bool>,
    /// Swap foreground and background.
    pub reverse: Option<bool>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color.
    pub bgcolor: Option<Color>,
}

impl Style {
    /// Creates an empty style (all attributes inherited).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    pub fn dim(mut self, on: bool) -> Self {
        self.dim = Some(on);
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    pub fn strike(mut self, on: bool) -> Self {
        self.strike = Some(on);
        self
    }

    pub fn overline(mut self, on: bool) -> Self {
        self.overline = Some(on);
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bgcolor(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// Returns true if every attribute is inherited.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// Layers `other` on top of `self`.
    ///
    /// `Some` values in `other` override values in `self`; `None` values in
    /// `other` preserve `self`.
    pub fn combine(&self, other: &Style) -> Style {
        Style {
            bold: other.bold.or(self.bold),
            dim: other.dim.or(self.dim),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            strike: other.strike.or(self.strike),
            overline: other.overline.or(self.overline),
            reverse: other.reverse.or(self.reverse),
            color: other.color.or(self.color),
            bgcolor: other.bgcolor.or(self.bgcolor),
        }
    }

    /// Parses a style definition.
    ///
    /// Words are attributes (`bold`, `dim`, `italic`, `underline`, `strike`,
    /// `overline`, `reverse`, with the short forms `b`, `d`, `i`, `u`, `s`,
    /// `o`, `r`), `not <attribute>`, `on <color>` for the background, or a
    /// foreground color. The empty string and `none` parse to an empty style.
    pub fn parse(definition: &str) -> Result<Style, StyleError> {
        let mut style = Style::new();
        let invalid = |reason: String| StyleError::InvalidDefinition {
            definition: definition.to_string(),
            reason,
        };

        let lower = definition.trim().to_lowercase();
        if lower.is_empty() || lower == "none" {
            return Ok(style);
        }

        let mut words = lower.split_whitespace();
        while let Some(word) = words.next() {
            match word {
                "on" => {
                    let spec = words
                        .next()
                        .ok_or_else(|| invalid("'on' must be followed by a color".into()))?;
                    style.bgcolor = Some(Color::parse(spec)?);
                }
                "not" => {
                    let attr = words
                        .next()
                        .ok_or_else(|| invalid("'not' must be followed by an attribute".into()))?;
                    if !style.set_attribute(attr, false) {
                        return Err(invalid(format!("unknown attribute '{}'", attr)));
                    }
                }
                attr if style.set_attribute(attr, true) => {}
                color => {
                    style.color = Some(
                        Color::parse(color)
                            .map_err(|_| invalid(format!("unknown word '{}'", color)))?,
                    );
                }
            }
        }

        Ok(style)
    }

    fn set_attribute(&mut self, name: &str, on: bool) -> bool {
        let slot = match name {
            "bold" | "b" => &mut self.bold,
            "dim" | "d" => &mut self.dim,
            "italic" | "i" => &mut self.italic,
            "underline" | "u" => &mut self.underline,
            "strike" | "s" => &mut self.strike,
            "overline" | "o" => &mut self.overline,
            "reverse" | "r" => &mut self.reverse,
            _ => return false,
        };
        *slot = Some(on);
        true
    }

    /// Converts this style to a `console::Style`.
    ///
    /// Overline has no `console` equivalent and is emitted by [`Style::paint`].
    pub fn to_console(&self) -> console::Style {
        let mut style = console::Style::new();

        if let Some(fg) = self.color.and_then(|c| c.to_console_color()) {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bgcolor.and_then(|c| c.to_console_color()) {
            style = style.bg(bg);
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.dim == Some(true) {
            style = style.dim();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underline == Some(true) {
            style = style.underlined();
        }
        if self.reverse == Some(true) {
            style = style.reverse();
        }
        if self.strike == Some(true) {
            style = style.strikethrough();
        }

        style
    }

    /// Applies this style to `text` as ANSI escape codes.
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }
        let painted = self
            .to_console()
            .force_styling(true)
            .apply_to(text)
            .to_string();
        if self.overline == Some(true) {
            format!("\x1b[53m{}\x1b[55m", painted)
        } else {
            painted
        }
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_overrides_some_values() {
        let base = Style::new().bold(true).italic(true).color(Color::Ansi(1));
        let over = Style::new().italic(false).bgcolor(Color::Ansi(0));
        let merged = base.combine(&over);

        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.italic, Some(false));
        assert_eq!(merged.color, Some(Color::Ansi(1)));
        assert_eq!(merged.bgcolor, Some(Color::Ansi(0)));
    }

    #[test]
    fn test_combine_with_plain_is_identity() {
        let style = Style::new().underline(true);
        assert_eq!(style.combine(&Style::new()), style);
        assert_eq!(Style::new().combine(&style), style);
    }

    #[test]
    fn test_parse_definition() {
        let style = Style::parse("bold red on #202020").unwrap();
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.color, Some(Color::Ansi(1)));
        assert_eq!(style.bgcolor, Some(Color::Rgb(32, 32, 32)));
    }

    #[test]
    fn test_parse_negation_and_short_forms() {
        let style = Style::parse("not italic u").unwrap();
        assert_eq!(style.italic, Some(false));
        assert_eq!(style.underline, Some(true));
    }

    #[test]
    fn test_parse_empty_and_none() {
        assert!(Style::parse("").unwrap().is_plain());
        assert!(Style::parse("none").unwrap().is_plain());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Style::parse("bold sparkly"),
            Err(StyleError::InvalidDefinition { .. })
        ));
        assert!(Style::parse("on").is_err());
        assert!(Style::parse("not shiny").is_err());
        assert!(matches!(
            Style::parse("on nope"),
            Err(StyleError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_paint_plain_is_passthrough() {
        assert_eq!(Style::new().paint("hi"), "hi");
    }

    #[test]
    fn test_paint_emits_ansi() {
        let out = Style::new().bold(true).paint("hi");
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("hi"));

        let over = Style::new().overline(true).paint("hi");
        assert!(over.starts_with("\x1b[53m"));
        assert!(over.ends_with("\x1b[55m"));
    }
}
