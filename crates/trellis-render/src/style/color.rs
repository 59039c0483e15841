//! Color specifications.
//!
//! Supported formats:
//!
//! - `default`: the terminal's own foreground/background
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - `grey` / `gray` (bright black)
//! - 256-color palette: `color(208)`
//! - RGB hex: `#ff6b35` or `#fff`
//! - RGB function: `rgb(255, 107, 53)`
//!
//! ```rust
//! use trellis_render::Color;
//!
//! assert_eq!(Color::parse("red").unwrap(), Color::Ansi(1));
//! assert_eq!(Color::parse("#ff6b35").unwrap(), Color::Rgb(255, 107, 53));
//! assert_eq!(Color::parse("color(208)").unwrap(), Color::Palette(208));
//! ```

use std::fmt;
use std::str::FromStr;

use super::StyleError;
use crate::util::rgb_to_ansi256;

const NAMED: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal default.
    Default,
    /// One of the 16 standard ANSI colors (0-7 normal, 8-15 bright).
    Ansi(u8),
    /// 256-color palette index.
    Palette(u8),
    /// True color RGB, emitted as the nearest palette entry.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses a color specification.
    pub fn parse(spec: &str) -> Result<Self, StyleError> {
        let s = spec.trim();
        let lower = s.to_lowercase();

        if lower == "default" {
            return Ok(Color::Default);
        }
        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(s, hex);
        }
        if let Some(inner) = function_args(&lower, "color") {
            let index = inner
                .trim()
                .parse::<u8>()
                .map_err(|_| StyleError::color(s, "palette index must be 0-255"))?;
            return Ok(Color::Palette(index));
        }
        if let Some(inner) = function_args(&lower, "rgb") {
            return Self::parse_rgb_args(s, inner);
        }
        Self::parse_named(s, &lower)
    }

    fn parse_hex(original: &str, hex: &str) -> Result<Self, StyleError> {
        if !hex.is_ascii() {
            return Err(StyleError::color(original, "invalid hex digit"));
        }
        let digit = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| StyleError::color(original, "invalid hex digit"))
        };
        match hex.len() {
            3 => Ok(Color::Rgb(
                digit(0..1)? * 17,
                digit(1..2)? * 17,
                digit(2..3)? * 17,
            )),
            6 => Ok(Color::Rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(StyleError::color(original, "hex colors need 3 or 6 digits")),
        }
    }

    fn parse_rgb_args(original: &str, inner: &str) -> Result<Self, StyleError> {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(StyleError::color(
                original,
                format!("rgb() takes 3 components, got {}", parts.len()),
            ));
        }
        let mut components = [0u8; 3];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .parse::<u8>()
                .map_err(|_| StyleError::color(original, "rgb components must be 0-255"))?;
        }
        Ok(Color::Rgb(components[0], components[1], components[2]))
    }

    fn parse_named(original: &str, lower: &str) -> Result<Self, StyleError> {
        if lower == "grey" || lower == "gray" {
            return Ok(Color::Ansi(8));
        }
        let (base, offset) = match lower.strip_prefix("bright_") {
            Some(base) => (base, 8),
            None => (lower, 0),
        };
        NAMED
            .iter()
            .position(|name| *name == base)
            .map(|index| Color::Ansi(index as u8 + offset))
            .ok_or_else(|| StyleError::color(original, "unknown color name"))
    }

    /// Converts to a `console::Color`; `None` for the terminal default.
    pub fn to_console_color(&self) -> Option<console::Color> {
        match *self {
            Color::Default => None,
            Color::Ansi(n) => Some(match n {
                0 => console::Color::Black,
                1 => console::Color::Red,
                2 => console::Color::Green,
                3 => console::Color::Yellow,
                4 => console::Color::Blue,
                5 => console::Color::Magenta,
                6 => console::Color::Cyan,
                7 => console::Color::White,
                n => console::Color::Color256(n),
            }),
            Color::Palette(n) => Some(console::Color::Color256(n)),
            Color::Rgb(r, g, b) => Some(console::Color::Color256(rgb_to_ansi256((r, g, b)))),
        }
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Default => write!(f, "default"),
            Color::Ansi(n) if n < 8 => write!(f, "{}", NAMED[n as usize]),
            Color::Ansi(n) => write!(f, "bright_{}", NAMED[(n as usize - 8) % 8]),
            Color::Palette(n) => write!(f, "color({})", n),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("black").unwrap(), Color::Ansi(0));
        assert_eq!(Color::parse("Cyan").unwrap(), Color::Ansi(6));
        assert_eq!(Color::parse("bright_red").unwrap(), Color::Ansi(9));
        assert_eq!(Color::parse("grey").unwrap(), Color::Ansi(8));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#2a3240").unwrap(), Color::Rgb(42, 50, 64));
        assert_eq!(Color::parse("#fff").unwrap(), Color::Rgb(255, 255, 255));
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(Color::parse("color(42)").unwrap(), Color::Palette(42));
        assert_eq!(
            Color::parse("rgb(1, 2, 3)").unwrap(),
            Color::Rgb(1, 2, 3)
        );
        assert!(Color::parse("color(256)").is_err());
        assert!(Color::parse("rgb(1,2)").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = Color::parse("ultraviolet").unwrap_err();
        assert!(matches!(err, StyleError::InvalidColor { .. }));
    }

    #[test]
    fn test_to_console_color() {
        assert_eq!(Color::Default.to_console_color(), None);
        assert_eq!(
            Color::Ansi(1).to_console_color(),
            Some(console::Color::Red)
        );
        assert_eq!(
            Color::Ansi(9).to_console_color(),
            Some(console::Color::Color256(9))
        );
        assert_eq!(
            Color::Rgb(255, 0, 0).to_console_color(),
            Some(console::Color::Color256(196))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for spec in ["default", "red", "bright_blue", "color(17)", "#ff7e74"] {
            let color = Color::parse(spec).unwrap();
            assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
        }
    }
}
