//! Names accepted by components, mapped onto backend values.
//!
//! Box names select border glyphs; language names select a syntax lexer.
//! Unknown names never fail: boxes fall back to [`box_style::ROUNDED`] and
//! languages are handed to the backend as-is, which renders them as plain text
//! when it has no matching lexer.

use tracing::trace;
use trellis_render::box_style::{self, BoxStyle};
use trellis_render::is_known_lexer;

/// Box names and the border glyphs they select.
pub const BOX_NAMES: [(&str, BoxStyle); 14] = [
    ("ascii", box_style::ASCII),
    ("square", box_style::SQUARE),
    ("minimal", box_style::MINIMAL),
    ("minimal_heavy_head", box_style::MINIMAL_HEAVY_HEAD),
    ("minimal_double_head", box_style::MINIMAL_DOUBLE_HEAD),
    ("simple", box_style::SIMPLE),
    ("heavy", box_style::HEAVY),
    ("heavy_edge", box_style::HEAVY_EDGE),
    ("heavy_head", box_style::HEAVY_HEAD),
    ("double", box_style::DOUBLE),
    ("double_edge", box_style::DOUBLE_EDGE),
    ("simple_heavy", box_style::SIMPLE_HEAVY),
    ("horizontals", box_style::HORIZONTALS),
    ("rounded", box_style::ROUNDED),
];

/// Maps a box name onto backend glyphs; unknown or absent names are rounded.
pub fn box_style(name: Option<&str>) -> BoxStyle {
    let Some(name) = name else {
        return box_style::ROUNDED;
    };
    match BOX_NAMES.iter().find(|(known, _)| *known == name) {
        Some((_, style)) => *style,
        None => {
            trace!(name, "unknown box name, using rounded");
            box_style::ROUNDED
        }
    }
}

/// Language aliases whose lexer token differs from the name.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("python3", "py"),
    ("python", "py"),
    ("py3", "py"),
    ("rust", "rs"),
    ("javascript", "js"),
    ("node", "js"),
    ("bash", "sh"),
    ("shell", "sh"),
    ("zsh", "sh"),
    ("console", "sh"),
    ("c++", "cpp"),
    ("csharp", "cs"),
    ("c#", "cs"),
    ("markdown", "md"),
    ("ruby", "rb"),
    ("haskell", "hs"),
    ("perl", "pl"),
    ("golang", "go"),
    ("text", "txt"),
    ("plain", "txt"),
    ("graphql", "txt"),
];

/// Maps a language name onto the lexer token the backend looks up.
///
/// ```rust
/// use trellis::vocabulary::lexer_token;
///
/// assert_eq!(lexer_token("python3"), "py");
/// assert_eq!(lexer_token("Rust"), "rs");
/// assert_eq!(lexer_token("yaml"), "yaml");
/// ```
pub fn lexer_token(language: &str) -> String {
    let lowered = language.trim().to_ascii_lowercase();
    let token = LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, token)| (*token).to_string())
        .unwrap_or(lowered);
    if !is_known_lexer(&token) {
        trace!(language, token = %token, "no lexer for language, rendering as plain text");
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_maps_to_its_constant() {
        for (name, style) in BOX_NAMES {
            assert_eq!(box_style(Some(name)), style);
            assert_eq!(style.name(), name);
        }
    }

    #[test]
    fn test_absent_and_unknown_are_rounded() {
        assert_eq!(box_style(None), box_style::ROUNDED);
        assert_eq!(box_style(Some("wavy")), box_style::ROUNDED);
        assert_eq!(box_style(Some("ASCII")), box_style::ROUNDED);
    }

    #[test]
    fn test_known_languages_have_lexers() {
        for language in ["python3", "rust", "json", "yaml", "bash", "markdown", "text"] {
            assert!(
                is_known_lexer(&lexer_token(language)),
                "no lexer for {}",
                language
            );
        }
    }

    #[test]
    fn test_unknown_language_passes_through() {
        assert_eq!(lexer_token("Brainfuck"), "brainfuck");
    }
}
