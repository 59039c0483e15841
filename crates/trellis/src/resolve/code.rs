use trellis_render::{Color, Syntax};

use crate::components::Code;
use crate::error::Result;
use crate::vocabulary::lexer_token;

/// Builds a syntax block; unset options keep the backend defaults.
pub fn resolve_code(props: &Code) -> Result<Syntax> {
    let mut syntax = Syntax::new(props.code.as_str(), lexer_token(&props.language));
    if let Some(theme) = &props.theme {
        syntax = syntax.theme(theme.as_str());
    }
    if let Some(on) = props.line_numbers {
        syntax = syntax.line_numbers(on);
    }
    if let Some(line) = props.start_line {
        syntax = syntax.start_line(line);
    }
    if let Some(tab_size) = props.tab_size {
        syntax = syntax.tab_size(tab_size);
    }
    if let Some(on) = props.word_wrap {
        syntax = syntax.word_wrap(on);
    }
    if let Some(color) = &props.background_color {
        syntax = syntax.background_color(Color::parse(color)?);
    }
    if let Some(width) = props.code_width {
        syntax = syntax.code_width(width);
    }
    if let Some(on) = props.dedent {
        syntax = syntax.dedent(on);
    }
    if !props.highlight_lines.is_empty() {
        syntax = syntax.highlight_lines(props.highlight_lines.iter().copied());
    }
    Ok(syntax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    #[test]
    fn test_default_language_is_python() {
        let syntax = resolve_code(&Code::new("print(1)")).unwrap();
        assert_eq!(syntax.lexer(), "py");
        assert_eq!(syntax.code(), "print(1)");
    }

    #[test]
    fn test_options_pass_through() {
        let props = Code::new("a\nb")
            .language("rust")
            .theme("InspiredGitHub")
            .line_numbers(true)
            .start_line(10)
            .highlight_lines([11])
            .dedent(true);
        let syntax = resolve_code(&props).unwrap();
        assert_eq!(syntax.lexer(), "rs");
        assert_eq!(syntax.theme, "InspiredGitHub");
        assert!(syntax.line_numbers);
        assert_eq!(syntax.start_line, 10);
        assert!(syntax.highlight_lines.contains(&11));
        assert!(syntax.dedent);
    }

    #[test]
    fn test_bad_background_color() {
        let err = resolve_code(&Code::new("x").background_color("nope")).unwrap_err();
        assert!(matches!(err, ResolveError::Style(_)));
    }
}
