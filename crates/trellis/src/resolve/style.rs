use trellis_render as backend;
use trellis_render::Color;

use crate::components::{Style, StyleSpec};
use crate::error::Result;

/// Builds a backend style; unset attributes stay unset.
pub fn resolve_style(props: &Style) -> Result<backend::Style> {
    Ok(backend::Style {
        bold: props.bold,
        italic: props.italic,
        strike: props.strike,
        underline: props.underline,
        overline: props.overline,
        color: props.color.as_deref().map(Color::parse).transpose()?,
        bgcolor: props
            .background_color
            .as_deref()
            .map(Color::parse)
            .transpose()?,
        ..backend::Style::default()
    })
}

/// Parses a definition string or resolves a [`Style`] component.
pub fn resolve_style_spec(spec: &StyleSpec) -> Result<backend::Style> {
    match spec {
        StyleSpec::Definition(definition) => Ok(backend::Style::parse(definition)?),
        StyleSpec::Style(props) => resolve_style(props),
    }
}

pub(crate) fn resolve_optional(spec: Option<&StyleSpec>) -> Result<Option<backend::Style>> {
    spec.map(resolve_style_spec).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    #[test]
    fn test_attributes_carry_over() {
        let style = resolve_style(&Style::new().bold(true).strike(false).color("red")).unwrap();
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.strike, Some(false));
        assert_eq!(style.italic, None);
        assert_eq!(style.color, Some(Color::parse("red").unwrap()));
    }

    #[test]
    fn test_background_color_maps_to_bgcolor() {
        let style = resolve_style(&Style::new().background_color("#2a3240")).unwrap();
        assert_eq!(style.bgcolor, Some(Color::parse("#2a3240").unwrap()));
        assert_eq!(style.color, None);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let err = resolve_style(&Style::new().color("not-a-color")).unwrap_err();
        assert!(matches!(err, ResolveError::Style(_)));
    }

    #[test]
    fn test_definition_strings_parse() {
        let style = resolve_style_spec(&"bold red".into()).unwrap();
        assert_eq!(style.bold, Some(true));
        assert!(resolve_style_spec(&"".into()).unwrap().is_plain());
    }
}
