//! Entry points: resolve a tree, or resolve and print it.

use std::io::Write;

use serde_json::Value;
use trellis_render::{Console, ConsoleOptions, Renderable};

use crate::component::Component;
use crate::error::Result;
use crate::resolve::{dispatch, Resolved};

/// Resolves a component tree into backend objects. Never prints.
pub fn resolve(component: &Component) -> Result<Resolved> {
    dispatch(component)
}

/// Decodes a tree in tagged form, then resolves it.
pub fn resolve_value(value: &Value) -> Result<Resolved> {
    resolve(&Component::from_value(value)?)
}

/// Resolves a tree into something printable.
pub fn renderable(component: &Component) -> Result<Renderable> {
    resolve(component)?.into_renderable()
}

/// Resolves a tree and prints it to standard output.
pub fn render(component: &Component) -> Result<()> {
    render_to(component, &mut Console::stdout())
}

/// Decodes a tree in tagged form and prints it to standard output.
pub fn render_value(value: &Value) -> Result<()> {
    render(&Component::from_value(value)?)
}

/// Resolves a tree and prints it to `console`.
///
/// Nothing is written if resolution fails.
pub fn render_to<W: Write>(component: &Component, console: &mut Console<W>) -> Result<()> {
    let renderable = renderable(component)?;
    console.print(&renderable)?;
    Ok(())
}

/// Resolves a tree and renders it to a string.
pub fn render_to_string(component: &Component, options: &ConsoleOptions) -> Result<String> {
    let renderable = renderable(component)?;
    Ok(trellis_render::render_to_string(&renderable, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Frame, Style, Text};
    use crate::error::ResolveError;
    use serde_json::json;
    use trellis_render::OutputMode;

    fn plain(width: usize) -> ConsoleOptions {
        ConsoleOptions::default().width(width).mode(OutputMode::Text)
    }

    #[test]
    fn test_render_to_buffer() {
        let mut console = Console::buffer(plain(20));
        render_to(&Text::new("hello").into(), &mut console).unwrap();
        assert_eq!(console.contents(), "hello\n");
    }

    #[test]
    fn test_failed_resolution_prints_nothing() {
        let mut console = Console::buffer(plain(20));
        let err = render_to(&Frame::default().into(), &mut console).unwrap_err();
        assert!(matches!(err, ResolveError::MissingField { .. }));
        assert_eq!(console.contents(), "");
    }

    #[test]
    fn test_style_alone_is_not_printable() {
        let err = render_to_string(&Style::new().into(), &plain(20)).unwrap_err();
        assert!(matches!(err, ResolveError::NotDisplayable { .. }));
    }

    #[test]
    fn test_resolve_value() {
        let resolved = resolve_value(&json!({"Text": [{"data": "x"}]})).unwrap();
        assert_eq!(resolved, Resolved::Text(trellis_render::Text::plain("x")));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let tree = Frame::new(Text::new("same").bold(true)).title("t").into();
        assert_eq!(resolve(&tree).unwrap(), resolve(&tree).unwrap());
    }
}
