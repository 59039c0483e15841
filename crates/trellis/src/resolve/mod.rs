//! Resolution of component trees into backend objects.
//!
//! [`dispatch`] matches on the component kind and hands the props to that
//! kind's resolver. Resolvers recurse through [`dispatch`] for nested
//! components, so a tree resolves top-down in a single pass. Nothing is
//! cached: resolving the same tree twice builds two equal object graphs.

mod code;
mod column;
mod frame;
mod stack;
mod style;
mod table;
mod text;

pub use code::resolve_code;
pub use column::resolve_column;
pub use frame::resolve_frame;
pub use stack::resolve_stack;
pub use style::{resolve_style, resolve_style_spec};
pub use table::{resolve_cell, resolve_table};
pub use text::{resolve_string_or_text, resolve_text};

use tracing::debug;
use trellis_render as backend;
use trellis_render::Renderable;

use crate::component::{Component, ComponentKind};
use crate::components::Displayable;
use crate::error::{ResolveError, Result};

/// A backend object built from one component.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Text(backend::Text),
    Syntax(backend::Syntax),
    Style(backend::Style),
    /// Tables, and the grids stacks resolve to.
    Table(backend::Table),
    Column(backend::Column),
    Panel(backend::Panel),
}

impl Resolved {
    /// Converts into something the console can print.
    ///
    /// Styles and columns only make sense attached to other objects and fail
    /// with [`ResolveError::NotDisplayable`].
    pub fn into_renderable(self) -> Result<Renderable> {
        match self {
            Resolved::Text(text) => Ok(text.into()),
            Resolved::Syntax(syntax) => Ok(syntax.into()),
            Resolved::Table(table) => Ok(table.into()),
            Resolved::Panel(panel) => Ok(panel.into()),
            Resolved::Style(_) => Err(ResolveError::NotDisplayable {
                kind: ComponentKind::Style,
            }),
            Resolved::Column(_) => Err(ResolveError::NotDisplayable {
                kind: ComponentKind::Column,
            }),
        }
    }
}

/// Routes a component to the resolver for its kind.
pub fn dispatch(component: &Component) -> Result<Resolved> {
    let kind = component.kind();
    debug!(%kind, "resolving component");
    match component {
        Component::Text(props) => resolve_text(props).map(Resolved::Text),
        Component::Code(props) => resolve_code(props).map(Resolved::Syntax),
        Component::Style(props) => resolve_style(props).map(Resolved::Style),
        Component::Table(props) => resolve_table(props).map(Resolved::Table),
        Component::Column(props) => resolve_column(props).map(Resolved::Column),
        Component::Frame(props) => resolve_frame(props).map(Resolved::Panel),
        Component::HStack(props) | Component::VStack(props) => {
            resolve_stack(kind, props).map(Resolved::Table)
        }
    }
}

/// Resolves frame or stack content: strings pass through as plain text.
pub fn resolve_displayable(displayable: &Displayable) -> Result<Renderable> {
    match displayable {
        Displayable::Str(s) => Ok(Renderable::from(s.as_str())),
        Displayable::Component(component) => dispatch(component)?.into_renderable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Column, Frame, Stack, Style, Text};

    #[test]
    fn test_dispatch_picks_resolver_by_kind() {
        assert!(matches!(
            dispatch(&Text::new("x").into()),
            Ok(Resolved::Text(_))
        ));
        assert!(matches!(
            dispatch(&Style::new().bold(true).into()),
            Ok(Resolved::Style(_))
        ));
        assert!(matches!(
            dispatch(&Column::new("h").into()),
            Ok(Resolved::Column(_))
        ));
        assert!(matches!(
            dispatch(&Frame::new("x").into()),
            Ok(Resolved::Panel(_))
        ));
        assert!(matches!(
            dispatch(&Component::hstack(Stack::new(["a"]))),
            Ok(Resolved::Table(_))
        ));
    }

    #[test]
    fn test_style_is_not_displayable() {
        let err = resolve_displayable(&Component::from(Style::new()).into()).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NotDisplayable {
                kind: ComponentKind::Style
            }
        ));
    }

    #[test]
    fn test_string_displayable_is_plain_text() {
        let renderable = resolve_displayable(&"hello".into()).unwrap();
        assert_eq!(renderable, Renderable::from("hello"));
    }
}
