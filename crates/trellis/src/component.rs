//! The component tree.
//!
//! A [`Component`] is an immutable description of one renderable unit. Each
//! variant carries the typed attributes of its kind; nesting components means
//! nesting fresh values, so trees are always finite and acyclic.

use std::fmt;
use std::str::FromStr;

use crate::components::{Code, Column, Frame, Stack, Style, Table, Text};

/// The closed set of component kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Text,
    Code,
    Style,
    Table,
    Column,
    Frame,
    HStack,
    VStack,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Text,
        ComponentKind::Code,
        ComponentKind::Style,
        ComponentKind::Table,
        ComponentKind::Column,
        ComponentKind::Frame,
        ComponentKind::HStack,
        ComponentKind::VStack,
    ];

    /// The tag used in the dynamic form.
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentKind::Text => "Text",
            ComponentKind::Code => "Code",
            ComponentKind::Style => "Style",
            ComponentKind::Table => "Table",
            ComponentKind::Column => "Column",
            ComponentKind::Frame => "Frame",
            ComponentKind::HStack => "HStack",
            ComponentKind::VStack => "VStack",
        }
    }

    /// Looks a kind up by its exact tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Whether a resolved component of this kind can be printed by itself.
    pub fn is_displayable(&self) -> bool {
        !matches!(self, ComponentKind::Style | ComponentKind::Column)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not a component tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// One node of a declarative UI tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    Text(Text),
    Code(Code),
    Style(Style),
    Table(Table),
    Column(Column),
    Frame(Frame),
    HStack(Stack),
    VStack(Stack),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Text(_) => ComponentKind::Text,
            Component::Code(_) => ComponentKind::Code,
            Component::Style(_) => ComponentKind::Style,
            Component::Table(_) => ComponentKind::Table,
            Component::Column(_) => ComponentKind::Column,
            Component::Frame(_) => ComponentKind::Frame,
            Component::HStack(_) => ComponentKind::HStack,
            Component::VStack(_) => ComponentKind::VStack,
        }
    }

    /// A horizontal stack: all children side by side in one row.
    pub fn hstack(stack: Stack) -> Self {
        Component::HStack(stack)
    }

    /// A vertical stack: one row per child.
    pub fn vstack(stack: Stack) -> Self {
        Component::VStack(stack)
    }
}

impl From<Text> for Component {
    fn from(text: Text) -> Self {
        Component::Text(text)
    }
}

impl From<Code> for Component {
    fn from(code: Code) -> Self {
        Component::Code(code)
    }
}

impl From<Style> for Component {
    fn from(style: Style) -> Self {
        Component::Style(style)
    }
}

impl From<Table> for Component {
    fn from(table: Table) -> Self {
        Component::Table(table)
    }
}

impl From<Column> for Component {
    fn from(column: Column) -> Self {
        Component::Column(column)
    }
}

impl From<Frame> for Component {
    fn from(frame: Frame) -> Self {
        Component::Frame(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.tag().parse::<ComponentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("text".parse::<ComponentKind>().is_err());
        assert_eq!(
            "Grid".parse::<ComponentKind>(),
            Err(UnknownKind("Grid".into()))
        );
    }

    #[test]
    fn test_kind_of_component() {
        assert_eq!(
            Component::from(Text::new("x")).kind(),
            ComponentKind::Text
        );
        assert_eq!(
            Component::vstack(Stack::default()).kind(),
            ComponentKind::VStack
        );
        assert!(!ComponentKind::Column.is_displayable());
        assert!(ComponentKind::Frame.is_displayable());
    }
}
