//! Typed attributes for every component kind.
//!
//! Each kind has a props struct with defaults and builder methods. Fields
//! left at `None` fall through to the backend's own defaults when resolved.
//! The enums in this module are the union types attributes accept: a header
//! may be a plain string or a [`Text`], a style may be a definition string or
//! a [`Style`], and so on.

mod code;
mod column;
mod frame;
mod stack;
mod style;
mod table;
mod text;

pub use code::{Code, DEFAULT_LANGUAGE};
pub use column::Column;
pub use frame::Frame;
pub use stack::Stack;
pub use style::Style;
pub use table::Table;
pub use text::{Text, TextData};

use crate::component::Component;

/// A plain string or a styled [`Text`].
#[derive(Clone, Debug, PartialEq)]
pub enum StringOrText {
    Str(String),
    Text(Text),
}

impl Default for StringOrText {
    fn default() -> Self {
        StringOrText::Str(String::new())
    }
}

impl From<&str> for StringOrText {
    fn from(s: &str) -> Self {
        StringOrText::Str(s.to_string())
    }
}

impl From<String> for StringOrText {
    fn from(s: String) -> Self {
        StringOrText::Str(s)
    }
}

impl From<Text> for StringOrText {
    fn from(text: Text) -> Self {
        StringOrText::Text(text)
    }
}

/// A style definition string (`"bold red on black"`) or a [`Style`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleSpec {
    Definition(String),
    Style(Style),
}

impl From<&str> for StyleSpec {
    fn from(s: &str) -> Self {
        StyleSpec::Definition(s.to_string())
    }
}

impl From<String> for StyleSpec {
    fn from(s: String) -> Self {
        StyleSpec::Definition(s)
    }
}

impl From<Style> for StyleSpec {
    fn from(style: Style) -> Self {
        StyleSpec::Style(style)
    }
}

/// Content of a frame or stack: a raw string or any component.
#[derive(Clone, Debug, PartialEq)]
pub enum Displayable {
    Str(String),
    Component(Box<Component>),
}

impl From<&str> for Displayable {
    fn from(s: &str) -> Self {
        Displayable::Str(s.to_string())
    }
}

impl From<String> for Displayable {
    fn from(s: String) -> Self {
        Displayable::Str(s)
    }
}

impl From<Component> for Displayable {
    fn from(component: Component) -> Self {
        Displayable::Component(Box::new(component))
    }
}

impl From<Text> for Displayable {
    fn from(text: Text) -> Self {
        Component::Text(text).into()
    }
}

impl From<Code> for Displayable {
    fn from(code: Code) -> Self {
        Component::Code(code).into()
    }
}

impl From<Table> for Displayable {
    fn from(table: Table) -> Self {
        Component::Table(table).into()
    }
}

impl From<Frame> for Displayable {
    fn from(frame: Frame) -> Self {
        Component::Frame(frame).into()
    }
}

/// A column declaration: a header string, a header [`Text`] or a full [`Column`].
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnEntry {
    Str(String),
    Text(Text),
    Column(Column),
}

impl From<&str> for ColumnEntry {
    fn from(s: &str) -> Self {
        ColumnEntry::Str(s.to_string())
    }
}

impl From<String> for ColumnEntry {
    fn from(s: String) -> Self {
        ColumnEntry::Str(s)
    }
}

impl From<Text> for ColumnEntry {
    fn from(text: Text) -> Self {
        ColumnEntry::Text(text)
    }
}

impl From<Column> for ColumnEntry {
    fn from(column: Column) -> Self {
        ColumnEntry::Column(column)
    }
}

/// One table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Str(String),
    Text(Text),
    /// An empty run carrying this style.
    Style(Style),
    /// Contributes the column's header.
    Column(Column),
    /// Cells stacked vertically inside one table cell.
    Group(Vec<Cell>),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Str(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Str(s)
    }
}

impl From<Text> for Cell {
    fn from(text: Text) -> Self {
        Cell::Text(text)
    }
}

impl From<Style> for Cell {
    fn from(style: Style) -> Self {
        Cell::Style(style)
    }
}

impl From<Column> for Cell {
    fn from(column: Column) -> Self {
        Cell::Column(column)
    }
}

impl From<Vec<Cell>> for Cell {
    fn from(cells: Vec<Cell>) -> Self {
        Cell::Group(cells)
    }
}
