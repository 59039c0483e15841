use trellis_render::Padding;

use super::{Cell, ColumnEntry, StringOrText, StyleSpec};

/// A bordered table of rows and columns.
///
/// Rows may hold more cells than there are declared columns; extra columns
/// are added with empty headers.
///
/// ```rust
/// use trellis::components::{Column, Table};
///
/// let table = Table::new()
///     .title("Inventory")
///     .column(Column::new("Item"))
///     .column("Qty")
///     .row(["apples", "3"])
///     .row(["kiwis", "12"])
///     .row_styles(["", "dim"])
///     .box_name("simple_head");
/// assert_eq!(table.rows.len(), 2);
/// assert_eq!(table.cols.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub title: Option<StringOrText>,
    pub caption: Option<StringOrText>,
    /// Cycled across body rows.
    pub row_styles: Vec<StyleSpec>,
    pub cols: Vec<ColumnEntry>,
    pub rows: Vec<Vec<Cell>>,
    /// Box vocabulary name; see [`crate::vocabulary::box_style`].
    pub box_name: Option<String>,
    pub expand: Option<bool>,
    pub padding: Option<Padding>,
    pub show_header: Option<bool>,
    pub show_edge: Option<bool>,
    pub show_lines: Option<bool>,
    pub pad_edge: Option<bool>,
    pub width: Option<usize>,
    pub header_style: Option<StyleSpec>,
    pub border_style: Option<StyleSpec>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<StringOrText>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<StringOrText>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn row_styles<S: Into<StyleSpec>>(mut self, styles: impl IntoIterator<Item = S>) -> Self {
        self.row_styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn column(mut self, column: impl Into<ColumnEntry>) -> Self {
        self.cols.push(column.into());
        self
    }

    pub fn row<C: Into<Cell>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn box_name(mut self, name: impl Into<String>) -> Self {
        self.box_name = Some(name.into());
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = Some(show);
        self
    }

    pub fn show_edge(mut self, show: bool) -> Self {
        self.show_edge = Some(show);
        self
    }

    pub fn show_lines(mut self, show: bool) -> Self {
        self.show_lines = Some(show);
        self
    }

    pub fn pad_edge(mut self, pad_edge: bool) -> Self {
        self.pad_edge = Some(pad_edge);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn header_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    pub fn border_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.border_style = Some(style.into());
        self
    }
}
