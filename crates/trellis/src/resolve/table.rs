use trellis_render as backend;
use trellis_render::Renderable;

use super::column::resolve_column;
use super::style::{resolve_optional as resolve_optional_style, resolve_style, resolve_style_spec};
use super::text::{resolve_optional as resolve_optional_text, resolve_text};
use crate::components::{Cell, ColumnEntry, Table};
use crate::error::Result;
use crate::vocabulary::box_style;

/// Builds a backend table. Columns and rows keep their input order.
pub fn resolve_table(props: &Table) -> Result<backend::Table> {
    let mut table = backend::Table::new().box_style(Some(box_style(props.box_name.as_deref())));
    table.title = resolve_optional_text(props.title.as_ref())?;
    table.caption = resolve_optional_text(props.caption.as_ref())?;
    table.row_styles = props
        .row_styles
        .iter()
        .map(resolve_style_spec)
        .collect::<Result<_>>()?;

    if let Some(expand) = props.expand {
        table.expand = expand;
    }
    if let Some(padding) = props.padding {
        table.padding = padding;
    }
    if let Some(show) = props.show_header {
        table.show_header = show;
    }
    if let Some(show) = props.show_edge {
        table.show_edge = show;
    }
    if let Some(show) = props.show_lines {
        table.show_lines = show;
    }
    if let Some(pad_edge) = props.pad_edge {
        table.pad_edge = pad_edge;
    }
    table.width = props.width;
    if let Some(style) = resolve_optional_style(props.header_style.as_ref())? {
        table.header_style = style;
    }
    if let Some(style) = resolve_optional_style(props.border_style.as_ref())? {
        table.border_style = style;
    }

    for entry in &props.cols {
        table.add_column(resolve_column_entry(entry)?);
    }
    for row in &props.rows {
        let cells = row.iter().map(resolve_cell).collect::<Result<Vec<_>>>()?;
        table.add_row(cells);
    }
    Ok(table)
}

pub(crate) fn resolve_column_entry(entry: &ColumnEntry) -> Result<backend::Column> {
    match entry {
        ColumnEntry::Str(header) => Ok(backend::Column::new(header.as_str())),
        ColumnEntry::Text(header) => Ok(backend::Column::new(resolve_text(header)?)),
        ColumnEntry::Column(column) => resolve_column(column),
    }
}

/// Resolves one table cell into printable content.
pub fn resolve_cell(cell: &Cell) -> Result<Renderable> {
    match cell {
        Cell::Str(s) => Ok(Renderable::from(s.as_str())),
        Cell::Text(text) => Ok(resolve_text(text)?.into()),
        Cell::Style(style) => Ok(backend::Text::new().with_style(resolve_style(style)?).into()),
        Cell::Column(column) => Ok(resolve_column(column)?.header.into()),
        Cell::Group(cells) => Ok(Renderable::Group(
            cells.iter().map(resolve_cell).collect::<Result<_>>()?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Column, Style, Text};
    use trellis_render::box_style as glyphs;
    use trellis_render::{line_text, ConsoleOptions, OutputMode, Padding};

    #[test]
    fn test_rows_and_columns_keep_order() {
        let props = Table::new()
            .column("first")
            .column(Text::new("second"))
            .column(Column::new("third"))
            .row(["a", "b", "c"])
            .row(["d", "e", "f"]);
        let table = resolve_table(&props).unwrap();

        let headers: Vec<String> = table
            .columns()
            .iter()
            .map(|c| c.header.plain_text())
            .collect();
        assert_eq!(headers, vec!["first", "second", "third"]);

        let first_cells: Vec<Renderable> = table.rows().iter().map(|r| r.cells[0].clone()).collect();
        assert_eq!(first_cells, vec![Renderable::from("a"), Renderable::from("d")]);
    }

    #[test]
    fn test_box_name_is_mapped() {
        let table = resolve_table(&Table::new().box_name("ascii")).unwrap();
        assert_eq!(table.box_style, Some(glyphs::ASCII));
        let table = resolve_table(&Table::new()).unwrap();
        assert_eq!(table.box_style, Some(glyphs::ROUNDED));
    }

    #[test]
    fn test_passthrough_attributes() {
        let props = Table::new()
            .title("T")
            .caption(Text::new("C").italic(true))
            .row_styles(["", "dim"])
            .expand(true)
            .padding((0, 0))
            .show_header(false)
            .show_edge(false)
            .show_lines(true)
            .pad_edge(false)
            .width(50)
            .header_style("bold red")
            .border_style(Style::new().color("blue"));
        let table = resolve_table(&props).unwrap();
        assert_eq!(table.title.as_ref().map(|t| t.plain_text()), Some("T".into()));
        assert!(table.caption.is_some());
        assert_eq!(table.row_styles.len(), 2);
        assert!(table.row_styles[0].is_plain());
        assert_eq!(table.row_styles[1].dim, Some(true));
        assert!(table.expand);
        assert_eq!(table.padding, Padding::new(0, 0, 0, 0));
        assert!(!table.show_header && !table.show_edge && table.show_lines && !table.pad_edge);
        assert_eq!(table.width, Some(50));
        assert_eq!(table.header_style.bold, Some(true));
        assert!(table.border_style.color.is_some());
    }

    #[test]
    fn test_cell_kinds() {
        let style_cell = resolve_cell(&Style::new().bold(true).into()).unwrap();
        match style_cell {
            Renderable::Text(text) => {
                assert!(text.is_empty());
                assert_eq!(text.style.bold, Some(true));
            }
            other => panic!("expected text, got {:?}", other),
        }

        let column_cell = resolve_cell(&Column::new("hdr").into()).unwrap();
        assert_eq!(column_cell, Renderable::from(backend::Text::plain("hdr")));

        let group = resolve_cell(&Cell::Group(vec!["x".into(), "y".into()])).unwrap();
        assert_eq!(
            group,
            Renderable::Group(vec![Renderable::from("x"), Renderable::from("y")])
        );
    }

    #[test]
    fn test_group_cell_renders_stacked() {
        let props = Table::new()
            .box_name("ascii")
            .show_header(false)
            .row([Cell::Group(vec!["top".into(), "bottom".into()])]);
        let table = resolve_table(&props).unwrap();
        let options = ConsoleOptions::default().width(20).mode(OutputMode::Text);
        let lines: Vec<String> = Renderable::from(table)
            .render_lines(&options)
            .iter()
            .map(|l| line_text(l))
            .collect();
        assert_eq!(lines, vec!["+--------+", "| top    |", "| bottom |", "+--------+"]);
    }
}
