//! Tables and grids.
//!
//! A [`Table`] holds [`Column`]s and rows of [`Renderable`] cells. Any
//! renderable can sit in a cell, including other tables and panels, which
//! is how stacks of components are laid out: a grid is just a table with
//! no borders, no header and no padding.
//!
//! ```rust
//! use trellis_render::{box_style, render_to_string, Column, ConsoleOptions, OutputMode, Table};
//!
//! let mut table = Table::new().box_style(Some(box_style::ASCII));
//! table.add_column(Column::new("Name"));
//! table.add_column(Column::new("Qty"));
//! table.add_row(["apples", "3"]);
//!
//! let options = ConsoleOptions::default().width(40).mode(OutputMode::Text);
//! let out = render_to_string(&table.into(), &options);
//! assert_eq!(
//!     out,
//!     "+--------------+\n\
//!      | Name   | Qty |\n\
//!      |--------+-----|\n\
//!      | apples | 3   |\n\
//!      +--------------+\n"
//! );
//! ```

mod column;
pub mod layout;

pub use column::{Column, VerticalAlign};

use crate::box_style::{self, BoxStyle, RowLevel, Section};
use crate::console::ConsoleOptions;
use crate::measure::Measurement;
use crate::padding::Padding;
use crate::renderable::Renderable;
use crate::segment::{apply_base_style, blank_line, fit_line, Line, Segment};
use crate::style::Style;
use crate::text::{Justify, Text};

use layout::{resolve_widths, ColumnSpan};

/// One row of cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Renderable>,
    /// Style layered over the table's row styles.
    pub style: Option<Style>,
    /// Draw a separator below this row.
    pub end_section: bool,
}

/// A table of renderable cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    pub title: Option<Text>,
    pub caption: Option<Text>,
    /// Border characters; `None` draws no borders or dividers.
    pub box_style: Option<BoxStyle>,
    pub padding: Padding,
    /// Pad the outer side of the first and last columns.
    pub pad_edge: bool,
    /// Fill the available width.
    pub expand: bool,
    pub show_header: bool,
    pub show_footer: bool,
    pub show_edge: bool,
    /// Separator between every body row.
    pub show_lines: bool,
    pub width: Option<usize>,
    pub style: Style,
    /// Styles cycled over the body rows.
    pub row_styles: Vec<Style>,
    pub header_style: Style,
    pub footer_style: Style,
    pub border_style: Style,
    pub title_style: Style,
    pub caption_style: Style,
    pub title_justify: Justify,
    pub caption_justify: Justify,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            columns: Vec::new(),
            rows: Vec::new(),
            title: None,
            caption: None,
            box_style: Some(box_style::HEAVY_HEAD),
            padding: Padding::from((0, 1)),
            pad_edge: true,
            expand: false,
            show_header: true,
            show_footer: false,
            show_edge: true,
            show_lines: false,
            width: None,
            style: Style::new(),
            row_styles: Vec::new(),
            header_style: Style::new().bold(true),
            footer_style: Style::new().bold(true),
            border_style: Style::new(),
            title_style: Style::new().italic(true),
            caption_style: Style::new().dim(true).italic(true),
            title_justify: Justify::Center,
            caption_justify: Justify::Center,
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// A borderless, headerless table with no padding, for laying out
    /// renderables side by side.
    pub fn grid() -> Self {
        Table {
            box_style: None,
            padding: Padding::default(),
            pad_edge: false,
            show_header: false,
            show_edge: false,
            ..Table::default()
        }
    }

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<Text>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn box_style(mut self, box_style: Option<BoxStyle>) -> Self {
        self.box_style = box_style;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn pad_edge(mut self, pad_edge: bool) -> Self {
        self.pad_edge = pad_edge;
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn show_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    pub fn show_edge(mut self, show: bool) -> Self {
        self.show_edge = show;
        self
    }

    pub fn show_lines(mut self, show: bool) -> Self {
        self.show_lines = show;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn row_styles(mut self, styles: Vec<Style>) -> Self {
        self.row_styles = styles;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Appends a row. Extra cells add untitled columns; missing cells render
    /// empty.
    pub fn add_row<I, R>(&mut self, cells: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<Renderable>,
    {
        self.push_row(Row {
            cells: cells.into_iter().map(Into::into).collect(),
            style: None,
            end_section: false,
        });
    }

    /// Appends a fully specified row.
    pub fn push_row(&mut self, row: Row) {
        while self.columns.len() < row.cells.len() {
            self.columns.push(Column::default());
        }
        self.rows.push(row);
    }

    /// Ends the current section: a separator is drawn below the last row.
    pub fn add_section(&mut self) {
        if let Some(row) = self.rows.last_mut() {
            row.end_section = true;
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Borders and dividers, in columns.
    fn extra_width(&self) -> usize {
        match self.box_style {
            Some(_) => {
                let edges = if self.show_edge { 2 } else { 0 };
                edges + self.columns.len().saturating_sub(1)
            }
            None => 0,
        }
    }

    /// Left and right padding of the cells in column `index`.
    fn cell_padding(&self, index: usize) -> (usize, usize) {
        let last = self.columns.len().saturating_sub(1);
        let left = if index == 0 && !self.pad_edge {
            0
        } else {
            self.padding.left
        };
        let right = if index == last && !self.pad_edge {
            0
        } else {
            self.padding.right
        };
        (left, right)
    }

    fn cell_options(&self, column: &Column, width: usize, options: &ConsoleOptions) -> ConsoleOptions {
        let mut cell = options.clone().width(width);
        cell.no_wrap = cell.no_wrap || column.no_wrap;
        if column.overflow.is_some() {
            cell.overflow = column.overflow;
        }
        cell
    }

    fn measure_column(&self, index: usize, options: &ConsoleOptions) -> Measurement {
        let column = &self.columns[index];
        let (left, right) = self.cell_padding(index);
        let pad = left + right;
        if let Some(width) = column.width {
            return Measurement::new(width + pad, width + pad);
        }

        let cell_options = self.cell_options(column, options.width, options);
        let mut measurement = Measurement::default();
        if self.show_header {
            measurement = measurement.union(column.header.measure(options.tab_size));
        }
        if self.show_footer {
            measurement = measurement.union(column.footer.measure(options.tab_size));
        }
        for row in &self.rows {
            if let Some(cell) = row.cells.get(index) {
                measurement = measurement.union(cell.measure(&cell_options));
            }
        }
        measurement
            .with_bounds(column.min_width, column.max_width)
            .grow(pad)
    }

    fn column_widths(&self, max_width: usize, options: &ConsoleOptions) -> Vec<usize> {
        let options = options.clone().width(max_width);
        let spans: Vec<ColumnSpan> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnSpan {
                measurement: self.measure_column(index, &options),
                ratio: column.ratio,
                shrinkable: column.width.is_none() && !column.no_wrap,
            })
            .collect();
        resolve_widths(&spans, max_width, self.expand)
    }

    fn max_width(&self, options: &ConsoleOptions) -> usize {
        self.width.unwrap_or(options.width).min(options.width)
    }

    /// Minimum and maximum width of the whole table, borders included.
    pub fn measure(&self, options: &ConsoleOptions) -> Measurement {
        if let Some(width) = self.width {
            let width = width.min(options.width);
            return Measurement::new(width, width);
        }
        let extra = self.extra_width();
        let inner = options.clone().width(options.width.saturating_sub(extra));
        let (minimum, maximum) = (0..self.columns.len())
            .map(|index| self.measure_column(index, &inner))
            .fold((0, 0), |(min, max), m| (min + m.minimum, max + m.maximum));
        Measurement::new(minimum + extra, maximum + extra).clamp_to(options.width)
    }

    /// Lays the table out within `options.width`.
    pub fn render_lines(&self, options: &ConsoleOptions) -> Vec<Line> {
        if self.columns.is_empty() {
            return Vec::new();
        }
        let extra = self.extra_width();
        let widths = self.column_widths(self.max_width(options).saturating_sub(extra), options);
        let table_width: usize = widths.iter().sum::<usize>() + extra;

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.extend(self.render_label(
                title,
                &self.title_style,
                self.title_justify,
                table_width,
                options,
            ));
        }
        lines.extend(self.render_body(&widths, options));
        if let Some(caption) = &self.caption {
            lines.extend(self.render_label(
                caption,
                &self.caption_style,
                self.caption_justify,
                table_width,
                options,
            ));
        }
        lines
    }

    fn render_label(
        &self,
        label: &Text,
        style: &Style,
        justify: Justify,
        width: usize,
        options: &ConsoleOptions,
    ) -> Vec<Line> {
        let mut text = label.clone();
        text.style = style.combine(&label.style);
        if text.justify == Justify::Default {
            text.justify = justify;
        }
        text.render_lines(width, options.tab_size)
            .into_iter()
            .map(|line| fit_line(line, width, text.justify, &text.style))
            .collect()
    }

    fn row_style(&self, index: usize, row: &Row) -> Style {
        let cycled = match self.row_styles.len() {
            0 => Style::new(),
            n => self.row_styles[index % n].clone(),
        };
        match &row.style {
            Some(style) => cycled.combine(style),
            None => cycled,
        }
    }

    fn render_body(&self, widths: &[usize], options: &ConsoleOptions) -> Vec<Line> {
        let border = self.style.combine(&self.border_style);
        let edge = self.show_edge;
        let mut lines = Vec::new();

        if let (Some(b), true) = (self.box_style, edge) {
            lines.push(vec![Segment::new(b.top(widths, true), border.clone())]);
        }

        if self.show_header {
            let style = self.style.combine(&self.header_style);
            let cells: Vec<(Renderable, Style)> = self
                .columns
                .iter()
                .map(|c| (Renderable::Text(c.header.clone()), style.combine(&c.header_style)))
                .collect();
            lines.extend(self.render_row(&cells, widths, Section::Head, &border, options));
            if let Some(b) = self.box_style {
                lines.push(vec![Segment::new(
                    b.separator(RowLevel::HeadRow, widths, edge),
                    border.clone(),
                )]);
            }
        }

        let last = self.rows.len().saturating_sub(1);
        for (index, row) in self.rows.iter().enumerate() {
            let row_style = self.style.combine(&self.row_style(index, row));
            let cells: Vec<(Renderable, Style)> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let cell = row
                        .cells
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| Renderable::Text(Text::new()));
                    (cell, column.style.combine(&row_style))
                })
                .collect();
            lines.extend(self.render_row(&cells, widths, Section::Mid, &border, options));

            if let Some(b) = self.box_style {
                if index < last && (self.show_lines || row.end_section) {
                    lines.push(vec![Segment::new(
                        b.separator(RowLevel::Row, widths, edge),
                        border.clone(),
                    )]);
                }
            }
        }

        if self.show_footer {
            if let Some(b) = self.box_style {
                lines.push(vec![Segment::new(
                    b.separator(RowLevel::FootRow, widths, edge),
                    border.clone(),
                )]);
            }
            let style = self.style.combine(&self.footer_style);
            let cells: Vec<(Renderable, Style)> = self
                .columns
                .iter()
                .map(|c| (Renderable::Text(c.footer.clone()), style.combine(&c.footer_style)))
                .collect();
            lines.extend(self.render_row(&cells, widths, Section::Foot, &border, options));
        }

        if let (Some(b), true) = (self.box_style, edge) {
            lines.push(vec![Segment::new(b.bottom(widths, true), border)]);
        }
        lines
    }

    fn render_row(
        &self,
        cells: &[(Renderable, Style)],
        widths: &[usize],
        section: Section,
        border: &Style,
        options: &ConsoleOptions,
    ) -> Vec<Line> {
        let mut rendered: Vec<Vec<Line>> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(index, ((cell, style), width))| {
                self.render_cell(index, cell, style, *width, options)
            })
            .collect();

        let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
        for (index, lines) in rendered.iter_mut().enumerate() {
            let blank = blank_line(widths[index], &cells[index].1);
            let missing = height - lines.len();
            let above = match self.columns[index].vertical {
                VerticalAlign::Top => 0,
                VerticalAlign::Middle => missing / 2,
                VerticalAlign::Bottom => missing,
            };
            let mut aligned = vec![blank.clone(); above];
            aligned.append(lines);
            aligned.resize(height, blank);
            *lines = aligned;
        }

        let (left, divider, right) = match self.box_style {
            Some(b) => {
                let (l, d, r) = b.verticals(section);
                (Some(l), Some(d), Some(r))
            }
            None => (None, None, None),
        };

        (0..height)
            .map(|line_index| {
                let mut line = Vec::new();
                if let (Some(c), true) = (left, self.show_edge) {
                    line.push(Segment::new(c.to_string(), border.clone()));
                }
                for (index, cell_lines) in rendered.iter_mut().enumerate() {
                    if index > 0 {
                        if let Some(c) = divider {
                            line.push(Segment::new(c.to_string(), border.clone()));
                        }
                    }
                    line.append(&mut cell_lines[line_index]);
                }
                if let (Some(c), true) = (right, self.show_edge) {
                    line.push(Segment::new(c.to_string(), border.clone()));
                }
                line
            })
            .collect()
    }

    /// Renders one cell to exactly `width` columns, padding included.
    fn render_cell(
        &self,
        index: usize,
        cell: &Renderable,
        style: &Style,
        width: usize,
        options: &ConsoleOptions,
    ) -> Vec<Line> {
        let column = &self.columns[index];
        let (left, right) = self.cell_padding(index);
        let content_width = width.saturating_sub(left + right);
        let cell_options = self.cell_options(column, content_width, options);

        let mut lines: Vec<Line> = cell
            .render_lines(&cell_options)
            .into_iter()
            .map(|mut line| {
                apply_base_style(&mut line, style);
                let mut padded = blank_line(left, style);
                padded.extend(fit_line(line, content_width, column.justify, style));
                padded.extend(blank_line(right, style));
                fit_line(padded, width, Justify::Left, style)
            })
            .collect();
        if lines.is_empty() {
            lines.push(blank_line(width, style));
        }

        let blank = blank_line(width, style);
        let mut out = vec![blank.clone(); self.padding.top];
        out.append(&mut lines);
        out.extend(std::iter::repeat(blank).take(self.padding.bottom));
        out
    }
}
