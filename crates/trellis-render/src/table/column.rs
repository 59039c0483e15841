//! Table column definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::Style;
use crate::text::{Justify, Overflow, Text};

/// Vertical placement of a cell shorter than its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl FromStr for VerticalAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VerticalAlign::Top),
            "middle" => Ok(VerticalAlign::Middle),
            "bottom" => Ok(VerticalAlign::Bottom),
            other => Err(format!(
                "invalid vertical alignment '{}': expected top, middle or bottom",
                other
            )),
        }
    }
}

/// A column: header and footer text, cell styling and width constraints.
///
/// Width constraints exclude cell padding.
///
/// ```rust
/// use trellis_render::{Column, Justify, Style};
///
/// let col = Column::new("Name")
///     .justify(Justify::Center)
///     .header_style(Style::new().bold(true))
///     .max_width(20);
/// assert_eq!(col.header.plain_text(), "Name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    pub header: Text,
    pub footer: Text,
    pub header_style: Style,
    pub footer_style: Style,
    /// Style layered underneath every body cell.
    pub style: Style,
    pub justify: Justify,
    pub vertical: VerticalAlign,
    /// Overflow for text cells; `None` keeps each text's own setting.
    pub overflow: Option<Overflow>,
    pub width: Option<usize>,
    pub min_width: Option<usize>,
    pub max_width: Option<usize>,
    /// Share of spare width when the table expands.
    pub ratio: Option<usize>,
    pub no_wrap: bool,
}

impl Column {
    pub fn new(header: impl Into<Text>) -> Self {
        Column {
            header: header.into(),
            ..Default::default()
        }
    }

    pub fn footer(mut self, footer: impl Into<Text>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn footer_style(mut self, style: Style) -> Self {
        self.footer_style = style;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn vertical(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn ratio(mut self, ratio: usize) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }
}
