use trellis_render::{Justify, VerticalAlign};

use super::{StringOrText, StyleSpec};

/// A table column: header plus layout constraints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column {
    /// Header content.
    pub text: StringOrText,
    pub header_style: Option<StyleSpec>,
    pub footer_style: Option<StyleSpec>,
    /// Style applied to every cell of the column.
    pub style: Option<StyleSpec>,
    pub justify: Option<Justify>,
    pub vertical: Option<VerticalAlign>,
    pub width: Option<usize>,
    pub min_width: Option<usize>,
    pub max_width: Option<usize>,
    pub ratio: Option<usize>,
    pub no_wrap: Option<bool>,
}

impl Column {
    pub fn new(text: impl Into<StringOrText>) -> Self {
        Column {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn header_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    pub fn footer_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.footer_style = Some(style.into());
        self
    }

    pub fn style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn vertical(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = Some(vertical);
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
        self.no_wrap = Some(no_wrap);
        self
    }
}
