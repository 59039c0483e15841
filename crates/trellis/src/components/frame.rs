use trellis_render::{Justify, Padding};

use super::{Displayable, StringOrText, StyleSpec};

/// A box drawn around exactly one displayable.
///
/// `displayable` is required; a frame built with `Frame::default()` fails to
/// resolve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub displayable: Option<Box<Displayable>>,
    pub title: Option<StringOrText>,
    pub subtitle: Option<StringOrText>,
    pub box_name: Option<String>,
    pub expand: Option<bool>,
    pub padding: Option<Padding>,
    pub width: Option<usize>,
    pub style: Option<StyleSpec>,
    pub border_style: Option<StyleSpec>,
    pub title_align: Option<Justify>,
    pub subtitle_align: Option<Justify>,
}

impl Frame {
    pub fn new(displayable: impl Into<Displayable>) -> Self {
        Frame {
            displayable: Some(Box::new(displayable.into())),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<StringOrText>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<StringOrText>) -> Self {
        self.subtitle = Some(subtitle.into());
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

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn border_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.border_style = Some(style.into());
        self
    }

    pub fn title_align(mut self, align: Justify) -> Self {
        self.title_align = Some(align);
        self
    }

    pub fn subtitle_align(mut self, align: Justify) -> Self {
        self.subtitle_align = Some(align);
        self
    }
}
