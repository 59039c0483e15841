use trellis_render::{Justify, Overflow};

use super::Style;

/// Content of a [`Text`] component.
#[derive(Clone, Debug, PartialEq)]
pub enum TextData {
    Str(String),
    Text(Box<Text>),
    /// Concatenated in order; may nest.
    List(Vec<TextData>),
}

impl Default for TextData {
    fn default() -> Self {
        TextData::Str(String::new())
    }
}

impl From<&str> for TextData {
    fn from(s: &str) -> Self {
        TextData::Str(s.to_string())
    }
}

impl From<String> for TextData {
    fn from(s: String) -> Self {
        TextData::Str(s)
    }
}

impl From<Text> for TextData {
    fn from(text: Text) -> Self {
        TextData::Text(Box::new(text))
    }
}

impl<T: Into<TextData>> From<Vec<T>> for TextData {
    fn from(items: Vec<T>) -> Self {
        TextData::List(items.into_iter().map(Into::into).collect())
    }
}

/// A run of styled text.
///
/// The run's style comes from `style` when set; otherwise from the inline
/// attributes set with [`Text::bold`], [`Text::color`] and friends.
///
/// ```rust
/// use trellis::components::{Style, Text};
///
/// let greeting = Text::new(vec![
///     Text::new("Hello, "),
///     Text::new("World").bold(true),
/// ])
/// .color("green");
/// assert_eq!(greeting.inline.color.as_deref(), Some("green"));
///
/// let warning = Text::new("careful").style(Style::new().color("yellow"));
/// assert!(warning.style.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    pub data: TextData,
    /// Explicit style; takes precedence over `inline`.
    pub style: Option<Style>,
    /// Style attributes given directly on the text.
    pub inline: Style,
    pub justify: Option<Justify>,
    pub overflow: Option<Overflow>,
    pub no_wrap: Option<bool>,
    pub tab_size: Option<usize>,
}

impl Text {
    pub fn new(data: impl Into<TextData>) -> Self {
        Text {
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.inline = self.inline.bold(on);
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.inline = self.inline.italic(on);
        self
    }

    pub fn strike(mut self, on: bool) -> Self {
        self.inline = self.inline.strike(on);
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.inline = self.inline.underline(on);
        self
    }

    pub fn overline(mut self, on: bool) -> Self {
        self.inline = self.inline.overline(on);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.inline = self.inline.color(color);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.inline = self.inline.background_color(color);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = Some(no_wrap);
        self
    }

    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = Some(tab_size);
        self
    }

    /// The style this run applies: `style` if set, else the inline attributes.
    pub fn effective_style(&self) -> &Style {
        self.style.as_ref().unwrap_or(&self.inline)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_style_wins() {
        let text = Text::new("x").bold(true).style(Style::new().italic(true));
        assert_eq!(text.effective_style(), &Style::new().italic(true));
    }

    #[test]
    fn test_inline_style_used_without_explicit() {
        let text = Text::new("x").bold(true).color("red");
        assert_eq!(text.effective_style(), &Style::new().bold(true).color("red"));
    }

    #[test]
    fn test_data_from_list() {
        let data = TextData::from(vec!["a", "b"]);
        assert_eq!(
            data,
            TextData::List(vec![TextData::from("a"), TextData::from("b")])
        );
    }
}
