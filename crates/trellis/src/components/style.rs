/// The style vocabulary: text attributes plus foreground and background colors.
///
/// Unset attributes leave the backend default in place. Colors are kept as
/// specs (`"red"`, `"#ff7e74"`, `"rgb(1,2,3)"`) and parsed when resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub strike: Option<bool>,
    pub underline: Option<bool>,
    pub overline: Option<bool>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    pub fn strike(mut self, on: bool) -> Self {
        self.strike = Some(on);
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    pub fn overline(mut self, on: bool) -> Self {
        self.overline = Some(on);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
