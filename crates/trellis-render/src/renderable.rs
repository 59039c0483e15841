//! The closed set of things a console can print.

use std::borrow::Cow;

use crate::console::ConsoleOptions;
use crate::measure::Measurement;
use crate::panel::Panel;
use crate::segment::Line;
use crate::syntax::Syntax;
use crate::table::Table;
use crate::text::Text;

/// Anything that can be laid out into lines.
#[derive(Clone, Debug, PartialEq)]
pub enum Renderable {
    Text(Text),
    Syntax(Syntax),
    Table(Table),
    Panel(Panel),
    /// Children stacked vertically at the same width.
    Group(Vec<Renderable>),
}

impl Renderable {
    /// Minimum and maximum width within `options.width`.
    pub fn measure(&self, options: &ConsoleOptions) -> Measurement {
        match self {
            Renderable::Text(text) => constrained(text, options)
                .measure(options.tab_size)
                .clamp_to(options.width),
            Renderable::Syntax(syntax) => syntax.measure(options),
            Renderable::Table(table) => table.measure(options),
            Renderable::Panel(panel) => panel.measure(options),
            Renderable::Group(items) => items
                .iter()
                .map(|item| item.measure(options))
                .fold(Measurement::default(), Measurement::union),
        }
    }

    /// Lays this renderable out within `options.width`.
    pub fn render_lines(&self, options: &ConsoleOptions) -> Vec<Line> {
        match self {
            Renderable::Text(text) => {
                constrained(text, options).render_lines(options.width, options.tab_size)
            }
            Renderable::Syntax(syntax) => syntax.render_lines(options),
            Renderable::Table(table) => table.render_lines(options),
            Renderable::Panel(panel) => panel.render_lines(options),
            Renderable::Group(items) => items
                .iter()
                .flat_map(|item| item.render_lines(options))
                .collect(),
        }
    }
}

/// Applies a container's wrapping and overflow overrides to a text run.
fn constrained<'a>(text: &'a Text, options: &ConsoleOptions) -> Cow<'a, Text> {
    if !options.no_wrap && options.overflow.is_none() {
        return Cow::Borrowed(text);
    }
    let mut text = text.clone();
    text.no_wrap = text.no_wrap || options.no_wrap;
    if let Some(overflow) = options.overflow {
        text.overflow = overflow;
    }
    Cow::Owned(text)
}

impl From<Text> for Renderable {
    fn from(text: Text) -> Self {
        Renderable::Text(text)
    }
}

impl From<&str> for Renderable {
    fn from(s: &str) -> Self {
        Renderable::Text(Text::plain(s))
    }
}

impl From<String> for Renderable {
    fn from(s: String) -> Self {
        Renderable::Text(Text::plain(s))
    }
}

impl From<Syntax> for Renderable {
    fn from(syntax: Syntax) -> Self {
        Renderable::Syntax(syntax)
    }
}

impl From<Table> for Renderable {
    fn from(table: Table) -> Self {
        Renderable::Table(table)
    }
}

impl From<Panel> for Renderable {
    fn from(panel: Panel) -> Self {
        Renderable::Panel(panel)
    }
}

impl From<Vec<Renderable>> for Renderable {
    fn from(items: Vec<Renderable>) -> Self {
        Renderable::Group(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::line_text;
    use crate::text::Overflow;

    #[test]
    fn test_group_stacks_children() {
        let group = Renderable::from(vec!["one".into(), "two".into()]);
        let lines = group.render_lines(&ConsoleOptions::default().width(10));
        let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_group_measure_is_union() {
        let group = Renderable::from(vec!["a bb".into(), "cccc".into()]);
        let m = group.measure(&ConsoleOptions::default().width(80));
        assert_eq!(m, Measurement::new(4, 4));
    }

    #[test]
    fn test_container_overrides_apply_to_text() {
        let mut options = ConsoleOptions::default().width(3);
        options.no_wrap = true;
        options.overflow = Some(Overflow::Ellipsis);
        let lines = Renderable::from("abcdef").render_lines(&options);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "ab…");
    }

    #[test]
    fn test_text_measure_clamps() {
        let m = Renderable::from("abcdefgh").measure(&ConsoleOptions::default().width(5));
        assert_eq!(m, Measurement::new(5, 5));
    }
}
