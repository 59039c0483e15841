use trellis_render as backend;

use super::style::resolve_style;
use crate::components::{StringOrText, Text, TextData};
use crate::error::Result;

/// Flattens a text component into one backend run.
///
/// Every fragment carries its full effective style: the outer run's style
/// with each nested run's style layered on top. The run's own base style is
/// left plain, so splicing it into another run composes the same way.
pub fn resolve_text(props: &Text) -> Result<backend::Text> {
    let style = resolve_style(props.effective_style())?;
    let mut out = backend::Text::new();
    collect(&props.data, &style, &mut out)?;

    if let Some(justify) = props.justify {
        out.justify = justify;
    }
    if let Some(overflow) = props.overflow {
        out.overflow = overflow;
    }
    if let Some(no_wrap) = props.no_wrap {
        out.no_wrap = no_wrap;
    }
    if let Some(tab_size) = props.tab_size {
        out.tab_size = Some(tab_size);
    }
    Ok(out)
}

fn collect(data: &TextData, style: &backend::Style, out: &mut backend::Text) -> Result<()> {
    match data {
        TextData::Str(s) => out.append(s.as_str(), style.clone()),
        TextData::Text(inner) => {
            for fragment in resolve_text(inner)?.fragments() {
                out.append(fragment.text.as_str(), style.combine(&fragment.style));
            }
        }
        TextData::List(items) => {
            for item in items {
                collect(item, style, out)?;
            }
        }
    }
    Ok(())
}

/// Titles, captions and headers: strings become plain runs.
pub fn resolve_string_or_text(value: &StringOrText) -> Result<backend::Text> {
    match value {
        StringOrText::Str(s) => Ok(backend::Text::plain(s.as_str())),
        StringOrText::Text(text) => resolve_text(text),
    }
}

pub(crate) fn resolve_optional(value: Option<&StringOrText>) -> Result<Option<backend::Text>> {
    value.map(resolve_string_or_text).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Style;
    use trellis_render::{Justify, Overflow};

    fn pairs(text: &backend::Text) -> Vec<(String, backend::Style)> {
        text.fragments()
            .iter()
            .map(|f| (f.text.clone(), f.style.clone()))
            .collect()
    }

    #[test]
    fn test_plain_string() {
        let text = resolve_text(&Text::new("hello")).unwrap();
        assert_eq!(text.plain_text(), "hello");
        assert!(text.style.is_plain());
    }

    #[test]
    fn test_inline_attributes_style_the_run() {
        let text = resolve_text(&Text::new("hi").bold(true).italic(true)).unwrap();
        let bold_italic = backend::Style::new().bold(true).italic(true);
        assert_eq!(pairs(&text), vec![("hi".to_string(), bold_italic)]);
    }

    #[test]
    fn test_explicit_style_wins_over_inline() {
        let props = Text::new("hi")
            .bold(true)
            .style(Style::new().underline(true));
        let text = resolve_text(&props).unwrap();
        assert_eq!(text.fragments()[0].style, backend::Style::new().underline(true));
    }

    #[test]
    fn test_nested_runs_inherit_and_override() {
        let props = Text::new(vec![
            Text::new("a "),
            Text::new("b").color("red"),
            Text::new(" c").bold(false),
        ])
        .bold(true)
        .color("blue");
        let text = resolve_text(&props).unwrap();
        assert_eq!(text.plain_text(), "a b c");

        let frags = text.fragments();
        let blue = backend::Color::parse("blue").unwrap();
        let red = backend::Color::parse("red").unwrap();
        assert_eq!(frags[0].style, backend::Style::new().bold(true).color(blue));
        assert_eq!(frags[1].style, backend::Style::new().bold(true).color(red));
        assert_eq!(frags[2].style, backend::Style::new().bold(false).color(blue));
    }

    #[test]
    fn test_layout_attributes_pass_through() {
        let props = Text::new("x")
            .justify(Justify::Center)
            .overflow(Overflow::Ellipsis)
            .no_wrap(true)
            .tab_size(2);
        let text = resolve_text(&props).unwrap();
        assert_eq!(text.justify, Justify::Center);
        assert_eq!(text.overflow, Overflow::Ellipsis);
        assert!(text.no_wrap);
        assert_eq!(text.tab_size, Some(2));
    }

    #[test]
    fn test_empty_data() {
        let text = resolve_text(&Text::default()).unwrap();
        assert!(text.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::components::Style;
    use proptest::prelude::*;

    fn style_strategy() -> impl Strategy<Value = Style> {
        (
            prop::option::of(any::<bool>()),
            prop::option::of(any::<bool>()),
            prop::option::of(prop::sample::select(vec!["red", "green", "#57acf9"])),
        )
            .prop_map(|(bold, italic, color)| Style {
                bold,
                italic,
                color: color.map(str::to_string),
                ..Style::default()
            })
    }

    proptest! {
        #[test]
        fn nesting_is_associative(
            a in "[a-z]{1,6}",
            b in "[a-z]{1,6}",
            c in "[a-z]{1,6}",
            outer in style_strategy(),
            middle in style_strategy(),
            inner in style_strategy(),
        ) {
            // outer(a, middle(b, inner(c)))
            let nested = Text::new(vec![
                TextData::from(a.as_str()),
                TextData::from(
                    Text::new(vec![
                        TextData::from(b.as_str()),
                        TextData::from(Text::new(c.as_str()).style(inner.clone())),
                    ])
                    .style(middle.clone()),
                ),
            ])
            .style(outer.clone());

            let outer_resolved = resolve_style(&outer).unwrap();
            let middle_resolved = resolve_style(&middle).unwrap();
            let inner_resolved = resolve_style(&inner).unwrap();
            let flat = backend::Text::assemble([
                (a.clone(), outer_resolved.clone()),
                (b.clone(), outer_resolved.combine(&middle_resolved)),
                (c.clone(), outer_resolved.combine(&middle_resolved).combine(&inner_resolved)),
            ]);

            let resolved = resolve_text(&nested).unwrap();
            prop_assert_eq!(resolved.fragments(), flat.fragments());
            prop_assert_eq!(resolved.plain_text(), format!("{}{}{}", a, b, c));
        }
    }
}
