//! Decoding of the tagged form into typed components.

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::trace;
use trellis_render::Padding;

use crate::component::{Component, ComponentKind};
use crate::components::{
    Cell, Code, Column, ColumnEntry, Displayable, Frame, Stack, Style, StringOrText, StyleSpec,
    Table, Text, TextData,
};
use crate::error::{describe, type_name, ResolveError, Result};

const STYLE_KEYS: [&str; 7] = [
    "bold",
    "italic",
    "strike",
    "underline",
    "overline",
    "color",
    "background_color",
];

/// Splits `{"Kind": absorbed}` into its kind and absorbed arguments.
///
/// A non-list value counts as a single absorbed argument, so
/// `{"Text": {"data": "x"}}` is shorthand for `{"Text": [{"data": "x"}]}`.
pub(crate) fn split_tagged(value: &Value) -> Option<(ComponentKind, &[Value])> {
    let map = value.as_object()?;
    if map.len() != 1 {
        return None;
    }
    let (tag, absorbed) = map.iter().next()?;
    let kind = ComponentKind::from_tag(tag)?;
    let absorbed = match absorbed {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };
    Some((kind, absorbed))
}

pub(crate) fn decode_value(value: &Value) -> Result<Component> {
    match split_tagged(value) {
        Some((kind, absorbed)) => decode_component(kind, absorbed),
        None => Err(ResolveError::no_matching_resolver(value)),
    }
}

pub(crate) fn decode_component(kind: ComponentKind, absorbed: &[Value]) -> Result<Component> {
    let params = Params::new(kind, absorbed)?;
    match kind {
        ComponentKind::Text => decode_text(&params).map(Component::Text),
        ComponentKind::Code => decode_code(&params).map(Component::Code),
        ComponentKind::Style => decode_style(&params).map(Component::Style),
        ComponentKind::Table => decode_table(&params).map(Component::Table),
        ComponentKind::Column => decode_column(&params).map(Component::Column),
        ComponentKind::Frame => decode_frame(&params).map(Component::Frame),
        ComponentKind::HStack => decode_stack(&params).map(Component::HStack),
        ComponentKind::VStack => decode_stack(&params).map(Component::VStack),
    }
}

/// The primary parameter dictionary of one component.
struct Params<'a> {
    kind: ComponentKind,
    map: &'a Map<String, Value>,
}

impl<'a> Params<'a> {
    fn new(kind: ComponentKind, absorbed: &'a [Value]) -> Result<Self> {
        let first = absorbed.first().ok_or(ResolveError::MissingParams { kind })?;
        let map = first.as_object().ok_or_else(|| ResolveError::NotAMapping {
            kind,
            found: type_name(first),
        })?;
        if absorbed.len() > 1 {
            trace!(%kind, extra = absorbed.len() - 1, "ignoring extra absorbed arguments");
        }
        Ok(Params { kind, map })
    }

    /// Logs keys this kind does not understand.
    fn ignore_unknown(&self, known: &[&str]) {
        for key in self.map.keys() {
            if !known.contains(&key.as_str()) {
                trace!(kind = %self.kind, key = %key, "ignoring unknown attribute");
            }
        }
    }

    /// A present, non-null value.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    fn invalid(&self, field: impl Into<String>, expected: &'static str, found: &Value) -> ResolveError {
        ResolveError::invalid_field(self.kind, field, expected, found)
    }

    fn string(&self, field: &str) -> Result<Option<String>> {
        self.get(field)
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.invalid(field, "a string", v))
            })
            .transpose()
    }

    fn bool(&self, field: &str) -> Result<Option<bool>> {
        self.get(field)
            .map(|v| v.as_bool().ok_or_else(|| self.invalid(field, "a boolean", v)))
            .transpose()
    }

    fn usize(&self, field: &str) -> Result<Option<usize>> {
        self.get(field)
            .map(|v| as_usize(v).ok_or_else(|| self.invalid(field, "a non-negative integer", v)))
            .transpose()
    }

    fn usize_list(&self, field: &str) -> Result<Vec<usize>> {
        self.list(field)?
            .iter()
            .map(|v| as_usize(v).ok_or_else(|| self.invalid(field, "a list of non-negative integers", v)))
            .collect()
    }

    /// A keyword such as a justify or overflow name.
    fn keyword<T: FromStr>(&self, field: &str, expected: &'static str) -> Result<Option<T>> {
        self.get(field)
            .map(|v| {
                v.as_str()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| self.invalid(field, expected, v))
            })
            .transpose()
    }

    fn list(&self, field: &str) -> Result<&'a [Value]> {
        match self.get(field) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(self.invalid(field, "a list", other)),
        }
    }

    fn padding(&self, field: &str) -> Result<Option<Padding>> {
        const EXPECTED: &str = "a number or a list of 1, 2 or 4 numbers";
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        let padding = match value {
            Value::Array(items) => items
                .iter()
                .map(as_usize)
                .collect::<Option<Vec<_>>>()
                .and_then(|values| Padding::from_slice(&values)),
            other => as_usize(other).map(Padding::from),
        };
        padding
            .map(Some)
            .ok_or_else(|| self.invalid(field, EXPECTED, value))
    }

    fn style_spec(&self, field: &str) -> Result<Option<StyleSpec>> {
        self.get(field)
            .map(|v| self.style_spec_value(field, v))
            .transpose()
    }

    fn style_spec_value(&self, field: &str, value: &Value) -> Result<StyleSpec> {
        if let Some(s) = value.as_str() {
            return Ok(StyleSpec::Definition(s.to_string()));
        }
        match decode_nested(value)? {
            Some(Component::Style(style)) => Ok(StyleSpec::Style(style)),
            _ => Err(self.invalid(field, "a style definition or a Style", value)),
        }
    }

    fn style_component(&self, field: &str) -> Result<Option<Style>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        match decode_nested(value)? {
            Some(Component::Style(style)) => Ok(Some(style)),
            _ => Err(self.invalid(field, "a Style", value)),
        }
    }

    fn string_or_text(&self, field: &str) -> Result<Option<StringOrText>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        if let Some(s) = value.as_str() {
            return Ok(Some(StringOrText::Str(s.to_string())));
        }
        match decode_nested(value)? {
            Some(Component::Text(text)) => Ok(Some(StringOrText::Text(text))),
            _ => Err(self.invalid(field, "a string or a Text", value)),
        }
    }

    /// The style keys given directly in this dictionary.
    fn inline_style(&self) -> Result<Style> {
        Ok(Style {
            bold: self.bool("bold")?,
            italic: self.bool("italic")?,
            strike: self.bool("strike")?,
            underline: self.bool("underline")?,
            overline: self.bool("overline")?,
            color: self.string("color")?,
            background_color: self.string("background_color")?,
        })
    }
}

fn as_usize(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}

/// Decodes `value` if it is in tagged form.
fn decode_nested(value: &Value) -> Result<Option<Component>> {
    split_tagged(value)
        .map(|(kind, absorbed)| decode_component(kind, absorbed))
        .transpose()
}

fn decode_text(p: &Params) -> Result<Text> {
    let mut known = vec!["data", "style", "justify", "overflow", "no_wrap", "tab_size"];
    known.extend(STYLE_KEYS);
    p.ignore_unknown(&known);

    Ok(Text {
        data: match p.get("data") {
            Some(value) => decode_text_data(value)?,
            None => TextData::default(),
        },
        style: p.style_component("style")?,
        inline: p.inline_style()?,
        justify: p.keyword("justify", "one of default, left, center, right, full")?,
        overflow: p.keyword("overflow", "one of fold, crop, ellipsis, ignore")?,
        no_wrap: p.bool("no_wrap")?,
        tab_size: p.usize("tab_size")?,
    })
}

fn decode_text_data(value: &Value) -> Result<TextData> {
    let unsupported = || ResolveError::UnsupportedTextData {
        value: describe(value),
        type_name: type_name(value),
    };
    match value {
        Value::String(s) => Ok(TextData::Str(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(decode_text_data)
            .collect::<Result<_>>()
            .map(TextData::List),
        Value::Object(_) => match decode_nested(value)? {
            Some(Component::Text(text)) => Ok(TextData::Text(Box::new(text))),
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}

fn decode_style(p: &Params) -> Result<Style> {
    p.ignore_unknown(&STYLE_KEYS);
    p.inline_style()
}

fn decode_code(p: &Params) -> Result<Code> {
    p.ignore_unknown(&[
        "code",
        "language",
        "theme",
        "line_numbers",
        "start_line",
        "tab_size",
        "word_wrap",
        "background_color",
        "code_width",
        "highlight_lines",
        "dedent",
    ]);
    let mut code = Code::new(p.string("code")?.unwrap_or_default());
    if let Some(language) = p.string("language")? {
        code.language = language;
    }
    code.theme = p.string("theme")?;
    code.line_numbers = p.bool("line_numbers")?;
    code.start_line = p.usize("start_line")?;
    code.tab_size = p.usize("tab_size")?;
    code.word_wrap = p.bool("word_wrap")?;
    code.background_color = p.string("background_color")?;
    code.code_width = p.usize("code_width")?;
    code.highlight_lines = p.usize_list("highlight_lines")?;
    code.dedent = p.bool("dedent")?;
    Ok(code)
}

fn decode_table(p: &Params) -> Result<Table> {
    p.ignore_unknown(&[
        "title",
        "caption",
        "row_styles",
        "cols",
        "rows",
        "box",
        "expand",
        "padding",
        "show_header",
        "show_edge",
        "show_lines",
        "pad_edge",
        "width",
        "header_style",
        "border_style",
    ]);

    let row_styles = p
        .list("row_styles")?
        .iter()
        .enumerate()
        .map(|(i, v)| p.style_spec_value(&format!("row_styles[{}]", i), v))
        .collect::<Result<_>>()?;
    let cols = p
        .list("cols")?
        .iter()
        .map(decode_column_entry)
        .collect::<Result<_>>()?;
    let rows = p
        .list("rows")?
        .iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Array(cells) => cells.iter().map(decode_cell).collect::<Result<Vec<_>>>(),
            other => Err(p.invalid(format!("rows[{}]", i), "a list of cells", other)),
        })
        .collect::<Result<_>>()?;

    Ok(Table {
        title: p.string_or_text("title")?,
        caption: p.string_or_text("caption")?,
        row_styles,
        cols,
        rows,
        box_name: p.string("box")?,
        expand: p.bool("expand")?,
        padding: p.padding("padding")?,
        show_header: p.bool("show_header")?,
        show_edge: p.bool("show_edge")?,
        show_lines: p.bool("show_lines")?,
        pad_edge: p.bool("pad_edge")?,
        width: p.usize("width")?,
        header_style: p.style_spec("header_style")?,
        border_style: p.style_spec("border_style")?,
    })
}

fn decode_column_entry(value: &Value) -> Result<ColumnEntry> {
    if let Some(s) = value.as_str() {
        return Ok(ColumnEntry::Str(s.to_string()));
    }
    match decode_nested(value)? {
        Some(Component::Text(text)) => Ok(ColumnEntry::Text(text)),
        Some(Component::Column(column)) => Ok(ColumnEntry::Column(column)),
        _ => Err(ResolveError::no_matching_resolver(value)),
    }
}

fn decode_cell(value: &Value) -> Result<Cell> {
    match value {
        Value::String(s) => Ok(Cell::Str(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(decode_cell)
            .collect::<Result<_>>()
            .map(Cell::Group),
        _ => match decode_nested(value)? {
            Some(Component::Text(text)) => Ok(Cell::Text(text)),
            Some(Component::Style(style)) => Ok(Cell::Style(style)),
            Some(Component::Column(column)) => Ok(Cell::Column(column)),
            _ => Err(ResolveError::no_matching_resolver(value)),
        },
    }
}

fn decode_column(p: &Params) -> Result<Column> {
    p.ignore_unknown(&[
        "text",
        "header_style",
        "footer_style",
        "style",
        "justify",
        "vertical",
        "width",
        "min_width",
        "max_width",
        "ratio",
        "no_wrap",
    ]);
    Ok(Column {
        text: p.string_or_text("text")?.unwrap_or_default(),
        header_style: p.style_spec("header_style")?,
        footer_style: p.style_spec("footer_style")?,
        style: p.style_spec("style")?,
        justify: p.keyword("justify", "one of default, left, center, right, full")?,
        vertical: p.keyword("vertical", "one of top, middle, bottom")?,
        width: p.usize("width")?,
        min_width: p.usize("min_width")?,
        max_width: p.usize("max_width")?,
        ratio: p.usize("ratio")?,
        no_wrap: p.bool("no_wrap")?,
    })
}

fn decode_displayable(value: &Value) -> Result<Displayable> {
    if let Some(s) = value.as_str() {
        return Ok(Displayable::Str(s.to_string()));
    }
    match decode_nested(value)? {
        Some(component) => Ok(Displayable::Component(Box::new(component))),
        None => Err(ResolveError::no_matching_resolver(value)),
    }
}

fn decode_frame(p: &Params) -> Result<Frame> {
    p.ignore_unknown(&[
        "displayable",
        "title",
        "subtitle",
        "box",
        "expand",
        "padding",
        "width",
        "style",
        "border_style",
        "title_align",
        "subtitle_align",
    ]);
    Ok(Frame {
        displayable: p
            .get("displayable")
            .map(decode_displayable)
            .transpose()?
            .map(Box::new),
        title: p.string_or_text("title")?,
        subtitle: p.string_or_text("subtitle")?,
        box_name: p.string("box")?,
        expand: p.bool("expand")?,
        padding: p.padding("padding")?,
        width: p.usize("width")?,
        style: p.style_spec("style")?,
        border_style: p.style_spec("border_style")?,
        title_align: p.keyword("title_align", "one of default, left, center, right, full")?,
        subtitle_align: p.keyword("subtitle_align", "one of default, left, center, right, full")?,
    })
}

fn decode_stack(p: &Params) -> Result<Stack> {
    p.ignore_unknown(&["displayables", "cols", "expand", "padding", "pad_edge"]);
    Ok(Stack {
        displayables: p
            .list("displayables")?
            .iter()
            .map(decode_displayable)
            .collect::<Result<_>>()?,
        cols: p
            .list("cols")?
            .iter()
            .map(decode_column_entry)
            .collect::<Result<_>>()?,
        expand: p.bool("expand")?,
        padding: p.padding("padding")?,
        pad_edge: p.bool("pad_edge")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trellis_render::Justify;

    #[test]
    fn test_shorthand_single_argument() {
        let a = decode_value(&json!({"Text": {"data": "x"}})).unwrap();
        let b = decode_value(&json!({"Text": [{"data": "x"}]})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Component::Text(Text::new("x")));
    }

    #[test]
    fn test_missing_params() {
        let err = decode_value(&json!({"Frame": []})).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingParams {
                kind: ComponentKind::Frame
            }
        ));
    }

    #[test]
    fn test_not_a_mapping() {
        let err = decode_value(&json!({"Table": ["rows"]})).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NotAMapping {
                kind: ComponentKind::Table,
                found: "string"
            }
        ));
    }

    #[test]
    fn test_unknown_tag() {
        let err = decode_value(&json!({"Grid": [{}]})).unwrap_err();
        assert!(matches!(err, ResolveError::NoMatchingResolver { .. }));
        let err = decode_value(&json!({"Text": [{}], "Code": [{}]})).unwrap_err();
        assert!(matches!(err, ResolveError::NoMatchingResolver { .. }));
    }

    #[test]
    fn test_unsupported_text_data() {
        let err = decode_value(&json!({"Text": [{"data": 42}]})).unwrap_err();
        match err {
            ResolveError::UnsupportedTextData { value, type_name } => {
                assert_eq!(value, "42");
                assert_eq!(type_name, "number");
            }
            other => panic!("unexpected error: {}", other),
        }

        let err = decode_value(&json!({"Text": [{"data": ["ok", {"Code": [{}]}]}]})).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedTextData { .. }));
    }

    #[test]
    fn test_text_data_mixes_strings_and_texts() {
        let component = decode_value(&json!({
            "Text": [{"data": ["a", {"Text": [{"data": "b", "bold": true}]}], "color": "red"}]
        }))
        .unwrap();
        let expected = Text::new(vec![
            TextData::from("a"),
            TextData::from(Text::new("b").bold(true)),
        ])
        .color("red");
        assert_eq!(component, Component::Text(expected));
    }

    #[test]
    fn test_invalid_field_names_kind_and_field() {
        let err = decode_value(&json!({"Column": [{"width": "wide"}]})).unwrap_err();
        match err {
            ResolveError::InvalidField {
                kind,
                field,
                expected,
                found,
            } => {
                assert_eq!(kind, ComponentKind::Column);
                assert_eq!(field, "width");
                assert_eq!(expected, "a non-negative integer");
                assert_eq!(found, "\"wide\"");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let component = decode_value(&json!({"Text": [{"data": "x", "blink": true}]})).unwrap();
        assert_eq!(component, Component::Text(Text::new("x")));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let component = decode_value(&json!({"Frame": [{"displayable": "x", "title": null}]})).unwrap();
        assert_eq!(component, Component::Frame(Frame::new("x")));
    }

    #[test]
    fn test_padding_shapes() {
        let frame = |padding: Value| decode_value(&json!({"Frame": [{"displayable": "x", "padding": padding}]}));
        let padding_of = |c: Component| match c {
            Component::Frame(f) => f.padding,
            _ => None,
        };
        assert_eq!(padding_of(frame(json!(2)).unwrap()), Some(Padding::from(2)));
        assert_eq!(
            padding_of(frame(json!([1, 2])).unwrap()),
            Some(Padding::new(1, 2, 1, 2))
        );
        assert_eq!(
            padding_of(frame(json!([1, 2, 3, 4])).unwrap()),
            Some(Padding::new(1, 2, 3, 4))
        );
        assert!(matches!(
            frame(json!([1, 2, 3])),
            Err(ResolveError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_table_cells() {
        let component = decode_value(&json!({"Table": [{
            "cols": ["a", {"Column": [{"text": "b", "justify": "right"}]}],
            "rows": [["x", ["y", "z"]], [{"Style": [{"bold": true}]}, {"Text": [{"data": "t"}]}]],
            "box": "ascii"
        }]}))
        .unwrap();
        let expected = Table::new()
            .column("a")
            .column(Column::new("b").justify(Justify::Right))
            .row([Cell::from("x"), Cell::Group(vec!["y".into(), "z".into()])])
            .row([Cell::from(Style::new().bold(true)), Cell::from(Text::new("t"))])
            .box_name("ascii");
        assert_eq!(component, Component::Table(expected));
    }

    #[test]
    fn test_bad_cell() {
        let err = decode_value(&json!({"Table": [{"rows": [[1]]}]})).unwrap_err();
        assert!(matches!(err, ResolveError::NoMatchingResolver { .. }));
        let err = decode_value(&json!({"Table": [{"rows": ["x"]}]})).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidField { .. }));
    }

    #[test]
    fn test_frame_without_displayable_decodes() {
        let component = decode_value(&json!({"Frame": [{"title": "t"}]})).unwrap();
        assert_eq!(component, Component::Frame(Frame::default().title("t")));
    }

    #[test]
    fn test_stacks() {
        let h = decode_value(&json!({"HStack": [{"displayables": ["a", {"Text": [{"data": "b"}]}], "expand": true}]}))
            .unwrap();
        assert_eq!(
            h,
            Component::HStack(Stack::new([Displayable::from("a"), Text::new("b").into()]).expand(true))
        );
        let err = decode_value(&json!({"VStack": [{"displayables": [7]}]})).unwrap_err();
        assert!(matches!(err, ResolveError::NoMatchingResolver { .. }));
    }

    #[test]
    fn test_style_spec_rejects_other_components() {
        let err = decode_value(&json!({"Column": [{"style": {"Text": [{}]}}]})).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidField { .. }));
    }
}
