//! Encoding of typed components back into the tagged form.
//!
//! Only attributes that are set are written, so decoding the output yields
//! an equal component.

use serde::Serialize;
use serde_json::{json, Map, Value};
use trellis_render::Padding;

use crate::component::{Component, ComponentKind};
use crate::components::{
    Cell, Code, Column, ColumnEntry, Displayable, Frame, Stack, Style, StringOrText, StyleSpec,
    Table, Text, TextData,
};

pub(crate) fn encode(component: &Component) -> Value {
    let (kind, params) = match component {
        Component::Text(text) => (ComponentKind::Text, text_params(text)),
        Component::Code(code) => (ComponentKind::Code, code_params(code)),
        Component::Style(style) => (ComponentKind::Style, style_params(style)),
        Component::Table(table) => (ComponentKind::Table, table_params(table)),
        Component::Column(column) => (ComponentKind::Column, column_params(column)),
        Component::Frame(frame) => (ComponentKind::Frame, frame_params(frame)),
        Component::HStack(stack) => (ComponentKind::HStack, stack_params(stack)),
        Component::VStack(stack) => (ComponentKind::VStack, stack_params(stack)),
    };
    tagged(kind, params)
}

fn tagged(kind: ComponentKind, params: Map<String, Value>) -> Value {
    let mut outer = Map::new();
    outer.insert(kind.tag().to_string(), Value::Array(vec![Value::Object(params)]));
    Value::Object(outer)
}

/// Serializes a keyword enum (`Justify`, `Overflow`, ...) to its name.
fn keyword<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_default()
}

fn put<T: Into<Value>>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.into());
    }
}

fn padding(padding: &Padding) -> Value {
    json!([padding.top, padding.right, padding.bottom, padding.left])
}

fn string_or_text(value: &StringOrText) -> Value {
    match value {
        StringOrText::Str(s) => Value::String(s.clone()),
        StringOrText::Text(text) => tagged(ComponentKind::Text, text_params(text)),
    }
}

fn style_spec(spec: &StyleSpec) -> Value {
    match spec {
        StyleSpec::Definition(s) => Value::String(s.clone()),
        StyleSpec::Style(style) => tagged(ComponentKind::Style, style_params(style)),
    }
}

fn style_params(style: &Style) -> Map<String, Value> {
    let mut map = Map::new();
    put(&mut map, "bold", style.bold);
    put(&mut map, "italic", style.italic);
    put(&mut map, "strike", style.strike);
    put(&mut map, "underline", style.underline);
    put(&mut map, "overline", style.overline);
    put(&mut map, "color", style.color.clone());
    put(&mut map, "background_color", style.background_color.clone());
    map
}

fn text_data(data: &TextData) -> Value {
    match data {
        TextData::Str(s) => Value::String(s.clone()),
        TextData::Text(text) => tagged(ComponentKind::Text, text_params(text)),
        TextData::List(items) => Value::Array(items.iter().map(text_data).collect()),
    }
}

fn text_params(text: &Text) -> Map<String, Value> {
    let mut map = style_params(&text.inline);
    map.insert("data".into(), text_data(&text.data));
    put(
        &mut map,
        "style",
        text.style
            .as_ref()
            .map(|s| tagged(ComponentKind::Style, style_params(s))),
    );
    put(&mut map, "justify", text.justify.as_ref().map(keyword));
    put(&mut map, "overflow", text.overflow.as_ref().map(keyword));
    put(&mut map, "no_wrap", text.no_wrap);
    put(&mut map, "tab_size", text.tab_size);
    map
}

fn code_params(code: &Code) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("code".into(), Value::String(code.code.clone()));
    map.insert("language".into(), Value::String(code.language.clone()));
    put(&mut map, "theme", code.theme.clone());
    put(&mut map, "line_numbers", code.line_numbers);
    put(&mut map, "start_line", code.start_line);
    put(&mut map, "tab_size", code.tab_size);
    put(&mut map, "word_wrap", code.word_wrap);
    put(&mut map, "background_color", code.background_color.clone());
    put(&mut map, "code_width", code.code_width);
    if !code.highlight_lines.is_empty() {
        map.insert("highlight_lines".into(), json!(code.highlight_lines));
    }
    put(&mut map, "dedent", code.dedent);
    map
}

fn column_entry(entry: &ColumnEntry) -> Value {
    match entry {
        ColumnEntry::Str(s) => Value::String(s.clone()),
        ColumnEntry::Text(text) => tagged(ComponentKind::Text, text_params(text)),
        ColumnEntry::Column(column) => tagged(ComponentKind::Column, column_params(column)),
    }
}

fn cell(cell: &Cell) -> Value {
    match cell {
        Cell::Str(s) => Value::String(s.clone()),
        Cell::Text(text) => tagged(ComponentKind::Text, text_params(text)),
        Cell::Style(style) => tagged(ComponentKind::Style, style_params(style)),
        Cell::Column(column) => tagged(ComponentKind::Column, column_params(column)),
        Cell::Group(cells) => Value::Array(cells.iter().map(self::cell).collect()),
    }
}

fn table_params(table: &Table) -> Map<String, Value> {
    let mut map = Map::new();
    put(&mut map, "title", table.title.as_ref().map(string_or_text));
    put(&mut map, "caption", table.caption.as_ref().map(string_or_text));
    if !table.row_styles.is_empty() {
        map.insert(
            "row_styles".into(),
            Value::Array(table.row_styles.iter().map(style_spec).collect()),
        );
    }
    if !table.cols.is_empty() {
        map.insert(
            "cols".into(),
            Value::Array(table.cols.iter().map(column_entry).collect()),
        );
    }
    if !table.rows.is_empty() {
        let rows = table
            .rows
            .iter()
            .map(|row| Value::Array(row.iter().map(cell).collect()))
            .collect();
        map.insert("rows".into(), Value::Array(rows));
    }
    put(&mut map, "box", table.box_name.clone());
    put(&mut map, "expand", table.expand);
    put(&mut map, "padding", table.padding.as_ref().map(padding));
    put(&mut map, "show_header", table.show_header);
    put(&mut map, "show_edge", table.show_edge);
    put(&mut map, "show_lines", table.show_lines);
    put(&mut map, "pad_edge", table.pad_edge);
    put(&mut map, "width", table.width);
    put(&mut map, "header_style", table.header_style.as_ref().map(style_spec));
    put(&mut map, "border_style", table.border_style.as_ref().map(style_spec));
    map
}

fn column_params(column: &Column) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("text".into(), string_or_text(&column.text));
    put(&mut map, "header_style", column.header_style.as_ref().map(style_spec));
    put(&mut map, "footer_style", column.footer_style.as_ref().map(style_spec));
    put(&mut map, "style", column.style.as_ref().map(style_spec));
    put(&mut map, "justify", column.justify.as_ref().map(keyword));
    put(&mut map, "vertical", column.vertical.as_ref().map(keyword));
    put(&mut map, "width", column.width);
    put(&mut map, "min_width", column.min_width);
    put(&mut map, "max_width", column.max_width);
    put(&mut map, "ratio", column.ratio);
    put(&mut map, "no_wrap", column.no_wrap);
    map
}

fn displayable(value: &Displayable) -> Value {
    match value {
        Displayable::Str(s) => Value::String(s.clone()),
        Displayable::Component(component) => encode(component),
    }
}

fn frame_params(frame: &Frame) -> Map<String, Value> {
    let mut map = Map::new();
    put(&mut map, "displayable", frame.displayable.as_deref().map(displayable));
    put(&mut map, "title", frame.title.as_ref().map(string_or_text));
    put(&mut map, "subtitle", frame.subtitle.as_ref().map(string_or_text));
    put(&mut map, "box", frame.box_name.clone());
    put(&mut map, "expand", frame.expand);
    put(&mut map, "padding", frame.padding.as_ref().map(padding));
    put(&mut map, "width", frame.width);
    put(&mut map, "style", frame.style.as_ref().map(style_spec));
    put(&mut map, "border_style", frame.border_style.as_ref().map(style_spec));
    put(&mut map, "title_align", frame.title_align.as_ref().map(keyword));
    put(&mut map, "subtitle_align", frame.subtitle_align.as_ref().map(keyword));
    map
}

fn stack_params(stack: &Stack) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "displayables".into(),
        Value::Array(stack.displayables.iter().map(displayable).collect()),
    );
    if !stack.cols.is_empty() {
        map.insert(
            "cols".into(),
            Value::Array(stack.cols.iter().map(column_entry).collect()),
        );
    }
    put(&mut map, "expand", stack.expand);
    put(&mut map, "padding", stack.padding.as_ref().map(padding));
    put(&mut map, "pad_edge", stack.pad_edge);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::decode::decode_value;
    use trellis_render::{Justify, VerticalAlign};

    #[test]
    fn test_only_set_attributes_are_written() {
        let value = encode(&Component::Text(Text::new("hi").bold(true)));
        assert_eq!(value, json!({"Text": [{"data": "hi", "bold": true}]}));
    }

    #[test]
    fn test_keywords_use_lowercase_names() {
        let value = encode(&Component::Column(
            Column::new("h")
                .justify(Justify::Center)
                .vertical(VerticalAlign::Middle),
        ));
        assert_eq!(
            value,
            json!({"Column": [{"text": "h", "justify": "center", "vertical": "middle"}]})
        );
    }

    #[test]
    fn test_tree_survives_encoding() {
        let tree = Component::vstack(
            Stack::new([
                Displayable::from(
                    Frame::new(Text::new(vec![
                        TextData::from("a"),
                        TextData::from(Text::new("b").style(Style::new().italic(true))),
                    ]))
                    .title(Text::new("T").bold(true))
                    .box_name("heavy")
                    .padding((0, 2))
                    .title_align(Justify::Left),
                ),
                Table::new()
                    .column(Column::new("k").header_style(Style::new().color("red")))
                    .column(Text::new("v"))
                    .row([Cell::from("x"), Cell::Group(vec!["y".into(), Style::new().into()])])
                    .row_styles(["", "dim"])
                    .into(),
                Code::new("fn f() {}").language("rust").highlight_lines([1]).into(),
                "plain".into(),
            ])
            .expand(true),
        );
        let decoded = decode_value(&encode(&tree)).unwrap();
        assert_eq!(decoded, tree);
    }
}
