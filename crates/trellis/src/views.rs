//! Ready-made component trees for tabular data.
//!
//! [`record_table`] lists serializable records as a titled table;
//! [`card`] shows one entity's outgoing and incoming attributes side by
//! side. Both return ordinary [`Component`]s, so callers can nest, encode or
//! render them like any hand-built tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trellis_render::{Justify, Padding};

use crate::component::Component;
use crate::components::{Cell, Column, Displayable, Frame, Stack, Style, Table, Text};
use crate::error::{ResolveError, Result};

/// Colors cycled across columns and card rows.
pub const PALETTE: [&str; 5] = ["#ff7e74", "#ffe596", "#81d76d", "#57acf9", "#baaee1"];

/// Background behind record table headers.
pub const HEADER_BACKGROUND: &str = "#2a3240";

const MISSING: &str = "-";

/// Layout options shared by the views.
///
/// Deserializes from configuration with every field optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Drop cell padding.
    pub compact: bool,
    /// Maximum number of records shown.
    pub limit: usize,
    /// What the records are called in the title.
    pub label: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            compact: false,
            limit: 10,
            label: "records".to_string(),
        }
    }
}

impl ViewOptions {
    fn padding(&self) -> Padding {
        if self.compact {
            Padding::from(0)
        } else {
            Padding::from(1)
        }
    }
}

/// Lists records as a table under a title frame.
///
/// Nested objects flatten into dot-separated columns. Columns appear in the
/// order their keys are first seen.
///
/// ```rust
/// use serde_json::json;
/// use trellis::views::{record_table, ViewOptions};
/// use trellis::Component;
///
/// let records = vec![
///     json!({"name": "ada", "admin": true}),
///     json!({"name": "bob", "team": {"id": 7}}),
/// ];
/// let view = record_table(&records, &ViewOptions::default()).unwrap();
/// assert!(matches!(view, Component::VStack(_)));
/// ```
pub fn record_table<T: Serialize>(records: &[T], options: &ViewOptions) -> Result<Component> {
    let shown: Vec<Vec<(String, Value)>> = records
        .iter()
        .take(options.limit)
        .map(|record| serde_json::to_value(record).map(|v| flatten(&v)))
        .collect::<std::result::Result<_, _>>()
        .map_err(ResolveError::Records)?;

    let title = Frame::new(
        Text::new(format!("A List of {} {}", shown.len(), options.label))
            .bold(true)
            .justify(Justify::Center),
    )
    .box_name("simple");

    let mut stack = Stack::default().push(title);
    if shown.is_empty() {
        return Ok(Component::vstack(stack));
    }

    let mut keys: Vec<&str> = Vec::new();
    for record in &shown {
        for (key, _) in record {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
    }

    let mut table = Table::new()
        .show_edge(false)
        .expand(true)
        .padding(options.padding())
        .show_header(true)
        .box_name("simple")
        .row_styles(["", "dim"]);
    for (i, key) in keys.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        table = table.column(
            Column::new(Text::new(*key).justify(Justify::Center))
                .header_style(Style::new().background_color(HEADER_BACKGROUND).color(color))
                .style(Style::new().color(color)),
        );
    }
    for record in &shown {
        table = table.row(keys.iter().map(|key| {
            record
                .iter()
                .find(|(k, _)| k.as_str() == *key)
                .map(|(_, value)| display_value(value))
                .unwrap_or_else(|| MISSING.to_string())
        }));
    }

    stack = stack.push(table);
    Ok(Component::vstack(stack))
}

/// A framed card: outgoing attributes on the left, incoming on the right.
///
/// Each side is any value that serializes to a mapping; its keys are
/// flattened and sorted. A side with no entries is left blank.
pub fn card<O, I>(
    title: &str,
    subtitle: &str,
    outgoing: &O,
    incoming: &I,
    options: &ViewOptions,
) -> Result<Component>
where
    O: Serialize,
    I: Serialize,
{
    let outs = attribute_table(outgoing, " Outs 👉🏻", options)?;
    let ins = attribute_table(incoming, " Ins 👈🏻", options)?;
    let frame = Frame::new(Component::hstack(Stack::new([outs, ins]).expand(true)))
        .title(Text::new(title).bold(true))
        .subtitle(Text::new(subtitle).bold(true))
        .box_name("horizontals");
    Ok(frame.into())
}

fn attribute_table<T: Serialize>(
    side: &T,
    heading: &str,
    options: &ViewOptions,
) -> Result<Displayable> {
    let value = serde_json::to_value(side).map_err(ResolveError::Records)?;
    let mut entries = match value {
        Value::Null => Vec::new(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => flatten(&other),
    };
    if entries.is_empty() {
        return Ok("".into());
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let header_style = Style::new().color(PALETTE[1]);
    let mut table = Table::new()
        .expand(true)
        .padding(options.padding())
        .box_name("simple")
        .row_styles((0..entries.len()).map(|i| PALETTE[i % PALETTE.len()]))
        .column(Column::new(
            Text::new("").justify(Justify::Left).style(header_style.clone()),
        ))
        .column(Column::new(
            Text::new(heading).justify(Justify::Left).style(header_style),
        ));
    for (key, value) in &entries {
        table = table.row([Cell::from(key.as_str()), Cell::from(display_value(value))]);
    }
    Ok(table.into())
}

/// Flattens nested objects into dot-separated keys, keeping scalar leaves.
fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into(value, "", &mut out);
    out
}

fn flatten_into(value: &Value, prefix: &str, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, &path, out);
            }
        }
        leaf => {
            let key = if prefix.is_empty() { "value" } else { prefix };
            out.push((key.to_string(), leaf.clone()));
        }
    }
}

/// How a single value shows in a cell.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::Bool(true) => "✅".to_string(),
        Value::Bool(false) => "❌".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.is_empty() => MISSING.to_string(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
