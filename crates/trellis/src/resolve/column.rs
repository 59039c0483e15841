use trellis_render as backend;

use super::style::resolve_optional;
use super::text::resolve_string_or_text;
use crate::components::Column;
use crate::error::Result;

/// Builds a backend column; style components are resolved before attaching.
pub fn resolve_column(props: &Column) -> Result<backend::Column> {
    let mut column = backend::Column::new(resolve_string_or_text(&props.text)?);
    if let Some(style) = resolve_optional(props.header_style.as_ref())? {
        column.header_style = style;
    }
    if let Some(style) = resolve_optional(props.footer_style.as_ref())? {
        column.footer_style = style;
    }
    if let Some(style) = resolve_optional(props.style.as_ref())? {
        column.style = style;
    }
    if let Some(justify) = props.justify {
        column.justify = justify;
    }
    if let Some(vertical) = props.vertical {
        column.vertical = vertical;
    }
    column.width = props.width;
    column.min_width = props.min_width;
    column.max_width = props.max_width;
    column.ratio = props.ratio;
    if let Some(no_wrap) = props.no_wrap {
        column.no_wrap = no_wrap;
    }
    Ok(column)
}
