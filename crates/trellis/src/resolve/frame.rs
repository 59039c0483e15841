use trellis_render::Panel;

use super::resolve_displayable;
use super::style::resolve_optional as resolve_optional_style;
use super::text::resolve_optional as resolve_optional_text;
use crate::component::ComponentKind;
use crate::components::Frame;
use crate::error::{ResolveError, Result};
use crate::vocabulary::box_style;

/// Builds a panel around the frame's displayable.
pub fn resolve_frame(props: &Frame) -> Result<Panel> {
    let displayable = props
        .displayable
        .as_deref()
        .ok_or(ResolveError::MissingField {
            kind: ComponentKind::Frame,
            field: "displayable",
        })?;

    let mut panel = Panel::new(resolve_displayable(displayable)?)
        .box_style(box_style(props.box_name.as_deref()));
    panel.title = resolve_optional_text(props.title.as_ref())?;
    panel.subtitle = resolve_optional_text(props.subtitle.as_ref())?;
    if let Some(expand) = props.expand {
        panel.expand = expand;
    }
    if let Some(padding) = props.padding {
        panel.padding = padding;
    }
    panel.width = props.width;
    if let Some(style) = resolve_optional_style(props.style.as_ref())? {
        panel.style = style;
    }
    if let Some(style) = resolve_optional_style(props.border_style.as_ref())? {
        panel.border_style = style;
    }
    if let Some(align) = props.title_align {
        panel.title_align = align;
    }
    if let Some(align) = props.subtitle_align {
        panel.subtitle_align = align;
    }
    Ok(panel)
}
