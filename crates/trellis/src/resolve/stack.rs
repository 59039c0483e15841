use trellis_render as backend;
use trellis_render::Renderable;

use super::resolve_displayable;
use super::table::resolve_column_entry;
use crate::component::ComponentKind;
use crate::components::Stack;
use crate::error::Result;

/// Lays the children out on a borderless grid.
///
/// `HStack` puts every child in one row; any other kind gives each child a
/// row of its own.
pub fn resolve_stack(kind: ComponentKind, props: &Stack) -> Result<backend::Table> {
    let mut grid = backend::Table::grid();
    for entry in &props.cols {
        grid.add_column(resolve_column_entry(entry)?);
    }
    if let Some(expand) = props.expand {
        grid.expand = expand;
    }
    if let Some(padding) = props.padding {
        grid.padding = padding;
    }
    if let Some(pad_edge) = props.pad_edge {
        grid.pad_edge = pad_edge;
    }

    let children = props
        .displayables
        .iter()
        .map(resolve_displayable)
        .collect::<Result<Vec<Renderable>>>()?;
    if kind == ComponentKind::HStack {
        grid.add_row(children);
    } else {
        for child in children {
            grid.add_row([child]);
        }
    }
    Ok(grid)
}
