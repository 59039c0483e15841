use trellis_render::Padding;

use super::{ColumnEntry, Displayable};

/// Children of an `HStack` or `VStack`.
///
/// The stack direction comes from the component variant, not from this
/// struct, so the same children can be laid out either way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    pub displayables: Vec<Displayable>,
    /// Column specs for the underlying grid.
    pub cols: Vec<ColumnEntry>,
    pub expand: Option<bool>,
    pub padding: Option<Padding>,
    pub pad_edge: Option<bool>,
}

impl Stack {
    pub fn new<D: Into<Displayable>>(displayables: impl IntoIterator<Item = D>) -> Self {
        Stack {
            displayables: displayables.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn push(mut self, displayable: impl Into<Displayable>) -> Self {
        self.displayables.push(displayable.into());
        self
    }

    pub fn column(mut self, column: impl Into<ColumnEntry>) -> Self {
        self.cols.push(column.into());
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn pad_edge(mut self, pad_edge: bool) -> Self {
        self.pad_edge = Some(pad_edge);
        self
    }
}
