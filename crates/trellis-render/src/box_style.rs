//! Box-drawing character sets for table and panel borders.
//!
//! A [`BoxStyle`] is eight rows of four characters:
//!
//! ```text
//! ╭─┬╮  top:       left, horizontal, divider, right
//! │ ││  head:      left, (unused), vertical, right
//! ├─┼┤  head_row:  left, horizontal, cross, right
//! │ ││  mid:       left, (unused), vertical, right
//! ├─┼┤  row:       left, horizontal, cross, right
//! ├─┼┤  foot_row:  left, horizontal, cross, right
//! │ ││  foot:      left, (unused), vertical, right
//! ╰─┴╯  bottom:    left, horizontal, divider, right
//! ```
//!
//! ```rust
//! use trellis_render::box_style::{self, RowLevel};
//!
//! assert_eq!(box_style::ROUNDED.top(&[3, 2], true), "╭───┬──╮");
//! assert_eq!(box_style::ASCII.separator(RowLevel::HeadRow, &[1, 1], true), "|-+-|");
//! ```

/// Which horizontal rule to draw between rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowLevel {
    /// Between the header and the body.
    HeadRow,
    /// Between body rows.
    Row,
    /// Between the body and the footer.
    FootRow,
}

/// Which vertical characters frame a row of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Head,
    Mid,
    Foot,
}

/// A named set of box-drawing characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    name: &'static str,
    rows: [&'static str; 8],
}

impl BoxStyle {
    const fn new(name: &'static str, rows: [&'static str; 8]) -> Self {
        BoxStyle { name, rows }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn char_at(&self, row: usize, column: usize) -> char {
        self.rows[row].chars().nth(column).unwrap_or(' ')
    }

    fn rule(&self, row: usize, widths: &[usize], edge: bool) -> String {
        let horizontal = self.char_at(row, 1);
        let divider = self.char_at(row, 2);
        let mut out = String::new();
        if edge {
            out.push(self.char_at(row, 0));
        }
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                out.push(divider);
            }
            out.extend(std::iter::repeat(horizontal).take(*width));
        }
        if edge {
            out.push(self.char_at(row, 3));
        }
        out
    }

    /// The top border for columns of the given widths.
    pub fn top(&self, widths: &[usize], edge: bool) -> String {
        self.rule(0, widths, edge)
    }

    /// The bottom border for columns of the given widths.
    pub fn bottom(&self, widths: &[usize], edge: bool) -> String {
        self.rule(7, widths, edge)
    }

    /// A horizontal separator between rows.
    pub fn separator(&self, level: RowLevel, widths: &[usize], edge: bool) -> String {
        let row = match level {
            RowLevel::HeadRow => 2,
            RowLevel::Row => 4,
            RowLevel::FootRow => 5,
        };
        self.rule(row, widths, edge)
    }

    /// Left edge, column divider and right edge for a row of cells.
    pub fn verticals(&self, section: Section) -> (char, char, char) {
        let row = match section {
            Section::Head => 1,
            Section::Mid => 3,
            Section::Foot => 6,
        };
        (
            self.char_at(row, 0),
            self.char_at(row, 2),
            self.char_at(row, 3),
        )
    }

    /// Top-left, horizontal and top-right characters (panel top border).
    pub fn top_chars(&self) -> (char, char, char) {
        (self.char_at(0, 0), self.char_at(0, 1), self.char_at(0, 3))
    }

    /// Bottom-left, horizontal and bottom-right characters.
    pub fn bottom_chars(&self) -> (char, char, char) {
        (self.char_at(7, 0), self.char_at(7, 1), self.char_at(7, 3))
    }
}

pub const ASCII: BoxStyle = BoxStyle::new(
    "ascii",
    ["+--+", "| ||", "|-+|", "| ||", "|-+|", "|-+|", "| ||", "+--+"],
);

pub const SQUARE: BoxStyle = BoxStyle::new(
    "square",
    ["┌─┬┐", "│ ││", "├─┼┤", "│ ││", "├─┼┤", "├─┼┤", "│ ││", "└─┴┘"],
);

pub const MINIMAL: BoxStyle = BoxStyle::new(
    "minimal",
    ["  ╷ ", "  │ ", "╶─┼╴", "  │ ", "╶─┼╴", "╶─┼╴", "  │ ", "  ╵ "],
);

pub const MINIMAL_HEAVY_HEAD: BoxStyle = BoxStyle::new(
    "minimal_heavy_head",
    ["  ╷ ", "  │ ", "╺━┿╸", "  │ ", "╶─┼╴", "╶─┼╴", "  │ ", "  ╵ "],
);

pub const MINIMAL_DOUBLE_HEAD: BoxStyle = BoxStyle::new(
    "minimal_double_head",
    ["  ╷ ", "  │ ", " ═╪ ", "  │ ", " ─┼ ", " ─┼ ", "  │ ", "  ╵ "],
);

pub const SIMPLE: BoxStyle = BoxStyle::new(
    "simple",
    ["    ", "    ", " ── ", "    ", "    ", " ── ", "    ", "    "],
);

pub const SIMPLE_HEAVY: BoxStyle = BoxStyle::new(
    "simple_heavy",
    ["    ", "    ", " ━━ ", "    ", "    ", " ━━ ", "    ", "    "],
);

pub const HORIZONTALS: BoxStyle = BoxStyle::new(
    "horizontals",
    [" ── ", "    ", " ── ", "    ", " ── ", " ── ", "    ", " ── "],
);

pub const ROUNDED: BoxStyle = BoxStyle::new(
    "rounded",
    ["╭─┬╮", "│ ││", "├─┼┤", "│ ││", "├─┼┤", "├─┼┤", "│ ││", "╰─┴╯"],
);

pub const HEAVY: BoxStyle = BoxStyle::new(
    "heavy",
    ["┏━┳┓", "┃ ┃┃", "┣━╋┫", "┃ ┃┃", "┣━╋┫", "┣━╋┫", "┃ ┃┃", "┗━┻┛"],
);

pub const HEAVY_EDGE: BoxStyle = BoxStyle::new(
    "heavy_edge",
    ["┏━┯┓", "┃ │┃", "┠─┼┨", "┃ │┃", "┠─┼┨", "┠─┼┨", "┃ │┃", "┗━┷┛"],
);

pub const HEAVY_HEAD: BoxStyle = BoxStyle::new(
    "heavy_head",
    ["┏━┳┓", "┃ ┃┃", "┡━╇┩", "│ ││", "├─┼┤", "├─┼┤", "│ ││", "└─┴┘"],
);

pub const DOUBLE: BoxStyle = BoxStyle::new(
    "double",
    ["╔═╦╗", "║ ║║", "╠═╬╣", "║ ║║", "╠═╬╣", "╠═╬╣", "║ ║║", "╚═╩╝"],
);

pub const DOUBLE_EDGE: BoxStyle = BoxStyle::new(
    "double_edge",
    ["╔═╤╗", "║ │║", "╟─┼╢", "║ │║", "╟─┼╢", "╟─┼╢", "║ │║", "╚═╧╝"],
);

/// Every built-in box style.
pub const ALL: [BoxStyle; 14] = [
    ASCII,
    SQUARE,
    MINIMAL,
    MINIMAL_HEAVY_HEAD,
    MINIMAL_DOUBLE_HEAD,
    SIMPLE,
    HEAVY,
    HEAVY_EDGE,
    HEAVY_HEAD,
    DOUBLE,
    DOUBLE_EDGE,
    SIMPLE_HEAVY,
    HORIZONTALS,
    ROUNDED,
];

impl Default for BoxStyle {
    fn default() -> Self {
        ROUNDED
    }
}
