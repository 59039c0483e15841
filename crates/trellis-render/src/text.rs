//! Styled text runs.
//!
//! A [`Text`] is an ordered list of styled fragments plus layout options
//! (justification, overflow, wrapping, tab size). Rendering wraps words to
//! the available width, folds words longer than a line, and aligns each
//! resulting line.
//!
//! ```rust
//! use trellis_render::{Style, Text};
//!
//! let text = Text::assemble([
//!     ("Hello, ", Style::new()),
//!     ("World", Style::new().bold(true)),
//! ]);
//! assert_eq!(text.plain_text(), "Hello, World");
//! assert_eq!(text.fragments().len(), 2);
//! ```

use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::measure::Measurement;
use crate::segment::{simplify, Line, Segment};
use crate::style::Style;
use crate::util::{char_width, truncate_end};

/// Horizontal placement of text within its width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Defer to the container (left for plain output).
    #[default]
    Default,
    /// Left-align (pad on the right).
    Left,
    /// Center (pad on both sides).
    Center,
    /// Right-align (pad on the left).
    Right,
    /// Stretch inter-word spaces so every line but the last fills the width.
    Full,
}

impl FromStr for Justify {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Justify::Default),
            "left" => Ok(Justify::Left),
            "center" => Ok(Justify::Center),
            "right" => Ok(Justify::Right),
            "full" => Ok(Justify::Full),
            other => Err(format!(
                "invalid justify '{}': expected default, left, center, right or full",
                other
            )),
        }
    }
}

/// How text that does not fit its width is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Break overlong words across lines.
    #[default]
    Fold,
    /// Cut overlong lines at the width.
    Crop,
    /// Cut overlong lines and mark the cut with `…`.
    Ellipsis,
    /// Leave overlong lines untouched.
    Ignore,
}

impl FromStr for Overflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fold" => Ok(Overflow::Fold),
            "crop" => Ok(Overflow::Crop),
            "ellipsis" => Ok(Overflow::Ellipsis),
            "ignore" => Ok(Overflow::Ignore),
            other => Err(format!(
                "invalid overflow '{}': expected fold, crop, ellipsis or ignore",
                other
            )),
        }
    }
}

/// A styled text run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    fragments: Vec<Segment>,
    /// Base style layered underneath every fragment.
    pub style: Style,
    pub justify: Justify,
    pub overflow: Overflow,
    /// Never wrap; overlong lines are handled by `overflow` instead.
    pub no_wrap: bool,
    /// Tab stop width; `None` uses the console's setting.
    pub tab_size: Option<usize>,
}

impl Text {
    /// Creates an empty text run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unstyled text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default())
    }

    /// Creates a text run with a single style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut out = Self::new();
        out.append(text, style);
        out
    }

    /// Builds a text run from ordered (substring, style) pairs.
    pub fn assemble<S, I>(parts: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Style)>,
    {
        let mut out = Self::new();
        for (text, style) in parts {
            out.append(text, style);
        }
        out
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = Some(tab_size);
        self
    }

    /// Appends a styled substring. Empty strings are skipped and a fragment
    /// with the same style as the previous one is merged into it.
    pub fn append(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.fragments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.fragments.push(Segment::new(text, style)),
        }
    }

    /// Splices another text run onto this one, layering its base style
    /// underneath each of its fragments.
    pub fn append_text(&mut self, other: &Text) {
        for fragment in &other.fragments {
            self.append(fragment.text.clone(), other.style.combine(&fragment.style));
        }
    }

    /// The styled fragments, in order, without the base style applied.
    pub fn fragments(&self) -> &[Segment] {
        &self.fragments
    }

    /// The concatenated text without styling.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Splits into per-line cells of (char, style index), expanding tabs.
    fn cells(&self, tab_size: usize) -> (Vec<Style>, Vec<Vec<(char, usize)>>) {
        let styles: Vec<Style> = self
            .fragments
            .iter()
            .map(|f| self.style.combine(&f.style))
            .collect();
        let tab_size = self.tab_size.unwrap_or(tab_size).max(1);

        let mut lines = vec![Vec::new()];
        let mut column = 0;
        for (index, fragment) in self.fragments.iter().enumerate() {
            for c in fragment.text.chars() {
                match c {
                    '\n' => {
                        lines.push(Vec::new());
                        column = 0;
                    }
                    '\t' => {
                        let spaces = tab_size - column % tab_size;
                        for _ in 0..spaces {
                            push_cell(&mut lines, (' ', index));
                        }
                        column += spaces;
                    }
                    '\r' => {}
                    c => {
                        push_cell(&mut lines, (c, index));
                        column += char_width(c);
                    }
                }
            }
        }
        (styles, lines)
    }

    /// Minimum (longest word) and maximum (longest line) widths.
    pub fn measure(&self, tab_size: usize) -> Measurement {
        let (_, lines) = self.cells(tab_size);
        let mut minimum = 0;
        let mut maximum = 0;
        for line in &lines {
            maximum = maximum.max(cells_width(line));
            if self.no_wrap {
                continue;
            }
            for word in line.split(|(c, _)| c.is_whitespace()) {
                minimum = minimum.max(cells_width(word));
            }
        }
        if self.no_wrap {
            minimum = maximum;
        }
        Measurement::new(minimum, maximum)
    }

    /// Lays the text out within `width` columns.
    ///
    /// Lines are wrapped and justified but not padded on the right; containers
    /// pad to their own width.
    pub fn render_lines(&self, width: usize, tab_size: usize) -> Vec<Line> {
        let (styles, lines) = self.cells(tab_size);
        let mut out = Vec::new();

        for cells in lines {
            if self.no_wrap || self.overflow == Overflow::Ignore {
                out.push(self.overflow_line(&styles, &cells, width));
                continue;
            }
            let ranges = wrap_ranges(&cells, width);
            let last = ranges.len().saturating_sub(1);
            for (i, range) in ranges.into_iter().enumerate() {
                let mut line_cells = cells[range].to_vec();
                if self.justify == Justify::Full && i < last {
                    justify_full(&mut line_cells, width);
                }
                out.push(self.finish_line(&styles, &line_cells, width));
            }
        }
        out
    }

    fn overflow_line(&self, styles: &[Style], cells: &[(char, usize)], width: usize) -> Line {
        let line = group_cells(styles, cells);
        if cells_width(cells) <= width || self.overflow == Overflow::Ignore {
            return self.align(line, width);
        }
        let line = match self.overflow {
            Overflow::Ellipsis => {
                let mut cropped = crate::segment::crop_line(line, width.saturating_sub(1));
                let marker_style = cropped
                    .last()
                    .map(|s| s.style.clone())
                    .unwrap_or_else(|| self.style.clone());
                cropped.push(Segment::new(truncate_end("…", width, ""), marker_style));
                cropped
            }
            _ => crate::segment::crop_line(line, width),
        };
        self.align(line, width)
    }

    fn finish_line(&self, styles: &[Style], cells: &[(char, usize)], width: usize) -> Line {
        self.align(group_cells(styles, cells), width)
    }

    fn align(&self, line: Line, width: usize) -> Line {
        match self.justify {
            Justify::Center | Justify::Right => {
                crate::segment::fit_line(line, width, self.justify, &self.style)
            }
            _ => line,
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::plain(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::plain(s)
    }
}

fn push_cell(lines: &mut [Vec<(char, usize)>], cell: (char, usize)) {
    if let Some(line) = lines.last_mut() {
        line.push(cell);
    }
}

fn cells_width(cells: &[(char, usize)]) -> usize {
    cells.iter().map(|(c, _)| char_width(*c)).sum()
}

fn group_cells(styles: &[Style], cells: &[(char, usize)]) -> Line {
    let line = cells
        .iter()
        .map(|(c, index)| Segment::new(c.to_string(), styles[*index].clone()))
        .collect();
    simplify(line)
}

/// Greedy word wrap over styled cells.
///
/// Returns one range per output line. Whitespace at a break is dropped;
/// words wider than `width` are folded across lines.
fn wrap_ranges(cells: &[(char, usize)], width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut content_end = 0;
    let mut line_width = 0;
    let mut has_word = false;
    let mut i = 0;

    while i < cells.len() {
        let word_start = i;
        while i < cells.len() && !cells[i].0.is_whitespace() {
            i += 1;
        }
        let word_end = i;
        while i < cells.len() && cells[i].0.is_whitespace() {
            i += 1;
        }
        let space_end = i;

        let word_width = cells_width(&cells[word_start..word_end]);
        let space_width = cells_width(&cells[word_end..space_end]);

        if word_start == word_end {
            line_width += space_width;
            continue;
        }

        if has_word && line_width + word_width > width {
            ranges.push(start..content_end);
            start = word_start;
            line_width = 0;
        }

        if line_width + word_width > width {
            for (j, (c, _)) in cells.iter().enumerate().take(word_end).skip(word_start) {
                let cw = char_width(*c);
                if line_width + cw > width && j > start {
                    ranges.push(start..j);
                    start = j;
                    line_width = 0;
                }
                line_width += cw;
            }
        } else {
            line_width += word_width;
        }

        content_end = word_end;
        has_word = true;
        line_width += space_width;
    }

    ranges.push(start..content_end.max(start));
    ranges
}

/// Widens inter-word gaps so the line fills `width`.
fn justify_full(cells: &mut Vec<(char, usize)>, width: usize) {
    let current = cells_width(cells);
    if current >= width {
        return;
    }
    let gaps: Vec<usize> = cells
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(i, (c, _))| *c == ' ' && cells[i - 1].0 != ' ')
        .map(|(i, _)| i)
        .collect();
    if gaps.is_empty() {
        return;
    }
    let extra = width - current;
    let mut inserts = vec![extra / gaps.len(); gaps.len()];
    for slot in inserts.iter_mut().take(extra % gaps.len()) {
        *slot += 1;
    }
    for (gap, count) in gaps.iter().zip(inserts).rev() {
        let style = cells[*gap].1;
        for _ in 0..count {
            cells.insert(*gap, (' ', style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::line_text;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| line_text(l)).collect()
    }

    #[test]
    fn test_append_merges_equal_styles() {
        let mut text = Text::plain("ab");
        text.append("cd", Style::new());
        text.append("", Style::new().bold(true));
        assert_eq!(text.fragments().len(), 1);
        assert_eq!(text.plain_text(), "abcd");
    }

    #[test]
    fn test_append_text_layers_base_style() {
        let inner = Text::assemble([("x", Style::new().italic(true))])
            .with_style(Style::new().bold(true));
        let mut outer = Text::plain("a");
        outer.append_text(&inner);
        assert_eq!(
            outer.fragments()[1].style,
            Style::new().bold(true).italic(true)
        );
    }

    #[test]
    fn test_wrap_words() {
        let lines = Text::plain("hello world foo bar").render_lines(11, 8);
        assert_eq!(texts(&lines), vec!["hello world", "foo bar"]);
    }

    #[test]
    fn test_wrap_folds_long_words() {
        let lines = Text::plain("abcdefghij xy").render_lines(4, 8);
        assert_eq!(texts(&lines), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = Text::plain("a\n\nb").render_lines(10, 8);
        assert_eq!(texts(&lines), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_preserves_leading_spaces() {
        let lines = Text::plain("  ab").render_lines(10, 8);
        assert_eq!(texts(&lines), vec!["  ab"]);
    }

    #[test]
    fn test_tabs_expand() {
        let lines = Text::plain("a\tb").tab_size(4).render_lines(20, 8);
        assert_eq!(texts(&lines), vec!["a   b"]);
    }

    #[test]
    fn test_no_wrap_crop_and_ellipsis() {
        let crop = Text::plain("hello world")
            .no_wrap(true)
            .overflow(Overflow::Crop)
            .render_lines(5, 8);
        assert_eq!(texts(&crop), vec!["hello"]);

        let ellipsis = Text::plain("hello world")
            .no_wrap(true)
            .overflow(Overflow::Ellipsis)
            .render_lines(6, 8);
        assert_eq!(texts(&ellipsis), vec!["hello…"]);
    }

    #[test]
    fn test_justify_center_and_right() {
        let center = Text::plain("ab").justify(Justify::Center).render_lines(6, 8);
        assert_eq!(texts(&center), vec!["  ab  "]);
        let right = Text::plain("ab").justify(Justify::Right).render_lines(6, 8);
        assert_eq!(texts(&right), vec!["    ab"]);
    }

    #[test]
    fn test_justify_full() {
        let lines = Text::plain("a b c dd")
            .justify(Justify::Full)
            .render_lines(7, 8);
        assert_eq!(texts(&lines), vec!["a  b  c", "dd"]);
    }

    #[test]
    fn test_measure() {
        let m = Text::plain("hello wide world\nhi").measure(8);
        assert_eq!(m, Measurement::new(5, 16));
        let nowrap = Text::plain("hello wide").no_wrap(true).measure(8);
        assert_eq!(nowrap, Measurement::new(10, 10));
    }

    #[test]
    fn test_styles_survive_wrapping() {
        let text = Text::assemble([("aa ", Style::new()), ("bb", Style::new().bold(true))]);
        let lines = text.render_lines(2, 8);
        assert_eq!(texts(&lines), vec!["aa", "bb"]);
        assert_eq!(lines[1][0].style, Style::new().bold(true));
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("CENTER".parse::<Justify>().unwrap(), Justify::Center);
        assert_eq!("ellipsis".parse::<Overflow>().unwrap(), Overflow::Ellipsis);
        assert!("sideways".parse::<Justify>().is_err());
    }
}
