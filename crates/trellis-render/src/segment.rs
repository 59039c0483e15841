//! Styled segments and rendered lines.
//!
//! Every renderable ultimately produces a list of [`Line`]s, each a sequence
//! of [`Segment`]s. Containers (tables, panels) work purely on lines: they
//! pad, crop and restyle them without knowing what produced them.

use crate::style::Style;
use crate::text::Justify;
use crate::util::{char_width, display_width};

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Segment {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Segment::new(text, Style::default())
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One rendered terminal line.
pub type Line = Vec<Segment>;

/// Total display width of a line.
pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(Segment::width).sum()
}

/// Plain text of a line.
pub fn line_text(line: &[Segment]) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

/// Layers `base` underneath every segment's own style.
pub fn apply_base_style(line: &mut Line, base: &Style) {
    if base.is_plain() {
        return;
    }
    for segment in line.iter_mut() {
        segment.style = base.combine(&segment.style);
    }
}

/// Cuts a line down to at most `width` columns.
pub fn crop_line(line: Line, width: usize) -> Line {
    let mut out = Vec::with_capacity(line.len());
    let mut used = 0;
    for segment in line {
        if used >= width {
            break;
        }
        let w = segment.width();
        if used + w <= width {
            used += w;
            out.push(segment);
            continue;
        }
        let mut text = String::new();
        for c in segment.text.chars() {
            let cw = char_width(c);
            if used + cw > width {
                break;
            }
            used += cw;
            text.push(c);
        }
        if !text.is_empty() {
            out.push(Segment::new(text, segment.style));
        }
        break;
    }
    out
}

/// Crops or pads a line to exactly `width` columns, placing the content
/// according to `justify`. Padding spaces carry `pad_style`.
pub fn fit_line(line: Line, width: usize, justify: Justify, pad_style: &Style) -> Line {
    let mut line = crop_line(line, width);
    let current = line_width(&line);
    if current >= width {
        return line;
    }
    let gap = width - current;
    let (left, right) = match justify {
        Justify::Right => (gap, 0),
        Justify::Center => (gap / 2, gap - gap / 2),
        _ => (0, gap),
    };
    if left > 0 {
        line.insert(0, Segment::new(" ".repeat(left), pad_style.clone()));
    }
    if right > 0 {
        line.push(Segment::new(" ".repeat(right), pad_style.clone()));
    }
    line
}

/// A line of `width` spaces.
pub fn blank_line(width: usize, style: &Style) -> Line {
    if width == 0 {
        return Vec::new();
    }
    vec![Segment::new(" ".repeat(width), style.clone())]
}

/// Merges adjacent segments that share a style and drops empty ones.
pub fn simplify(line: Line) -> Line {
    let mut out: Line = Vec::with_capacity(line.len());
    for segment in line {
        if segment.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.style == segment.style => last.text.push_str(&segment.text),
            _ => out.push(segment),
        }
    }
    out
}
