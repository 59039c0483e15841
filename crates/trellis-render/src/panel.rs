//! Bordered panels.

use crate::box_style::{self, BoxStyle, Section};
use crate::console::ConsoleOptions;
use crate::measure::Measurement;
use crate::padding::Padding;
use crate::renderable::Renderable;
use crate::segment::{apply_base_style, blank_line, fit_line, line_width, Line, Segment};
use crate::style::Style;
use crate::text::{Justify, Overflow, Text};

/// A box drawn around one renderable, with an optional title embedded in
/// the top border and subtitle in the bottom border.
///
/// ```rust
/// use trellis_render::{box_style, render_to_string, ConsoleOptions, OutputMode, Panel};
///
/// let panel = Panel::new("hi").box_style(box_style::ASCII).expand(false);
/// let options = ConsoleOptions::default().width(20).mode(OutputMode::Text);
/// assert_eq!(render_to_string(&panel.into(), &options), "+----+\n| hi |\n+----+\n");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    renderable: Box<Renderable>,
    pub box_style: BoxStyle,
    pub title: Option<Text>,
    pub title_align: Justify,
    pub subtitle: Option<Text>,
    pub subtitle_align: Justify,
    /// Fill the available width instead of fitting the content.
    pub expand: bool,
    /// Style of the content area.
    pub style: Style,
    pub border_style: Style,
    pub width: Option<usize>,
    pub padding: Padding,
}

impl Panel {
    pub fn new(renderable: impl Into<Renderable>) -> Self {
        Panel {
            renderable: Box::new(renderable.into()),
            box_style: box_style::ROUNDED,
            title: None,
            title_align: Justify::Center,
            subtitle: None,
            subtitle_align: Justify::Center,
            expand: true,
            style: Style::new(),
            border_style: Style::new(),
            width: None,
            padding: Padding::from((0, 1)),
        }
    }

    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }

    pub fn box_style(mut self, box_style: BoxStyle) -> Self {
        self.box_style = box_style;
        self
    }

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<Text>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Borders plus horizontal padding.
    fn frame_width(&self) -> usize {
        2 + self.padding.horizontal()
    }

    fn label_width(label: &Option<Text>) -> usize {
        label
            .as_ref()
            .map(|t| t.measure(8).maximum + 4)
            .unwrap_or(0)
    }

    pub fn measure(&self, options: &ConsoleOptions) -> Measurement {
        if let Some(width) = self.width {
            let width = width.min(options.width);
            return Measurement::new(width, width);
        }
        let inner = options
            .clone()
            .width(options.width.saturating_sub(self.frame_width()));
        let content = self.renderable.measure(&inner).grow(self.frame_width());
        let labels = Self::label_width(&self.title).max(Self::label_width(&self.subtitle));
        let maximum = content.maximum.max(labels);
        if self.expand {
            Measurement::new(content.minimum, options.width)
        } else {
            Measurement::new(content.minimum, maximum).clamp_to(options.width)
        }
    }

    pub fn render_lines(&self, options: &ConsoleOptions) -> Vec<Line> {
        let width = match (self.width, self.expand) {
            (Some(width), _) => width.min(options.width),
            (None, true) => options.width,
            (None, false) => self.measure(options).maximum,
        };
        let border = self.style.combine(&self.border_style);
        let (left, _, right) = self.box_style.verticals(Section::Mid);
        let child_width = width.saturating_sub(self.frame_width());
        let inner_width = width.saturating_sub(2);

        let mut body: Vec<Line> = Vec::new();
        for _ in 0..self.padding.top {
            body.push(blank_line(inner_width, &self.style));
        }
        let child_options = options.clone().width(child_width);
        for mut line in self.renderable.render_lines(&child_options) {
            apply_base_style(&mut line, &self.style);
            let mut padded = blank_line(self.padding.left, &self.style);
            padded.extend(fit_line(line, child_width, Justify::Left, &self.style));
            padded.extend(blank_line(self.padding.right, &self.style));
            body.push(fit_line(padded, inner_width, Justify::Left, &self.style));
        }
        for _ in 0..self.padding.bottom {
            body.push(blank_line(inner_width, &self.style));
        }

        let (top_left, top_h, top_right) = self.box_style.top_chars();
        let (bottom_left, bottom_h, bottom_right) = self.box_style.bottom_chars();

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(self.border_line(
            (top_left, top_h, top_right),
            self.title.as_ref(),
            self.title_align,
            width,
            &border,
            options,
        ));
        for content in body {
            let mut line = vec![Segment::new(left.to_string(), border.clone())];
            line.extend(content);
            line.push(Segment::new(right.to_string(), border.clone()));
            lines.push(line);
        }
        lines.push(self.border_line(
            (bottom_left, bottom_h, bottom_right),
            self.subtitle.as_ref(),
            self.subtitle_align,
            width,
            &border,
            options,
        ));
        lines
    }

    /// A horizontal border, with `label` embedded when there is room for it.
    fn border_line(
        &self,
        (corner_left, horizontal, corner_right): (char, char, char),
        label: Option<&Text>,
        align: Justify,
        width: usize,
        border: &Style,
        options: &ConsoleOptions,
    ) -> Line {
        let rule = |n: usize| horizontal.to_string().repeat(n);
        let label = match label {
            Some(label) if width > 4 => label,
            _ => {
                return vec![Segment::new(
                    format!("{}{}{}", corner_left, rule(width.saturating_sub(2)), corner_right),
                    border.clone(),
                )]
            }
        };

        let mut text = Text::new().no_wrap(true);
        text.style = border.clone();
        text.append(" ", Style::new());
        for fragment in label.fragments() {
            let single_line = fragment.text.replace('\n', " ");
            text.append(single_line, label.style.combine(&fragment.style));
        }
        text.append(" ", Style::new());

        let room = width - 4;
        let rendered = text
            .overflow(Overflow::Crop)
            .render_lines(room, options.tab_size)
            .into_iter()
            .next()
            .unwrap_or_default();
        let gap = room.saturating_sub(line_width(&rendered));
        let (before, after) = match align {
            Justify::Left => (0, gap),
            Justify::Right => (gap, 0),
            _ => (gap / 2, gap - gap / 2),
        };

        let mut line = vec![Segment::new(
            format!("{}{}{}", corner_left, rule(1), rule(before)),
            border.clone(),
        )];
        line.extend(rendered);
        line.push(Segment::new(
            format!("{}{}{}", rule(after), rule(1), corner_right),
            border.clone(),
        ));
        line
    }
}
