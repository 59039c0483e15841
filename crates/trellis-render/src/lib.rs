//! # Trellis Render - Terminal Rendering Backend
//!
//! `trellis-render` turns styled text, tables, panels and code blocks into
//! lines of styled segments and prints them to a terminal or any writer.
//!
//! It is the backend for the `trellis` component renderer, but can be used on
//! its own wherever a program wants boxed, wrapped, colored terminal output.
//!
//! ## Core Concepts
//!
//! - [`Text`]: ordered styled fragments plus justify/overflow/wrap settings
//! - [`Style`] and [`Color`]: optional attributes, layered with [`Style::combine`]
//! - [`Table`] and [`Column`]: bordered tables; [`Table::grid`] for plain layout
//! - [`Panel`]: a box around one renderable, with title and subtitle
//! - [`Syntax`]: syntax-highlighted source code
//! - [`Renderable`]: the closed set of the above plus vertical groups
//! - [`Console`]: prints a renderable at the configured width
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_render::{
//!     box_style, render_to_string, ConsoleOptions, OutputMode, Panel, Style, Text,
//! };
//!
//! let greeting = Text::assemble([
//!     ("Hello, ", Style::new()),
//!     ("World", Style::new().bold(true)),
//! ]);
//! let panel = Panel::new(greeting)
//!     .title("demo")
//!     .box_style(box_style::SQUARE)
//!     .expand(false);
//!
//! let options = ConsoleOptions::default().width(40).mode(OutputMode::Text);
//! assert_eq!(
//!     render_to_string(&panel.into(), &options),
//!     "┌──── demo ────┐\n\
//!      │ Hello, World │\n\
//!      └──────────────┘\n"
//! );
//! ```
//!
//! ## Layout Model
//!
//! Every renderable can report a [`Measurement`] (the narrowest and widest
//! it can usefully be drawn) and render itself into [`Line`]s at a given
//! width. Containers measure their children to pick column widths, render
//! each child at its width, then pad, crop and border the resulting lines.

pub mod box_style;
mod console;
mod error;
mod measure;
mod padding;
mod panel;
mod renderable;
mod segment;
pub mod style;
mod syntax;
pub mod table;
mod text;
mod util;

pub use box_style::BoxStyle;
pub use console::{
    detect_width, render_lines, render_to_string, Console, ConsoleOptions, OutputMode,
    DEFAULT_WIDTH,
};
pub use error::RenderError;
pub use measure::Measurement;
pub use padding::Padding;
pub use panel::Panel;
pub use renderable::Renderable;
pub use segment::{line_text, line_width, Line, Segment};
pub use style::{Color, Style, StyleError};
pub use syntax::{is_known_lexer, theme_names, Syntax, DEFAULT_THEME};
pub use table::{Column, Row, Table, VerticalAlign};
pub use text::{Justify, Overflow, Text};
pub use util::{display_width, rgb_to_ansi256, truncate_end};
