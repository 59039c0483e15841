//! # Trellis - Declarative Terminal Components
//!
//! `trellis` renders trees of declarative UI components (text runs, tables,
//! frames, stacks and code blocks) to the terminal.
//!
//! A tree is built either from typed builders or from a tagged JSON/YAML
//! form. Resolving the tree validates every node, maps names such as box
//! styles and languages onto the backend's vocabulary, and produces
//! [`trellis_render`] objects that a console prints.
//!
//! ## Core Concepts
//!
//! - [`Component`]: one node of the tree, tagged with its [`ComponentKind`]
//! - [`components`]: typed attributes for each kind, with builders
//! - [`resolve()`]: turns a tree into backend objects ([`Resolved`])
//! - [`render()`]: resolves and prints to standard output
//! - [`Component::from_yaml`]: loads a tree from its tagged form
//! - [`views`]: ready-made trees for lists of records
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::components::{Frame, Text};
//! use trellis::{render_to_string, Component, ConsoleOptions, OutputMode};
//!
//! let greeting = Text::new(vec![Text::new("Hello, "), Text::new("World").bold(true)]);
//! let frame: Component = Frame::new(greeting)
//!     .title("demo")
//!     .box_name("square")
//!     .expand(false)
//!     .into();
//!
//! let options = ConsoleOptions::default().width(40).mode(OutputMode::Text);
//! assert_eq!(
//!     render_to_string(&frame, &options).unwrap(),
//!     "┌──── demo ────┐\n\
//!      │ Hello, World │\n\
//!      └──────────────┘\n"
//! );
//! ```
//!
//! ## Tagged Form
//!
//! The same tree as YAML. Each component is a single-key mapping from its
//! kind to a list whose first element holds its attributes:
//!
//! ```rust
//! use trellis::{render_to_string, Component, ConsoleOptions, OutputMode};
//!
//! let yaml = r#"
//! Frame:
//!   - displayable:
//!       Text:
//!         - data: ["Hello, ", {Text: [{data: World, bold: true}]}]
//!     title: demo
//!     box: square
//!     expand: false
//! "#;
//! let frame = Component::from_yaml(yaml).unwrap();
//! let options = ConsoleOptions::default().width(40).mode(OutputMode::Text);
//! assert!(render_to_string(&frame, &options).unwrap().starts_with("┌──── demo"));
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`ResolveError`] naming the component kind and, for
//! attribute errors, the field. Unknown attributes and unknown box names are
//! not errors; they are ignored (or defaulted to `rounded`) and logged at
//! `trace` level through `tracing`.

mod component;
pub mod components;
mod dynamic;
mod error;
mod render;
pub mod resolve;
pub mod views;
pub mod vocabulary;

pub use component::{Component, ComponentKind, UnknownKind};
pub use error::{ResolveError, Result};
pub use render::{
    render, render_to, render_to_string, render_value, renderable, resolve, resolve_value,
};
pub use resolve::{dispatch, Resolved};
pub use views::{card, record_table, ViewOptions};

pub use trellis_render::{Console, ConsoleOptions, OutputMode};
