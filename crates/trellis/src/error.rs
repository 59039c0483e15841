//! Error types for component decoding and resolution.

use std::io;

use trellis_render::{RenderError, StyleError};

use crate::component::ComponentKind;

/// Errors that can occur while decoding, resolving or printing a component tree.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A component was given no parameter dictionary at all.
    #[error("{kind} was given no parameters; the first argument must be a mapping")]
    MissingParams { kind: ComponentKind },

    /// The first absorbed argument is not a mapping.
    #[error("the first argument of {kind} must be a mapping, found {found}")]
    NotAMapping {
        kind: ComponentKind,
        found: &'static str,
    },

    /// A required attribute is absent.
    #[error("{kind} requires the '{field}' field")]
    MissingField {
        kind: ComponentKind,
        field: &'static str,
    },

    /// A recognized attribute holds a value of the wrong shape.
    #[error("{kind}.{field} must be {expected}, found {found}")]
    InvalidField {
        kind: ComponentKind,
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Text data that is neither a string, a Text component nor a list of those.
    #[error("Text data must be a string, a Text component or a list of those, found {type_name}: {value}")]
    UnsupportedTextData {
        value: String,
        type_name: &'static str,
    },

    /// A nested value no resolver knows how to handle.
    #[error("no resolver matches {value}")]
    NoMatchingResolver { value: String },

    /// A component that cannot be printed on its own was used as content.
    #[error("{kind} cannot be displayed on its own")]
    NotDisplayable { kind: ComponentKind },

    /// Invalid color or style definition.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Malformed JSON or YAML input.
    #[error("failed to parse {format}: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Records passed to a view could not be serialized.
    #[error("failed to serialize view records: {0}")]
    Records(#[source] serde_json::Error),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Any other backend failure while printing.
    #[error(transparent)]
    Render(RenderError),
}

impl ResolveError {
    pub(crate) fn invalid_field(
        kind: ComponentKind,
        field: impl Into<String>,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self::InvalidField {
            kind,
            field: field.into(),
            expected,
            found: describe(found),
        }
    }

    pub(crate) fn no_matching_resolver(value: &serde_json::Value) -> Self {
        Self::NoMatchingResolver {
            value: describe(value),
        }
    }
}

impl From<RenderError> for ResolveError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Io(err) => Self::Io(err),
            other => Self::Render(other),
        }
    }
}

/// Name of a JSON value's type, as used in error messages.
pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Short rendering of a value for error messages.
pub(crate) fn describe(value: &serde_json::Value) -> String {
    const LIMIT: usize = 60;
    let rendered = value.to_string();
    if rendered.chars().count() <= LIMIT {
        rendered
    } else {
        let cut: String = rendered.chars().take(LIMIT - 1).collect();
        format!("{}…", cut)
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, ResolveError>;
