//! Rendering error types.

use thiserror::Error;

/// Error produced while rendering or writing output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The highlighter rejected a line of code.
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}
