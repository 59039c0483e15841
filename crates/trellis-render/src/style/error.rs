//! Style-related error types.

/// Error returned when a color or style definition cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The color specification is not recognized.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending color text.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A word in a style definition is neither an attribute nor a color.
    #[error("invalid style definition '{definition}': {reason}")]
    InvalidDefinition {
        /// The complete definition being parsed.
        definition: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl StyleError {
    pub(crate) fn color(value: &str, reason: impl Into<String>) -> Self {
        StyleError::InvalidColor {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StyleError::color("chartreuse-ish", "unknown color name");
        assert_eq!(
            err.to_string(),
            "invalid color 'chartreuse-ish': unknown color name"
        );
    }
}
