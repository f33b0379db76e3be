//! Error types for the design-token layer.

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading the theme config.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A config value sits deeper than the one-hop lookup allows.
    #[error(
        "The theme config is nested too deep\nReplace this with a string, number or array:\n{value}"
    )]
    NestedTooDeep { value: String },

    /// A config value has a type that can't become a style value.
    #[error("The config value \"{value}\" is unsupported - try a string, array or number")]
    UnsupportedValue { value: String },

    /// The theme tree itself is unusable.
    #[error("Invalid theme config: {message}")]
    InvalidTheme { message: String },

    /// Theme JSON failed to parse.
    #[error("Failed to parse theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a nesting error from the offending value.
    pub fn nested_too_deep(value: &serde_json::Value) -> Self {
        Self::NestedTooDeep {
            value: value.to_string(),
        }
    }

    /// Create an unsupported-value error from the offending value.
    pub fn unsupported_value(value: &serde_json::Value) -> Self {
        Self::UnsupportedValue {
            value: value.to_string(),
        }
    }

    /// Create an invalid theme error.
    pub fn invalid_theme(message: impl Into<String>) -> Self {
        Self::InvalidTheme {
            message: message.into(),
        }
    }
}
