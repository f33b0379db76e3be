//! Error types for class resolution.
//!
//! Every variant renders the full diagnostic through `Display`, so a host
//! can surface `err.to_string()` as-is.

use crate::diagnostics::{format_not_found, format_unknown_variant};
use crate::suggest::Suggestions;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a class list.
///
/// All of them are terminal for the list being resolved.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The token can't be split into a usable class name.
    #[error("{message}")]
    MalformedInput { token: String, message: String },

    /// A variant prefix is neither a screen nor a built-in variant.
    #[error("{}", format_unknown_variant(.variant, .screens))]
    UnknownVariant {
        variant: String,
        /// Screen names of the active theme, in rank order.
        screens: Vec<String>,
    },

    /// The class matched nothing, or matched a table row with no config value.
    #[error("{}", format_not_found(.class_name, .suggestions))]
    UnresolvableClass {
        class_name: String,
        suggestions: Suggestions,
    },

    /// The class doesn't accept a modifier that was used on it.
    #[error("{class_name} doesn’t support {modifier}")]
    UnsupportedModifier { class_name: String, modifier: String },

    /// The theme is shaped in a way the lookup rules don't allow.
    #[error(transparent)]
    ConfigShape(#[from] twill_core::Error),
}

impl Error {
    /// Create a malformed input error.
    pub fn malformed(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an unknown variant error listing the active screens.
    pub fn unknown_variant(variant: impl Into<String>, screens: Vec<String>) -> Self {
        Self::UnknownVariant {
            variant: variant.into(),
            screens,
        }
    }

    /// Create a not-found error carrying any suggestions.
    pub fn unresolvable(class_name: impl Into<String>, suggestions: Suggestions) -> Self {
        Self::UnresolvableClass {
            class_name: class_name.into(),
            suggestions,
        }
    }

    /// Create an unsupported modifier error.
    pub fn unsupported(class_name: impl Into<String>, modifier: impl Into<String>) -> Self {
        Self::UnsupportedModifier {
            class_name: class_name.into(),
            modifier: modifier.into(),
        }
    }

    /// The variant rejection message: `doesn’t support hover:md: or any other variants`.
    pub fn no_variants(class_name: &str, variants: &[String]) -> Self {
        let used: String = variants.iter().map(|v| format!("{v}:")).collect();
        Self::unsupported(class_name, format!("{used} or any other variants"))
    }

    /// The `!important` rejection.
    pub fn no_important(class_name: &str) -> Self {
        Self::unsupported(class_name, "!important")
    }

    /// The negative rejection.
    pub fn no_negatives(class_name: &str) -> Self {
        Self::unsupported(class_name, "negatives")
    }

    /// Suggestions attached to this error, if any.
    pub fn suggestions(&self) -> Option<&Suggestions> {
        match self {
            Self::UnresolvableClass { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_messages() {
        let err = Error::no_variants("container", &["hover".into(), "md".into()]);
        assert_eq!(
            err.to_string(),
            "container doesn’t support hover:md: or any other variants"
        );
        assert_eq!(
            Error::no_important("container").to_string(),
            "container doesn’t support !important"
        );
        assert_eq!(
            Error::no_negatives("text-red-500").to_string(),
            "text-red-500 doesn’t support negatives"
        );
    }

    #[test]
    fn config_shape_is_transparent() {
        let core = twill_core::Error::invalid_theme("bad");
        let err: Error = core.into();
        assert_eq!(err.to_string(), "Invalid theme config: bad");
    }
}
