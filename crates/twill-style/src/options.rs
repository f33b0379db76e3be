//! Resolution options.

use serde::{Deserialize, Serialize};

/// Options that change how a class list resolves.
///
/// Deserializes from camelCase JSON, so a host can pass its macro config
/// straight through:
///
/// ```
/// use twill_style::ResolveOptions;
///
/// let options: ResolveOptions = serde_json::from_str(r#"{"hasSuggestions": false}"#).unwrap();
/// assert!(!options.has_suggestions);
/// assert!(!options.debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveOptions {
    /// Log every resolved token and its fragment at info level.
    pub debug: bool,
    /// Compute suggestions for classes that can't be resolved.
    pub has_suggestions: bool,
    /// Render pseudo variants with a leading `&` (`&:hover`).
    pub sassy_pseudo: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            debug: false,
            has_suggestions: true,
            sassy_pseudo: false,
        }
    }
}

impl ResolveOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable suggestions.
    pub fn with_suggestions(mut self, has_suggestions: bool) -> Self {
        self.has_suggestions = has_suggestions;
        self
    }

    /// Enable or disable `&`-prefixed pseudo selectors.
    pub fn with_sassy_pseudo(mut self, sassy_pseudo: bool) -> Self {
        self.sassy_pseudo = sassy_pseudo;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_suggestions() {
        let options = ResolveOptions::default();
        assert!(options.has_suggestions);
        assert!(!options.debug);
        assert!(!options.sassy_pseudo);
    }

    #[test]
    fn deserialize_partial() {
        let options: ResolveOptions =
            serde_json::from_str(r#"{"debug": true, "sassyPseudo": true}"#).unwrap();
        assert_eq!(
            options,
            ResolveOptions::new().with_debug(true).with_sassy_pseudo(true)
        );
    }
}
