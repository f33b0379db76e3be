//! Utility class resolution for twill.
//!
//! This crate turns Tailwind-style class lists into nested style objects:
//!
//! - **Parsing**: Split tokens into variants, sign, class name and `!`
//! - **Selectors**: Screen media queries and built-in pseudo variants
//! - **Rules**: The static and dynamic class tables, and classification
//! - **Plugins**: Core plugins for colors, containers and sibling spacing,
//!   plus host-supplied user plugins
//! - **Suggestions**: "Did you mean" candidates for unresolvable classes
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use twill_style::prelude::*;
//!
//! let theme = ThemeConfig::tailwind_default();
//! let engine = StyleEngine::new(&theme);
//!
//! let style = engine.resolve_class_list("p-4 md:p-8 hover:bg-red-500").unwrap();
//! assert_eq!(style.get("padding"), Some(&json!("1rem")));
//! assert!(style.contains_key("@media (min-width: 768px)"));
//! assert!(style.contains_key(":hover"));
//! ```

pub mod diagnostics;
pub mod options;
pub mod parser;
pub mod plugins;
pub mod resolve;
pub mod rules;
pub mod selector;
pub mod suggest;

mod error;

pub use diagnostics::{CollectingDiagnostics, Diagnostics, SuggestionReport, TracingDiagnostics};
pub use error::{Error, Result};
pub use options::ResolveOptions;
pub use plugins::{PluginRule, UserPlugins};
pub use resolve::{StyleEngine, resolve_class_list};
pub use rules::{ClassKind, Classification, classify};
pub use selector::{Variant, validate_variant};
pub use suggest::{Suggestion, Suggestions};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};
    pub use crate::options::ResolveOptions;
    pub use crate::parser::{Pieces, split_token};
    pub use crate::plugins::{PluginRule, UserPlugins};
    pub use crate::resolve::{StyleEngine, resolve_class_list};
    pub use crate::rules::{ClassKind, Classification, classify};
    pub use crate::selector::{Variant, validate_variant};
    pub use crate::suggest::{Suggestion, Suggestions};
    pub use crate::{Error, Result};
    pub use twill_core::{StyleObject, ThemeConfig};
}
