//! Class list resolution.
//!
//! [`StyleEngine`] runs the per-token pipeline: split the token, validate
//! its variants, classify the class, build its style, apply `!important`
//! and nest the result under the variant selectors. Fragments are merged
//! in screen order.

mod dynamic;
mod engine;
mod important;
mod order;

pub use dynamic::build_dynamic;
pub use engine::StyleEngine;
pub use important::merge_important;
pub use order::order_by_screens;

use twill_core::{StyleObject, ThemeConfig};

use crate::parser::Pieces;
use crate::suggest::{ConfigQuery, Suggestions, suggest};
use crate::{Error, ResolveOptions, Result};

/// Resolve a class list with default diagnostics and no user plugins.
///
/// ```
/// use serde_json::json;
/// use twill_core::ThemeConfig;
/// use twill_style::{ResolveOptions, resolve_class_list};
///
/// let theme = ThemeConfig::tailwind_default();
/// let style = resolve_class_list("-mt-4 hover:underline", &theme, ResolveOptions::default()).unwrap();
/// assert_eq!(
///     style.into_value(),
///     json!({ "marginTop": "-1rem", ":hover": { "textDecoration": "underline" } })
/// );
/// ```
pub fn resolve_class_list(classes: &str, theme: &ThemeConfig, options: ResolveOptions) -> Result<StyleObject> {
    StyleEngine::new(theme).with_options(options).resolve_class_list(classes)
}

/// The not-found error for a token, with suggestions when enabled.
pub(crate) fn not_found(
    pieces: &Pieces,
    theme: &ThemeConfig,
    options: &ResolveOptions,
    query: Option<ConfigQuery<'_>>,
) -> Error {
    let suggestions = if options.has_suggestions {
        suggest(theme, &pieces.class_name, query)
    } else {
        Suggestions::None
    };
    Error::unresolvable(&pieces.class_name_raw_no_variants, suggestions)
}
