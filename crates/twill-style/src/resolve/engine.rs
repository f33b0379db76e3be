//! The pipeline that turns a class list into one style object.

use twill_core::{StyleObject, ThemeConfig};

use super::dynamic::build_dynamic;
use super::important::merge_important;
use super::not_found;
use super::order::order_by_screens;
use crate::diagnostics::{Diagnostics, SuggestionReport, TracingDiagnostics};
use crate::parser::{Pieces, split_token};
use crate::plugins::{PluginContext, UserPlugins};
use crate::rules::{Classification, classify_with_plugins};
use crate::selector::validate_variants;
use crate::{Error, ResolveOptions, Result};

static TRACING_DIAGNOSTICS: TracingDiagnostics = TracingDiagnostics;

/// Resolves class lists against one theme.
///
/// The engine borrows everything it reads, so one theme can back many
/// engines on many threads.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use twill_core::ThemeConfig;
/// use twill_style::{ResolveOptions, StyleEngine};
///
/// let theme = ThemeConfig::tailwind_default();
/// let engine = StyleEngine::new(&theme).with_options(ResolveOptions::default());
///
/// let style = engine.resolve_class_list("flex md:block").unwrap();
/// assert_eq!(
///     style.into_value(),
///     json!({ "display": "flex", "@media (min-width: 768px)": { "display": "block" } })
/// );
/// ```
#[derive(Clone, Copy)]
pub struct StyleEngine<'a> {
    theme: &'a ThemeConfig,
    options: ResolveOptions,
    plugins: Option<&'a UserPlugins>,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> StyleEngine<'a> {
    /// Create an engine with default options, no user plugins and
    /// diagnostics sent to `tracing`.
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self {
            theme,
            options: ResolveOptions::default(),
            plugins: None,
            diagnostics: &TRACING_DIAGNOSTICS,
        }
    }

    /// Set the resolution options.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Consult user plugins for classes the built-in tables don't know.
    pub fn with_plugins(mut self, plugins: &'a UserPlugins) -> Self {
        self.plugins = Some(plugins);
        self
    }

    /// Send diagnostics to a custom sink.
    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The theme classes resolve against.
    pub fn theme(&self) -> &'a ThemeConfig {
        self.theme
    }

    /// The active options.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve a whitespace-separated class list.
    ///
    /// ` | ` dividers are ignored. Tokens are merged in list order after
    /// responsive tokens are moved behind unscoped ones. An empty list
    /// gives an empty style. The first failing token fails the whole list;
    /// its error is reported to the diagnostics sink before it is returned.
    pub fn resolve_class_list(&self, classes: &str) -> Result<StyleObject> {
        self.resolve_list_inner(classes).inspect_err(|err| self.report(err))
    }

    /// Resolve one token into its variant-scoped fragment.
    pub fn resolve_token(&self, raw: &str) -> Result<StyleObject> {
        self.fragment(raw).inspect_err(|err| self.report(err))
    }

    /// Classify a bare class name, including user plugins.
    pub fn classify(&self, class_name: &str) -> Classification {
        classify_with_plugins(class_name, self.plugins)
    }

    fn resolve_list_inner(&self, classes: &str) -> Result<StyleObject> {
        let classes = classes.replace(" | ", " ");
        let tokens = order_by_screens(classes.split_whitespace().collect(), self.theme);
        tracing::trace!(count = tokens.len(), "resolving class list");

        let mut styles = StyleObject::new();
        for token in tokens {
            styles.merge(self.fragment(token)?);
        }
        Ok(styles)
    }

    fn fragment(&self, raw: &str) -> Result<StyleObject> {
        if raw == "group" {
            return Err(Error::malformed(
                raw,
                "\"group\" must be added as className:\n\nBad: tw`group`\nGood: <div className=\"group\">",
            ));
        }

        let pieces = split_token(raw)?;
        let selectors = validate_variants(&pieces.variants, self.theme, self.options.sassy_pseudo)?;

        if pieces.class_name.is_empty() {
            let message = if pieces.has_variants() {
                format!("\"{raw}\" needs a class added on the end")
            } else {
                "That class was not found".to_string()
            };
            return Err(Error::malformed(raw, message));
        }

        let style = self.style(&pieces)?;
        if self.options.debug {
            tracing::info!(target: "twill", "{raw} {style}");
        }
        Ok(style.nest_under(&selectors))
    }

    fn style(&self, pieces: &Pieces) -> Result<StyleObject> {
        let class_name = pieces.class_name.as_str();
        let style = match self.classify(class_name) {
            Classification::Static { style, .. } => {
                if pieces.has_negative {
                    return Err(Error::no_negatives(class_name));
                }
                style.clone()
            }
            Classification::Dynamic { row } => build_dynamic(row, pieces, self.theme, &self.options)?,
            Classification::CorePlugin { row, plugin } => {
                let context = PluginContext {
                    pieces,
                    theme: self.theme,
                    options: &self.options,
                    dynamic_key: row.key,
                };
                // Core plugins place `!important` themselves
                return plugin.resolve(&context);
            }
            Classification::UserPlugin => {
                if pieces.has_negative {
                    return Err(Error::no_negatives(class_name));
                }
                match self.plugins.and_then(|plugins| plugins.resolve(class_name)) {
                    Some(style) => style,
                    None => return Err(not_found(pieces, self.theme, &self.options, None)),
                }
            }
            Classification::Unmatched => return Err(not_found(pieces, self.theme, &self.options, None)),
        };

        Ok(merge_important(style, pieces.has_important))
    }

    fn report(&self, err: &Error) {
        if let Error::UnresolvableClass {
            class_name,
            suggestions,
        } = err
            && !suggestions.is_empty()
        {
            self.diagnostics.report_suggestions(&SuggestionReport {
                class_name,
                suggestions,
            });
        }
        self.diagnostics.report_error(&err.to_string());
    }
}

impl std::fmt::Debug for StyleEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("options", &self.options)
            .field("plugins", &self.plugins.is_some())
            .finish_non_exhaustive()
    }
}
