//! Core plugins and user plugins.
//!
//! Core plugins handle the utilities a single dynamic row can't express:
//! colors with an opacity channel, the responsive container, and the
//! sibling-selector `space`/`divide` utilities. Each one tries its
//! interpretations in order and reports suggestions over every theme
//! section it tried when none of them match.

/// Compile a regex once per call site.
macro_rules! cached_regex {
    ($pattern:literal) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("valid plugin regex"))
    }};
}
mod bg;
mod border;
mod color;
mod container;
mod divide;
mod placeholder;
mod space;
mod text;
mod user;

pub use color::with_alpha;
pub use user::{PluginRule, UserPlugins, camelize};

use regex::Regex;
use twill_core::{ConfigValue, StyleObject, ThemeConfig};

use crate::parser::Pieces;
use crate::resolve::not_found;
use crate::suggest::ConfigQuery;
use crate::{Error, ResolveOptions, Result};

/// The built-in multi-property handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorePlugin {
    Container,
    Space,
    Divide,
    Placeholder,
    Text,
    Bg,
    Border,
}

impl CorePlugin {
    /// The plugin name.
    pub fn name(self) -> &'static str {
        match self {
            CorePlugin::Container => "container",
            CorePlugin::Space => "space",
            CorePlugin::Divide => "divide",
            CorePlugin::Placeholder => "placeholder",
            CorePlugin::Text => "text",
            CorePlugin::Bg => "bg",
            CorePlugin::Border => "border",
        }
    }

    /// Build the style for a class routed to this plugin.
    pub fn resolve(self, context: &PluginContext<'_>) -> Result<StyleObject> {
        tracing::trace!(plugin = self.name(), class = context.class_name(), "calling core plugin");
        match self {
            CorePlugin::Container => container::resolve(context),
            CorePlugin::Space => space::resolve(context),
            CorePlugin::Divide => divide::resolve(context),
            CorePlugin::Placeholder => placeholder::resolve(context),
            CorePlugin::Text => text::resolve(context),
            CorePlugin::Bg => bg::resolve(context),
            CorePlugin::Border => border::resolve(context),
        }
    }
}

/// Everything a core plugin can read.
#[derive(Debug, Clone, Copy)]
pub struct PluginContext<'a> {
    pub pieces: &'a Pieces,
    pub theme: &'a ThemeConfig,
    pub options: &'a ResolveOptions,
    /// The dynamic row key that routed the class here.
    pub dynamic_key: &'a str,
}

impl<'a> PluginContext<'a> {
    /// The bare class name.
    pub fn class_name(&self) -> &'a str {
        &self.pieces.class_name
    }

    /// `" !important"` or empty.
    pub fn important(&self) -> &'static str {
        self.pieces.important()
    }

    /// `"-"` or empty.
    pub fn negative(&self) -> &'static str {
        self.pieces.negative()
    }

    /// Match a regex against the class name, returning the first capture
    /// group (or the whole match when the regex has no groups).
    pub fn capture(&self, regex: &Regex) -> Option<&'a str> {
        let captures = regex.captures(self.class_name())?;
        captures.get(1).or_else(|| captures.get(0)).map(|m| m.as_str())
    }

    /// Resolve `key` in a theme section.
    pub fn config_value(&self, section: &str, key: &str) -> Result<Option<ConfigValue>> {
        Ok(self.theme.resolve(section, key)?)
    }

    /// Resolve `key` in the first section that yields a value.
    pub fn first_config_value(&self, sections: &[&str], key: &str) -> Result<Option<ConfigValue>> {
        for section in sections {
            if let Some(value) = self.config_value(section, key)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Check whether the theme has a section.
    pub fn has_section(&self, section: &str) -> bool {
        self.theme.section(section).is_some()
    }

    /// The not-found error, with suggestions drawn from `sections`.
    pub fn suggestions_error(&self, sections: &[&str]) -> Error {
        let query = ConfigQuery {
            sections,
            dynamic_key: self.dynamic_key,
            class_name: self.class_name(),
            has_negative: self.pieces.has_negative,
        };
        not_found(self.pieces, self.theme, self.options, Some(query))
    }

    /// Reject variants, naming the ones used.
    pub fn no_variants(&self) -> Error {
        Error::no_variants(self.class_name(), &self.pieces.variants)
    }

    /// Reject `!important`.
    pub fn no_important(&self) -> Error {
        Error::no_important(self.class_name())
    }

    /// Reject a negative sign.
    pub fn no_negatives(&self) -> Error {
        Error::no_negatives(self.class_name())
    }
}

/// Add `px` to a zero so it stays a length inside `calc()`.
pub(crate) fn add_px_to_zero(value: &str) -> String {
    if value.trim().parse::<f64>().is_ok_and(|n| n == 0.0) {
        format!("{value}px")
    } else {
        value.to_string()
    }
}
