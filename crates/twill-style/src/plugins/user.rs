//! User plugins: component and utility rules supplied by the host.
//!
//! The host hands over rules already produced by its plugin runner, one
//! selector plus its declarations each. Components match a class exactly
//! or with a pseudo suffix (`.btn:hover` styles `btn` under `:hover`);
//! utilities match exactly.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use twill_core::StyleObject;

use crate::{Error, Result};

static SELECTOR: OnceLock<Regex> = OnceLock::new();
static WORD_BREAK: OnceLock<Regex> = OnceLock::new();

/// One CSS rule from a user plugin.
///
/// ```
/// use twill_style::plugins::PluginRule;
///
/// let rule: PluginRule = serde_json::from_str(
///     r#"{ "selector": ".btn", "declarations": { "padding": "1rem" } }"#,
/// ).unwrap();
/// assert_eq!(rule.declarations["padding"], "1rem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRule {
    pub selector: String,
    /// CSS property names and values, in source order.
    pub declarations: IndexMap<String, String>,
}

impl PluginRule {
    /// Create a rule from a selector and its declarations.
    pub fn new<K, V>(selector: impl Into<String>, declarations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            selector: selector.into(),
            declarations: declarations
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The user plugin descriptor set, keyed by class selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPlugins {
    components: IndexMap<String, StyleObject>,
    utilities: IndexMap<String, StyleObject>,
}

impl UserPlugins {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from component and utility rules.
    ///
    /// Rules whose selector isn't a class are skipped. A selector list
    /// (`.a, .b`) is rejected. Rules for the same class are merged.
    pub fn from_rules(components: &[PluginRule], utilities: &[PluginRule]) -> Result<Self> {
        let plugins = Self {
            components: collect(components)?,
            utilities: collect(utilities)?,
        };
        tracing::debug!(
            components = plugins.components.len(),
            utilities = plugins.utilities.len(),
            "loaded user plugins"
        );
        Ok(plugins)
    }

    /// Check whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.utilities.is_empty()
    }

    /// Check whether any component or utility styles `class_name`.
    pub fn matches(&self, class_name: &str) -> bool {
        self.component_matches(class_name).next().is_some() || self.utilities.contains_key(class_name)
    }

    /// The style for `class_name`, if a rule declares it.
    ///
    /// Components win over utilities.
    pub fn resolve(&self, class_name: &str) -> Option<StyleObject> {
        let mut found = None::<StyleObject>;
        for (key, style) in self.component_matches(class_name) {
            let suffix = &key[class_name.len()..];
            let fragment = if suffix.is_empty() {
                style.clone()
            } else {
                StyleObject::new().with(suffix, style.clone())
            };
            found.get_or_insert_with(StyleObject::new).merge(fragment);
        }

        found.or_else(|| self.utilities.get(class_name).cloned())
    }

    fn component_matches<'a>(
        &'a self,
        class_name: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a StyleObject)> + 'a {
        self.components.iter().filter(move |(key, _)| {
            key.strip_prefix(class_name)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
        })
    }
}

fn collect(rules: &[PluginRule]) -> Result<IndexMap<String, StyleObject>> {
    let mut collected: IndexMap<String, StyleObject> = IndexMap::new();
    for rule in rules {
        let Some(name) = parse_selector(&rule.selector)? else {
            tracing::trace!(selector = %rule.selector, "skipping non-class selector");
            continue;
        };
        let style = rule
            .declarations
            .iter()
            .fold(StyleObject::new(), |style, (property, value)| {
                style.with(camelize(property), value.as_str())
            });
        collected.entry(name).or_default().merge(style);
    }
    Ok(collected)
}

/// Extract the class name from a `.class` selector (`.btn:hover > span`
/// gives `btn:hover`).
fn parse_selector(selector: &str) -> Result<Option<String>> {
    if selector.contains(',') {
        return Err(Error::malformed(
            selector,
            format!("Only a single selector is supported: \"{selector}\""),
        ));
    }
    let regex = SELECTOR.get_or_init(|| Regex::new(r"^\.(\S+)(\s+.*?)?$").expect("valid selector regex"));
    Ok(regex
        .captures(selector.trim())
        .map(|captures| captures[1].to_string()))
}

/// Convert a CSS property name to camel case (`background-color` becomes
/// `backgroundColor`). Custom properties are returned unchanged.
///
/// ```
/// use twill_style::plugins::camelize;
///
/// assert_eq!(camelize("-webkit-box-shadow"), "WebkitBoxShadow");
/// assert_eq!(camelize("--brand"), "--brand");
/// ```
pub fn camelize(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let regex = WORD_BREAK.get_or_init(|| Regex::new(r"\W+(.)").expect("valid camelize regex"));
    regex
        .replace_all(property, |captures: &regex::Captures<'_>| captures[1].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plugins() -> UserPlugins {
        UserPlugins::from_rules(
            &[
                PluginRule::new(".btn", [("padding", "1rem"), ("background-color", "#fff")]),
                PluginRule::new(".btn:hover", [("background-color", "#eee")]),
                PluginRule::new(".btn-primary", [("color", "blue")]),
                PluginRule::new("button", [("border", "0")]),
            ],
            &[
                PluginRule::new(".skew-10deg", [("transform", "skewY(-10deg)")]),
                PluginRule::new(".btn", [("display", "none")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn components_collect_pseudo_suffixes() {
        let style = plugins().resolve("btn").unwrap();
        assert_eq!(
            style.to_value(),
            json!({
                "padding": "1rem",
                "backgroundColor": "#fff",
                ":hover": { "backgroundColor": "#eee" },
            })
        );
    }

    #[test]
    fn prefix_alone_is_not_a_match() {
        let plugins = plugins();
        assert_eq!(
            plugins.resolve("btn-primary").map(|s| s.to_value()),
            Some(json!({ "color": "blue" }))
        );
        assert!(!plugins.matches("bt"));
        assert!(!plugins.matches("button"));
    }

    #[test]
    fn utilities_match_exactly() {
        let plugins = plugins();
        assert_eq!(
            plugins.resolve("skew-10deg").map(|s| s.to_value()),
            Some(json!({ "transform": "skewY(-10deg)" }))
        );
        assert!(plugins.resolve("skew-10").is_none());
    }

    #[test]
    fn selector_lists_are_rejected() {
        let err = UserPlugins::from_rules(&[PluginRule::new(".a, .b", [("color", "red")])], &[])
            .unwrap_err();
        assert_eq!(err.to_string(), "Only a single selector is supported: \".a, .b\"");
    }

    #[test]
    fn camel_case() {
        assert_eq!(camelize("background-color"), "backgroundColor");
        assert_eq!(camelize("color"), "color");
        assert_eq!(camelize("--tw-ring"), "--tw-ring");
    }
}
