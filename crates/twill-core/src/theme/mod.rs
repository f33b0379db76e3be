//! Theme config: the read-only design-token tree utilities resolve against.

mod defaults;
mod lookup;

pub use lookup::{ConfigValue, number_to_string, resolve_config_value, strip_negative};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A resolved theme tree (defaults already merged with user overrides).
///
/// Key order is preserved, which matters for screens: a screen's rank is its
/// position in `screens`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use twill_core::ThemeConfig;
///
/// let theme = ThemeConfig::with_user_theme(&json!({
///     "extend": { "colors": { "brand": "#123456" } }
/// })).unwrap();
///
/// assert_eq!(theme.get("colors.brand"), Some(&json!("#123456")));
/// assert_eq!(theme.get("textColor.brand"), Some(&json!("#123456")));
/// assert_eq!(theme.screen_names(), ["sm", "md", "lg", "xl"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThemeConfig {
    tree: Map<String, Value>,
}

impl ThemeConfig {
    /// Wrap an already complete theme tree.
    pub fn new(tree: Map<String, Value>) -> Self {
        Self { tree }
    }

    /// Build a theme from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(tree) => Ok(Self::new(tree)),
            other => Err(Error::invalid_theme(format!(
                "expected an object at the top level, found {other}"
            ))),
        }
    }

    /// Parse a complete theme from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// The built-in default theme.
    pub fn tailwind_default() -> Self {
        Self::new(defaults::build(&|_, value| value))
    }

    /// Merge a user theme over the defaults.
    ///
    /// A top-level key replaces the built-in section. Sections derived from
    /// base tokens are re-derived, so `{"colors": ...}` also changes
    /// `textColor`, `borderColor` and friends. An `extend` object is
    /// deep-merged into each section afterwards. Unknown sections are kept.
    pub fn with_user_theme(user: &Value) -> Result<Self> {
        let Value::Object(user) = user else {
            return Err(Error::invalid_theme("the user theme must be an object"));
        };
        let empty = Map::new();
        let extend = match user.get("extend") {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(extend)) => extend,
            Some(_) => return Err(Error::invalid_theme("`extend` must be an object")),
        };

        let resolve = |name: &str, builtin: Value| -> Value {
            let mut value = user.get(name).cloned().unwrap_or(builtin);
            if let Some(extra) = extend.get(name) {
                merge_value(&mut value, extra.clone());
            }
            value
        };
        let mut tree = defaults::build(&resolve);

        let custom = user
            .keys()
            .chain(extend.keys())
            .filter(|name| name.as_str() != "extend")
            .cloned()
            .collect::<Vec<_>>();
        for name in custom {
            if !tree.contains_key(&name) {
                let value = resolve(&name, Value::Object(Map::new()));
                tree.insert(name, value);
            }
        }

        tracing::debug!(sections = tree.len(), "merged user theme");
        Ok(Self::new(tree))
    }

    /// Look up a value by dotted path (`colors.red.500`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        parts.try_fold(self.tree.get(first)?, |value, part| value.get(part))
    }

    /// Get a top-level section.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.tree.get(name)
    }

    /// Resolve a utility suffix against a section with the one-hop rule.
    pub fn resolve(&self, section: &str, key: &str) -> Result<Option<ConfigValue>> {
        resolve_config_value(self.section(section), key)
    }

    /// Breakpoint entries in rank order.
    pub fn screens(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.tree
            .get("screens")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|screens| screens.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Breakpoint names in rank order.
    pub fn screen_names(&self) -> Vec<&str> {
        self.screens().map(|(name, _)| name).collect()
    }

    /// Position of a breakpoint in `screens`.
    pub fn screen_rank(&self, name: &str) -> Option<usize> {
        self.screens().position(|(screen, _)| screen == name)
    }

    /// Borrow the whole tree.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.tree
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::tailwind_default()
    }
}

impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tree = Map::deserialize(deserializer)?;
        Ok(Self::new(tree))
    }
}

fn merge_value(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}
