//! One-hop config value lookup.
//!
//! Utility suffixes are resolved against a theme section (`spacing`,
//! `colors`, ...). A suffix may name a leaf directly (`4` in `spacing`), an
//! object carrying a `default` leaf (`borderRadius.default`), or a leaf one
//! level down (`red-500` → `colors.red.500`). Nothing deeper is probed:
//! a deeper object is reported as a config shape error.

use serde_json::{Map, Number, Value};

use crate::{Error, Result};

/// A resolved config value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// A string or number leaf, stringified.
    Scalar(String),
    /// An array leaf, left for the caller to join.
    List(Vec<String>),
}

impl ConfigValue {
    /// Render the value, joining lists with `", "`.
    pub fn joined(&self) -> String {
        match self {
            ConfigValue::Scalar(s) => s.clone(),
            ConfigValue::List(items) => items.join(", "),
        }
    }

    /// Get the scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(s) => Some(s),
            ConfigValue::List(_) => None,
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Look up `key` in a theme section.
///
/// Resolution order:
/// 1. empty key → the section's `default` leaf
/// 2. a direct string/number/array leaf at `key`
/// 3. the `default` leaf of an object at `key`
/// 4. a leaf inside one nested object, where `key` (sign stripped) is
///    `<child>-<leaf>`; children are tried in insertion order
///
/// Empty strings count as missing. Returns `Ok(None)` when nothing matches.
///
/// ```
/// use serde_json::json;
/// use twill_core::theme::{resolve_config_value, ConfigValue};
///
/// let colors = json!({ "red": { "500": "#ef4444" } });
/// let value = resolve_config_value(Some(&colors), "red-500").unwrap();
/// assert_eq!(value, Some(ConfigValue::Scalar("#ef4444".into())));
/// ```
pub fn resolve_config_value(section: Option<&Value>, key: &str) -> Result<Option<ConfigValue>> {
    let Some(Value::Object(section)) = section else {
        return Ok(None);
    };

    if key.is_empty() {
        return match section.get("default") {
            Some(default) if !is_empty(default) => normalize_value(default).map(Some),
            _ => Ok(None),
        };
    }

    match section.get(key) {
        Some(leaf @ (Value::String(_) | Value::Number(_) | Value::Array(_))) => {
            if is_empty(leaf) {
                return Ok(None);
            }
            return normalize_value(leaf).map(Some);
        }
        Some(Value::Object(child)) => {
            if let Some(default) = child.get("default")
                && !is_empty(default)
            {
                return normalize_value(default).map(Some);
            }
        }
        _ => {}
    }

    match_child_key(section, key)
}

/// Strip a single leading `-` from anything longer than one character.
pub fn strip_negative(value: &str) -> &str {
    if value.len() > 1 {
        value.strip_prefix('-').unwrap_or(value)
    } else {
        value
    }
}

fn match_child_key(section: &Map<String, Value>, key: &str) -> Result<Option<ConfigValue>> {
    let bare = strip_negative(key);

    for (child_key, child) in section {
        let Value::Object(child) = child else {
            continue;
        };
        let Some(rest) = bare
            .strip_prefix(child_key.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        let Some(found) = child.get(rest) else {
            continue;
        };
        if is_empty(found) {
            continue;
        }
        return match found {
            Value::String(_) | Value::Number(_) | Value::Array(_) => normalize_value(found).map(Some),
            deeper => Err(Error::nested_too_deep(deeper)),
        };
    }

    Ok(None)
}

fn normalize_value(value: &Value) -> Result<ConfigValue> {
    match value {
        Value::String(s) => Ok(ConfigValue::Scalar(s.clone())),
        Value::Number(n) => Ok(ConfigValue::Scalar(number_to_string(n))),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(number_to_string(n)),
                other => Err(Error::unsupported_value(other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(ConfigValue::List),
        Value::Object(_) => Err(Error::nested_too_deep(value)),
        other => Err(Error::unsupported_value(other)),
    }
}

/// Render a number the way it would appear in a stylesheet (`1`, not `1.0`).
pub fn number_to_string(number: &Number) -> String {
    if let Some(f) = number.as_f64()
        && number.is_f64()
        && f.fract() == 0.0
        && f.abs() < 1e15
    {
        return format!("{}", f as i64);
    }
    number.to_string()
}

/// Null, empty objects and blank strings count as empty.
pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scalar(s: &str) -> Option<ConfigValue> {
        Some(ConfigValue::Scalar(s.to_string()))
    }

    #[test]
    fn default_for_empty_key() {
        let radius = json!({ "none": "0", "default": "0.25rem" });
        assert_eq!(resolve_config_value(Some(&radius), "").unwrap(), scalar("0.25rem"));

        let spacing = json!({ "4": "1rem" });
        assert_eq!(resolve_config_value(Some(&spacing), "").unwrap(), None);
    }

    #[test]
    fn direct_leaf() {
        let spacing = json!({ "4": "1rem", "-4": "-1rem", "px": "1px" });
        assert_eq!(resolve_config_value(Some(&spacing), "4").unwrap(), scalar("1rem"));
        assert_eq!(resolve_config_value(Some(&spacing), "-4").unwrap(), scalar("-1rem"));
        assert_eq!(resolve_config_value(Some(&spacing), "5").unwrap(), None);
    }

    #[test]
    fn numbers_are_stringified() {
        let z = json!({ "10": 10, "half": 0.5, "one": 1.0 });
        assert_eq!(resolve_config_value(Some(&z), "10").unwrap(), scalar("10"));
        assert_eq!(resolve_config_value(Some(&z), "half").unwrap(), scalar("0.5"));
        assert_eq!(resolve_config_value(Some(&z), "one").unwrap(), scalar("1"));
    }

    #[test]
    fn arrays_stay_lists() {
        let fonts = json!({ "sans": ["Inter", "sans-serif"] });
        let value = resolve_config_value(Some(&fonts), "sans").unwrap().unwrap();
        assert_eq!(value, ConfigValue::List(vec!["Inter".into(), "sans-serif".into()]));
        assert_eq!(value.joined(), "Inter, sans-serif");
    }

    #[test]
    fn child_default() {
        let border = json!({ "gray": { "default": "#ccc", "100": "#eee" } });
        assert_eq!(resolve_config_value(Some(&border), "gray").unwrap(), scalar("#ccc"));
    }

    #[test]
    fn one_hop_descent() {
        let colors = json!({
            "white": "#fff",
            "red": { "100": "#fee", "500": "#ef4444" },
            "brand-blue": { "500": "#00f" },
        });
        assert_eq!(resolve_config_value(Some(&colors), "red-500").unwrap(), scalar("#ef4444"));
        assert_eq!(resolve_config_value(Some(&colors), "-red-100").unwrap(), scalar("#fee"));
        assert_eq!(resolve_config_value(Some(&colors), "brand-blue-500").unwrap(), scalar("#00f"));
        assert_eq!(resolve_config_value(Some(&colors), "red").unwrap(), None);
        assert_eq!(resolve_config_value(Some(&colors), "red-").unwrap(), None);
    }

    #[test]
    fn too_deep_is_an_error() {
        let colors = json!({ "red": { "500": { "light": "#f00" } } });
        let err = resolve_config_value(Some(&colors), "red-500").unwrap_err();
        assert!(matches!(err, Error::NestedTooDeep { .. }));
        assert!(err.to_string().contains(r##"{"light":"#f00"}"##));
    }

    #[test]
    fn missing_section() {
        assert_eq!(resolve_config_value(None, "4").unwrap(), None);
        assert_eq!(resolve_config_value(Some(&json!("1rem")), "4").unwrap(), None);
    }

    #[test]
    fn strip_negative_keeps_single_dash() {
        assert_eq!(strip_negative("-4"), "4");
        assert_eq!(strip_negative("4"), "4");
        assert_eq!(strip_negative("-"), "-");
    }
}
