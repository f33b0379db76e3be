//! Style objects: nested property maps produced by class resolution.
//!
//! A [`StyleObject`] maps camel-cased CSS property names (or nested selector
//! and media-query keys) to values. Fragments from several classes are
//! combined with [`StyleObject::merge`], which mirrors CSS cascading: later
//! scalar leaves override earlier ones and nested objects merge key-wise.
//!
//! # Example
//!
//! ```
//! use twill_core::StyleObject;
//!
//! let mut style = StyleObject::new().with("padding", "1rem");
//! style.merge(StyleObject::new().with("padding", "2rem").with("margin", "0"));
//!
//! assert_eq!(style.get("padding").and_then(|v| v.as_str()), Some("2rem"));
//! assert_eq!(style.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A nested mapping of CSS properties and scoped sub-styles.
///
/// Key order is insertion order, so the position of a screen or pseudo key
/// reflects when it was first merged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject(Map<String, Value>);

impl StyleObject {
    /// Create an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a property or nested key, replacing any existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert a nested style under a selector or media-query key.
    pub fn insert_nested(&mut self, key: impl Into<String>, style: StyleObject) {
        self.0.insert(key.into(), Value::Object(style.0));
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a nested style map by key.
    pub fn get_nested(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the style is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Deep-merge another style into this one.
    ///
    /// Scalars in `other` replace scalars here; objects merge recursively.
    /// A key that already exists keeps its position.
    pub fn merge(&mut self, other: StyleObject) {
        deep_merge(&mut self.0, other.0);
    }

    /// Wrap this style under a path of selector keys, outermost first.
    pub fn nest_under(self, path: &[String]) -> StyleObject {
        path.iter().rev().fold(self, |inner, key| {
            let mut outer = StyleObject::new();
            outer.insert_nested(key.clone(), inner);
            outer
        })
    }

    /// Rewrite every scalar leaf, descending into nested objects.
    pub fn map_leaves(&mut self, f: &impl Fn(&Value) -> Value) {
        map_leaves(&mut self.0, f);
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert to a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Convert into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for StyleObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<StyleObject> for Value {
    fn from(style: StyleObject) -> Self {
        style.into_value()
    }
}

impl std::fmt::Display for StyleObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => {
                if let Some(Value::Object(existing)) = target.get_mut(&key) {
                    deep_merge(existing, incoming);
                    continue;
                }
                target.insert(key, Value::Object(incoming));
            }
            value => {
                target.insert(key, value);
            }
        }
    }
}

fn map_leaves(map: &mut Map<String, Value>, f: &impl Fn(&Value) -> Value) {
    for value in map.values_mut() {
        match value {
            Value::Object(nested) => map_leaves(nested, f),
            leaf => *leaf = f(leaf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_overrides_scalars() {
        let mut style = StyleObject::new().with("color", "red").with("margin", "0");
        style.merge(StyleObject::new().with("color", "blue"));

        assert_eq!(style.to_value(), json!({ "color": "blue", "margin": "0" }));
        // Existing key keeps its slot
        assert_eq!(style.keys().collect::<Vec<_>>(), vec!["color", "margin"]);
    }

    #[test]
    fn merge_is_recursive() {
        let mut style = StyleObject::new();
        style.insert_nested(":hover", StyleObject::new().with("color", "red"));

        let mut other = StyleObject::new();
        other.insert_nested(":hover", StyleObject::new().with("opacity", "0.5"));
        style.merge(other);

        assert_eq!(
            style.to_value(),
            json!({ ":hover": { "color": "red", "opacity": "0.5" } })
        );
    }

    #[test]
    fn object_replaces_scalar() {
        let mut style = StyleObject::new().with("a", "1");
        let mut other = StyleObject::new();
        other.insert_nested("a", StyleObject::new().with("b", "2"));
        style.merge(other);

        assert_eq!(style.to_value(), json!({ "a": { "b": "2" } }));
    }

    #[test]
    fn nest_under_path() {
        let style = StyleObject::new().with("color", "red");
        let nested = style.nest_under(&["@media (min-width: 640px)".into(), ":hover".into()]);

        assert_eq!(
            nested.to_value(),
            json!({ "@media (min-width: 640px)": { ":hover": { "color": "red" } } })
        );
    }

    #[test]
    fn map_leaves_descends() {
        let mut style = StyleObject::new().with("color", "red");
        style.insert_nested("::after", StyleObject::new().with("content", "\"\""));

        style.map_leaves(&|v| json!(format!("{}!", v.as_str().unwrap_or_default())));

        assert_eq!(
            style.to_value(),
            json!({ "color": "red!", "::after": { "content": "\"\"!" } })
        );
    }
}
