//! The `!important` transform.

use serde_json::Value;
use twill_core::StyleObject;

/// Append ` !important` to every leaf of a style, nested keys included.
pub fn merge_important(mut style: StyleObject, has_important: bool) -> StyleObject {
    if has_important {
        style.map_leaves(&|value| match value {
            Value::String(s) => Value::String(format!("{s} !important")),
            other => Value::String(format!("{other} !important")),
        });
    }
    style
}
