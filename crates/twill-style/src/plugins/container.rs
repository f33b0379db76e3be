//! `container`: full width, capped at each screen's min width.
//!
//! Reads `container.padding`, `container.margin` and `container.center`.
//! Padding and margin may be a single value, a `[left, right]` pair, or an
//! object keyed by `default` and screen names.

use serde_json::{Map, Value};
use twill_core::StyleObject;

use super::PluginContext;
use crate::Result;
use crate::selector::min_width;

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    let pieces = context.pieces;
    if pieces.has_variants() {
        return Err(context.no_variants());
    }
    if pieces.has_important {
        return Err(context.no_important());
    }
    if pieces.has_negative {
        return Err(context.no_negatives());
    }

    let empty = Map::new();
    let config = context
        .theme
        .section("container")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let padding = config.get("padding");
    let margin = config.get("margin");
    let center = config.get("center").is_some_and(truthy);

    let mut style = StyleObject::new().with("width", "100%");
    if let Some(padding) = padding.and_then(|p| top_level_spacing("padding", p)) {
        style.merge(padding);
    }
    if center {
        style.insert("marginLeft", "auto");
        style.insert("marginRight", "auto");
    } else if let Some(margin) = margin.and_then(|m| top_level_spacing("margin", m)) {
        style.merge(margin);
    }

    for (screen, value) in context.theme.screens() {
        let Some(width) = min_width(value) else {
            continue;
        };
        let mut media = StyleObject::new().with("maxWidth", width);
        if let Some(padding) = padding.and_then(|p| screen_spacing("padding", p, screen)) {
            media.merge(padding);
        }
        if !center && let Some(margin) = margin.and_then(|m| screen_spacing("margin", m, screen)) {
            media.merge(margin);
        }
        style.insert_nested(format!("@media (min-width: {width})"), media);
    }

    Ok(style)
}

fn top_level_spacing(kind: &str, values: &Value) -> Option<StyleObject> {
    match values {
        Value::Array(_) => spacing_pair(kind, values),
        Value::Object(_) => screen_spacing(kind, values, "default"),
        value if is_blank(value) => None,
        value => Some(sides(kind, value.clone(), value.clone())),
    }
}

/// The spacing for one key of an object-shaped padding or margin.
fn screen_spacing(kind: &str, values: &Value, key: &str) -> Option<StyleObject> {
    let value = values.as_object()?.get(key)?;
    if is_blank(value) {
        return None;
    }
    spacing_pair(kind, value).or_else(|| Some(sides(kind, value.clone(), value.clone())))
}

fn spacing_pair(kind: &str, values: &Value) -> Option<StyleObject> {
    let pair = values.as_array()?;
    let left = pair.first().cloned().unwrap_or(Value::Null);
    let right = pair.get(1).cloned().unwrap_or(Value::Null);
    Some(sides(kind, left, right))
}

fn sides(kind: &str, left: Value, right: Value) -> StyleObject {
    let mut style = StyleObject::new();
    if !left.is_null() {
        style.insert(format!("{kind}Left"), left);
    }
    if !right.is_null() {
        style.insert(format!("{kind}Right"), right);
    }
    style
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use twill_core::ThemeConfig;

    use crate::parser::split_token;
    use crate::plugins::{CorePlugin, PluginContext};
    use crate::ResolveOptions;

    fn resolve(theme: &ThemeConfig, token: &str) -> crate::Result<Value> {
        let pieces = split_token(token)?;
        let options = ResolveOptions::default();
        let context = PluginContext {
            pieces: &pieces,
            theme,
            options: &options,
            dynamic_key: "container",
        };
        CorePlugin::Container.resolve(&context).map(|style| style.into_value())
    }

    #[test]
    fn plain_container() {
        let theme = ThemeConfig::from_value(json!({
            "screens": { "sm": "640px", "md": "768px" },
        }))
        .unwrap();
        assert_eq!(
            resolve(&theme, "container").unwrap(),
            json!({
                "width": "100%",
                "@media (min-width: 640px)": { "maxWidth": "640px" },
                "@media (min-width: 768px)": { "maxWidth": "768px" },
            })
        );
    }

    #[test]
    fn centered_with_responsive_padding() {
        let theme = ThemeConfig::from_value(json!({
            "screens": { "sm": "640px", "print": { "raw": "print" } },
            "container": {
                "center": true,
                "padding": { "default": "1rem", "sm": ["2rem", "3rem"] },
                "margin": { "sm": "4px" },
            },
        }))
        .unwrap();
        assert_eq!(
            resolve(&theme, "container").unwrap(),
            json!({
                "width": "100%",
                "paddingLeft": "1rem",
                "paddingRight": "1rem",
                "marginLeft": "auto",
                "marginRight": "auto",
                "@media (min-width: 640px)": {
                    "maxWidth": "640px",
                    "paddingLeft": "2rem",
                    "paddingRight": "3rem",
                },
            })
        );
    }

    #[test]
    fn string_margin_without_center() {
        let theme = ThemeConfig::from_value(json!({
            "screens": {},
            "container": { "margin": "2rem" },
        }))
        .unwrap();
        assert_eq!(
            resolve(&theme, "container").unwrap(),
            json!({ "width": "100%", "marginLeft": "2rem", "marginRight": "2rem" })
        );
    }

    #[test]
    fn rejects_modifiers() {
        let theme = ThemeConfig::tailwind_default();
        assert_eq!(
            resolve(&theme, "md:hover:container").unwrap_err().to_string(),
            "container doesn’t support md:hover: or any other variants"
        );
        assert_eq!(
            resolve(&theme, "container!").unwrap_err().to_string(),
            "container doesn’t support !important"
        );
        assert_eq!(
            resolve(&theme, "-container").unwrap_err().to_string(),
            "container doesn’t support negatives"
        );
    }
}
