//! Rendering theme screens as media queries.

use serde_json::Value;
use twill_core::ThemeConfig;

use crate::Result;

/// Render a screen as an `@media` query.
///
/// Accepted shapes:
///
/// - `"640px"` renders `@media (min-width: 640px)`
/// - `{ "raw": "print" }` renders `@media print`
/// - `{ "min": .., "max": .. }` joins its bounds with ` and `
/// - a list of ranges joins them with `, `
///
/// Returns `Ok(None)` when the theme has no such screen.
///
/// ```
/// use serde_json::json;
/// use twill_core::ThemeConfig;
/// use twill_style::selector::stringify_screen;
///
/// let theme = ThemeConfig::from_value(json!({
///     "screens": { "md": "768px", "tablet": { "min": "640px", "max": "1023px" } }
/// })).unwrap();
///
/// assert_eq!(stringify_screen(&theme, "md").unwrap().as_deref(), Some("@media (min-width: 768px)"));
/// assert_eq!(
///     stringify_screen(&theme, "tablet").unwrap().as_deref(),
///     Some("@media (min-width: 640px) and (max-width: 1023px)")
/// );
/// ```
pub fn stringify_screen(theme: &ThemeConfig, name: &str) -> Result<Option<String>> {
    let Some((_, screen)) = theme.screens().find(|(screen, _)| *screen == name) else {
        return Ok(None);
    };

    let query = match screen {
        Value::String(width) => format!("(min-width: {width})"),
        Value::Object(range) => match range.get("raw").and_then(Value::as_str) {
            Some(raw) => raw.to_string(),
            None => ranges(std::slice::from_ref(screen)),
        },
        Value::Array(list) => ranges(list),
        other => return Err(twill_core::Error::unsupported_value(other).into()),
    };

    if query.is_empty() {
        return Err(twill_core::Error::invalid_theme(format!(
            "The screen \"{name}\" needs a min or max width"
        ))
        .into());
    }

    Ok(Some(format!("@media {query}")))
}

fn ranges(list: &[Value]) -> String {
    list.iter()
        .map(|range| {
            let bound = |key: &str, feature: &str| {
                range
                    .get(key)
                    .and_then(Value::as_str)
                    .map(|width| format!("({feature}: {width})"))
            };
            [bound("min", "min-width"), bound("max", "max-width")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" and ")
        })
        .filter(|range| !range.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The single `min-width` of a screen, if it has exactly one.
///
/// Used by the container utility, which needs a plain width for `maxWidth`.
pub(crate) fn min_width(screen: &Value) -> Option<&str> {
    match screen {
        Value::String(width) => Some(width),
        Value::Object(range) if !range.contains_key("raw") => range.get("min").and_then(Value::as_str),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn theme() -> ThemeConfig {
        ThemeConfig::from_value(json!({
            "screens": {
                "sm": "640px",
                "print": { "raw": "print" },
                "range": [{ "min": "100px", "max": "200px" }, { "min": "300px" }],
                "max": { "max": "900px" },
                "empty": {},
                "number": 640,
            }
        }))
        .unwrap()
    }

    #[test]
    fn screen_shapes() {
        let theme = theme();
        assert_eq!(
            stringify_screen(&theme, "sm").unwrap().as_deref(),
            Some("@media (min-width: 640px)")
        );
        assert_eq!(stringify_screen(&theme, "print").unwrap().as_deref(), Some("@media print"));
        assert_eq!(
            stringify_screen(&theme, "range").unwrap().as_deref(),
            Some("@media (min-width: 100px) and (max-width: 200px), (min-width: 300px)")
        );
        assert_eq!(
            stringify_screen(&theme, "max").unwrap().as_deref(),
            Some("@media (max-width: 900px)")
        );
        assert_eq!(stringify_screen(&theme, "xl").unwrap(), None);
    }

    #[test]
    fn unusable_screens_are_config_errors() {
        let theme = theme();
        assert!(matches!(stringify_screen(&theme, "empty"), Err(Error::ConfigShape(_))));
        assert!(matches!(stringify_screen(&theme, "number"), Err(Error::ConfigShape(_))));
    }

    #[test]
    fn container_widths() {
        assert_eq!(min_width(&json!("640px")), Some("640px"));
        assert_eq!(min_width(&json!({ "min": "1px", "max": "2px" })), Some("1px"));
        assert_eq!(min_width(&json!({ "max": "2px" })), None);
        assert_eq!(min_width(&json!({ "raw": "print" })), None);
    }
}
