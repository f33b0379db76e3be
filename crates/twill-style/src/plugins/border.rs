//! `border` and `border-*`: width, then color.

use twill_core::StyleObject;

use super::{PluginContext, with_alpha};
use crate::Result;

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    if context.pieces.has_negative {
        return Err(context.no_negatives());
    }
    // Bare `border` reads the default entries
    let value = context.capture(cached_regex!(r"^border-(.+)$")).unwrap_or_default();
    let important = context.important();

    if let Some(width) = context.config_value("borderWidth", value)? {
        return Ok(StyleObject::new().with("borderWidth", format!("{width}{important}")));
    }

    if let Some(color) = context.config_value("borderColor", value)? {
        return Ok(with_alpha(&color.joined(), "borderColor", "--border-opacity", important));
    }

    Err(context.suggestions_error(&["borderColor", "borderWidth"]))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use twill_core::ThemeConfig;

    use crate::parser::split_token;
    use crate::plugins::{CorePlugin, PluginContext};
    use crate::ResolveOptions;

    fn resolve(token: &str) -> crate::Result<Value> {
        let theme = ThemeConfig::tailwind_default();
        let pieces = split_token(token)?;
        let options = ResolveOptions::default();
        let context = PluginContext {
            pieces: &pieces,
            theme: &theme,
            options: &options,
            dynamic_key: "border",
        };
        CorePlugin::Border.resolve(&context).map(|style| style.into_value())
    }

    #[test]
    fn width_before_color() {
        assert_eq!(resolve("border").unwrap(), json!({ "borderWidth": "1px" }));
        assert_eq!(resolve("border-2!").unwrap(), json!({ "borderWidth": "2px !important" }));
        assert_eq!(
            resolve("border-black").unwrap(),
            json!({ "--border-opacity": "1", "borderColor": "rgba(0, 0, 0, var(--border-opacity))" })
        );
    }

    #[test]
    fn rejects_negatives() {
        assert!(resolve("-border-2").is_err());
    }
}
