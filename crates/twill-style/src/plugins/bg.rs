//! `bg-*`: background color, then size, then position.

use twill_core::StyleObject;

use super::{PluginContext, with_alpha};
use crate::Result;

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    if context.pieces.has_negative {
        return Err(context.no_negatives());
    }
    let value = context.capture(cached_regex!(r"^bg-(.+)$")).unwrap_or_default();
    let important = context.important();

    if let Some(color) = context.config_value("backgroundColor", value)? {
        return Ok(with_alpha(&color.joined(), "backgroundColor", "--bg-opacity", important));
    }

    for (section, property) in [
        ("backgroundSize", "backgroundSize"),
        ("backgroundPosition", "backgroundPosition"),
    ] {
        if let Some(found) = context.config_value(section, value)? {
            return Ok(StyleObject::new().with(property, format!("{found}{important}")));
        }
    }

    Err(context.suggestions_error(&["backgroundColor", "backgroundSize", "backgroundPosition"]))
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
            dynamic_key: "bg",
        };
        CorePlugin::Bg.resolve(&context).map(|style| style.into_value())
    }

    #[test]
    fn waterfall() {
        assert_eq!(
            resolve("bg-white").unwrap(),
            json!({ "--bg-opacity": "1", "backgroundColor": "rgba(255, 255, 255, var(--bg-opacity))" })
        );
        assert_eq!(resolve("bg-transparent").unwrap(), json!({ "backgroundColor": "transparent" }));
        assert_eq!(resolve("bg-cover").unwrap(), json!({ "backgroundSize": "cover" }));
        assert_eq!(
            resolve("bg-left-top!").unwrap(),
            json!({ "backgroundPosition": "left top !important" })
        );
    }

    #[test]
    fn unknown_value_suggests() {
        let err = resolve("bg-covr").unwrap_err();
        assert_eq!(err.suggestions().map(|s| s.targets()), Some(vec!["bg-cover"]));
    }
}
