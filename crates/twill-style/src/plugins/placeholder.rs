//! `placeholder-*`: placeholder opacity, then placeholder color.

use twill_core::StyleObject;

use super::{PluginContext, with_alpha};
use crate::Result;

const PLACEHOLDER: &str = "::placeholder";

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    if context.pieces.has_negative {
        return Err(context.no_negatives());
    }

    let opacity_key = match context.capture(cached_regex!(r"^placeholder-opacity(?:-(.+))?$")) {
        Some("placeholder-opacity") => Some("default"),
        other => other,
    };
    if let Some(key) = opacity_key
        && let Some(opacity) = context.first_config_value(&["placeholderOpacity", "opacity"], key)?
    {
        let inner = StyleObject::new().with("--placeholder-opacity", opacity.joined());
        return Ok(StyleObject::new().with(PLACEHOLDER, inner));
    }

    let value = context.capture(cached_regex!(r"^placeholder-(.+)$")).unwrap_or_default();
    if let Some(color) = context.config_value("placeholderColor", value)? {
        let inner = with_alpha(&color.joined(), "color", "--placeholder-opacity", context.important());
        return Ok(StyleObject::new().with(PLACEHOLDER, inner));
    }

    let opacity_section = if context.has_section("placeholderOpacity") {
        "placeholderOpacity"
    } else {
        "opacity"
    };
    Err(context.suggestions_error(&["placeholderColor", opacity_section]))
}
