//! `text-*`: text color, then font size.

use twill_core::{ConfigValue, StyleObject};

use super::{PluginContext, with_alpha};
use crate::Result;

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    if context.pieces.has_negative {
        return Err(context.no_negatives());
    }
    let value = context.capture(cached_regex!(r"^text-(.+)$")).unwrap_or_default();
    let important = context.important();

    if let Some(color) = context.config_value("textColor", value)? {
        return Ok(with_alpha(&color.joined(), "color", "--text-opacity", important));
    }

    if let Some(size) = context.config_value("fontSize", value)? {
        let (font_size, line_height) = match size {
            ConfigValue::Scalar(size) => (size, None),
            ConfigValue::List(mut items) => {
                let line_height = (items.len() > 1).then(|| items.remove(1));
                (items.into_iter().next().unwrap_or_default(), line_height)
            }
        };
        let mut style = StyleObject::new().with("fontSize", format!("{font_size}{important}"));
        if let Some(line_height) = line_height {
            style.insert("lineHeight", format!("{line_height}{important}"));
        }
        return Ok(style);
    }

    Err(context.suggestions_error(&["textColor", "fontSize"]))
}
