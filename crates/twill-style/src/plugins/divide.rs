//! `divide-*`: borders between children.
//!
//! `divide-x`/`divide-y` set widths, `divide-opacity` sets the opacity
//! variable and everything else is a color. All output is scoped to the
//! sibling selector so the first child gets no border.

use serde_json::Value;
use twill_core::StyleObject;

use super::{PluginContext, add_px_to_zero, with_alpha};
use crate::Result;
use crate::rules::SIBLINGS;

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    match context.dynamic_key {
        "divide-x" | "divide-y" => width(context),
        "divide-opacity" => opacity(context),
        _ => color(context),
    }
}

fn color(context: &PluginContext<'_>) -> Result<StyleObject> {
    if context.pieces.has_negative {
        return Err(context.no_negatives());
    }
    let value = context.capture(cached_regex!(r"^divide-(.+)$")).unwrap_or_default();

    let Some(color) =
        context.first_config_value(&["divideColor", "borderColor", "colors"], value)?
    else {
        return Err(context.suggestions_error(&["divideColor"]));
    };

    let border = with_alpha(&color.joined(), "borderColor", "--divide-opacity", context.important());
    Ok(StyleObject::new().with(SIBLINGS, border))
}

fn opacity(context: &PluginContext<'_>) -> Result<StyleObject> {
    if context.pieces.has_negative {
        return Err(context.no_negatives());
    }
    let value = context
        .capture(cached_regex!(r"^divide-opacity-(.+)$"))
        .unwrap_or("default");

    match context.first_config_value(&["divideOpacity", "opacity"], value)? {
        Some(opacity) => Ok(StyleObject::new().with(
            SIBLINGS,
            StyleObject::new().with("--divide-opacity", opacity.joined()),
        )),
        None if context.has_section("divideOpacity") => {
            Err(context.suggestions_error(&["divideOpacity"]))
        }
        None => Err(context.suggestions_error(&["opacity"])),
    }
}

fn width(context: &PluginContext<'_>) -> Result<StyleObject> {
    let value = context
        .capture(cached_regex!(r"^divide-[xy]-(.+)$"))
        .unwrap_or("default");

    let Some(width) = context.config_value("divideWidth", value)? else {
        return Err(context.suggestions_error(&["divideWidth"]));
    };

    let value = format!("{}{}", context.negative(), add_px_to_zero(&width.joined()));
    let is_x = context.dynamic_key == "divide-x";
    let variable = if is_x { "--divide-x-reverse" } else { "--divide-y-reverse" };
    let important = context.important();
    let first = format!("calc({value} * var({variable})){important}");
    let second = format!("calc({value} * calc(1 - var({variable}))){important}");

    let mut inner = StyleObject::new().with(variable, Value::from(0));
    if is_x {
        inner.insert("borderRightWidth", first);
        inner.insert("borderLeftWidth", second);
    } else {
        inner.insert("borderTopWidth", second);
        inner.insert("borderBottomWidth", first);
    }
    Ok(StyleObject::new().with(SIBLINGS, inner))
}
