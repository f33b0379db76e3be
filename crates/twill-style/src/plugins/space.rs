//! `space-x-*` / `space-y-*`: margins between children.

use serde_json::Value;
use twill_core::StyleObject;

use super::{PluginContext, add_px_to_zero};
use crate::Result;
use crate::rules::SIBLINGS;

pub(super) fn resolve(context: &PluginContext<'_>) -> Result<StyleObject> {
    let key = context
        .capture(cached_regex!(r"^space-[xy]-(.+)$"))
        .unwrap_or("default");

    let Some(space) = context.config_value("space", key)? else {
        return Err(context.suggestions_error(&["space"]));
    };

    let value = format!("{}{}", context.negative(), add_px_to_zero(&space.joined()));
    let is_x = context.dynamic_key == "space-x";
    let variable = if is_x { "--space-x-reverse" } else { "--space-y-reverse" };
    let important = context.important();
    let first = format!("calc({value} * var({variable})){important}");
    let second = format!("calc({value} * calc(1 - var({variable}))){important}");

    let mut inner = StyleObject::new().with(variable, Value::from(0));
    if is_x {
        inner.insert("marginRight", first);
        inner.insert("marginLeft", second);
    } else {
        inner.insert("marginTop", second);
        inner.insert("marginBottom", first);
    }
    Ok(StyleObject::new().with(SIBLINGS, inner))
}
