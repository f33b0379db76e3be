//! Dynamic style builder: one table row plus the theme.

use twill_core::theme::strip_negative;
use twill_core::{ConfigValue, StyleObject, ThemeConfig, resolve_config_value};

use super::not_found;
use crate::parser::Pieces;
use crate::rules::DynamicRow;
use crate::suggest::ConfigQuery;
use crate::{ResolveOptions, Result};

/// Build the style for a dynamic row.
///
/// The row's descriptors are tried in order; the first whose section (or
/// fallback section) has a value for the class suffix wins, and every one
/// of its properties receives that value. A negative class negates the
/// value. A class ending in `-` never resolves.
pub fn build_dynamic(
    row: &DynamicRow,
    pieces: &Pieces,
    theme: &ThemeConfig,
    options: &ResolveOptions,
) -> Result<StyleObject> {
    let suffix = pieces.class_name.get(row.key.len() + 1..).unwrap_or_default();
    let key = format!("{}{suffix}", pieces.negative());

    let mut found = None;
    for descriptor in row.styles {
        let section = theme
            .section(descriptor.config)
            .or_else(|| descriptor.fallback.and_then(|fallback| theme.section(fallback)));
        if let Some(value) = resolve_config_value(section, &key)? {
            found = Some((descriptor, value));
            break;
        }
    }

    let Some((descriptor, value)) = found.filter(|_| !pieces.class_name.ends_with('-')) else {
        let sections = row.config_sections();
        let query = ConfigQuery {
            sections: &sections,
            dynamic_key: row.key,
            class_name: &pieces.class_name,
            has_negative: pieces.has_negative,
        };
        return Err(not_found(pieces, theme, options, Some(query)));
    };

    let value = match &value {
        ConfigValue::List(_) => value.joined(),
        ConfigValue::Scalar(scalar) if pieces.has_negative => strip_negative(scalar).to_string(),
        ConfigValue::Scalar(scalar) => scalar.clone(),
    };
    let negative = pieces.negative();

    Ok(descriptor
        .props
        .iter()
        .fold(StyleObject::new(), |style, prop| style.with(*prop, format!("{negative}{value}"))))
}
