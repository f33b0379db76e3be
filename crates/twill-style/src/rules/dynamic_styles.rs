//! Dynamic utilities: a class prefix plus a config-driven suffix.
//!
//! Each row maps a prefix (`p`, `border-t`, `text-opacity`) either to
//! descriptors naming the CSS properties and theme sections it reads, or to
//! a core plugin when one row can't express the output.

use crate::plugins::CorePlugin;

/// One interpretation of a dynamic row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Properties that all receive the resolved value.
    pub props: &'static [&'static str],
    /// Theme section to read.
    pub config: &'static str,
    /// Section to read when `config` is missing from the theme.
    pub fallback: Option<&'static str>,
}

/// A dynamic table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicRow {
    pub key: &'static str,
    /// Tried in order; the first with a value wins.
    pub styles: &'static [Descriptor],
    pub plugin: Option<CorePlugin>,
}

impl DynamicRow {
    /// Primary theme sections of the row's descriptors.
    pub fn config_sections(&self) -> Vec<&'static str> {
        self.styles.iter().map(|d| d.config).collect()
    }
}

macro_rules! row {
    (@fallback) => {
        None
    };
    (@fallback $fallback:literal) => {
        Some($fallback)
    };
    ($key:literal, plugin $plugin:ident) => {
        DynamicRow {
            key: $key,
            styles: &[],
            plugin: Some(CorePlugin::$plugin),
        }
    };
    ($key:literal, $([$($prop:literal),+] from $config:literal $(or $fallback:literal)?);+) => {
        DynamicRow {
            key: $key,
            styles: &[$(Descriptor {
                props: &[$($prop),+],
                config: $config,
                fallback: row!(@fallback $($fallback)?),
            }),+],
            plugin: None,
        }
    };
}

/// Every dynamic row, grouped the way the Tailwind docs group them.
pub static DYNAMIC_STYLES: &[DynamicRow] = &[
    // Layout
    row!("container", plugin Container),
    row!("object", ["objectPosition"] from "objectPosition"),
    row!("top", ["top"] from "inset"),
    row!("bottom", ["bottom"] from "inset"),
    row!("right", ["right"] from "inset"),
    row!("left", ["left"] from "inset"),
    row!("inset-y", ["top", "bottom"] from "inset"),
    row!("inset-x", ["left", "right"] from "inset"),
    row!("inset", ["top", "right", "bottom", "left"] from "inset"),
    row!("z", ["zIndex"] from "zIndex"),
    row!("space-y", plugin Space),
    row!("space-x", plugin Space),
    row!("divide-opacity", plugin Divide),
    row!("divide-y", plugin Divide),
    row!("divide-x", plugin Divide),
    row!("divide", plugin Divide),
    // Flexbox
    row!("flex-grow", ["flexGrow"] from "flexGrow"),
    row!("flex-shrink", ["flexShrink"] from "flexShrink"),
    row!("flex", ["flex"] from "flex"),
    row!("order", ["order"] from "order"),
    // Grid
    row!("grid-cols", ["gridTemplateColumns"] from "gridTemplateColumns"),
    row!("col", ["gridColumn"] from "gridColumn"),
    row!("col-start", ["gridColumnStart"] from "gridColumnStart"),
    row!("col-end", ["gridColumnEnd"] from "gridColumnEnd"),
    row!("grid-rows", ["gridTemplateRows"] from "gridTemplateRows"),
    row!("row", ["gridRow"] from "gridRow"),
    row!("row-start", ["gridRowStart"] from "gridRowStart"),
    row!("row-end", ["gridRowEnd"] from "gridRowEnd"),
    row!("gap", ["gap"] from "gap"),
    row!("col-gap", ["columnGap"] from "gap"),
    row!("row-gap", ["rowGap"] from "gap"),
    // Spacing
    row!("pt", ["paddingTop"] from "padding"),
    row!("pr", ["paddingRight"] from "padding"),
    row!("pb", ["paddingBottom"] from "padding"),
    row!("pl", ["paddingLeft"] from "padding"),
    row!("px", ["paddingLeft", "paddingRight"] from "padding"),
    row!("py", ["paddingTop", "paddingBottom"] from "padding"),
    row!("p", ["padding"] from "padding"),
    row!("mt", ["marginTop"] from "margin"),
    row!("mr", ["marginRight"] from "margin"),
    row!("mb", ["marginBottom"] from "margin"),
    row!("ml", ["marginLeft"] from "margin"),
    row!("mx", ["marginLeft", "marginRight"] from "margin"),
    row!("my", ["marginTop", "marginBottom"] from "margin"),
    row!("m", ["margin"] from "margin"),
    // Sizing
    row!("w", ["width"] from "width"),
    row!("min-w", ["minWidth"] from "minWidth"),
    row!("max-w", ["maxWidth"] from "maxWidth"),
    row!("h", ["height"] from "height"),
    row!("min-h", ["minHeight"] from "minHeight"),
    row!("max-h", ["maxHeight"] from "maxHeight"),
    // Typography
    row!("font", ["fontFamily"] from "fontFamily"; ["fontWeight"] from "fontWeight"),
    row!("tracking", ["letterSpacing"] from "letterSpacing"),
    row!("leading", ["lineHeight"] from "lineHeight"),
    row!("list", ["listStyleType"] from "listStyleType"),
    row!("placeholder", plugin Placeholder),
    row!("text-opacity", ["--text-opacity"] from "textOpacity" or "opacity"),
    row!("text", plugin Text),
    // Backgrounds
    row!("bg-opacity", ["--bg-opacity"] from "backgroundOpacity" or "opacity"),
    row!("bg", plugin Bg),
    // Borders
    row!("border-t", ["borderTopWidth"] from "borderWidth"),
    row!("border-b", ["borderBottomWidth"] from "borderWidth"),
    row!("border-l", ["borderLeftWidth"] from "borderWidth"),
    row!("border-r", ["borderRightWidth"] from "borderWidth"),
    row!("border-opacity", ["--border-opacity"] from "borderOpacity" or "opacity"),
    row!("border", plugin Border),
    row!("rounded-tl", ["borderTopLeftRadius"] from "borderRadius"),
    row!("rounded-tr", ["borderTopRightRadius"] from "borderRadius"),
    row!("rounded-br", ["borderBottomRightRadius"] from "borderRadius"),
    row!("rounded-bl", ["borderBottomLeftRadius"] from "borderRadius"),
    row!("rounded-t", ["borderTopLeftRadius", "borderTopRightRadius"] from "borderRadius"),
    row!("rounded-r", ["borderTopRightRadius", "borderBottomRightRadius"] from "borderRadius"),
    row!("rounded-b", ["borderBottomLeftRadius", "borderBottomRightRadius"] from "borderRadius"),
    row!("rounded-l", ["borderTopLeftRadius", "borderBottomLeftRadius"] from "borderRadius"),
    row!("rounded", ["borderRadius"] from "borderRadius"),
    // Effects
    row!("shadow", ["boxShadow"] from "boxShadow"),
    row!("opacity", ["opacity"] from "opacity"),
    // Transitions
    row!("transition", ["transitionProperty"] from "transitionProperty"),
    row!("duration", ["transitionDuration"] from "transitionDuration"),
    row!("ease", ["transitionTimingFunction"] from "transitionTimingFunction"),
    row!("delay", ["transitionDelay"] from "transitionDelay"),
    // Transforms
    row!("scale-x", ["--transform-scale-x"] from "scale"),
    row!("scale-y", ["--transform-scale-y"] from "scale"),
    row!("scale", ["--transform-scale-x", "--transform-scale-y"] from "scale"),
    row!("rotate", ["--transform-rotate"] from "rotate"),
    row!("translate-x", ["--transform-translate-x"] from "translate"),
    row!("translate-y", ["--transform-translate-y"] from "translate"),
    row!("skew-x", ["--transform-skew-x"] from "skew"),
    row!("skew-y", ["--transform-skew-y"] from "skew"),
    row!("origin", ["transformOrigin"] from "transformOrigin"),
    // Interactivity
    row!("cursor", ["cursor"] from "cursor"),
    // Svg
    row!("fill", ["fill"] from "fill"),
    row!("stroke", ["stroke"] from "stroke"; ["strokeWidth"] from "strokeWidth"),
];

/// Find the longest row key that `class_name` equals or starts with
/// followed by `-`.
pub fn longest_dynamic_match(class_name: &str) -> Option<&'static DynamicRow> {
    DYNAMIC_STYLES
        .iter()
        .filter(|row| {
            class_name
                .strip_prefix(row.key)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
        })
        .fold(None, |best: Option<&'static DynamicRow>, row| match best {
            Some(best) if best.key.len() >= row.key.len() => Some(best),
            _ => Some(row),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_wins() {
        assert_eq!(longest_dynamic_match("border-t-2").map(|r| r.key), Some("border-t"));
        assert_eq!(
            longest_dynamic_match("border-opacity-50").map(|r| r.key),
            Some("border-opacity")
        );
        assert_eq!(longest_dynamic_match("border-red-500").map(|r| r.key), Some("border"));
        assert_eq!(longest_dynamic_match("border").map(|r| r.key), Some("border"));
        assert_eq!(longest_dynamic_match("col-start-2").map(|r| r.key), Some("col-start"));
    }

    #[test]
    fn prefix_needs_separator() {
        // `pt` is not a prefix of `ptx-4` at a separator
        assert_eq!(longest_dynamic_match("ptx-4").map(|r| r.key), None);
        assert_eq!(longest_dynamic_match("px-4").map(|r| r.key), Some("px"));
    }

    #[test]
    fn rows_are_either_styles_or_plugin() {
        for row in DYNAMIC_STYLES {
            assert_ne!(row.styles.is_empty(), row.plugin.is_none(), "{}", row.key);
        }
    }

    #[test]
    fn fallback_rows() {
        let row = longest_dynamic_match("text-opacity-50").unwrap();
        assert_eq!(row.styles[0].fallback, Some("opacity"));
        assert_eq!(row.config_sections(), vec!["textOpacity"]);
    }
}
