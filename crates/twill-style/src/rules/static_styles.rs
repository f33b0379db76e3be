//! Static utilities: class names with a fixed style.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde_json::{Value, json};
use twill_core::StyleObject;

/// Sibling selector used by the space and divide utilities.
pub const SIBLINGS: &str = "> :not(template) ~ :not(template)";

static STATIC_STYLES: OnceLock<IndexMap<&'static str, StyleObject>> = OnceLock::new();

macro_rules! static_styles {
    ($($class:literal => $style:tt),* $(,)?) => {{
        let mut table = IndexMap::new();
        $(table.insert($class, style(json!($style)));)*
        table
    }};
}

fn style(value: Value) -> StyleObject {
    match value {
        Value::Object(map) => StyleObject::from(map),
        _ => StyleObject::new(),
    }
}

/// Look up a static class by exact name.
pub fn static_style(class_name: &str) -> Option<&'static StyleObject> {
    table().get(class_name)
}

/// Look up a static class, returning the table's own key with the style.
pub fn static_entry(class_name: &str) -> Option<(&'static str, &'static StyleObject)> {
    table()
        .get_key_value(class_name)
        .map(|(key, style)| (*key, style))
}

/// Every static class name, in table order.
pub fn static_class_names() -> impl Iterator<Item = &'static str> {
    table().keys().copied()
}

fn table() -> &'static IndexMap<&'static str, StyleObject> {
    STATIC_STYLES.get_or_init(build)
}

fn build() -> IndexMap<&'static str, StyleObject> {
    static_styles! {
        // Layout
        "box-border" => { "boxSizing": "border-box" },
        "box-content" => { "boxSizing": "content-box" },
        "hidden" => { "display": "none" },
        "block" => { "display": "block" },
        "inline-block" => { "display": "inline-block" },
        "inline" => { "display": "inline" },
        "flow-root" => { "display": "flow-root" },
        "flex" => { "display": "flex" },
        "inline-flex" => { "display": "inline-flex" },
        "grid" => { "display": "grid" },
        "inline-grid" => { "display": "inline-grid" },
        "table" => { "display": "table" },
        "table-caption" => { "display": "table-caption" },
        "table-cell" => { "display": "table-cell" },
        "table-column" => { "display": "table-column" },
        "table-column-group" => { "display": "table-column-group" },
        "table-footer-group" => { "display": "table-footer-group" },
        "table-header-group" => { "display": "table-header-group" },
        "table-row-group" => { "display": "table-row-group" },
        "table-row" => { "display": "table-row" },
        "float-right" => { "float": "right" },
        "float-left" => { "float": "left" },
        "float-none" => { "float": "none" },
        "clearfix" => { "::after": { "content": "\"\"", "display": "table", "clear": "both" } },
        "clear-left" => { "clear": "left" },
        "clear-right" => { "clear": "right" },
        "clear-both" => { "clear": "both" },
        "clear-none" => { "clear": "none" },
        "object-contain" => { "objectFit": "contain" },
        "object-cover" => { "objectFit": "cover" },
        "object-fill" => { "objectFit": "fill" },
        "object-none" => { "objectFit": "none" },
        "object-scale-down" => { "objectFit": "scale-down" },
        "overflow-auto" => { "overflow": "auto" },
        "overflow-hidden" => { "overflow": "hidden" },
        "overflow-visible" => { "overflow": "visible" },
        "overflow-scroll" => { "overflow": "scroll" },
        "overflow-x-auto" => { "overflowX": "auto" },
        "overflow-y-auto" => { "overflowY": "auto" },
        "overflow-x-hidden" => { "overflowX": "hidden" },
        "overflow-y-hidden" => { "overflowY": "hidden" },
        "overflow-x-visible" => { "overflowX": "visible" },
        "overflow-y-visible" => { "overflowY": "visible" },
        "overflow-x-scroll" => { "overflowX": "scroll" },
        "overflow-y-scroll" => { "overflowY": "scroll" },
        "scrolling-touch" => { "WebkitOverflowScrolling": "touch" },
        "scrolling-auto" => { "WebkitOverflowScrolling": "auto" },
        "static" => { "position": "static" },
        "fixed" => { "position": "fixed" },
        "absolute" => { "position": "absolute" },
        "relative" => { "position": "relative" },
        "sticky" => { "position": "sticky" },
        "visible" => { "visibility": "visible" },
        "invisible" => { "visibility": "hidden" },
        "space-x-reverse" => { (SIBLINGS): { "--space-x-reverse": 1 } },
        "space-y-reverse" => { (SIBLINGS): { "--space-y-reverse": 1 } },
        "divide-x-reverse" => { (SIBLINGS): { "--divide-x-reverse": 1 } },
        "divide-y-reverse" => { (SIBLINGS): { "--divide-y-reverse": 1 } },
        // Flexbox
        "flex-row" => { "flexDirection": "row" },
        "flex-row-reverse" => { "flexDirection": "row-reverse" },
        "flex-col" => { "flexDirection": "column" },
        "flex-col-reverse" => { "flexDirection": "column-reverse" },
        "flex-no-wrap" => { "flexWrap": "nowrap" },
        "flex-wrap" => { "flexWrap": "wrap" },
        "flex-wrap-reverse" => { "flexWrap": "wrap-reverse" },
        "items-stretch" => { "alignItems": "stretch" },
        "items-start" => { "alignItems": "flex-start" },
        "items-center" => { "alignItems": "center" },
        "items-end" => { "alignItems": "flex-end" },
        "items-baseline" => { "alignItems": "baseline" },
        "content-start" => { "alignContent": "flex-start" },
        "content-center" => { "alignContent": "center" },
        "content-end" => { "alignContent": "flex-end" },
        "content-between" => { "alignContent": "space-between" },
        "content-around" => { "alignContent": "space-around" },
        "self-auto" => { "alignSelf": "auto" },
        "self-start" => { "alignSelf": "flex-start" },
        "self-center" => { "alignSelf": "center" },
        "self-end" => { "alignSelf": "flex-end" },
        "self-stretch" => { "alignSelf": "stretch" },
        "justify-start" => { "justifyContent": "flex-start" },
        "justify-center" => { "justifyContent": "center" },
        "justify-end" => { "justifyContent": "flex-end" },
        "justify-between" => { "justifyContent": "space-between" },
        "justify-around" => { "justifyContent": "space-around" },
        // Grid
        "grid-flow-row" => { "gridAutoFlow": "row" },
        "grid-flow-col" => { "gridAutoFlow": "column" },
        "grid-flow-row-dense" => { "gridAutoFlow": "row dense" },
        "grid-flow-col-dense" => { "gridAutoFlow": "column dense" },
        // Typography
        "antialiased" => { "WebkitFontSmoothing": "antialiased", "MozOsxFontSmoothing": "grayscale" },
        "subpixel-antialiased" => { "WebkitFontSmoothing": "auto", "MozOsxFontSmoothing": "auto" },
        "italic" => { "fontStyle": "italic" },
        "not-italic" => { "fontStyle": "normal" },
        "list-inside" => { "listStylePosition": "inside" },
        "list-outside" => { "listStylePosition": "outside" },
        "text-left" => { "textAlign": "left" },
        "text-center" => { "textAlign": "center" },
        "text-right" => { "textAlign": "right" },
        "text-justify" => { "textAlign": "justify" },
        "underline" => { "textDecoration": "underline" },
        "line-through" => { "textDecoration": "line-through" },
        "no-underline" => { "textDecoration": "none" },
        "uppercase" => { "textTransform": "uppercase" },
        "lowercase" => { "textTransform": "lowercase" },
        "capitalize" => { "textTransform": "capitalize" },
        "normal-case" => { "textTransform": "none" },
        "align-baseline" => { "verticalAlign": "baseline" },
        "align-top" => { "verticalAlign": "top" },
        "align-middle" => { "verticalAlign": "middle" },
        "align-bottom" => { "verticalAlign": "bottom" },
        "align-text-top" => { "verticalAlign": "text-top" },
        "align-text-bottom" => { "verticalAlign": "text-bottom" },
        "whitespace-normal" => { "whiteSpace": "normal" },
        "whitespace-no-wrap" => { "whiteSpace": "nowrap" },
        "whitespace-pre" => { "whiteSpace": "pre" },
        "whitespace-pre-line" => { "whiteSpace": "pre-line" },
        "whitespace-pre-wrap" => { "whiteSpace": "pre-wrap" },
        "break-normal" => { "wordBreak": "normal", "overflowWrap": "normal" },
        "break-words" => { "overflowWrap": "break-word" },
        "break-all" => { "wordBreak": "break-all" },
        "truncate" => { "overflow": "hidden", "textOverflow": "ellipsis", "whiteSpace": "nowrap" },
        // Backgrounds
        "bg-fixed" => { "backgroundAttachment": "fixed" },
        "bg-local" => { "backgroundAttachment": "local" },
        "bg-scroll" => { "backgroundAttachment": "scroll" },
        "bg-repeat" => { "backgroundRepeat": "repeat" },
        "bg-no-repeat" => { "backgroundRepeat": "no-repeat" },
        "bg-repeat-x" => { "backgroundRepeat": "repeat-x" },
        "bg-repeat-y" => { "backgroundRepeat": "repeat-y" },
        "bg-repeat-round" => { "backgroundRepeat": "round" },
        "bg-repeat-space" => { "backgroundRepeat": "space" },
        // Borders
        "border-solid" => { "borderStyle": "solid" },
        "border-dashed" => { "borderStyle": "dashed" },
        "border-dotted" => { "borderStyle": "dotted" },
        "border-double" => { "borderStyle": "double" },
        "border-none" => { "borderStyle": "none" },
        // Tables
        "border-collapse" => { "borderCollapse": "collapse" },
        "border-separate" => { "borderCollapse": "separate" },
        "table-auto" => { "tableLayout": "auto" },
        "table-fixed" => { "tableLayout": "fixed" },
        // Interactivity
        "appearance-none" => { "appearance": "none" },
        "outline-none" => { "outline": 0 },
        "pointer-events-none" => { "pointerEvents": "none" },
        "pointer-events-auto" => { "pointerEvents": "auto" },
        "resize-none" => { "resize": "none" },
        "resize-y" => { "resize": "vertical" },
        "resize-x" => { "resize": "horizontal" },
        "resize" => { "resize": "both" },
        "select-none" => { "userSelect": "none" },
        "select-text" => { "userSelect": "text" },
        "select-all" => { "userSelect": "all" },
        "select-auto" => { "userSelect": "auto" },
        // Accessibility
        "sr-only" => {
            "position": "absolute",
            "width": "1px",
            "height": "1px",
            "padding": "0",
            "margin": "-1px",
            "overflow": "hidden",
            "clip": "rect(0, 0, 0, 0)",
            "whiteSpace": "nowrap",
            "borderWidth": "0"
        },
        "not-sr-only" => {
            "position": "static",
            "width": "auto",
            "height": "auto",
            "padding": "0",
            "margin": "0",
            "overflow": "visible",
            "clip": "auto",
            "whiteSpace": "normal"
        },
        // Transforms
        "transform" => {
            "--transform-translate-x": "0",
            "--transform-translate-y": "0",
            "--transform-rotate": "0",
            "--transform-skew-x": "0",
            "--transform-skew-y": "0",
            "--transform-scale-x": "1",
            "--transform-scale-y": "1",
            "transform": "translateX(var(--transform-translate-x)) translateY(var(--transform-translate-y)) rotate(var(--transform-rotate)) skewX(var(--transform-skew-x)) skewY(var(--transform-skew-y)) scaleX(var(--transform-scale-x)) scaleY(var(--transform-scale-y))"
        },
        // Extras
        "content" => { "content": "\"\"" },
    }
}
