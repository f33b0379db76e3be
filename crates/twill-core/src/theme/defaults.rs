//! Built-in Tailwind 1.x design tokens.
//!
//! Sections are assembled through a `resolve` callback so a user theme can
//! replace or extend any section. Sections derived from base tokens
//! (`textColor` from `colors`, `margin` from `spacing`, ...) are computed
//! from the already-resolved tokens, so overriding `colors` also changes
//! every color utility.

use serde_json::{Map, Value, json};

/// Resolves a section given its built-in value.
pub(super) type SectionResolver<'a> = dyn Fn(&str, Value) -> Value + 'a;

pub(super) fn build(resolve: &SectionResolver<'_>) -> Map<String, Value> {
    let mut theme = Map::new();
    let mut section = |name: &str, value: Value| -> Value {
        let value = resolve(name, value);
        theme.insert(name.to_string(), value.clone());
        value
    };

    section(
        "screens",
        json!({ "sm": "640px", "md": "768px", "lg": "1024px", "xl": "1280px" }),
    );
    let colors = section("colors", palette());
    let spacing = section("spacing", spacing());
    let opacity = section(
        "opacity",
        json!({ "0": "0", "25": "0.25", "50": "0.5", "75": "0.75", "100": "1" }),
    );

    section("backgroundColor", colors.clone());
    section("backgroundOpacity", opacity.clone());
    section("backgroundPosition", positions());
    section(
        "backgroundSize",
        json!({ "auto": "auto", "cover": "cover", "contain": "contain" }),
    );

    let mut border_colors = colors.clone();
    if let Value::Object(map) = &mut border_colors {
        map.insert("default".into(), json!("currentColor"));
    }
    let border_color = section("borderColor", border_colors);
    let border_opacity = section("borderOpacity", opacity.clone());
    section(
        "borderRadius",
        json!({
            "none": "0",
            "sm": "0.125rem",
            "default": "0.25rem",
            "md": "0.375rem",
            "lg": "0.5rem",
            "full": "9999px",
        }),
    );
    let border_width = section(
        "borderWidth",
        json!({ "default": "1px", "0": "0", "2": "2px", "4": "4px", "8": "8px" }),
    );

    section(
        "boxShadow",
        json!({
            "xs": "0 0 0 1px rgba(0, 0, 0, 0.05)",
            "sm": "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            "default": "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
            "md": "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
            "lg": "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
            "xl": "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
            "2xl": "0 25px 50px -12px rgba(0, 0, 0, 0.25)",
            "inner": "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)",
            "outline": "0 0 0 3px rgba(66, 153, 225, 0.5)",
            "none": "none",
        }),
    );
    section("container", json!({}));
    section(
        "cursor",
        json!({
            "auto": "auto",
            "default": "default",
            "pointer": "pointer",
            "wait": "wait",
            "text": "text",
            "move": "move",
            "not-allowed": "not-allowed",
        }),
    );

    section("divideColor", border_color);
    section("divideOpacity", border_opacity);
    section("divideWidth", border_width);

    section("fill", json!({ "current": "currentColor" }));
    section(
        "flex",
        json!({ "1": "1 1 0%", "auto": "1 1 auto", "initial": "0 1 auto", "none": "none" }),
    );
    section("flexGrow", json!({ "0": "0", "default": "1" }));
    section("flexShrink", json!({ "0": "0", "default": "1" }));
    section(
        "fontFamily",
        json!({
            "sans": [
                "system-ui", "-apple-system", "BlinkMacSystemFont", "\"Segoe UI\"", "Roboto",
                "\"Helvetica Neue\"", "Arial", "\"Noto Sans\"", "sans-serif",
                "\"Apple Color Emoji\"", "\"Segoe UI Emoji\"", "\"Segoe UI Symbol\"",
                "\"Noto Color Emoji\"",
            ],
            "serif": ["Georgia", "Cambria", "\"Times New Roman\"", "Times", "serif"],
            "mono": [
                "Menlo", "Monaco", "Consolas", "\"Liberation Mono\"", "\"Courier New\"", "monospace",
            ],
        }),
    );
    section(
        "fontSize",
        json!({
            "xs": "0.75rem",
            "sm": "0.875rem",
            "base": "1rem",
            "lg": "1.125rem",
            "xl": "1.25rem",
            "2xl": "1.5rem",
            "3xl": "1.875rem",
            "4xl": "2.25rem",
            "5xl": "3rem",
            "6xl": "4rem",
        }),
    );
    section(
        "fontWeight",
        json!({
            "hairline": "100",
            "thin": "200",
            "light": "300",
            "normal": "400",
            "medium": "500",
            "semibold": "600",
            "bold": "700",
            "extrabold": "800",
            "black": "900",
        }),
    );
    section("gap", spacing.clone());

    section("gridTemplateColumns", grid_template(12));
    section("gridColumn", grid_span(12));
    section("gridColumnStart", grid_lines(13));
    section("gridColumnEnd", grid_lines(13));
    section("gridTemplateRows", grid_template(6));
    section("gridRow", grid_span(6));
    section("gridRowStart", grid_lines(7));
    section("gridRowEnd", grid_lines(7));

    section(
        "height",
        extend_scale(
            json!({ "auto": "auto" }),
            &spacing,
            json!({ "full": "100%", "screen": "100vh" }),
        ),
    );
    section("inset", json!({ "0": "0", "auto": "auto" }));
    section(
        "letterSpacing",
        json!({
            "tighter": "-0.05em",
            "tight": "-0.025em",
            "normal": "0",
            "wide": "0.025em",
            "wider": "0.05em",
            "widest": "0.1em",
        }),
    );
    section(
        "lineHeight",
        json!({
            "none": "1",
            "tight": "1.25",
            "snug": "1.375",
            "normal": "1.5",
            "relaxed": "1.625",
            "loose": "2",
            "3": ".75rem",
            "4": "1rem",
            "5": "1.25rem",
            "6": "1.5rem",
            "7": "1.75rem",
            "8": "2rem",
            "9": "2.25rem",
            "10": "2.5rem",
        }),
    );
    section(
        "listStyleType",
        json!({ "none": "none", "disc": "disc", "decimal": "decimal" }),
    );
    section(
        "margin",
        extend_scale(json!({ "auto": "auto" }), &spacing, negative(&spacing)),
    );
    section("maxHeight", json!({ "full": "100%", "screen": "100vh" }));
    section(
        "maxWidth",
        json!({
            "none": "none",
            "xs": "20rem",
            "sm": "24rem",
            "md": "28rem",
            "lg": "32rem",
            "xl": "36rem",
            "2xl": "42rem",
            "3xl": "48rem",
            "4xl": "56rem",
            "5xl": "64rem",
            "6xl": "72rem",
            "full": "100%",
        }),
    );
    section(
        "minHeight",
        json!({ "0": "0", "full": "100%", "screen": "100vh" }),
    );
    section("minWidth", json!({ "0": "0", "full": "100%" }));
    section("objectPosition", positions());
    section(
        "order",
        extend_scale(
            json!({ "first": "-9999", "last": "9999", "none": "0" }),
            &numbered(1..=12, |n| n.to_string()),
            json!({}),
        ),
    );
    section("padding", spacing.clone());
    section("placeholderColor", colors.clone());
    section("placeholderOpacity", opacity.clone());
    section(
        "space",
        extend_scale(json!({}), &spacing, negative(&spacing)),
    );
    section("stroke", json!({ "current": "currentColor" }));
    section("strokeWidth", json!({ "0": "0", "1": "1", "2": "2" }));
    section("textColor", colors);
    section("textOpacity", opacity);
    section(
        "width",
        extend_scale(
            json!({ "auto": "auto" }),
            &spacing,
            json!({
                "1/2": "50%",
                "1/3": "33.333333%",
                "2/3": "66.666667%",
                "1/4": "25%",
                "2/4": "50%",
                "3/4": "75%",
                "1/5": "20%",
                "2/5": "40%",
                "3/5": "60%",
                "4/5": "80%",
                "1/6": "16.666667%",
                "2/6": "33.333333%",
                "3/6": "50%",
                "4/6": "66.666667%",
                "5/6": "83.333333%",
                "1/12": "8.333333%",
                "2/12": "16.666667%",
                "3/12": "25%",
                "4/12": "33.333333%",
                "5/12": "41.666667%",
                "6/12": "50%",
                "7/12": "58.333333%",
                "8/12": "66.666667%",
                "9/12": "75%",
                "10/12": "83.333333%",
                "11/12": "91.666667%",
                "full": "100%",
                "screen": "100vw",
            }),
        ),
    );
    section(
        "zIndex",
        json!({
            "auto": "auto",
            "0": "0",
            "10": "10",
            "20": "20",
            "30": "30",
            "40": "40",
            "50": "50",
        }),
    );

    section(
        "transformOrigin",
        json!({
            "center": "center",
            "top": "top",
            "top-right": "top right",
            "right": "right",
            "bottom-right": "bottom right",
            "bottom": "bottom",
            "bottom-left": "bottom left",
            "left": "left",
            "top-left": "top left",
        }),
    );
    section(
        "scale",
        json!({
            "0": "0",
            "50": ".5",
            "75": ".75",
            "90": ".9",
            "95": ".95",
            "100": "1",
            "105": "1.05",
            "110": "1.1",
            "125": "1.25",
            "150": "1.5",
        }),
    );
    section(
        "rotate",
        json!({
            "-180": "-180deg",
            "-90": "-90deg",
            "-45": "-45deg",
            "0": "0",
            "45": "45deg",
            "90": "90deg",
            "180": "180deg",
        }),
    );
    section(
        "translate",
        extend_scale(
            json!({}),
            &spacing,
            extend_scale(
                negative(&spacing),
                &json!({ "-full": "-100%", "-1/2": "-50%", "1/2": "50%" }),
                json!({ "full": "100%" }),
            ),
        ),
    );
    section(
        "skew",
        json!({
            "-12": "-12deg",
            "-6": "-6deg",
            "-3": "-3deg",
            "0": "0",
            "3": "3deg",
            "6": "6deg",
            "12": "12deg",
        }),
    );
    section(
        "transitionProperty",
        json!({
            "none": "none",
            "all": "all",
            "default": "background-color, border-color, color, fill, stroke, opacity, box-shadow, transform",
            "colors": "background-color, border-color, color, fill, stroke",
            "opacity": "opacity",
            "shadow": "box-shadow",
            "transform": "transform",
        }),
    );
    section(
        "transitionTimingFunction",
        json!({
            "linear": "linear",
            "in": "cubic-bezier(0.4, 0, 1, 1)",
            "out": "cubic-bezier(0, 0, 0.2, 1)",
            "in-out": "cubic-bezier(0.4, 0, 0.2, 1)",
        }),
    );
    let durations = numbered([75, 100, 150, 200, 300, 500, 700, 1000], |n| format!("{n}ms"));
    section("transitionDuration", durations.clone());
    section("transitionDelay", durations);

    theme
}

fn palette() -> Value {
    fn shades(hexes: [&str; 9]) -> Value {
        Value::Object(
            (1..=9)
                .zip(hexes)
                .map(|(n, hex)| ((n * 100).to_string(), Value::String(hex.to_string())))
                .collect(),
        )
    }

    json!({
        "transparent": "transparent",
        "current": "currentColor",
        "black": "#000",
        "white": "#fff",
        "gray": shades(["#f7fafc", "#edf2f7", "#e2e8f0", "#cbd5e0", "#a0aec0", "#718096", "#4a5568", "#2d3748", "#1a202c"]),
        "red": shades(["#fff5f5", "#fed7d7", "#feb2b2", "#fc8181", "#f56565", "#e53e3e", "#c53030", "#9b2c2c", "#742a2a"]),
        "orange": shades(["#fffaf0", "#feebc8", "#fbd38d", "#f6ad55", "#ed8936", "#dd6b20", "#c05621", "#9c4221", "#7b341e"]),
        "yellow": shades(["#fffff0", "#fefcbf", "#faf089", "#f6e05e", "#ecc94b", "#d69e2e", "#b7791f", "#975a16", "#744210"]),
        "green": shades(["#f0fff4", "#c6f6d5", "#9ae6b4", "#68d391", "#48bb78", "#38a169", "#2f855a", "#276749", "#22543d"]),
        "teal": shades(["#e6fffa", "#b2f5ea", "#81e6d9", "#4fd1c5", "#38b2ac", "#319795", "#2c7a7b", "#285e61", "#234e52"]),
        "blue": shades(["#ebf8ff", "#bee3f8", "#90cdf4", "#63b3ed", "#4299e1", "#3182ce", "#2b6cb0", "#2c5282", "#2a4365"]),
        "indigo": shades(["#ebf4ff", "#c3dafe", "#a3bffa", "#7f9cf5", "#667eea", "#5a67d8", "#4c51bf", "#434190", "#3c366b"]),
        "purple": shades(["#faf5ff", "#e9d8fd", "#d6bcfa", "#b794f4", "#9f7aea", "#805ad5", "#6b46c1", "#553c9a", "#44337a"]),
        "pink": shades(["#fff5f7", "#fed7e2", "#fbb6ce", "#f687b3", "#ed64a6", "#d53f8c", "#b83280", "#97266d", "#702459"]),
    })
}

fn spacing() -> Value {
    json!({
        "px": "1px",
        "0": "0",
        "1": "0.25rem",
        "2": "0.5rem",
        "3": "0.75rem",
        "4": "1rem",
        "5": "1.25rem",
        "6": "1.5rem",
        "8": "2rem",
        "10": "2.5rem",
        "12": "3rem",
        "16": "4rem",
        "20": "5rem",
        "24": "6rem",
        "32": "8rem",
        "40": "10rem",
        "48": "12rem",
        "56": "14rem",
        "64": "16rem",
    })
}

fn positions() -> Value {
    json!({
        "bottom": "bottom",
        "center": "center",
        "left": "left",
        "left-bottom": "left bottom",
        "left-top": "left top",
        "right": "right",
        "right-bottom": "right bottom",
        "right-top": "right top",
        "top": "top",
    })
}

fn grid_template(count: u32) -> Value {
    extend_scale(
        json!({ "none": "none" }),
        &numbered(1..=count, |n| format!("repeat({n}, minmax(0, 1fr))")),
        json!({}),
    )
}

fn grid_span(count: u32) -> Value {
    let spans: Map<String, Value> = (1..=count)
        .map(|n| (format!("span-{n}"), json!(format!("span {n} / span {n}"))))
        .collect();
    extend_scale(
        json!({ "auto": "auto" }),
        &Value::Object(spans),
        json!({ "span-full": "1 / -1" }),
    )
}

fn grid_lines(count: u32) -> Value {
    extend_scale(
        json!({ "auto": "auto" }),
        &numbered(1..=count, |n| n.to_string()),
        json!({}),
    )
}

/// Build a scale keyed by the stringified item.
fn numbered<T: ToString + Copy>(
    items: impl IntoIterator<Item = T>,
    value: impl Fn(T) -> String,
) -> Value {
    Value::Object(
        items
            .into_iter()
            .map(|item| (item.to_string(), Value::String(value(item))))
            .collect(),
    )
}

/// `head`, then every entry of `middle`, then `tail`.
fn extend_scale(head: Value, middle: &Value, tail: Value) -> Value {
    let mut out = match head {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for part in [middle.clone(), tail] {
        if let Value::Object(map) = part {
            out.extend(map);
        }
    }
    Value::Object(out)
}

/// Negated copy of a scale: `4: 1rem` becomes `-4: -1rem`. Zero is skipped.
fn negative(scale: &Value) -> Value {
    let Value::Object(scale) = scale else {
        return json!({});
    };
    Value::Object(
        scale
            .iter()
            .filter_map(|(key, value)| {
                let value = value.as_str()?;
                if value == "0" {
                    return None;
                }
                let negated = match value.strip_prefix('-') {
                    Some(positive) => positive.to_string(),
                    None => format!("-{value}"),
                };
                Some((format!("-{key}"), Value::String(negated)))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Map<String, Value> {
        build(&|_, value| value)
    }

    #[test]
    fn palette_shades() {
        let theme = defaults();
        assert_eq!(theme["colors"]["red"]["500"], json!("#f56565"));
        assert_eq!(theme["textColor"]["blue"]["100"], json!("#ebf8ff"));
        assert_eq!(theme["borderColor"]["default"], json!("currentColor"));
    }

    #[test]
    fn negative_spacing() {
        let theme = defaults();
        assert_eq!(theme["margin"]["-4"], json!("-1rem"));
        assert_eq!(theme["margin"]["auto"], json!("auto"));
        assert_eq!(theme["space"]["-px"], json!("-1px"));
        assert!(theme["margin"].get("-0").is_none());
        assert_eq!(theme["translate"]["-1/2"], json!("-50%"));
    }

    #[test]
    fn screens_keep_order() {
        let theme = defaults();
        let names: Vec<_> = theme["screens"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, ["sm", "md", "lg", "xl"]);
    }

    #[test]
    fn grid_scales() {
        let theme = defaults();
        assert_eq!(theme["gridTemplateColumns"]["3"], json!("repeat(3, minmax(0, 1fr))"));
        assert_eq!(theme["gridColumn"]["span-2"], json!("span 2 / span 2"));
        assert_eq!(theme["gridRowEnd"]["7"], json!("7"));
    }

    #[test]
    fn resolver_overrides_sections() {
        let theme = build(&|name, value| match name {
            "spacing" => json!({ "4": "2rem" }),
            _ => value,
        });
        assert_eq!(theme["padding"], json!({ "4": "2rem" }));
        assert_eq!(theme["margin"]["-4"], json!("-2rem"));
    }
}
