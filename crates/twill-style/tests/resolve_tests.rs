//! Integration tests for class list resolution.

use serde_json::json;
use twill_style::prelude::*;

fn user_theme() -> ThemeConfig {
    ThemeConfig::with_user_theme(&json!({
        "colors": {
            "red": { "500": "#ef4444" },
            "ghost": "#11223344",
            "ink": "#112233",
        },
        "spacing": { "4": "1rem" },
    }))
    .expect("valid user theme")
}

#[test]
fn test_padding_and_important_hover_color() {
    let theme = user_theme();
    let style = resolve_class_list("p-4 hover:bg-red-500!", &theme, ResolveOptions::default()).unwrap();

    assert_eq!(
        style.into_value(),
        json!({
            "padding": "1rem",
            ":hover": {
                "--bg-opacity": "1",
                "backgroundColor": "rgba(239, 68, 68, var(--bg-opacity)) !important",
            },
        })
    );
}

#[test]
fn test_screens_merge_after_unscoped_in_rank_order() {
    let theme = ThemeConfig::tailwind_default();
    let style = resolve_class_list(
        "md:text-center text-center sm:text-center",
        &theme,
        ResolveOptions::default(),
    )
    .unwrap();

    let keys: Vec<_> = style.keys().collect();
    assert_eq!(
        keys,
        ["textAlign", "@media (min-width: 640px)", "@media (min-width: 768px)"]
    );
}

#[test]
fn test_later_tokens_win_within_a_rank() {
    let theme = ThemeConfig::tailwind_default();
    let style = resolve_class_list("lg:p-4 sm:p-4 p-4 p-2 lg:p-8", &theme, ResolveOptions::default()).unwrap();

    assert_eq!(style.get("padding"), Some(&json!("0.5rem")));
    assert_eq!(
        style.get_nested("@media (min-width: 1024px)").and_then(|m| m.get("padding")),
        Some(&json!("2rem"))
    );
    let keys: Vec<_> = style.keys().collect();
    assert_eq!(
        keys,
        ["padding", "@media (min-width: 640px)", "@media (min-width: 1024px)"]
    );
}

#[test]
fn test_screen_behind_pseudo_variant_merges_last() {
    let theme = ThemeConfig::tailwind_default();
    let style = resolve_class_list("hover:md:p-4 hover:p-2", &theme, ResolveOptions::default()).unwrap();

    let hover = style.get_nested(":hover").unwrap();
    let keys: Vec<_> = hover.keys().map(String::as_str).collect();
    assert_eq!(keys, ["padding", "@media (min-width: 768px)"]);
    assert_eq!(hover["padding"], json!("0.5rem"));
    assert_eq!(hover["@media (min-width: 768px)"], json!({ "padding": "1rem" }));
}

#[test]
fn test_stacked_variants_nest_in_order() {
    let theme = ThemeConfig::tailwind_default();
    let style = resolve_class_list("md:hover:underline", &theme, ResolveOptions::default()).unwrap();

    assert_eq!(
        style.into_value(),
        json!({ "@media (min-width: 768px)": { ":hover": { "textDecoration": "underline" } } })
    );
}

#[test]
fn test_negative_margin_round_trip() {
    let theme = user_theme();
    let engine = StyleEngine::new(&theme);

    assert_eq!(
        engine.resolve_class_list("mt-4").unwrap().into_value(),
        json!({ "marginTop": "1rem" })
    );
    assert_eq!(
        engine.resolve_class_list("-mt-4").unwrap().into_value(),
        json!({ "marginTop": "-1rem" })
    );
    assert_eq!(
        engine.resolve_class_list("sm:-mt-4!").unwrap().into_value(),
        json!({ "@media (min-width: 640px)": { "marginTop": "-1rem !important" } })
    );
}

#[test]
fn test_misplaced_negative_is_malformed() {
    let theme = ThemeConfig::tailwind_default();
    let err = resolve_class_list("-sm:mt-4", &theme, ResolveOptions::default()).unwrap_err();

    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("\"sm:-mt-4\""), "got: {err}");
}

#[test]
fn test_color_alpha_split() {
    let theme = user_theme();
    let engine = StyleEngine::new(&theme);

    assert_eq!(
        engine.resolve_class_list("bg-ghost").unwrap().into_value(),
        json!({ "backgroundColor": "#11223344" })
    );
    assert_eq!(
        engine.resolve_class_list("text-ink").unwrap().into_value(),
        json!({ "--text-opacity": "1", "color": "rgba(17, 34, 51, var(--text-opacity))" })
    );
}

#[test]
fn test_opacity_overrides_the_variable() {
    let theme = ThemeConfig::tailwind_default();
    let style = resolve_class_list("bg-white bg-opacity-50", &theme, ResolveOptions::default()).unwrap();

    assert_eq!(
        style.into_value(),
        json!({
            "--bg-opacity": "0.5",
            "backgroundColor": "rgba(255, 255, 255, var(--bg-opacity))",
        })
    );
}

#[test]
fn test_first_error_fails_the_list() {
    let theme = ThemeConfig::tailwind_default();
    let err = resolve_class_list("flex hovr:block nope", &theme, ResolveOptions::default()).unwrap_err();

    assert!(matches!(err, Error::UnknownVariant { .. }));
}

#[test]
fn test_unknown_variant_menu_lists_user_screens() {
    let theme = ThemeConfig::with_user_theme(&json!({
        "screens": { "tablet": "640px", "desktop": "1280px" },
    }))
    .unwrap();
    let err = resolve_class_list("phone:flex", &theme, ResolveOptions::default()).unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("The variant “phone:” was not found"));
    assert!(message.contains("Screen breakpoints\ntablet: / desktop:"));
    assert!(message.contains("Built-in variants\nhover:"));
}

#[test]
fn test_config_lookup_is_one_hop() {
    let theme = ThemeConfig::with_user_theme(&json!({
        "spacing": { "card": { "inner": { "x": "1rem" } } },
    }))
    .unwrap();
    let err = resolve_class_list("p-card-inner", &theme, ResolveOptions::default()).unwrap_err();

    assert!(matches!(err, Error::ConfigShape(_)));
}

#[test]
fn test_debug_logs_each_fragment() {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let theme = ThemeConfig::tailwind_default();
    tracing::subscriber::with_default(subscriber, || {
        resolve_class_list("flex", &theme, ResolveOptions::new().with_debug(true)).unwrap();
    });

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains(r#"flex {"display":"flex"}"#), "got: {output}");
}
