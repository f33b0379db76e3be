//! Variant validation.

use twill_core::ThemeConfig;

use super::stringify_screen;
use crate::{Error, Result};

/// Built-in variants and their selectors, in menu order.
pub const BUILTIN_VARIANTS: &[(&str, &str)] = &[
    ("hover", ":hover"),
    ("focus", ":focus"),
    ("active", ":active"),
    ("visited", ":visited"),
    ("disabled", ":disabled"),
    ("first", ":first-child"),
    ("last", ":last-child"),
    ("odd", ":nth-child(odd)"),
    ("even", ":nth-child(even)"),
    // Needs `group` on an ancestor
    ("group-hover", ".group:hover &"),
    ("group-focus", ".group:focus &"),
    ("focus-within", ":focus-within"),
    ("before", ":before"),
    ("after", ":after"),
    ("hocus", ":hover, :focus"),
    ("link", ":link"),
    ("target", ":target"),
    ("focus-visible", ":focus-visible"),
    ("checked", ":checked"),
    ("not-checked", ":not(:checked)"),
    ("default", ":default"),
    ("enabled", ":enabled"),
    ("indeterminate", ":indeterminate"),
    ("invalid", ":invalid"),
    ("valid", ":valid"),
    ("optional", ":optional"),
    ("required", ":required"),
    ("placeholder-shown", ":placeholder-shown"),
    ("read-only", ":read-only"),
    ("read-write", ":read-write"),
    ("not-first", ":not(:first-child)"),
    ("not-last", ":not(:last-child)"),
    ("not-only-child", ":not(:only-child)"),
    ("only-child", ":only-child"),
    ("only-of-type", ":only-of-type"),
    ("group-hocus", ".group:hover &, .group:focus &"),
    ("group-active", ".group:active &"),
    ("group-visited", ".group:visited &"),
];

/// A validated variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// A theme breakpoint, rendered as a media query.
    Screen { name: String, query: String },
    /// A built-in pseudo variant.
    Pseudo {
        name: &'static str,
        selector: &'static str,
    },
}

impl Variant {
    /// The variant name as written in the class.
    pub fn name(&self) -> &str {
        match self {
            Variant::Screen { name, .. } => name,
            Variant::Pseudo { name, .. } => name,
        }
    }

    /// The key the variant's styles are nested under.
    ///
    /// With `sassy`, every pseudo selector that starts a selector list item
    /// gets a leading `&`.
    pub fn to_selector(&self, sassy: bool) -> String {
        match self {
            Variant::Screen { query, .. } => query.clone(),
            Variant::Pseudo { selector, .. } if sassy => sassy_selector(selector),
            Variant::Pseudo { selector, .. } => selector.to_string(),
        }
    }
}

/// Look up a built-in variant's selector.
pub fn builtin_variant(name: &str) -> Option<&'static str> {
    BUILTIN_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == name)
        .map(|(_, selector)| *selector)
}

/// Validate a variant name against the theme screens, then the built-ins.
///
/// ```
/// use twill_core::ThemeConfig;
/// use twill_style::selector::validate_variant;
///
/// let theme = ThemeConfig::tailwind_default();
/// let md = validate_variant("md", &theme).unwrap();
/// assert_eq!(md.to_selector(false), "@media (min-width: 768px)");
///
/// let hocus = validate_variant("hocus", &theme).unwrap();
/// assert_eq!(hocus.to_selector(true), "&:hover, &:focus");
///
/// assert!(validate_variant("hovr", &theme).is_err());
/// ```
pub fn validate_variant(name: &str, theme: &ThemeConfig) -> Result<Variant> {
    if let Some(query) = stringify_screen(theme, name)? {
        return Ok(Variant::Screen {
            name: name.to_string(),
            query,
        });
    }

    if let Some(&(name, selector)) = BUILTIN_VARIANTS.iter().find(|(variant, _)| *variant == name) {
        return Ok(Variant::Pseudo { name, selector });
    }

    let screens = theme.screen_names().into_iter().map(str::to_string).collect();
    Err(Error::unknown_variant(name, screens))
}

/// Validate every variant of a token and render their selectors, outermost
/// first.
pub fn validate_variants(names: &[String], theme: &ThemeConfig, sassy: bool) -> Result<Vec<String>> {
    names
        .iter()
        .map(|name| validate_variant(name, theme).map(|variant| variant.to_selector(sassy)))
        .collect()
}

/// Prefix `:` with `&` at the start of the selector and after each space.
fn sassy_selector(selector: &str) -> String {
    let mut out = String::with_capacity(selector.len() + 2);
    let mut previous = None;
    for ch in selector.chars() {
        if ch == ':' && matches!(previous, None | Some(' ')) {
            out.push('&');
        }
        out.push(ch);
        previous = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn screens_win_over_builtins() {
        let theme = ThemeConfig::from_value(json!({ "screens": { "first": "100px" } })).unwrap();
        let variant = validate_variant("first", &theme).unwrap();
        assert_eq!(variant.to_selector(false), "@media (min-width: 100px)");
        assert_eq!(variant.name(), "first");
    }

    #[test]
    fn sassy_rewrites_leading_pseudos_only() {
        assert_eq!(sassy_selector(":hover"), "&:hover");
        assert_eq!(sassy_selector(":hover, :focus"), "&:hover, &:focus");
        assert_eq!(sassy_selector(".group:hover &"), ".group:hover &");
        assert_eq!(sassy_selector(":not(:checked)"), "&:not(:checked)");
    }

    #[test]
    fn screens_are_not_sassified() {
        let theme = ThemeConfig::tailwind_default();
        let variant = validate_variant("sm", &theme).unwrap();
        assert_eq!(variant.to_selector(true), "@media (min-width: 640px)");
    }

    #[test]
    fn unknown_variant_lists_screens() {
        let theme = ThemeConfig::tailwind_default();
        let err = validate_variant("hovr", &theme).unwrap_err();
        match err {
            Error::UnknownVariant { variant, screens } => {
                assert_eq!(variant, "hovr");
                assert_eq!(screens, ["sm", "md", "lg", "xl"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validates_in_order() {
        let theme = ThemeConfig::tailwind_default();
        let selectors =
            validate_variants(&["md".into(), "group-hover".into()], &theme, false).unwrap();
        assert_eq!(selectors, ["@media (min-width: 768px)", ".group:hover &"]);
        assert_eq!(builtin_variant("odd"), Some(":nth-child(odd)"));
    }
}
