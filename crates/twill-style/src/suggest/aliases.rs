//! Hand-picked corrections for class names people reach for from plain CSS.

/// Common misspellings and their closest utility.
const ALIASES: &[(&str, &str)] = &[
    ("align-center", "items-center"),
    ("center-align", "items-center"),
    ("flex-center", "items-center / justify-center"),
    ("inline-block", "block"),
    ("display-none", "hidden"),
    ("display-inline", "inline-block"),
    ("display-flex", "flex"),
    ("border-radius", "rounded"),
    ("flex-column", "flex-col"),
    ("flex-column-reverse", "flex-col-reverse"),
    ("text-italic", "italic"),
    ("text-normal", "not-italic"),
];

/// Look up a curated correction.
pub fn alias_for(class_name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == class_name)
        .map(|(_, target)| *target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases() {
        assert_eq!(alias_for("flex-column"), Some("flex-col"));
        assert_eq!(alias_for("flex-center"), Some("items-center / justify-center"));
        assert_eq!(alias_for("flex-col"), None);
    }
}
