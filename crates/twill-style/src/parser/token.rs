//! Splits a raw class token into variants, sign, importance and class name.
//!
//! Splitting happens in a fixed order: variant prefixes first (they are
//! anchored at the start of the token), then a leading `-`, then a trailing
//! `!`. Variant names are only collected here; they are validated against
//! the theme by [`crate::selector`].

use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

static VARIANT_PREFIX: OnceLock<Regex> = OnceLock::new();

fn variant_prefix() -> &'static Regex {
    VARIANT_PREFIX.get_or_init(|| Regex::new(r"^([a-z0-9][a-z0-9_-]*):").expect("valid variant regex"))
}

/// The semantic pieces of one class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pieces {
    /// The token as written.
    pub raw: String,
    /// Variant names, outermost first.
    pub variants: Vec<String>,
    pub has_negative: bool,
    pub has_important: bool,
    /// The bare class name, without variants, sign or `!`.
    pub class_name: String,
    /// The token with only its variants removed (`-mt-4!`).
    pub class_name_raw_no_variants: String,
}

impl Pieces {
    /// `"-"` for negative classes, otherwise empty.
    pub fn negative(&self) -> &'static str {
        if self.has_negative { "-" } else { "" }
    }

    /// `" !important"` for important classes, otherwise empty.
    pub fn important(&self) -> &'static str {
        if self.has_important { " !important" } else { "" }
    }

    /// Check if any variant prefix was used.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Split a raw token into its [`Pieces`].
///
/// The class name may come back empty (`hover:`); the pipeline reports that
/// once the variants have been validated. Markers that are still present
/// after one pass (`--p-4`, `p-4!!`, a variant after the sign) are rejected,
/// so splitting never leaves anything for a second pass to strip.
///
/// ```
/// use twill_style::parser::split_token;
///
/// let pieces = split_token("md:hover:-mt-4!").unwrap();
/// assert_eq!(pieces.variants, ["md", "hover"]);
/// assert!(pieces.has_negative && pieces.has_important);
/// assert_eq!(pieces.class_name, "mt-4");
/// assert_eq!(pieces.class_name_raw_no_variants, "-mt-4!");
/// ```
pub fn split_token(raw: &str) -> Result<Pieces> {
    let mut rest = raw;
    let mut variants = Vec::new();
    while let Some(captures) = variant_prefix().captures(rest) {
        variants.push(captures[1].to_string());
        rest = &rest[captures[0].len()..];
    }
    let class_name_raw_no_variants = rest.to_string();

    let (has_negative, rest) = match rest.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, rest),
    };
    let (has_important, class_name) = match rest.strip_suffix('!') {
        Some(stripped) => (true, stripped),
        None => (false, rest),
    };

    check_leftovers(raw, class_name, has_negative, has_important)?;
    tracing::trace!(token = raw, class = class_name, ?variants, "split token");

    Ok(Pieces {
        raw: raw.to_string(),
        variants,
        has_negative,
        has_important,
        class_name: class_name.to_string(),
        class_name_raw_no_variants,
    })
}

fn check_leftovers(raw: &str, class_name: &str, has_negative: bool, has_important: bool) -> Result<()> {
    if let Some((prefix, bare)) = class_name.rsplit_once(':') {
        if has_negative && variant_prefix().is_match(&format!("{prefix}:")) {
            let bang = if has_important { "!" } else { "" };
            return Err(Error::malformed(
                raw,
                format!("The negative in \"{raw}\" must come after the variants: \"{prefix}:-{bare}{bang}\""),
            ));
        }
        return Err(Error::malformed(
            raw,
            format!("\"{raw}\" has a variant that can't be read, variants are lowercase and end with \":\""),
        ));
    }
    if class_name.starts_with('-') {
        return Err(Error::malformed(raw, format!("\"{raw}\" can only have one negative sign")));
    }
    if class_name.ends_with('!') {
        return Err(Error::malformed(raw, format!("\"{raw}\" can only have one \"!\" at the end")));
    }
    Ok(())
}
