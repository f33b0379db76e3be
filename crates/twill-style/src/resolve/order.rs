//! Ordering tokens by screen.

use twill_core::ThemeConfig;

/// Stable-sort tokens by the rank of the first screen among their variants.
///
/// Tokens without a screen variant keep their place at the front, so
/// responsive styles are merged after the unscoped ones and in ascending
/// breakpoint order. Equal ranks keep their input order.
///
/// ```
/// use twill_core::ThemeConfig;
/// use twill_style::resolve::order_by_screens;
///
/// let theme = ThemeConfig::tailwind_default();
/// let ordered = order_by_screens(vec!["lg:p-4", "sm:p-4", "p-4", "hover:p-2"], &theme);
/// assert_eq!(ordered, ["p-4", "hover:p-2", "sm:p-4", "lg:p-4"]);
/// ```
pub fn order_by_screens<'a>(mut tokens: Vec<&'a str>, theme: &ThemeConfig) -> Vec<&'a str> {
    tokens.sort_by_key(|token| screen_rank(token, theme));
    tokens
}

fn screen_rank(token: &str, theme: &ThemeConfig) -> Option<usize> {
    let (variants, _) = token.rsplit_once(':')?;
    variants.split(':').find_map(|variant| theme.screen_rank(variant))
}
