//! The color/opacity split shared by the color utilities.

use twill_core::StyleObject;
use twill_core::color::{has_alpha_channel, parse_color};

/// Emit a color property whose opacity can be overridden separately.
///
/// An opaque color becomes `rgba(r, g, b, var(<variable>))` with the
/// variable initialized to `1`, so an `*-opacity-*` utility only has to set
/// the variable. Colors that carry their own alpha, and values that aren't
/// plain colors (`currentColor`, gradients), are emitted as-is.
///
/// ```
/// use twill_style::plugins::with_alpha;
///
/// let style = with_alpha("#ef4444", "backgroundColor", "--bg-opacity", "");
/// assert_eq!(
///     style.to_string(),
///     r#"{"--bg-opacity":"1","backgroundColor":"rgba(239, 68, 68, var(--bg-opacity))"}"#
/// );
///
/// let style = with_alpha("#11223344", "backgroundColor", "--bg-opacity", "");
/// assert_eq!(style.to_string(), r##"{"backgroundColor":"#11223344"}"##);
/// ```
pub fn with_alpha(color: &str, property: &str, variable: &str, important: &str) -> StyleObject {
    let direct = || StyleObject::new().with(property, format!("{color}{important}"));

    if has_alpha_channel(color) {
        return direct();
    }
    let Some(rgba) = parse_color(color) else {
        return direct();
    };

    StyleObject::new().with(variable, "1").with(
        property,
        format!(
            "rgba({}, {}, {}, var({variable})){important}",
            rgba.red, rgba.green, rgba.blue
        ),
    )
}
