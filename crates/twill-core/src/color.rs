//! CSS color parsing using the `cssparser` crate.
//!
//! Colors from the theme are parsed so color utilities can split the color
//! channels from the opacity channel. Supported syntax: hex (3, 4, 6 and 8
//! digits), named colors, `transparent`, `rgb()`/`rgba()` and
//! `hsl()`/`hsla()` in both comma and space separated forms.

use cssparser::color::{parse_hash_color, parse_named_color};
use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// An sRGB color with 8-bit channels and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Rgba {
    /// Create a color from its channels.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Parse a CSS color string.
///
/// Returns `None` for anything that is not a single color (`currentColor`,
/// `inherit`, gradients, ...).
///
/// ```
/// use twill_core::color::{parse_color, Rgba};
///
/// assert_eq!(parse_color("#ef4444"), Some(Rgba::new(239, 68, 68, 1.0)));
/// assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Rgba::new(1, 2, 3, 1.0)));
/// assert_eq!(parse_color("currentColor"), None);
/// ```
pub fn parse_color(css: &str) -> Option<Rgba> {
    let mut input = ParserInput::new(css.trim());
    let mut parser = Parser::new(&mut input);

    let color = parse_color_value(&mut parser).ok()?;
    parser.expect_exhausted().ok()?;
    Some(color)
}

/// Check whether a color string carries an alpha channel of its own.
///
/// True for `rgba()`/`hsla()`, 4 and 8 digit hex, `transparent` and any
/// color whose parsed alpha is below 1. Such colors are emitted as-is by the
/// color utilities instead of being routed through an opacity variable.
pub fn has_alpha_channel(css: &str) -> bool {
    let css = css.trim();
    let lower = css.to_ascii_lowercase();
    if lower.starts_with("rgba(") || lower.starts_with("hsla(") {
        return true;
    }
    if css.starts_with('#') && (css.len() == 5 || css.len() == 9) {
        return true;
    }
    parse_color(css).is_some_and(|c| c.alpha < 1.0)
}

fn parse_color_value<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgba, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?.clone();

    match token {
        Token::Hash(ref hash) | Token::IDHash(ref hash) => {
            let (r, g, b, a) =
                parse_hash_color(hash.as_bytes()).map_err(|()| parser.new_custom_error(()))?;
            Ok(Rgba::new(r, g, b, a))
        }
        Token::Ident(ref name) => {
            if name.eq_ignore_ascii_case("transparent") {
                return Ok(Rgba::new(0, 0, 0, 0.0));
            }
            let (r, g, b) = parse_named_color(name).map_err(|()| parser.new_custom_error(()))?;
            Ok(Rgba::new(r, g, b, 1.0))
        }
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|p| {
                let r = parse_rgb_component(p)?;
                let legacy = p.try_parse(|p| p.expect_comma()).is_ok();
                let g = parse_rgb_component(p)?;
                if legacy {
                    p.expect_comma()?;
                }
                let b = parse_rgb_component(p)?;
                let a = parse_optional_alpha(p, legacy)?;
                Ok(Rgba::new(r, g, b, a))
            })
        }
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") =>
        {
            parser.parse_nested_block(|p| {
                let hue = parse_hue(p)?;
                let legacy = p.try_parse(|p| p.expect_comma()).is_ok();
                let saturation = parse_percentage(p)?;
                if legacy {
                    p.expect_comma()?;
                }
                let lightness = parse_percentage(p)?;
                let a = parse_optional_alpha(p, legacy)?;
                let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
                Ok(Rgba::new(r, g, b, a))
            })
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_rgb_component<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    let value = match parser.next()? {
        Token::Number { value, .. } => *value,
        Token::Percentage { unit_value, .. } => *unit_value * 255.0,
        _ => return Err(parser.new_custom_error(())),
    };
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value),
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("deg") => Ok(value),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_percentage<'i>(parser: &mut Parser<'i, '_>) -> Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_optional_alpha<'i>(
    parser: &mut Parser<'i, '_>,
    legacy: bool,
) -> Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    if parser.is_exhausted() {
        return Ok(1.0);
    }
    if legacy {
        parser.expect_comma()?;
    } else {
        parser.expect_delim('/')?;
    }
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Convert hsl (hue in degrees, saturation and lightness as units) to rgb.
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0) / 360.0;
    let channel = |t: f32| -> u8 {
        let m2 = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = lightness * 2.0 - m2;
        let t = t.rem_euclid(1.0);
        let v = if t * 6.0 < 1.0 {
            m1 + (m2 - m1) * t * 6.0
        } else if t * 2.0 < 1.0 {
            m2
        } else if t * 3.0 < 2.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - t) * 6.0
        } else {
            m1
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    (
        channel(hue + 1.0 / 3.0),
        channel(hue),
        channel(hue - 1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_formats() {
        assert_eq!(parse_color("#fff"), Some(Rgba::new(255, 255, 255, 1.0)));
        assert_eq!(parse_color("#ef4444"), Some(Rgba::new(239, 68, 68, 1.0)));

        let with_alpha = parse_color("#11223344").unwrap();
        assert_eq!((with_alpha.red, with_alpha.green, with_alpha.blue), (0x11, 0x22, 0x33));
        assert!(with_alpha.alpha < 1.0);
    }

    #[test]
    fn parse_functions() {
        assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Rgba::new(10, 20, 30, 1.0)));
        assert_eq!(parse_color("rgb(10 20 30 / 0.5)"), Some(Rgba::new(10, 20, 30, 0.5)));
        assert_eq!(parse_color("rgba(10, 20, 30, 0.25)"), Some(Rgba::new(10, 20, 30, 0.25)));
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Some(Rgba::new(255, 0, 0, 1.0)));
        assert_eq!(parse_color("hsl(120deg 100% 25%)"), Some(Rgba::new(0, 128, 0, 1.0)));
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_color("white"), Some(Rgba::new(255, 255, 255, 1.0)));
        assert_eq!(parse_color("transparent"), Some(Rgba::new(0, 0, 0, 0.0)));
        assert_eq!(parse_color("currentColor"), None);
        assert_eq!(parse_color("1px solid red"), None);
    }

    #[test]
    fn alpha_detection() {
        assert!(has_alpha_channel("#11223344"));
        assert!(has_alpha_channel("#1234"));
        assert!(has_alpha_channel("rgba(0, 0, 0, 1)"));
        assert!(has_alpha_channel("transparent"));
        assert!(!has_alpha_channel("#112233"));
        assert!(!has_alpha_channel("rgb(1, 2, 3)"));
        assert!(!has_alpha_channel("currentColor"));
    }
}
