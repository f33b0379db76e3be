//! Variant selectors: built-in pseudo variants and theme screens.

mod screen;
mod variant;

pub(crate) use screen::min_width;
pub use screen::stringify_screen;
pub use variant::{BUILTIN_VARIANTS, Variant, builtin_variant, validate_variant, validate_variants};
