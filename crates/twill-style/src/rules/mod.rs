//! Utility tables and class classification.

mod classify;
mod dynamic_styles;
mod static_styles;

pub use classify::{ClassKind, Classification, classify, classify_with_plugins};
pub use dynamic_styles::{DYNAMIC_STYLES, Descriptor, DynamicRow, longest_dynamic_match};
pub use static_styles::{SIBLINGS, static_class_names, static_entry, static_style};
