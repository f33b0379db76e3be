//! Deciding which table, plugin or user rule handles a class.

use twill_core::StyleObject;

use super::dynamic_styles::{DynamicRow, longest_dynamic_match};
use super::static_styles::static_entry;
use crate::plugins::{CorePlugin, UserPlugins};

/// The kind of handler a class was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Static,
    Dynamic,
    CorePlugin,
    UserPlugin,
    Unmatched,
}

/// Where a bare class name resolves from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// An exact static table entry.
    Static {
        key: &'static str,
        style: &'static StyleObject,
    },
    /// A dynamic row with config descriptors.
    Dynamic { row: &'static DynamicRow },
    /// A dynamic row handled by a core plugin.
    CorePlugin {
        row: &'static DynamicRow,
        plugin: CorePlugin,
    },
    /// A rule from the host's user plugins.
    UserPlugin,
    Unmatched,
}

impl Classification {
    pub fn kind(&self) -> ClassKind {
        match self {
            Classification::Static { .. } => ClassKind::Static,
            Classification::Dynamic { .. } => ClassKind::Dynamic,
            Classification::CorePlugin { .. } => ClassKind::CorePlugin,
            Classification::UserPlugin => ClassKind::UserPlugin,
            Classification::Unmatched => ClassKind::Unmatched,
        }
    }

    /// The matched table key, for static and dynamic matches.
    pub fn table_key(&self) -> Option<&'static str> {
        match self {
            Classification::Static { key, .. } => Some(*key),
            Classification::Dynamic { row } | Classification::CorePlugin { row, .. } => Some(row.key),
            Classification::UserPlugin | Classification::Unmatched => None,
        }
    }
}

/// Classify a bare class name against the built-in tables.
///
/// Static entries win, then the longest dynamic key that equals the class
/// or prefixes it followed by `-`.
///
/// ```
/// use twill_style::rules::{ClassKind, classify};
///
/// assert_eq!(classify("flex").kind(), ClassKind::Static);
/// assert_eq!(classify("flex-1").table_key(), Some("flex"));
/// assert_eq!(classify("border-t-2").table_key(), Some("border-t"));
/// assert_eq!(classify("border-red-500").kind(), ClassKind::CorePlugin);
/// assert_eq!(classify("nope").kind(), ClassKind::Unmatched);
/// ```
pub fn classify(class_name: &str) -> Classification {
    classify_with_plugins(class_name, None)
}

/// Classify a bare class name, consulting user plugins when no table
/// matches.
pub fn classify_with_plugins(class_name: &str, plugins: Option<&UserPlugins>) -> Classification {
    let classification = if let Some((key, style)) = static_entry(class_name) {
        Classification::Static { key, style }
    } else if let Some(row) = longest_dynamic_match(class_name) {
        match row.plugin {
            Some(plugin) => Classification::CorePlugin { row, plugin },
            None => Classification::Dynamic { row },
        }
    } else if plugins.is_some_and(|plugins| plugins.matches(class_name)) {
        Classification::UserPlugin
    } else {
        Classification::Unmatched
    };

    tracing::debug!(
        class = class_name,
        kind = ?classification.kind(),
        key = ?classification.table_key(),
        "classified"
    );
    classification
}
