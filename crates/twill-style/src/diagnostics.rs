//! Diagnostics: where resolution failures are reported, and how they read.
//!
//! The pipeline never prints. Every error it returns is first handed to a
//! [`Diagnostics`] sink exactly once; hosts pick the sink.

use parking_lot::Mutex;

use crate::selector::BUILTIN_VARIANTS;
use crate::suggest::{Suggestion, Suggestions};

/// Suggestions wrap onto a new line once a line passes this many characters.
const MAX_LINE_LENGTH: usize = 60;

/// Items per line in the variant menu.
const VARIANTS_PER_LINE: usize = 6;

/// Context for a failed lookup that produced suggestions.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionReport<'a> {
    /// The class as written, without variants.
    pub class_name: &'a str,
    pub suggestions: &'a Suggestions,
}

/// A sink for resolution diagnostics.
pub trait Diagnostics: Send + Sync {
    /// Report a terminal error, already formatted.
    fn report_error(&self, message: &str);

    /// Report the suggestions computed for an unresolvable class.
    ///
    /// Called before the matching [`report_error`](Self::report_error).
    fn report_suggestions(&self, report: &SuggestionReport<'_>);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report_error(&self, message: &str) {
        tracing::error!(target: "twill", "{message}");
    }

    fn report_suggestions(&self, report: &SuggestionReport<'_>) {
        tracing::warn!(
            target: "twill",
            class = report.class_name,
            count = report.suggestions.len(),
            "suggestions available"
        );
    }
}

/// Stores diagnostics in memory for hosts that batch reports.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    errors: Mutex<Vec<String>>,
    suggestions: Mutex<Vec<(String, Suggestions)>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors reported so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    /// Suggestion reports so far, as `(class name, suggestions)` pairs.
    pub fn suggestions(&self) -> Vec<(String, Suggestions)> {
        self.suggestions.lock().clone()
    }

    /// Drop everything collected.
    pub fn clear(&self) {
        self.errors.lock().clear();
        self.suggestions.lock().clear();
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report_error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }

    fn report_suggestions(&self, report: &SuggestionReport<'_>) {
        self.suggestions
            .lock()
            .push((report.class_name.to_string(), report.suggestions.clone()));
    }
}

/// Render the not-found message with its suggestion text.
pub fn format_not_found(class_name: &str, suggestions: &Suggestions) -> String {
    let subject = if class_name.is_empty() {
        "Class"
    } else {
        class_name
    };
    let not_found = format!("{subject} was not found");

    match suggestions {
        Suggestions::None => not_found,
        Suggestions::Single(target) => format!("{not_found}\n\nDid you mean {target}?"),
        Suggestions::Ranked(list) if list.len() == 1 => {
            format!("{not_found}\n\nDid you mean {}?", list[0].target)
        }
        Suggestions::Ranked(list) => format!(
            "{not_found}\n\nTry one of these classes:\n{}",
            format_suggestions(list)
        ),
    }
}

/// Render a suggestion list as `target [value] / target [value]`, wrapping
/// once a line's targets and values pass 60 characters.
pub fn format_suggestions(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    let mut line_length = 0;

    for (index, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&suggestion.target);
        if !suggestion.value.is_empty() {
            out.push_str(&format!(" [{}]", suggestion.value));
        }

        line_length += suggestion.target.len() + suggestion.value.len();
        if line_length > MAX_LINE_LENGTH {
            out.push('\n');
            line_length = 0;
        } else if index + 1 != suggestions.len() {
            out.push_str(" / ");
        }
    }

    out.trim_end().to_string()
}

/// Render the unknown-variant message with the full menu of legal variants.
pub fn format_unknown_variant(variant: &str, screens: &[String]) -> String {
    let mut out = format!("The variant “{variant}:” was not found");

    if !screens.is_empty() {
        out.push_str("\n\nScreen breakpoints\n");
        out.push_str(&format_menu(screens.iter().map(String::as_str)));
    }

    out.push_str("\n\nBuilt-in variants\n");
    out.push_str(&format_menu(BUILTIN_VARIANTS.iter().map(|(name, _)| *name)));
    out
}

fn format_menu<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<String> = names.map(|name| format!("{name}:")).collect();
    names
        .chunks(VARIANTS_PER_LINE)
        .map(|line| line.join(" / "))
        .collect::<Vec<_>>()
        .join("\n")
}
