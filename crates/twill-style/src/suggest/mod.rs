//! Suggestions for classes that fail to resolve.
//!
//! Two modes:
//!
//! - **Config mode**, for a class that matched a table row but found no
//!   config value: every leaf of the row's theme sections is rated against
//!   the class suffix.
//! - **Vocabulary mode**, for a class that matched nothing: static class
//!   names and `key-...` stems of the dynamic rows are rated against the
//!   whole class name.
//!
//! A curated alias table is checked before either mode. Ratings use the
//! Sørensen–Dice coefficient over character bigrams.

mod aliases;

pub use aliases::alias_for;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use strsim::sorensen_dice;
use twill_core::ThemeConfig;
use twill_core::theme::{number_to_string, strip_negative};

use crate::rules::{DYNAMIC_STYLES, static_class_names};

/// A rating at or above this makes the best candidate the only suggestion.
pub const TRUMP_RATING: f64 = 0.6;

/// Config-mode candidates rated below this are dropped.
pub const MIN_CONFIG_RATING: f64 = 0.15;

/// Vocabulary-mode candidates must be rated above this.
pub const MIN_VOCABULARY_RATING: f64 = 0.25;

const MAX_CONFIG_SUGGESTIONS: usize = 20;
const MAX_VOCABULARY_SUGGESTIONS: usize = 6;

/// A suggested class with the config value it would produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub target: String,
    /// Empty in vocabulary mode.
    pub value: String,
    pub rating: f64,
}

/// The outcome of a suggestion lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Suggestions {
    /// Nothing worth suggesting.
    #[default]
    None,
    /// One authoritative answer.
    Single(String),
    /// Candidates, best first.
    Ranked(Vec<Suggestion>),
}

impl Suggestions {
    /// Number of suggested classes.
    pub fn len(&self) -> usize {
        match self {
            Suggestions::None => 0,
            Suggestions::Single(_) => 1,
            Suggestions::Ranked(list) => list.len(),
        }
    }

    /// Check if there is nothing to suggest.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Suggested class names, best first.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Suggestions::None => Vec::new(),
            Suggestions::Single(target) => vec![target.as_str()],
            Suggestions::Ranked(list) => list.iter().map(|s| s.target.as_str()).collect(),
        }
    }
}

/// What a config-mode lookup searches.
#[derive(Debug, Clone, Copy)]
pub struct ConfigQuery<'a> {
    /// Theme sections the row reads, in order.
    pub sections: &'a [&'a str],
    /// The matched table key (`bg`, `divide-x`, ...).
    pub dynamic_key: &'a str,
    /// The bare class name, sign stripped.
    pub class_name: &'a str,
    pub has_negative: bool,
}

/// Suggest replacements for an unresolvable class.
///
/// `query` selects config mode; without it the vocabulary is searched.
pub fn suggest(theme: &ThemeConfig, class_name: &str, query: Option<ConfigQuery<'_>>) -> Suggestions {
    if let Some(alias) = alias_for(class_name) {
        return Suggestions::Single(alias.to_string());
    }

    let suggestions = match query {
        Some(query) if !query.sections.is_empty() => suggest_from_config(theme, &query),
        _ => suggest_from_vocabulary(class_name),
    };
    tracing::debug!(class = class_name, count = suggestions.len(), "computed suggestions");
    suggestions
}

/// Rate every leaf of the queried sections against the class suffix.
///
/// When nothing clears [`MIN_CONFIG_RATING`], the first unrated candidates
/// are returned instead so the user still sees what the row accepts.
pub fn suggest_from_config(theme: &ThemeConfig, query: &ConfigQuery<'_>) -> Suggestions {
    let suffix = query
        .class_name
        .strip_prefix(query.dynamic_key)
        .map(|rest| rest.strip_prefix('-').unwrap_or(rest))
        .unwrap_or(query.class_name);
    let sign = if query.has_negative { "-" } else { "" };
    let input = format!("-{sign}{suffix}");

    let mut candidates: IndexMap<String, Suggestion> = IndexMap::new();
    for section in query.sections {
        let Some(tree) = theme.section(section) else {
            continue;
        };
        let mut leaves = Vec::new();
        flatten(tree, "", &mut leaves);

        for (path, value) in leaves {
            if path.starts_with('-') != query.has_negative {
                continue;
            }
            let candidate = Suggestion {
                target: suggestion_target(query.dynamic_key, &path),
                value,
                rating: sorensen_dice(&format!("-{path}"), &input),
            };
            match candidates.get_mut(&candidate.target) {
                Some(existing) if existing.rating >= candidate.rating => {}
                Some(existing) => *existing = candidate,
                None => {
                    candidates.insert(candidate.target.clone(), candidate);
                }
            }
        }
    }

    let candidates: Vec<Suggestion> = candidates.into_values().collect();
    let rated: Vec<Suggestion> = candidates
        .iter()
        .filter(|c| c.rating >= MIN_CONFIG_RATING)
        .cloned()
        .collect();

    if rated.is_empty() {
        let unrated: Vec<Suggestion> = candidates
            .into_iter()
            .take(MAX_CONFIG_SUGGESTIONS)
            .map(|c| Suggestion { rating: 0.0, ..c })
            .collect();
        return if unrated.is_empty() {
            Suggestions::None
        } else {
            Suggestions::Ranked(unrated)
        };
    }

    rank(rated, MAX_CONFIG_SUGGESTIONS)
}

/// Rate the static class names and dynamic stems against the class name.
pub fn suggest_from_vocabulary(class_name: &str) -> Suggestions {
    let stems = DYNAMIC_STYLES.iter().map(|row| format!("{}-...", row.key));
    let candidates: Vec<Suggestion> = static_class_names()
        .map(str::to_string)
        .chain(stems)
        .map(|target| Suggestion {
            rating: sorensen_dice(class_name, &target),
            target,
            value: String::new(),
        })
        .filter(|c| c.rating > MIN_VOCABULARY_RATING)
        .collect();

    rank(candidates, MAX_VOCABULARY_SUGGESTIONS)
}

/// Sort candidates best first; a best rating of at least [`TRUMP_RATING`]
/// wins outright.
pub fn rank(mut candidates: Vec<Suggestion>, limit: usize) -> Suggestions {
    // Stable, so equal ratings keep vocabulary order
    candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    match candidates.first() {
        None => Suggestions::None,
        Some(best) if best.rating >= TRUMP_RATING => Suggestions::Single(best.target.clone()),
        Some(_) => {
            candidates.truncate(limit);
            Suggestions::Ranked(candidates)
        }
    }
}

/// Turn a flattened config path into the class that would select it.
fn suggestion_target(dynamic_key: &str, path: &str) -> String {
    let path = if path == "default" {
        ""
    } else {
        path.strip_suffix("-default").unwrap_or(path)
    };
    let bare = strip_negative(path);
    let sign = if bare.len() != path.len() { "-" } else { "" };

    let joined = [dynamic_key, bare]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{sign}{joined}")
}

/// Collect `(dash-joined path, value)` for every leaf. Arrays are leaves.
fn flatten(value: &Value, prefix: &str, out: &mut Vec<(String, String)>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}-{key}")
        };
        match child {
            Value::Object(_) => flatten(child, &path, out),
            Value::String(s) => out.push((path, s.clone())),
            Value::Number(n) => out.push((path, number_to_string(n))),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push((path, joined));
            }
            Value::Bool(_) | Value::Null => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(target: &str, rating: f64) -> Suggestion {
        Suggestion {
            target: target.into(),
            value: String::new(),
            rating,
        }
    }

    fn theme() -> ThemeConfig {
        ThemeConfig::from_value(json!({
            "spacing": { "1": "0.25rem", "4": "1rem", "5": "1.25rem" },
            "margin": { "4": "1rem", "-4": "-1rem", "auto": "auto" },
            "colors": { "red": { "100": "#fee", "500": "#ef4444" } },
            "borderRadius": { "default": "0.25rem", "lg": "0.5rem" },
        }))
        .unwrap()
    }

    #[test]
    fn trump_threshold_is_inclusive() {
        assert_eq!(
            rank(vec![candidate("p-4", 0.6)], 20),
            Suggestions::Single("p-4".into())
        );
        assert_eq!(
            rank(vec![candidate("p-4", 0.59)], 20),
            Suggestions::Ranked(vec![candidate("p-4", 0.59)])
        );
    }

    #[test]
    fn rank_orders_and_truncates() {
        let ranked = rank(
            vec![candidate("a", 0.2), candidate("b", 0.4), candidate("c", 0.3)],
            2,
        );
        assert_eq!(ranked.targets(), vec!["b", "c"]);
        assert_eq!(rank(Vec::new(), 2), Suggestions::None);
    }

    #[test]
    fn config_mode_finds_close_color() {
        let query = ConfigQuery {
            sections: &["colors"],
            dynamic_key: "bg",
            class_name: "bg-red-5000",
            has_negative: false,
        };
        assert_eq!(
            suggest_from_config(&theme(), &query),
            Suggestions::Single("bg-red-500".into())
        );
    }

    #[test]
    fn config_mode_respects_sign() {
        let query = ConfigQuery {
            sections: &["margin"],
            dynamic_key: "mt",
            class_name: "mt-44",
            has_negative: true,
        };
        let suggestions = suggest_from_config(&theme(), &query);
        assert_eq!(suggestions.targets(), vec!["-mt-4"]);
    }

    #[test]
    fn config_mode_default_targets() {
        let query = ConfigQuery {
            sections: &["borderRadius"],
            dynamic_key: "rounded",
            class_name: "rounded-xxl",
            has_negative: false,
        };
        let Suggestions::Ranked(list) = suggest_from_config(&theme(), &query) else {
            panic!("expected a ranked list");
        };
        let targets: Vec<_> = list.iter().map(|s| s.target.as_str()).collect();
        assert!(targets.contains(&"rounded"));
        assert!(targets.contains(&"rounded-lg"));
    }

    #[test]
    fn vocabulary_mode() {
        assert_eq!(
            suggest_from_vocabulary("flex-wrapp"),
            Suggestions::Single("flex-wrap".into())
        );
        assert_eq!(suggest_from_vocabulary("zzzzzz"), Suggestions::None);
    }

    #[test]
    fn aliases_short_circuit() {
        assert_eq!(
            suggest(&theme(), "display-none", None),
            Suggestions::Single("hidden".into())
        );
    }

    #[test]
    fn targets_from_paths() {
        assert_eq!(suggestion_target("rounded", "default"), "rounded");
        assert_eq!(suggestion_target("border", "gray-default"), "border-gray");
        assert_eq!(suggestion_target("mt", "-4"), "-mt-4");
        assert_eq!(suggestion_target("", "red-500"), "red-500");
    }
}
