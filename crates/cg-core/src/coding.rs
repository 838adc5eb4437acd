//! Coded clinical concepts and code-list filters

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// One coded concept: coding system URI, code and human label.
///
/// Ordering is `(system, code, display)`, which is the order rendered SQL
/// value lists are emitted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coding {
    #[serde(default)]
    pub system: String,
    pub code: String,
    #[serde(default)]
    pub display: String,
}

impl Coding {
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: display.into(),
        }
    }

    /// Lower-cased `"<code> <display>"`, the text search terms match against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.code, self.display).to_lowercase()
    }

    /// True when any term occurs in [`search_text`](Self::search_text), ignoring case.
    pub fn matches_any<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        let haystack = self.search_text();
        terms
            .iter()
            .any(|term| haystack.contains(&term.as_ref().to_lowercase()))
    }
}

/// Keep the entries of `standard` whose code is in `codes`, in `standard` order.
pub fn filter_by_codes<I, S>(standard: &[Coding], codes: I) -> Vec<Coding>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keep: HashSet<String> = codes.into_iter().map(|c| c.as_ref().to_string()).collect();
    standard
        .iter()
        .filter(|c| keep.contains(&c.code))
        .cloned()
        .collect()
}

/// [`filter_by_codes`] with the keep-list given as codings; only their codes matter.
pub fn filter_by_codings(standard: &[Coding], keep: &[Coding]) -> Vec<Coding> {
    filter_by_codes(standard, keep.iter().map(|c| c.code.as_str()))
}

/// Remove every item of `exclude` from `input`, preserving order.
pub fn exclude_items<T: PartialEq + Clone>(input: &[T], exclude: &[T]) -> Vec<T> {
    input
        .iter()
        .filter(|item| !exclude.contains(item))
        .cloned()
        .collect()
}

/// Sorted, de-duplicated copy of `items`.
pub fn sorted_unique<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    items.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
#[path = "coding_test.rs"]
mod tests;
