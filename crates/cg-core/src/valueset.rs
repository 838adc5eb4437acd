//! FHIR ValueSet documents and their conversion to code lists
//!
//! Two document shapes are supported:
//!
//! - `compose.include[].concept[]`: explicit code lists per include rule, as
//!   authored in VSAC.
//! - `expansion.contains[]`: a pre-expanded flat list from a terminology server.
//!
//! Members this crate does not model are kept in `extra` maps so that a
//! document read from disk and written back keeps its metadata.

use crate::coding::Coding;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A ValueSet resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose: Option<Compose>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion: Option<Expansion>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `ValueSet.compose`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compose {
    #[serde(default)]
    pub include: Vec<Include>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `ValueSet.compose.include[]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Include {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<Concept>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `ValueSet.compose.include[].concept[]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub code: String,

    #[serde(default)]
    pub display: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `ValueSet.expansion`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    #[serde(default)]
    pub contains: Vec<ContainsEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `ValueSet.expansion.contains[]`
///
/// Abstract grouping entries carry no `code` and may nest further entries
/// under their own `contains`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<ContainsEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContainsEntry {
    /// Entry with a code, as a terminology server lists it.
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            display: Some(display.into()),
            ..Self::default()
        }
    }

    /// The entry as a coding; `None` for a code-less grouping entry.
    pub fn coding(&self) -> Option<Coding> {
        let code = self.code.as_ref()?;
        Some(Coding::new(
            self.system.clone().unwrap_or_default(),
            code.clone(),
            self.display.clone().unwrap_or_default(),
        ))
    }

    /// This entry and every nested entry that has a code, depth first.
    ///
    /// Returned entries are copies without their nested `contains`.
    fn coded_entries(&self, label: &str, out: &mut Vec<ContainsEntry>) {
        if self.code.is_some() {
            out.push(ContainsEntry {
                contains: Vec::new(),
                ..self.clone()
            });
        } else {
            log::debug!(
                "ValueSet '{}': skipping expansion entry without code ({})",
                label,
                self.display.as_deref().unwrap_or("no display")
            );
        }
        for nested in &self.contains {
            nested.coded_entries(label, out);
        }
    }
}

/// Contents of a value set JSON file: one document, or a list as returned by the VSAC API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSetFile {
    Many(Vec<ValueSet>),
    One(ValueSet),
}

impl ValueSetFile {
    /// Normalize to a list of documents.
    pub fn into_vec(self) -> Vec<ValueSet> {
        match self {
            ValueSetFile::Many(list) => list,
            ValueSetFile::One(vs) => vec![vs],
        }
    }
}

impl From<Vec<ValueSet>> for ValueSetFile {
    fn from(list: Vec<ValueSet>) -> Self {
        ValueSetFile::Many(list)
    }
}

impl ValueSet {
    /// Name used in log messages: `name`, then `id`, then `url`.
    pub fn label(&self) -> &str {
        ["name", "id", "url"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
            .unwrap_or("<unnamed>")
    }

    /// Codes listed explicitly under `compose.include[].concept`.
    ///
    /// Include rules without a `concept` list (value set references, filters)
    /// are skipped; nested value sets are never resolved. A document without
    /// `compose` yields no codes.
    pub fn compose_codings(&self) -> Vec<Coding> {
        let Some(compose) = &self.compose else {
            log::warn!(
                "ValueSet '{}' has no compose section (extension-only?), no codes parsed",
                self.label()
            );
            return Vec::new();
        };

        let mut parsed = Vec::new();
        for include in &compose.include {
            let Some(concepts) = &include.concept else {
                log::debug!(
                    "ValueSet '{}': skipping include without concept list ({})",
                    self.label(),
                    include.system.as_deref().unwrap_or("no system")
                );
                continue;
            };
            let system = include.system.clone().unwrap_or_default();
            parsed.extend(
                concepts
                    .iter()
                    .map(|c| Coding::new(system.clone(), c.code.clone(), c.display.clone())),
            );
        }
        parsed
    }

    /// Every coded entry of `expansion.contains`, nested entries included.
    ///
    /// Grouping entries without a code are skipped.
    pub fn expansion_codings(&self) -> Vec<Coding> {
        self.expansion_entries()
            .iter()
            .filter_map(ContainsEntry::coding)
            .collect()
    }

    /// Flattened coded entries of `expansion.contains`, with their extra members.
    pub fn expansion_entries(&self) -> Vec<ContainsEntry> {
        let Some(expansion) = &self.expansion else {
            log::warn!(
                "ValueSet '{}' has no expansion section, no codes parsed",
                self.label()
            );
            return Vec::new();
        };
        let mut entries = Vec::new();
        for entry in &expansion.contains {
            entry.coded_entries(self.label(), &mut entries);
        }
        entries
    }
}

/// Keep expansion entries matching any search term, merged into one document.
///
/// Each coded entry of every document, nested ones included, is matched
/// case-insensitively against `"<code> <display>"`. Matched entries keep their
/// extra members; grouping entries are dropped. Matches from all documents replace the
/// `expansion.contains` of a copy of the first document, and that single
/// document is returned in a one-element list. Empty input gives an empty list.
pub fn filter_expansion<S: AsRef<str>>(valuesets: &[ValueSet], terms: &[S]) -> Vec<ValueSet> {
    let Some(first) = valuesets.first() else {
        return Vec::new();
    };

    let matches: Vec<ContainsEntry> = valuesets
        .iter()
        .flat_map(ValueSet::expansion_entries)
        .filter(|entry| entry.coding().is_some_and(|c| c.matches_any(terms)))
        .collect();

    let mut filtered = first.clone();
    let expansion = filtered.expansion.get_or_insert_with(Expansion::default);
    expansion.contains = matches;
    vec![filtered]
}

#[cfg(test)]
#[path = "valueset_test.rs"]
mod tests;
