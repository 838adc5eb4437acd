//! Naming conventions for generated tables and views
//!
//! Every generated object is named `<prefix>__<role>[_<suffix>]_<table>`,
//! e.g. `glioma__cohort_casedef` or `glioma__cube_patient_casedef`. All
//! functions here are pure and take the study prefix from a [`Naming`] value.

use crate::newtype_string::define_newtype_string;
use crate::table_name::TableName;
use std::collections::BTreeSet;
use std::fmt;

/// Prefix used when a study does not configure its own.
pub const DEFAULT_PREFIX: &str = "glioma";

define_newtype_string! {
    /// Study prefix placed in front of every generated name (e.g. `glioma`).
    pub struct StudyPrefix;
}

/// Role keyword embedded in a generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Cohort,
    Valueset,
    Count,
    Cube,
}

impl Role {
    /// All roles, in the order [`Naming::simplify`] strips them.
    pub const ALL: [Role; 4] = [Role::Cohort, Role::Valueset, Role::Count, Role::Cube];

    /// Keyword as it appears in table names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cohort => "cohort",
            Role::Valueset => "valueset",
            Role::Count => "count",
            Role::Cube => "cube",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append `_<suffix>` to `name`; an absent or empty suffix leaves it unchanged.
pub fn name_suffix(name: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(s) if !s.is_empty() => format!("{name}_{s}"),
        _ => name.to_string(),
    }
}

/// Naming convention engine bound to a single study prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    prefix: StudyPrefix,
}

impl Naming {
    pub fn new(prefix: StudyPrefix) -> Self {
        Self { prefix }
    }

    /// The study prefix, without the `__` separator.
    pub fn study_prefix(&self) -> &StudyPrefix {
        &self.prefix
    }

    /// `<prefix>__<name>`
    pub fn prefix(&self, name: &str) -> TableName {
        TableName::from_joined(format!("{}__{}", self.prefix, name))
    }

    /// `name` unchanged if it already starts with `<prefix>__`, otherwise [`prefix`](Self::prefix)ed.
    pub fn ensure_prefixed(&self, name: &str) -> TableName {
        if name.starts_with(&format!("{}__", self.prefix)) {
            TableName::from_joined(name.to_string())
        } else {
            self.prefix(name)
        }
    }

    /// Prefix every name in a collection. Duplicates collapse; output is sorted.
    pub fn prefix_all<I, S>(&self, names: I) -> Vec<TableName>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .iter()
            .map(|n| self.prefix(n))
            .collect()
    }

    /// Strip the study prefix and one role head from a name.
    ///
    /// Tries `<prefix>__cohort_`, `<prefix>__valueset_`, `<prefix>__count_`,
    /// `<prefix>__cube_` in that order, removing at most one occurrence of
    /// each, then at most one remaining `<prefix>__`.
    pub fn simplify(&self, name: &str) -> String {
        let mut simple = name.to_string();
        for role in Role::ALL {
            let head = format!("{}__{}_", self.prefix, role);
            simple = simple.replacen(&head, "", 1);
        }
        simple.replacen(&format!("{}__", self.prefix), "", 1)
    }

    /// `<prefix>__<part>_<simplified name>`.
    ///
    /// A name that already starts with `<prefix>__<part>_` keeps its tail, so
    /// joining twice with the same part is a no-op.
    pub fn join(&self, part: &str, name: &str) -> TableName {
        let own_head = format!("{}__{}_", self.prefix, part);
        let bare = match name.strip_prefix(&own_head) {
            Some(rest) => rest.to_string(),
            None => self.simplify(name),
        };
        self.prefix(&format!("{part}_{bare}"))
    }

    /// `<prefix>__<role>_<simplified name>` for a bare role.
    pub fn join_role(&self, role: Role, name: &str) -> TableName {
        self.join(role.as_str(), name)
    }

    pub fn cohort(&self, table: &str, suffix: Option<&str>) -> TableName {
        self.join(&name_suffix(Role::Cohort.as_str(), suffix), table)
    }

    pub fn cube(&self, table: &str, suffix: Option<&str>) -> TableName {
        self.join(&name_suffix(Role::Cube.as_str(), suffix), table)
    }

    pub fn valueset(&self, table: &str, suffix: Option<&str>) -> TableName {
        self.join(&name_suffix(Role::Valueset.as_str(), suffix), table)
    }

    /// `<prefix>__cohort_study_population[_<suffix>]`
    pub fn study_population(&self, suffix: Option<&str>) -> TableName {
        self.join_role(Role::Cohort, &name_suffix("study_population", suffix))
    }

    /// `<prefix>__cohort_study_variables[_<suffix>]`
    pub fn study_variables(&self, suffix: Option<&str>) -> TableName {
        self.join_role(Role::Cohort, &name_suffix("study_variables", suffix))
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(StudyPrefix(DEFAULT_PREFIX.to_string()))
    }
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
