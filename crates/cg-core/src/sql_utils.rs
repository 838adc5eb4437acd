//! SQL text helpers shared by every generator
//!
//! Clause lists are de-duplicated and sorted before joining so that the same
//! logical input always renders byte-identical SQL.

use std::collections::BTreeSet;

/// Make free text safe to place inside a single-quoted SQL literal.
///
/// Removes `'` and replaces `;` with `.`. This only keeps the literal
/// syntactically intact; generated SQL is never parameterized, so inputs must
/// come from curated value sets rather than untrusted users.
///
/// # Examples
/// ```
/// use cg_core::sql_utils::escape_literal;
/// assert_eq!(escape_literal("Crohn's disease; NOS"), "Crohns disease. NOS");
/// ```
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "").replace(';', ".")
}

/// Join distinct clauses in sorted order with ` <operator> \n`.
pub fn sql_iter<I, S>(clauses: I, operator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let distinct: BTreeSet<String> = clauses
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect();
    let separator = format!(" {operator} \n");
    distinct.into_iter().collect::<Vec<_>>().join(&separator)
}

/// `a and \nb and \nc`
pub fn sql_and<I, S>(clauses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sql_iter(clauses, "and")
}

/// `a or \nb or \nc`
pub fn sql_or<I, S>(clauses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sql_iter(clauses, "or")
}

/// `a , \nb , \nc`
pub fn sql_list<I, S>(clauses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sql_iter(clauses, ",")
}

/// Wrap a statement in parentheses.
pub fn sql_paren(statement: &str) -> String {
    format!("({statement})")
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
