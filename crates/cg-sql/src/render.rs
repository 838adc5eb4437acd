//! SQL text for code-list, criteria and union views
//!
//! Every function here is pure: the same inputs render byte-identical SQL.

use crate::error::{SqlGenError, SqlGenResult};
use cg_core::coding::sorted_unique;
use cg_core::sql_utils::escape_literal;
use cg_core::{Coding, Naming, SqlArtifact, TableName};

/// `create or replace view <view> as select * from (values ...) AS t (system, code, display) ;`
///
/// Rows are emitted sorted by `(system, code, display)` with duplicates
/// dropped. Display strings are escaped with [`escape_literal`].
pub fn codelist_to_view(codings: &[Coding], view_name: &TableName) -> SqlGenResult<String> {
    if codings.is_empty() {
        return Err(SqlGenError::EmptyCodeList {
            view: view_name.to_string(),
        });
    }

    let rows: Vec<String> = sorted_unique(codings.iter())
        .into_iter()
        .map(|c| {
            format!(
                "('{}', '{}', '{}')",
                c.system,
                c.code,
                escape_literal(&c.display)
            )
        })
        .collect();

    Ok(format!(
        "create or replace view {view_name} as select * from (values\n{}\n) AS t (system, code, display) ;",
        rows.join("\n,")
    ))
}

/// One-row view of literal criteria values.
///
/// `values` are SQL literals and are inserted as given, so string values must
/// carry their own quotes.
pub fn criteria_to_view<C, V>(
    view_name: &TableName,
    columns: &[C],
    values: &[V],
) -> SqlGenResult<String>
where
    C: AsRef<str>,
    V: AsRef<str>,
{
    if columns.is_empty() || columns.len() != values.len() {
        return Err(SqlGenError::CriteriaMismatch {
            view: view_name.to_string(),
            columns: columns.len(),
            values: values.len(),
        });
    }

    let columns: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    Ok([
        format!("create or replace view {view_name} as "),
        "select * from (values".to_string(),
        format!("({})", values.join(",")),
        format!(") AS t ({}) ;", columns.join(",")),
    ]
    .join("\n"))
}

/// Catalog view that unions several code-list views, tagging each row with
/// the simplified name of its source in a `valueset` column.
///
/// The output is named `<prefix>__<view_name>`; a `view_name` that already
/// carries the prefix is not prefixed again.
pub fn union_view<S: AsRef<str>>(
    naming: &Naming,
    views: &[S],
    view_name: &str,
) -> SqlGenResult<SqlArtifact> {
    let table_name = naming.ensure_prefixed(view_name);
    if views.is_empty() {
        return Err(SqlGenError::EmptyUnion {
            view: table_name.to_string(),
        });
    }

    let selects: Vec<String> = views
        .iter()
        .map(|view| {
            let view = view.as_ref();
            format!(
                "select '{}' as valueset, system, code, display from \n {view}",
                naming.simplify(view)
            )
        })
        .collect();

    let sql = format!(
        "create or replace view {table_name} as \n {}",
        selects.join("\n UNION ")
    );
    Ok(SqlArtifact::new(table_name, sql))
}

/// Union of the cohort tables of every study variable, one branch per variable.
pub fn select_union_study_variables<S: AsRef<str>>(naming: &Naming, variables: &[S]) -> String {
    variables
        .iter()
        .map(|variable| {
            let variable = naming.simplify(variable.as_ref());
            format!(
                "\tselect distinct '{variable}'\t as variable, valueset, code, display, system, encounter_ref, subject_ref  from {}",
                naming.cohort(&variable, None)
            )
        })
        .collect::<Vec<_>>()
        .join(" UNION\n")
}

/// One pivot column per study variable over a `lookup` relation.
pub fn select_lookup_study_variables<S: AsRef<str>>(naming: &Naming, variables: &[S]) -> String {
    variables
        .iter()
        .map(|variable| {
            let variable = naming.simplify(variable.as_ref());
            format!("\tIF(lookup.variable='{variable}', lookup.valueset) AS {variable}")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Rewrite `CREATE TABLE <t> AS (<body>);` into `CREATE or replace VIEW <t> AS <body>;`.
///
/// Surrounding whitespace is ignored. Any other shape, including a different
/// table name or different keyword casing, is an error rather than a silent
/// pass-through.
pub fn table_as_view(sql: &str, table_name: &TableName) -> SqlGenResult<String> {
    let head = format!("CREATE TABLE {table_name} AS (");
    let rewrite_err = |reason: String| SqlGenError::ViewRewrite {
        table: table_name.to_string(),
        reason,
    };

    let trimmed = sql.trim();
    let body = trimmed
        .strip_prefix(&head)
        .ok_or_else(|| rewrite_err(format!("statement does not start with '{head}'")))?;
    let body = body
        .strip_suffix(");")
        .ok_or_else(|| rewrite_err("statement does not end with ');'".to_string()))?;

    Ok(format!("CREATE or replace VIEW {table_name} AS {body};"))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
