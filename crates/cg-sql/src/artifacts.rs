//! Writers that render a view and save it under the study output directory
//!
//! Each writer returns the path it wrote, `<output_dir>/<table_name>.sql`.

use crate::error::SqlGenResult;
use crate::render::{codelist_to_view, criteria_to_view, union_view};
use cg_core::files::read_codings_csv;
use cg_core::{Coding, SqlArtifact, Study};
use std::path::{Path, PathBuf};

/// Write the code-list view `<prefix>__<view_name>`.
pub fn define(study: &Study, codings: &[Coding], view_name: &str) -> SqlGenResult<PathBuf> {
    let table_name = study.naming.ensure_prefixed(view_name);
    let sql = codelist_to_view(codings, &table_name)?;
    log::info!("Defined {table_name} with {} codes", codings.len());
    Ok(study.paths.save_artifact(&SqlArtifact::new(table_name, sql))?)
}

/// Write `<prefix>__include_<view_name>`.
pub fn include(study: &Study, codings: &[Coding], view_name: &str) -> SqlGenResult<PathBuf> {
    define(study, codings, &format!("include_{view_name}"))
}

/// Write `<prefix>__exclude_<view_name>`.
pub fn exclude(study: &Study, codings: &[Coding], view_name: &str) -> SqlGenResult<PathBuf> {
    define(study, codings, &format!("exclude_{view_name}"))
}

/// Write a one-row criteria view `<prefix>__<view_name>`.
pub fn criteria_view<C, V>(
    study: &Study,
    view_name: &str,
    columns: &[C],
    values: &[V],
) -> SqlGenResult<PathBuf>
where
    C: AsRef<str>,
    V: AsRef<str>,
{
    let table_name = study.naming.ensure_prefixed(view_name);
    let sql = criteria_to_view(&table_name, columns, values)?;
    Ok(study.paths.save_artifact(&SqlArtifact::new(table_name, sql))?)
}

/// Write a union catalog view `<prefix>__<view_name>` over `views`.
pub fn union_view_list<S: AsRef<str>>(
    study: &Study,
    views: &[S],
    view_name: &str,
) -> SqlGenResult<PathBuf> {
    let artifact = union_view(&study.naming, views, view_name)?;
    log::info!("Union {} over {} views", artifact.table_name, views.len());
    Ok(study.paths.save_artifact(&artifact)?)
}

/// View name for a code-list CSV: the file stem without a leading `<prefix>__`.
///
/// `glioma__valueset_topography.csv` becomes `valueset_topography`.
pub fn csv_view_name(study: &Study, filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let head = format!("{}__", study.naming.study_prefix());
    match stem.strip_prefix(&head) {
        Some(rest) => rest.to_string(),
        None => stem,
    }
}

/// Convert a headerless `system,code,display` CSV from the value set
/// directory into its code-list view.
pub fn csv_to_sql(study: &Study, filename: &str) -> SqlGenResult<PathBuf> {
    let codings = read_codings_csv(&study.paths.valueset(filename))?;
    define(study, &codings, &csv_view_name(study, filename))
}

#[cfg(test)]
#[path = "artifacts_test.rs"]
mod tests;
