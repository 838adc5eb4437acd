//! Aggregate count cubes
//!
//! A cube counts distinct patients, encounters or documents for every
//! combination of its grouping columns and publishes the result as a view
//! named `<prefix>__cube_<resource>_<source>`.

use crate::counts::CountBuilder;
use crate::error::{SqlGenError, SqlGenResult};
use crate::render::table_as_view;
use cg_core::{CountResource, CubeConfig, Naming, SqlArtifact, Study, TableName};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Threshold used by [`CubeSpec::patient_min10`].
pub const MIN_SUBJECT_TEN: u32 = 10;

/// Everything needed to render one cube.
///
/// Columns are held in a sorted set, so listing the same columns in a
/// different order renders identical SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSpec {
    pub resource: CountResource,
    pub source_table: String,
    pub columns: BTreeSet<String>,
    pub min_subject: u32,
    pub table_name: Option<TableName>,
    pub where_clauses: Vec<String>,
}

impl CubeSpec {
    /// New cube over `columns` of `source_table`, with a threshold of 1.
    pub fn new<I, S>(
        resource: CountResource,
        source_table: impl Into<String>,
        columns: I,
    ) -> SqlGenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source_table = source_table.into();
        let columns: BTreeSet<String> = columns
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        if columns.is_empty() {
            return Err(SqlGenError::EmptyColumns { source_table });
        }
        Ok(Self {
            resource,
            source_table,
            columns,
            min_subject: 1,
            table_name: None,
            where_clauses: Vec::new(),
        })
    }

    pub fn patient<I, S>(source_table: impl Into<String>, columns: I) -> SqlGenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(CountResource::Patient, source_table, columns)
    }

    pub fn encounter<I, S>(source_table: impl Into<String>, columns: I) -> SqlGenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(CountResource::Encounter, source_table, columns)
    }

    pub fn document<I, S>(source_table: impl Into<String>, columns: I) -> SqlGenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(CountResource::Document, source_table, columns)
    }

    /// Patient cube that suppresses cells with fewer than ten patients.
    pub fn patient_min10<I, S>(source_table: impl Into<String>, columns: I) -> SqlGenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::patient(source_table, columns)?.with_min_subject(MIN_SUBJECT_TEN))
    }

    /// Build from a study.yml entry.
    ///
    /// The threshold is `override_min_subject` when given, else the entry's
    /// own `min_subject`, else `default_min_subject`.
    pub fn from_config(
        config: &CubeConfig,
        override_min_subject: Option<u32>,
        default_min_subject: u32,
    ) -> SqlGenResult<Self> {
        let min_subject = override_min_subject
            .or(config.min_subject)
            .unwrap_or(default_min_subject);
        let mut spec = Self::new(config.resource, config.source.clone(), &config.columns)?
            .with_min_subject(min_subject)
            .with_where(&config.where_clauses);
        if let Some(name) = &config.name {
            let name = TableName::try_new(name.clone())
                .ok_or_else(|| SqlGenError::InvalidName("cube name is empty".to_string()))?;
            spec = spec.with_table_name(name);
        }
        Ok(spec)
    }

    pub fn with_min_subject(mut self, min_subject: u32) -> Self {
        self.min_subject = min_subject;
        self
    }

    /// Use `name` verbatim instead of the derived cube name.
    pub fn with_table_name(mut self, name: TableName) -> Self {
        self.table_name = Some(name);
        self
    }

    /// Filter source rows; clauses are and-ed together.
    pub fn with_where<I, S>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.where_clauses
            .extend(clauses.into_iter().map(|c| c.as_ref().to_string()));
        self
    }

    /// Explicit name, or `<prefix>__cube_<resource>_<simplified source>`.
    pub fn resolve_table_name(&self, naming: &Naming) -> TableName {
        match &self.table_name {
            Some(name) => name.clone(),
            None => naming.cube(&self.source_table, Some(self.resource.name_suffix())),
        }
    }
}

/// Render a cube as a `CREATE or replace VIEW` artifact.
pub fn render_cube(
    builder: &dyn CountBuilder,
    naming: &Naming,
    spec: &CubeSpec,
) -> SqlGenResult<SqlArtifact> {
    let table_name = spec.resolve_table_name(naming);
    let sql = builder.count_table(&table_name, spec)?;
    let view = table_as_view(&sql, &table_name)?;
    Ok(SqlArtifact::new(table_name, view))
}

/// Render a cube and write it to the study output directory.
pub fn cube(builder: &dyn CountBuilder, study: &Study, spec: &CubeSpec) -> SqlGenResult<PathBuf> {
    let artifact = render_cube(builder, &study.naming, spec)?;
    log::info!(
        "Cube {} over {} ({} columns, min {})",
        artifact.table_name,
        spec.source_table,
        spec.columns.len(),
        spec.min_subject
    );
    Ok(study.paths.save_artifact(&artifact)?)
}

#[cfg(test)]
#[path = "cube_test.rs"]
mod tests;
