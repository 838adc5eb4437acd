//! Count-table SQL for cubes
//!
//! A count builder turns a [`CubeSpec`] into a `CREATE TABLE <name> AS (...);`
//! statement. The default implementation renders a bundled Jinja template.

use crate::cube::CubeSpec;
use crate::error::SqlGenResult;
use cg_core::sql_utils::sql_and;
use cg_core::TableName;
use minijinja::{context, Environment, UndefinedBehavior};

/// Bundled template for count tables grouped with `CUBE`.
pub const COUNT_TEMPLATE: &str = include_str!("../templates/count.sql.jinja");

/// Produces the `CREATE TABLE` statement a cube view is rewritten from.
///
/// Implementations must start their output with `CREATE TABLE <table_name> AS (`
/// and end it with `);`, otherwise the view rewrite rejects it.
pub trait CountBuilder {
    fn count_table(&self, table_name: &TableName, spec: &CubeSpec) -> SqlGenResult<String>;
}

/// [`CountBuilder`] backed by [`COUNT_TEMPLATE`].
pub struct TemplateCountBuilder<'a> {
    env: Environment<'a>,
}

impl TemplateCountBuilder<'_> {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for TemplateCountBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl CountBuilder for TemplateCountBuilder<'_> {
    fn count_table(&self, table_name: &TableName, spec: &CubeSpec) -> SqlGenResult<String> {
        let columns: Vec<&str> = spec.columns.iter().map(String::as_str).collect();
        let where_clauses = if spec.where_clauses.is_empty() {
            String::new()
        } else {
            sql_and(&spec.where_clauses)
        };

        let sql = self.env.render_str(
            COUNT_TEMPLATE,
            context! {
                table_name => table_name.as_str(),
                source_table => spec.source_table.as_str(),
                subject_ref => spec.resource.subject_ref(),
                resource => spec.resource.fhir_resource(),
                columns => columns,
                min_subject => spec.min_subject,
                where_clauses => where_clauses,
            },
        )?;
        log::debug!("Rendered count table {table_name} ({} columns)", columns.len());
        Ok(sql)
    }
}

#[cfg(test)]
#[path = "counts_test.rs"]
mod tests;
