//! Cube command implementation

use anyhow::{Context, Result};
use cg_core::TableName;
use cg_sql::{cube, CubeSpec, TemplateCountBuilder};

use crate::cli::{CubeArgs, GlobalArgs};
use crate::commands::common::{load_study, print_summary};

/// Execute the cube command
pub fn execute(args: &CubeArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;

    let min_subject = args.min_subject.unwrap_or(study.config.min_subject);
    let mut spec = CubeSpec::new(args.resource.into(), args.source.clone(), &args.columns)?
        .with_min_subject(min_subject)
        .with_where(&args.where_clauses);
    if let Some(name) = &args.name {
        let name = TableName::try_new(name.clone()).context("Cube name must not be empty")?;
        spec = spec.with_table_name(name);
    }

    let builder = TemplateCountBuilder::new();
    let path = cube(&builder, &study, &spec)
        .with_context(|| format!("Failed to write cube over {}", args.source))?;
    print_summary(&[path]);
    Ok(())
}
