//! Make command implementation
//!
//! Generates every artifact study.yml lists: code-list views from CSV files
//! first, then cubes, then union catalogs.

use anyhow::{Context, Result};
use cg_sql::artifacts::{csv_to_sql, union_view_list};
use cg_sql::{cube, CubeSpec, TemplateCountBuilder};

use crate::cli::{GlobalArgs, MakeArgs};
use crate::commands::common::{load_study, print_summary};

/// Execute the make command
pub fn execute(args: &MakeArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;
    let config = &study.config;
    println!("Making study: {}", config.name);

    let mut written = Vec::new();

    for file in &config.valuesets {
        let path = csv_to_sql(&study, file).with_context(|| format!("Failed to convert {file}"))?;
        written.push(path);
    }

    let builder = TemplateCountBuilder::new();
    for cube_config in &config.cubes {
        let spec = CubeSpec::from_config(cube_config, args.min_subject, config.min_subject)
            .with_context(|| format!("Invalid cube on {}", cube_config.source))?;
        let path = cube(&builder, &study, &spec)
            .with_context(|| format!("Failed to write cube over {}", cube_config.source))?;
        written.push(path);
    }

    for union in &config.unions {
        let path = union_view_list(&study, &union.views, &union.name)
            .with_context(|| format!("Failed to write union view {}", union.name))?;
        written.push(path);
    }

    if written.is_empty() {
        println!("Nothing to make: study.yml lists no valuesets, cubes or unions");
        return Ok(());
    }
    print_summary(&written);
    Ok(())
}
