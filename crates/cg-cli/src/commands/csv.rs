//! Csv command implementation

use anyhow::{Context, Result};
use cg_sql::artifacts::csv_to_sql;

use crate::cli::{CsvArgs, GlobalArgs};
use crate::commands::common::{load_study, print_summary};

/// Execute the csv command
pub fn execute(args: &CsvArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;

    let files = if args.files.is_empty() {
        study.config.valuesets.clone()
    } else {
        args.files.clone()
    };
    if files.is_empty() {
        println!("No CSV files given and none listed under `valuesets` in study.yml");
        return Ok(());
    }

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let path = csv_to_sql(&study, file).with_context(|| format!("Failed to convert {file}"))?;
        written.push(path);
    }
    print_summary(&written);
    Ok(())
}
