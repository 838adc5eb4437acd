//! Filter command implementation

use anyhow::{Context, Result};

use crate::cli::{FilterArgs, GlobalArgs};
use crate::commands::common::{load_study, print_summary};

/// Execute the filter command
pub fn execute(args: &FilterArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;

    let filtered = study
        .paths
        .filter_expansion_file(&args.file, &args.search)
        .with_context(|| format!("Failed to filter {}", args.file))?;
    let matched: usize = filtered
        .iter()
        .map(|vs| vs.expansion_codings().len())
        .sum();

    let path = study
        .paths
        .save_valueset(&args.output, &filtered)
        .with_context(|| format!("Failed to write {}", args.output))?;

    println!(
        "{} entries of {} match {}",
        matched,
        args.file,
        args.search.join(", ")
    );
    print_summary(&[path]);
    Ok(())
}
