//! Criteria command implementation

use anyhow::{Context, Result};
use cg_sql::artifacts::criteria_view;

use crate::cli::{CriteriaArgs, GlobalArgs};
use crate::commands::common::{load_study, print_summary};

/// Execute the criteria command
pub fn execute(args: &CriteriaArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;
    let path = criteria_view(&study, &args.name, &args.columns, &args.values)
        .with_context(|| format!("Failed to write criteria view {}", args.name))?;
    print_summary(&[path]);
    Ok(())
}
