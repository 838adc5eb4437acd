//! Union command implementation

use anyhow::{Context, Result};
use cg_sql::artifacts::union_view_list;

use crate::cli::{GlobalArgs, UnionArgs};
use crate::commands::common::{load_study, print_summary};

/// Execute the union command
pub fn execute(args: &UnionArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;
    let path = union_view_list(&study, &args.views, &args.name)
        .with_context(|| format!("Failed to write union view {}", args.name))?;
    print_summary(&[path]);
    Ok(())
}
