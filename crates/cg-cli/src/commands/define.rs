//! Define command implementation

use anyhow::{Context, Result};
use cg_core::{filter_expansion, Coding, Study, ValueSet};
use cg_sql::artifacts::{define, exclude, include};
use std::path::PathBuf;

use crate::cli::{CodeSource, DefineArgs, GlobalArgs, ListKind};
use crate::commands::common::{load_study, print_summary};

/// Execute the define command
pub fn execute(args: &DefineArgs, global: &GlobalArgs) -> Result<()> {
    let study = load_study(global)?;
    let path = define_from_valueset(&study, args)?;
    print_summary(&[path]);
    Ok(())
}

/// Codes of `valuesets` from the section `args` selects, optionally filtered.
pub(crate) fn collect_codings(valuesets: &[ValueSet], args: &DefineArgs) -> Vec<Coding> {
    if !args.search.is_empty() {
        return filter_expansion(valuesets, &args.search)
            .iter()
            .flat_map(ValueSet::expansion_codings)
            .collect();
    }
    match args.from {
        CodeSource::Compose => valuesets.iter().flat_map(ValueSet::compose_codings).collect(),
        CodeSource::Expansion => valuesets
            .iter()
            .flat_map(ValueSet::expansion_codings)
            .collect(),
    }
}

fn define_from_valueset(study: &Study, args: &DefineArgs) -> Result<PathBuf> {
    let valuesets = study
        .paths
        .load_valueset(&args.file)
        .with_context(|| format!("Failed to load value set {}", args.file))?;
    let codings = collect_codings(&valuesets, args);
    log::debug!("{}: {} codes", args.file, codings.len());

    let written = match args.kind {
        ListKind::Define => define(study, &codings, &args.name),
        ListKind::Include => include(study, &codings, &args.name),
        ListKind::Exclude => exclude(study, &codings, &args.name),
    };
    written.with_context(|| format!("Failed to define view {}", args.name))
}

#[cfg(test)]
#[path = "define_test.rs"]
mod tests;
