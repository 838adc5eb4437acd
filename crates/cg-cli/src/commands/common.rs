//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use cg_core::Study;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Return `Err(ExitCode(N).into())` instead of calling `std::process::exit`
/// so the message has already been printed and destructors still run.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the study from `--project-dir`, honoring `--config`.
pub(crate) fn load_study(global: &GlobalArgs) -> Result<Study> {
    let root = Path::new(&global.project_dir);
    let study = match &global.config {
        Some(config) => Study::load_with_config(root, Path::new(config)),
        None => Study::load(root),
    };
    study.context("Failed to load study")
}

/// Print a path written by a command.
pub(crate) fn print_written(path: &Path) {
    println!("  Wrote {}", path.display());
}

/// Print every path written, then a one-line total.
pub(crate) fn print_summary(written: &[PathBuf]) {
    for path in written {
        print_written(path);
    }
    println!();
    println!(
        "Wrote {} file{}",
        written.len(),
        if written.len() == 1 { "" } else { "s" }
    );
}
