//! Schema command implementation

use anyhow::{Context, Result};
use cg_core::files::{read_text, write_text};
use cg_schema::{schema_document, GliomaCaseAnnotation, Validate};
use std::path::Path;

use crate::cli::SchemaArgs;
use crate::commands::common::{print_written, ExitCode};

/// Execute the schema command
pub fn execute(args: &SchemaArgs) -> Result<()> {
    if !args.check.is_empty() {
        return check_annotations(&args.check);
    }

    let mut document = serde_json::to_string_pretty(&schema_document())?;
    document.push('\n');
    match &args.output {
        Some(output) => {
            let path = write_text(Path::new(output), &document)
                .with_context(|| format!("Failed to write {output}"))?;
            print_written(&path);
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn check_annotations(files: &[String]) -> Result<()> {
    let mut failed = 0;
    for file in files {
        let text = read_text(Path::new(file))?;
        let annotation = match GliomaCaseAnnotation::from_json(&text) {
            Ok(annotation) => annotation,
            Err(e) => {
                println!("  FAIL {file}: {e}");
                failed += 1;
                continue;
            }
        };

        let violations = annotation.validate();
        if violations.is_empty() {
            println!("  ok   {file}");
        } else {
            println!("  FAIL {file}");
            for violation in &violations {
                println!("       {violation}");
            }
            failed += 1;
        }
    }

    println!();
    println!("{} checked, {} failed", files.len(), failed);
    if failed > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}
