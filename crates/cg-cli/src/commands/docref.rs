//! Docref command implementation
//!
//! Wraps plain-text clinical notes as FHIR DocumentReference resources so
//! they can be loaded alongside the rest of a study's FHIR data.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cg_core::files::{read_bytes, write_text};
use chrono::{DateTime, Local};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::cli::DocrefArgs;
use crate::commands::common::print_summary;

const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Execute the docref command
pub fn execute(args: &DocrefArgs) -> Result<()> {
    let now = Local::now();
    let output_dir = Path::new(&args.output);

    let mut written: Vec<PathBuf> = Vec::with_capacity(args.notes.len());
    for (index, note_path) in args.notes.iter().enumerate() {
        let subject = id_for(&args.subjects, index, "patient")?;
        let encounter = id_for(&args.encounters, index, "enc")?;

        let note = read_bytes(Path::new(note_path))
            .with_context(|| format!("Failed to read {note_path}"))?;
        let doc_id = doc_id_from_path(Path::new(note_path));
        let resource = document_reference(&doc_id, &subject, &encounter, &note, &now);

        let mut line = serde_json::to_string(&resource)?;
        line.push('\n');
        let path = write_text(&output_dir.join(format!("{doc_id}.ndjson")), &line)?;
        written.push(path);
    }

    print_summary(&written);
    Ok(())
}

/// Explicit id for the note at `index`, or `<default_stem>-<index + 1>` when none were given.
pub(crate) fn id_for(ids: &[String], index: usize, default_stem: &str) -> Result<String> {
    if ids.is_empty() {
        return Ok(format!("{default_stem}-{}", index + 1));
    }
    ids.get(index)
        .cloned()
        .with_context(|| format!("No {default_stem} id given for note {}", index + 1))
}

/// Document id from a note file name, with `.txt` and `.clean` removed.
///
/// `glioma-2.txt.clean.txt` becomes `glioma-2`.
pub(crate) fn doc_id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.replace(".txt", "").replace(".clean", "")
}

/// DocumentReference with the note as a base64 text attachment.
pub(crate) fn document_reference(
    doc_id: &str,
    subject_id: &str,
    encounter_id: &str,
    note: &[u8],
    date: &DateTime<Local>,
) -> Value {
    json!({
        "resourceType": "DocumentReference",
        "id": doc_id,
        "subject": {"reference": format!("Patient/{subject_id}")},
        "encounter": {"reference": format!("Encounter/{encounter_id}")},
        "date": date.to_rfc3339(),
        "type": {
            "coding": [{"system": "http://loinc.org"}]
        },
        "content": [{
            "attachment": {
                "data": STANDARD.encode(note),
                "contentType": CONTENT_TYPE,
                "title": doc_id,
            }
        }]
    })
}

#[cfg(test)]
#[path = "docref_test.rs"]
mod tests;
