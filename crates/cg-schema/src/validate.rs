//! Consistency checks serde cannot express
//!
//! Deserialization already enforces the closed vocabularies. These checks
//! cover code patterns, date shapes and evidence that contradicts its flag.

use crate::annotation::GliomaCaseAnnotation;
use crate::drugs::{MedicationMention, RxClassCancerMention};
use crate::genes::{GeneticVariantMention, TargetGeneticTestMention};
use crate::mention::SpanMention;
use crate::pathology::{BehaviorMention, GradeMention, MorphologyMention, TopographyMention};
use crate::surgery::SurgeryMention;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// One failed check, located by its dotted field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[S001] {field}: {message}")]
pub struct SchemaViolation {
    pub field: String,
    pub message: String,
}

/// Records that can check themselves.
pub trait Validate {
    /// Append violations under `path` to `out`.
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>);

    /// All violations of this record; empty when it is consistent.
    fn validate(&self) -> Vec<SchemaViolation> {
        let mut out = Vec::new();
        self.check("", &mut out);
        out
    }
}

static TOPOGRAPHY_RE: OnceLock<Regex> = OnceLock::new();
static MORPHOLOGY_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn topography_regex() -> &'static Regex {
    TOPOGRAPHY_RE.get_or_init(|| Regex::new(r"^C\d{2}(\.\d)?$").expect("valid regex"))
}

fn morphology_regex() -> &'static Regex {
    MORPHOLOGY_RE.get_or_init(|| Regex::new(r"^\d{4}/[0-9]$").expect("valid regex"))
}

fn date_regex() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^\d{4}(-\d{2}(-\d{2})?)?$").expect("valid regex"))
}

fn field(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn check_pattern(
    path: &str,
    name: &str,
    value: Option<&str>,
    pattern: &Regex,
    out: &mut Vec<SchemaViolation>,
) {
    if let Some(value) = value {
        if !pattern.is_match(value) {
            out.push(SchemaViolation {
                field: field(path, name),
                message: format!("'{value}' does not match {}", pattern.as_str()),
            });
        }
    }
}

impl Validate for SpanMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        if !self.has_mention && !self.spans.is_empty() {
            out.push(SchemaViolation {
                field: field(path, "spans"),
                message: format!("{} spans cited but has_mention is false", self.spans.len()),
            });
        }
    }
}

impl Validate for TopographyMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
        check_pattern(path, "code", self.code.as_deref(), topography_regex(), out);
    }
}

impl Validate for MorphologyMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
        check_pattern(path, "code", self.code.as_deref(), morphology_regex(), out);
    }
}

impl Validate for BehaviorMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
    }
}

impl Validate for GradeMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
    }
}

impl Validate for GeneticVariantMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
    }
}

impl Validate for TargetGeneticTestMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
    }
}

impl Validate for MedicationMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
        check_pattern(path, "start_date", self.start_date.as_deref(), date_regex(), out);
        check_pattern(path, "end_date", self.end_date.as_deref(), date_regex(), out);

        // same-shape ISO dates order lexically
        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            if start.len() == end.len() && date_regex().is_match(start) && end < start {
                out.push(SchemaViolation {
                    field: field(path, "end_date"),
                    message: format!("'{end}' is before start_date '{start}'"),
                });
            }
        }
    }
}

impl Validate for RxClassCancerMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.medication.check(path, out);
    }
}

impl Validate for SurgeryMention {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.mention.check(path, out);
    }
}

impl Validate for GliomaCaseAnnotation {
    fn check(&self, path: &str, out: &mut Vec<SchemaViolation>) {
        self.topography_mention
            .check(&field(path, "topography_mention"), out);
        self.morphology_mention
            .check(&field(path, "morphology_mention"), out);
        self.behavior_mention
            .check(&field(path, "behavior_mention"), out);
        self.grade_mention.check(&field(path, "grade_mention"), out);
        self.target_genetic_test_mention
            .check(&field(path, "target_genetic_test_mention"), out);
        self.variant_mention
            .check(&field(path, "variant_mention"), out);
        self.medication_mention
            .check(&field(path, "medication_mention"), out);
        self.rx_class_cancer_mention
            .check(&field(path, "rx_class_cancer_mention"), out);
        self.surgery_mention
            .check(&field(path, "surgery_mention"), out);
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
