//! Field documentation for extraction records
//!
//! The tables here feed the `cg schema` review document and double as the
//! prompt-facing description of each variable.

use crate::annotation::GliomaCaseAnnotation;
use crate::drugs::{MedicationMention, RxClassCancerMention};
use crate::genes::{GeneticVariantMention, TargetGeneticTestMention};
use crate::pathology::{BehaviorMention, GradeMention, MorphologyMention, TopographyMention};
use crate::surgery::SurgeryMention;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// One documented field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDoc {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<&'static str>,
}

impl FieldDoc {
    pub fn new(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            values: Vec::new(),
        }
    }

    /// Restrict the field to a closed vocabulary.
    pub fn with_values(mut self, values: Vec<&'static str>) -> Self {
        self.values = values;
        self
    }
}

/// A record with a static description of its fields.
pub trait Described {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn fields() -> Vec<FieldDoc>;
}

/// `has_mention` and `spans`, carried by every mention record.
pub(crate) fn span_fields() -> Vec<FieldDoc> {
    vec![
        FieldDoc::new(
            "has_mention",
            "boolean",
            "Whether there is any mention of this variable in the text.",
        ),
        FieldDoc::new(
            "spans",
            "string[]",
            "The text spans where this variable is mentioned.",
        ),
    ]
}

fn record<T: Described>(records: &mut Map<String, Value>) {
    records.insert(
        T::NAME.to_string(),
        json!({
            "description": T::DESCRIPTION,
            "fields": T::fields(),
        }),
    );
}

/// Every extraction record and its fields, root record first.
pub fn schema_document() -> Value {
    let mut records = Map::new();
    record::<GliomaCaseAnnotation>(&mut records);
    record::<TopographyMention>(&mut records);
    record::<MorphologyMention>(&mut records);
    record::<BehaviorMention>(&mut records);
    record::<GradeMention>(&mut records);
    record::<TargetGeneticTestMention>(&mut records);
    record::<GeneticVariantMention>(&mut records);
    record::<MedicationMention>(&mut records);
    record::<RxClassCancerMention>(&mut records);
    record::<SurgeryMention>(&mut records);
    json!({
        "root": GliomaCaseAnnotation::NAME,
        "records": records,
    })
}

#[cfg(test)]
#[path = "describe_test.rs"]
mod tests;
