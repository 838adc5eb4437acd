//! Root record of a glioma chart annotation

use crate::describe::{Described, FieldDoc};
use crate::drugs::{MedicationMention, RxClassCancerMention};
use crate::genes::{TargetGeneticTestMention, VariantMention};
use crate::pathology::{BehaviorMention, GradeMention, MorphologyMention, TopographyMention};
use crate::surgery::SurgeryMention;
use serde::{Deserialize, Serialize};

/// Everything extracted from one clinical note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GliomaCaseAnnotation {
    #[serde(default)]
    pub topography_mention: TopographyMention,

    #[serde(default)]
    pub morphology_mention: MorphologyMention,

    #[serde(default)]
    pub behavior_mention: BehaviorMention,

    #[serde(default)]
    pub grade_mention: GradeMention,

    #[serde(default)]
    pub target_genetic_test_mention: TargetGeneticTestMention,

    #[serde(default)]
    pub variant_mention: VariantMention,

    #[serde(default)]
    pub medication_mention: MedicationMention,

    #[serde(default)]
    pub rx_class_cancer_mention: RxClassCancerMention,

    #[serde(default)]
    pub surgery_mention: SurgeryMention,
}

impl GliomaCaseAnnotation {
    /// Parse an annotation from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl Described for GliomaCaseAnnotation {
    const NAME: &'static str = "GliomaCaseAnnotation";
    const DESCRIPTION: &'static str = "Root of a glioma case annotation.";

    fn fields() -> Vec<FieldDoc> {
        vec![
            FieldDoc::new("topography_mention", "TopographyMention", "Tumor site."),
            FieldDoc::new("morphology_mention", "MorphologyMention", "Tumor histology."),
            FieldDoc::new("behavior_mention", "BehaviorMention", "Tumor behavior."),
            FieldDoc::new("grade_mention", "GradeMention", "Tumor grade."),
            FieldDoc::new(
                "target_genetic_test_mention",
                "TargetGeneticTestMention",
                "Targeted genetic testing.",
            ),
            FieldDoc::new(
                "variant_mention",
                "GeneticVariantMention",
                "Reported genetic variant.",
            ),
            FieldDoc::new("medication_mention", "MedicationMention", "Any medication."),
            FieldDoc::new(
                "rx_class_cancer_mention",
                "RxClassCancerMention",
                "Cancer drug and its class.",
            ),
            FieldDoc::new("surgery_mention", "SurgeryMention", "Tumor surgery."),
        ]
    }
}
