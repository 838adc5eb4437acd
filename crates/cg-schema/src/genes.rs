//! Genetic testing and variant interpretation

use crate::describe::{span_fields, Described, FieldDoc};
use crate::mention::SpanMention;
use crate::schema_enum::schema_enum;
use serde::{Deserialize, Serialize};

schema_enum! {
    /// Clinical interpretation of a variant or test result.
    pub enum VariantInterpretation {
        Benign => "BENIGN",
        LikelyBenign => "LIKELY BENIGN",
        Uncertain => "VARIANT OF UNKNOWN SIGNIFICANCE",
        Pathogenic => "PATHOGENIC",
        LikelyPathogenic => "LIKELY PATHOGENIC",
        NotMentioned => "NOT MENTIONED",
    }
    default = NotMentioned;
}

/// A reported variant of one gene, e.g. IDH1 R132H.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneticVariantMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    /// HGNC gene symbol
    #[serde(default)]
    pub hgnc_name: Option<String>,

    #[serde(default)]
    pub interpretation: VariantInterpretation,

    /// HGVS variant notation
    #[serde(default)]
    pub hgvs_variant: Option<String>,
}

pub type VariantMention = GeneticVariantMention;

/// A targeted genetic test (panel, FISH, IHC) and its overall result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetGeneticTestMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub test_name: Option<String>,

    /// HGNC symbols of the tested genes
    #[serde(default)]
    pub hgnc_names: Vec<String>,

    #[serde(default)]
    pub interpretation: VariantInterpretation,
}

impl Described for GeneticVariantMention {
    const NAME: &'static str = "GeneticVariantMention";
    const DESCRIPTION: &'static str = "Clinical interpretation of a genetic variant.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.extend([
            FieldDoc::new("hgnc_name", "string", "HGNC HUGO gene naming convention."),
            FieldDoc::new(
                "interpretation",
                "enum",
                "Clinical interpretation of the genetic variant or test result.",
            )
            .with_values(VariantInterpretation::labels()),
            FieldDoc::new(
                "hgvs_variant",
                "string",
                "Human Genome Variation Society (HGVS) variant.",
            ),
        ]);
        fields
    }
}

impl Described for TargetGeneticTestMention {
    const NAME: &'static str = "TargetGeneticTestMention";
    const DESCRIPTION: &'static str =
        "Targeted genetic test ordered or reported for the tumor, and its result.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.extend([
            FieldDoc::new("test_name", "string", "Name of the test or panel."),
            FieldDoc::new(
                "hgnc_names",
                "string[]",
                "HGNC symbols of the genes the test covers.",
            ),
            FieldDoc::new("interpretation", "enum", "Overall test interpretation.")
                .with_values(VariantInterpretation::labels()),
        ]);
        fields
    }
}
