//! Surgical procedures for the tumor

use crate::describe::{span_fields, Described, FieldDoc};
use crate::mention::SpanMention;
use crate::schema_enum::schema_enum;
use serde::{Deserialize, Serialize};

schema_enum! {
    pub enum SurgicalType {
        Biopsy => "BIOPSY",
        Resection => "RESECTION",
        Debulking => "DEBULKING",
        Ablation => "ABLATION",
        Endoscopic => "ENDOSCOPIC",
        Craniotomy => "CRANIOTOMY",
        Other => "OTHER",
        NotMentioned => "NOT_MENTIONED",
    }
    default = NotMentioned;
}

schema_enum! {
    pub enum SurgicalApproach {
        Open => "OPEN",
        Awake => "AWAKE",
        Endoscopic => "ENDOSCOPIC",
        Stereotactic => "STEREOTACTIC",
        Laser => "LASER",
        Keyhole => "KEYHOLE",
        NotMentioned => "NOT_MENTIONED",
    }
    default = NotMentioned;
}

schema_enum! {
    pub enum ExtentOfResection {
        GrossTotal => "GROSS_TOTAL",
        Subtotal => "SUBTOTAL",
        Partial => "PARTIAL",
        BiopsyOnly => "BIOPSY_ONLY",
        Supratotal => "SUPRATOTAL",
        NotApplicable => "NOT_APPLICABLE",
        NotMentioned => "NOT_MENTIONED",
    }
    default = NotMentioned;
}

/// A surgical procedure performed for the tumor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurgeryMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub surgical_type: SurgicalType,

    #[serde(default)]
    pub approach: SurgicalApproach,

    #[serde(default)]
    pub extent_of_resection: ExtentOfResection,

    #[serde(default)]
    pub anatomical_site: Option<String>,

    #[serde(default)]
    pub technique_details: Option<String>,

    #[serde(default)]
    pub complications: Option<String>,
}

impl Described for SurgeryMention {
    const NAME: &'static str = "SurgeryMention";
    const DESCRIPTION: &'static str =
        "Surgical procedure for the tumor with its type, approach and extent of resection.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.extend([
            FieldDoc::new(
                "surgical_type",
                "enum",
                "High-level categorization of the surgery (biopsy, resection, ablation, etc.).",
            )
            .with_values(SurgicalType::labels()),
            FieldDoc::new(
                "approach",
                "enum",
                "Technical approach used during the surgery (open, awake, stereotactic, laser).",
            )
            .with_values(SurgicalApproach::labels()),
            FieldDoc::new(
                "extent_of_resection",
                "enum",
                "Reported extent of tumor resection.",
            )
            .with_values(ExtentOfResection::labels()),
            FieldDoc::new(
                "anatomical_site",
                "string",
                "Anatomical site of surgery (e.g., 'left frontal lobe').",
            ),
            FieldDoc::new(
                "technique_details",
                "string",
                "Additional operative details (e.g., 'intraoperative mapping', 'iMRI-guided').",
            ),
            FieldDoc::new(
                "complications",
                "string",
                "Intraoperative or postoperative complications if mentioned.",
            ),
        ]);
        fields
    }
}
