//! Pathology: ICD-O topography, morphology, behavior and grade

use crate::describe::{span_fields, Described, FieldDoc};
use crate::mention::SpanMention;
use crate::schema_enum::schema_enum;
use serde::{Deserialize, Serialize};

/// ICD-O topography code, `Cxx` or `Cxx.x` (e.g. `C71.1`).
pub type IcdOTopographyCode = String;

/// ICD-O morphology code, `####/#` (e.g. `9400/3`).
pub type IcdOMorphologyCode = String;

schema_enum! {
    /// ICD-O slash behavior code.
    pub enum IcdOBehavior {
        Benign => "/0",
        Uncertain => "/1",
        InSitu => "/2",
        MalignantPrimary => "/3",
        MalignantMetastatic => "/6",
        MalignantRecurrent => "/9",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    /// ICD-O tumor differentiation grade.
    pub enum CancerGrade {
        GradeI => "1",
        GradeII => "2",
        GradeIII => "3",
        GradeIV => "4",
        Unknown => "9",
        None => "None of the above",
    }
    default = None;
}

/// Anatomic site of the tumor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopographyMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub code: Option<IcdOTopographyCode>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Histologic type of the tumor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorphologyMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub code: Option<IcdOMorphologyCode>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub behavior: IcdOBehavior,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub grade: CancerGrade,

    #[serde(default)]
    pub description: Option<String>,
}

impl Described for TopographyMention {
    const NAME: &'static str = "TopographyMention";
    const DESCRIPTION: &'static str =
        "ICD-O topography for the tumor site, e.g. C71.1 for the frontal lobe.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.push(FieldDoc::new(
            "code",
            "string",
            "ICD-O topography code (Cxx or Cxx.x) for the anatomic site of the neoplasm.",
        ));
        fields.push(FieldDoc::new(
            "description",
            "string",
            "Human-readable ICD-O anatomic site corresponding to the topography code.",
        ));
        fields
    }
}

impl Described for MorphologyMention {
    const NAME: &'static str = "MorphologyMention";
    const DESCRIPTION: &'static str =
        "ICD-O morphology: the microscopic tumor cell type combined with its behavior code.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.push(FieldDoc::new(
            "code",
            "string",
            "ICD-O morphology code (####/#). Example: 9400/3 = Astrocytoma, NOS.",
        ));
        fields.push(FieldDoc::new(
            "description",
            "string",
            "Human-readable ICD-O histologic type.",
        ));
        fields
    }
}

impl Described for BehaviorMention {
    const NAME: &'static str = "BehaviorMention";
    const DESCRIPTION: &'static str = "ICD-O behavior of the tumor.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.push(
            FieldDoc::new(
                "behavior",
                "enum",
                "ICD-O slash behavior code (e.g., /3 = malignant primary site).",
            )
            .with_values(IcdOBehavior::labels()),
        );
        fields.push(FieldDoc::new(
            "description",
            "string",
            "Human-readable description of the behavior.",
        ));
        fields
    }
}

impl Described for GradeMention {
    const NAME: &'static str = "GradeMention";
    const DESCRIPTION: &'static str =
        "ICD-O grade: how closely tumor cells resemble normal tissue (1 well to 4 undifferentiated, 9 not assessed).";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.push(
            FieldDoc::new("grade", "enum", "ICD-O tumor differentiation grade.")
                .with_values(CancerGrade::labels()),
        );
        fields.push(FieldDoc::new(
            "description",
            "string",
            "Human-readable description of the grade.",
        ));
        fields
    }
}
