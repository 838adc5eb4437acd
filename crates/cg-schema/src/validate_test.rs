use super::*;
use crate::pathology::CancerGrade;

#[test]
fn test_default_annotation_is_valid() {
    assert!(GliomaCaseAnnotation::default().validate().is_empty());
}

#[test]
fn test_topography_pattern() {
    let mut mention = TopographyMention {
        mention: SpanMention::cited(["left frontal lobe"]),
        code: Some("C71.1".to_string()),
        description: None,
    };
    assert!(mention.validate().is_empty());

    mention.code = Some("C71".to_string());
    assert!(mention.validate().is_empty());

    mention.code = Some("71.1".to_string());
    let violations = mention.validate();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "code");
}

#[test]
fn test_morphology_pattern() {
    let mention = MorphologyMention {
        mention: SpanMention::cited(["astrocytoma"]),
        code: Some("M-9400/3".to_string()),
        description: None,
    };
    assert_eq!(mention.validate().len(), 1);
}

#[test]
fn test_spans_without_mention() {
    let mention = GradeMention {
        mention: SpanMention {
            has_mention: false,
            spans: vec!["WHO grade 2".to_string()],
        },
        grade: CancerGrade::GradeII,
        description: None,
    };
    let violations = mention.validate();
    assert_eq!(violations.len(), 1);
    assert!(violations[0].to_string().starts_with("[S001] spans:"));
}

#[test]
fn test_medication_dates() {
    let mut medication = MedicationMention {
        mention: SpanMention::cited(["temozolomide"]),
        start_date: Some("2023-05-01".to_string()),
        end_date: Some("2023-11".to_string()),
        ..Default::default()
    };
    assert!(medication.validate().is_empty());

    medication.end_date = Some("2023-04-30".to_string());
    let violations = medication.validate();
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("before start_date"));

    medication.end_date = Some("May 2023".to_string());
    assert_eq!(medication.validate()[0].field, "end_date");
}

#[test]
fn test_annotation_paths_are_dotted() {
    let mut annotation = GliomaCaseAnnotation::default();
    annotation.topography_mention.code = Some("brain".to_string());
    annotation.rx_class_cancer_mention.medication.start_date = Some("soon".to_string());
    let fields: Vec<String> = annotation
        .validate()
        .into_iter()
        .map(|v| v.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            "topography_mention.code",
            "rx_class_cancer_mention.start_date",
        ]
    );
}
