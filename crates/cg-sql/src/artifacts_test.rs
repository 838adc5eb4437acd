use super::*;
use crate::error::SqlGenError;
use cg_core::files::{read_text, write_text};
use cg_core::{CoreError, StudyConfig};
use tempfile::{tempdir, TempDir};

fn study() -> (TempDir, Study) {
    let dir = tempdir().unwrap();
    let study = Study::new(dir.path(), StudyConfig::default()).unwrap();
    (dir, study)
}

fn codes() -> Vec<Coding> {
    vec![
        Coding::new("http://snomed.info/sct", "393563007", "Glioma"),
        Coding::new("http://snomed.info/sct", "254938000", "Astrocytoma"),
    ]
}

#[test]
fn test_define_writes_prefixed_view() {
    let (_dir, study) = study();
    let path = define(&study, &codes(), "valueset_dx").unwrap();
    assert_eq!(path, study.paths.output("glioma__valueset_dx.sql"));
    let sql = read_text(&path).unwrap();
    assert!(sql.starts_with("create or replace view glioma__valueset_dx as"));
}

#[test]
fn test_include_and_exclude_names() {
    let (_dir, study) = study();
    let included = include(&study, &codes(), "dx").unwrap();
    let excluded = exclude(&study, &codes(), "dx").unwrap();
    assert!(included.ends_with("glioma__include_dx.sql"));
    assert!(excluded.ends_with("glioma__exclude_dx.sql"));
}

#[test]
fn test_define_empty_writes_nothing() {
    let (_dir, study) = study();
    assert!(matches!(
        define(&study, &[], "dx").unwrap_err(),
        SqlGenError::EmptyCodeList { .. }
    ));
    assert!(!study.paths.output_dir().exists());
}

#[test]
fn test_criteria_view_writes_file() {
    let (_dir, study) = study();
    let path = criteria_view(&study, "criteria_age", &["age_min"], &["18"]).unwrap();
    assert!(path.ends_with("glioma__criteria_age.sql"));
    assert!(read_text(&path).unwrap().contains("(18)"));
}

#[test]
fn test_union_view_list_writes_file() {
    let (_dir, study) = study();
    let path = union_view_list(
        &study,
        &["glioma__include_dx", "glioma__include_rx"],
        "valueset_all",
    )
    .unwrap();
    let sql = read_text(&path).unwrap();
    assert!(sql.contains("select 'include_dx' as valueset"));
    assert!(sql.contains("\n UNION select 'include_rx' as valueset"));
}

#[test]
fn test_csv_view_name() {
    let (_dir, study) = study();
    assert_eq!(
        csv_view_name(&study, "glioma__valueset_topography.csv"),
        "valueset_topography"
    );
    assert_eq!(csv_view_name(&study, "morphology.csv"), "morphology");
}

#[test]
fn test_csv_to_sql() {
    let (_dir, study) = study();
    write_text(
        &study.paths.valueset("glioma__valueset_topography.csv"),
        "http://terminology.hl7.org/CodeSystem/icd-o-3,C71.2,Temporal lobe\n\
         http://terminology.hl7.org/CodeSystem/icd-o-3,C71.1,Frontal lobe\n",
    )
    .unwrap();
    let path = csv_to_sql(&study, "glioma__valueset_topography.csv").unwrap();
    assert!(path.ends_with("glioma__valueset_topography.sql"));
    let sql = read_text(&path).unwrap();
    let frontal = sql.find("C71.1").unwrap();
    let temporal = sql.find("C71.2").unwrap();
    assert!(frontal < temporal);
}

#[test]
fn test_csv_to_sql_missing_file() {
    let (_dir, study) = study();
    let err = csv_to_sql(&study, "absent.csv").unwrap_err();
    assert!(matches!(err, SqlGenError::Core(CoreError::FileNotFound { .. })));
    assert!(!study.paths.output_dir().exists());
}
