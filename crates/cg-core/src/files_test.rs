use super::*;
use crate::naming::Naming;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn study(dir: &Path) -> StudyPaths {
    StudyPaths::new(dir, &StudyConfig::with_name("glioma")).unwrap()
}

#[test]
fn test_read_text_missing_file_fails_fast() {
    let dir = tempdir().unwrap();
    let err = read_text(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_read_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("note.txt");
    assert!(matches!(
        read_bytes(&path).unwrap_err(),
        CoreError::FileNotFound { .. }
    ));
    fs::write(&path, b"MRI: lesion").unwrap();
    assert_eq!(read_bytes(&path).unwrap(), b"MRI: lesion");
}

#[test]
fn test_read_csv_missing_file_fails_fast() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    assert!(matches!(
        read_csv(&missing).err().unwrap(),
        CoreError::FileNotFound { .. }
    ));
    assert!(!missing.exists());
}

#[test]
fn test_read_json_missing_file_fails_fast() {
    let dir = tempdir().unwrap();
    let err = read_json::<serde_json::Value>(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound { .. }));
}

#[test]
fn test_missing_valueset_writes_nothing() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    assert!(paths.load_valueset("absent.json").is_err());
    assert!(!paths.output_dir().exists());
    assert!(!paths.valueset_dir().exists());
}

#[test]
fn test_write_text_creates_directories_and_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a/b/c.sql");
    write_text(&path, "first").unwrap();
    write_text(&path, "second").unwrap();
    assert_eq!(read_text(&path).unwrap(), "second");
}

#[test]
fn test_json_roundtrip_is_pretty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    let value = json!({"resourceType": "ValueSet", "id": "x"});
    write_json(&path, &value).unwrap();
    let text = read_text(&path).unwrap();
    assert!(text.contains("\n  \"id\": \"x\""));
    let back: serde_json::Value = read_json(&path).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_csv_roundtrip_without_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codes.csv");
    let rows = vec![
        vec!["http://snomed.info/sct", "393563007", "Glioma"],
        vec!["http://snomed.info/sct", "254938000", "Astrocytoma, NOS"],
    ];
    write_csv(&path, &rows).unwrap();

    let read: Vec<Vec<String>> = read_csv(&path).unwrap().collect::<CoreResult<_>>().unwrap();
    assert_eq!(read.len(), 2);
    assert_eq!(read[1][2], "Astrocytoma, NOS");

    // a second call starts from the first row again
    let first = read_csv(&path).unwrap().next().unwrap().unwrap();
    assert_eq!(first[1], "393563007");
}

#[test]
fn test_read_codings_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("topography.csv");
    fs::write(
        &path,
        "http://terminology.hl7.org/CodeSystem/icd-o-3,C71.1,Frontal lobe\n\
         http://terminology.hl7.org/CodeSystem/icd-o-3,C71.2,\"Temporal lobe, NOS\"\n",
    )
    .unwrap();
    let codes = read_codings_csv(&path).unwrap();
    assert_eq!(codes.len(), 2);
    assert_eq!(codes[1].display, "Temporal lobe, NOS");
}

#[test]
fn test_read_codings_csv_wrong_width() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "s,C71.1,Frontal lobe\ns,C71.2\n").unwrap();
    match read_codings_csv(&path).unwrap_err() {
        CoreError::CsvRow {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_study_paths_are_anchored_at_root() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    let root = dir.path().canonicalize().unwrap();
    assert_eq!(paths.root(), root.as_path());
    assert_eq!(paths.valueset("x.json"), root.join("valueset/x.json"));
    assert_eq!(paths.output("x.sql"), root.join("athena/x.sql"));
}

#[test]
fn test_load_valueset_single_or_list() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    write_json(&paths.valueset("one.json"), &json!({"id": "one"})).unwrap();
    write_json(&paths.valueset("many.json"), &json!([{"id": "a"}, {"id": "b"}])).unwrap();
    assert_eq!(paths.load_valueset("one.json").unwrap().len(), 1);
    assert_eq!(paths.load_valueset("many.json").unwrap().len(), 2);
}

#[test]
fn test_load_valueset_malformed() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    write_text(&paths.valueset("bad.json"), "\"just a string\"").unwrap();
    assert!(matches!(
        paths.load_valueset("bad.json").unwrap_err(),
        CoreError::ValueSetParse { .. }
    ));
}

#[test]
fn test_save_valueset_writes_list() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    let docs = vec![ValueSet::default()];
    let path = paths.save_valueset("saved.json", &docs).unwrap();
    let back: serde_json::Value = read_json(&path).unwrap();
    assert!(back.is_array());
}

#[test]
fn test_save_artifact_file_name_matches_table() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    let name = Naming::default().cohort("casedef", None);
    let artifact = SqlArtifact::new(name, "create or replace view glioma__cohort_casedef as select 1;");
    let path = paths.save_artifact(&artifact).unwrap();
    assert_eq!(path.file_name().unwrap(), "glioma__cohort_casedef.sql");
    assert_eq!(read_text(&path).unwrap(), artifact.contents);
}

#[test]
fn test_filter_expansion_file() {
    let dir = tempdir().unwrap();
    let paths = study(dir.path());
    write_json(
        &paths.valueset("topography.json"),
        &json!({
            "id": "topography",
            "expansion": {"contains": [
                {"system": "icdo3", "code": "C71.1", "display": "Frontal lobe"},
                {"system": "icdo3", "code": "C71.2", "display": "Temporal lobe"}
            ]}
        }),
    )
    .unwrap();
    let filtered = paths.filter_expansion_file("topography.json", &["FRONTAL"]).unwrap();
    assert_eq!(filtered.len(), 1);
    let codes = filtered[0].expansion_codings();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].code, "C71.1");
}
