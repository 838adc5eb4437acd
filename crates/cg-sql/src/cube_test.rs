use super::*;
use crate::counts::TemplateCountBuilder;
use cg_core::files::read_text;
use cg_core::StudyConfig;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::tempdir;

/// Builder returning a fixed statement, for exercising the rewrite in isolation.
struct FixedBuilder(String);

impl CountBuilder for FixedBuilder {
    fn count_table(&self, _table_name: &TableName, _spec: &CubeSpec) -> SqlGenResult<String> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_cube_spec_requires_columns() {
    let columns: [&str; 0] = [];
    let err = CubeSpec::patient("glioma__cohort_casedef", columns).unwrap_err();
    assert!(matches!(err, SqlGenError::EmptyColumns { .. }));
}

#[test]
fn test_resolve_table_name() {
    let naming = Naming::default();
    let spec = CubeSpec::patient("glioma__cohort_casedef", ["gender"]).unwrap();
    assert_eq!(spec.resolve_table_name(&naming), "glioma__cube_patient_casedef");

    let spec = CubeSpec::encounter("glioma__cohort_casedef", ["gender"]).unwrap();
    assert_eq!(spec.resolve_table_name(&naming), "glioma__cube_encounter_casedef");

    let explicit = spec.with_table_name(TableName::try_new("my_cube").unwrap());
    assert_eq!(explicit.resolve_table_name(&naming), "my_cube");
}

#[test]
fn test_render_cube_is_a_view() {
    let spec = CubeSpec::patient("glioma__cohort_casedef", ["gender"]).unwrap();
    let artifact =
        render_cube(&TemplateCountBuilder::new(), &Naming::default(), &spec).unwrap();
    assert_eq!(artifact.file_name(), "glioma__cube_patient_casedef.sql");
    assert!(artifact
        .contents
        .starts_with("CREATE or replace VIEW glioma__cube_patient_casedef AS "));
    assert!(artifact.contents.ends_with(';'));
    assert!(!artifact.contents.contains("CREATE TABLE"));
    assert!(!artifact.contents.contains(");"));
}

#[test]
fn test_render_cube_rejects_unexpected_statement() {
    let builder = FixedBuilder("create table glioma__cube_patient_t as (select 1);".to_string());
    let spec = CubeSpec::patient("t", ["gender"]).unwrap();
    let err = render_cube(&builder, &Naming::default(), &spec).unwrap_err();
    assert!(matches!(err, SqlGenError::ViewRewrite { .. }));
}

#[test]
fn test_render_cube_with_fixed_builder() {
    let builder = FixedBuilder("CREATE TABLE glioma__cube_patient_t AS (SELECT 1);".to_string());
    let spec = CubeSpec::patient("t", ["gender"]).unwrap();
    let artifact = render_cube(&builder, &Naming::default(), &spec).unwrap();
    assert_eq!(
        artifact.contents,
        "CREATE or replace VIEW glioma__cube_patient_t AS SELECT 1;"
    );
}

fn cube_config(source: &str, columns: &[&str]) -> CubeConfig {
    CubeConfig {
        source: source.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        resource: CountResource::Patient,
        min_subject: None,
        name: None,
        where_clauses: Vec::new(),
    }
}

#[test]
fn test_from_config() {
    let mut config = cube_config("glioma__cohort_casedef", &["b", "a"]);
    config.resource = CountResource::Encounter;
    config.where_clauses = vec!["a is not null".to_string()];
    let spec = CubeSpec::from_config(&config, None, 10).unwrap();
    assert_eq!(spec.resource, CountResource::Encounter);
    assert_eq!(spec.min_subject, 10);
    assert_eq!(spec.columns.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(spec.where_clauses, vec!["a is not null"]);
}

#[test]
fn test_from_config_overrides() {
    let mut config = cube_config("t", &["a"]);
    config.min_subject = Some(3);
    config.name = Some("glioma__cube_custom".to_string());
    let spec = CubeSpec::from_config(&config, None, 10).unwrap();
    assert_eq!(spec.min_subject, 3);
    assert_eq!(
        spec.resolve_table_name(&Naming::default()),
        "glioma__cube_custom"
    );
}

#[test]
fn test_from_config_override_beats_entry_threshold() {
    let mut config = cube_config("t", &["a"]);
    config.min_subject = Some(1);
    let spec = CubeSpec::from_config(&config, Some(11), 10).unwrap();
    assert_eq!(spec.min_subject, 11);

    config.min_subject = None;
    let spec = CubeSpec::from_config(&config, Some(11), 10).unwrap();
    assert_eq!(spec.min_subject, 11);
}

#[test]
fn test_from_config_empty_name() {
    let mut config = cube_config("t", &["a"]);
    config.name = Some(String::new());
    assert!(matches!(
        CubeSpec::from_config(&config, None, 1).unwrap_err(),
        SqlGenError::InvalidName(_)
    ));
}

#[test]
fn test_cube_writes_view_file() {
    let dir = tempdir().unwrap();
    let study = Study::new(dir.path(), StudyConfig::default()).unwrap();
    let spec = CubeSpec::patient_min10("glioma__cohort_casedef", ["gender"]).unwrap();
    let path = cube(&TemplateCountBuilder::new(), &study, &spec).unwrap();
    assert_eq!(path, study.paths.output("glioma__cube_patient_casedef.sql"));
    let sql = read_text(&path).unwrap();
    assert!(sql.contains("WHERE cnt_patient >= 10"));
}

proptest! {
    #[test]
    fn prop_column_order_does_not_change_sql(
        columns in proptest::collection::btree_set("[a-z]{1,8}", 1..5)
    ) {
        let forward: Vec<String> = columns.iter().cloned().collect();
        let reverse: Vec<String> = columns.iter().rev().cloned().collect();
        let naming = Naming::default();
        let builder = TemplateCountBuilder::new();
        let a = render_cube(&builder, &naming, &CubeSpec::patient("t", &forward).unwrap()).unwrap();
        let b = render_cube(&builder, &naming, &CubeSpec::patient("t", &reverse).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }
}
