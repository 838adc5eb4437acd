use super::*;
use pretty_assertions::assert_eq;

fn glioma() -> Naming {
    Naming::default()
}

fn name(value: &str) -> TableName {
    TableName::try_new(value).unwrap()
}

#[test]
fn test_codelist_to_view() {
    let codes = vec![
        Coding::new("http://snomed.info/sct", "393563007", "Glioma"),
        Coding::new("http://hl7.org/fhir/sid/icd-10-cm", "C71.1", "Malignant neoplasm; frontal lobe"),
    ];
    let sql = codelist_to_view(&codes, &name("glioma__include_dx")).unwrap();
    assert_eq!(
        sql,
        "create or replace view glioma__include_dx as select * from (values\n\
         ('http://hl7.org/fhir/sid/icd-10-cm', 'C71.1', 'Malignant neoplasm. frontal lobe')\n\
         ,('http://snomed.info/sct', '393563007', 'Glioma')\n\
         ) AS t (system, code, display) ;"
    );
}

#[test]
fn test_codelist_to_view_escapes_quotes() {
    let codes = vec![Coding::new("s", "1", "Crohn's disease")];
    let sql = codelist_to_view(&codes, &name("v")).unwrap();
    assert!(sql.contains("('s', '1', 'Crohns disease')"));
}

#[test]
fn test_codelist_to_view_is_order_independent() {
    let a = Coding::new("s", "1", "one");
    let b = Coding::new("s", "2", "two");
    let forward = codelist_to_view(&[a.clone(), b.clone()], &name("v")).unwrap();
    let reverse = codelist_to_view(&[b, a.clone(), a], &name("v")).unwrap();
    assert_eq!(forward, reverse);
}

#[test]
fn test_codelist_to_view_empty() {
    let err = codelist_to_view(&[], &name("glioma__include_dx")).unwrap_err();
    assert!(matches!(err, SqlGenError::EmptyCodeList { .. }));
}

#[test]
fn test_criteria_to_view() {
    let sql = criteria_to_view(
        &name("glioma__criteria_age"),
        &["age_min", "age_max"],
        &["18", "89"],
    )
    .unwrap();
    assert_eq!(
        sql,
        "create or replace view glioma__criteria_age as \n\
         select * from (values\n\
         (18,89)\n\
         ) AS t (age_min,age_max) ;"
    );
}

#[test]
fn test_criteria_to_view_literal_with_comma() {
    let sql = criteria_to_view(&name("glioma__c"), &["a", "b"], &["'x,y'", "2"]).unwrap();
    assert!(sql.contains("\n('x,y',2)\n"));
    assert!(sql.ends_with(") AS t (a,b) ;"));
}

#[test]
fn test_criteria_to_view_mismatch() {
    let err = criteria_to_view(&name("v"), &["a", "b"], &["1"]).unwrap_err();
    match err {
        SqlGenError::CriteriaMismatch {
            columns, values, ..
        } => {
            assert_eq!(columns, 2);
            assert_eq!(values, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_union_view() {
    let artifact = union_view(
        &glioma(),
        &["glioma__valueset_dx", "glioma__valueset_rx"],
        "valueset_all",
    )
    .unwrap();
    assert_eq!(artifact.table_name, "glioma__valueset_all");
    assert_eq!(
        artifact.contents,
        "create or replace view glioma__valueset_all as \n \
         select 'dx' as valueset, system, code, display from \n glioma__valueset_dx\n \
         UNION select 'rx' as valueset, system, code, display from \n glioma__valueset_rx"
    );
}

#[test]
fn test_union_view_does_not_double_prefix() {
    let artifact = union_view(&glioma(), &["glioma__valueset_dx"], "glioma__valueset_all").unwrap();
    assert_eq!(artifact.file_name(), "glioma__valueset_all.sql");
}

#[test]
fn test_union_view_empty() {
    let views: [&str; 0] = [];
    assert!(matches!(
        union_view(&glioma(), &views, "valueset_all").unwrap_err(),
        SqlGenError::EmptyUnion { .. }
    ));
}

#[test]
fn test_select_union_study_variables() {
    let sql = select_union_study_variables(&glioma(), &["glioma__cohort_dx", "rx"]);
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("\tselect distinct 'dx'\t as variable"));
    assert!(lines[0].ends_with(" from glioma__cohort_dx UNION"));
    assert!(lines[1].ends_with(" from glioma__cohort_rx"));
}

#[test]
fn test_select_lookup_study_variables() {
    let sql = select_lookup_study_variables(&glioma(), &["glioma__cohort_dx", "rx"]);
    assert_eq!(
        sql,
        "\tIF(lookup.variable='dx', lookup.valueset) AS dx,\n\
         \tIF(lookup.variable='rx', lookup.valueset) AS rx"
    );
}

#[test]
fn test_table_as_view() {
    let view = table_as_view("CREATE TABLE t AS (SELECT 1);", &name("t")).unwrap();
    assert_eq!(view, "CREATE or replace VIEW t AS SELECT 1;");
}

#[test]
fn test_table_as_view_ignores_surrounding_whitespace() {
    let view = table_as_view("\n  CREATE TABLE t AS (\nSELECT 1\n);\n", &name("t")).unwrap();
    assert_eq!(view, "CREATE or replace VIEW t AS \nSELECT 1\n;");
}

#[test]
fn test_table_as_view_only_rewrites_final_terminator() {
    let sql = "CREATE TABLE t AS (SELECT f(x); SELECT 2);";
    let view = table_as_view(sql, &name("t")).unwrap();
    assert_eq!(view, "CREATE or replace VIEW t AS SELECT f(x); SELECT 2;");
}

#[test]
fn test_table_as_view_rejects_casing_mismatch() {
    let err = table_as_view("create table t as (SELECT 1);", &name("t")).unwrap_err();
    assert!(matches!(err, SqlGenError::ViewRewrite { .. }));
}

#[test]
fn test_table_as_view_rejects_other_table() {
    let err = table_as_view("CREATE TABLE other AS (SELECT 1);", &name("t")).unwrap_err();
    assert!(err.to_string().contains("does not start with"));
}

#[test]
fn test_table_as_view_rejects_missing_terminator() {
    let err = table_as_view("CREATE TABLE t AS (SELECT 1)", &name("t")).unwrap_err();
    assert!(err.to_string().contains("does not end with"));
}
