use super::*;
use crate::error::CoreError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_study() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("study.yml"),
        "name: lgg\nprefix: lgg\noutput_dir: out\n",
    )
    .unwrap();
    let study = Study::load(dir.path()).unwrap();
    assert_eq!(study.config.name, "lgg");
    assert_eq!(study.naming.prefix("x"), "lgg__x");
    assert!(study.paths.output_dir().ends_with("out"));
}

#[test]
fn test_load_with_explicit_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.yml");
    fs::write(&config, "name: custom\n").unwrap();
    let study = Study::load_with_config(dir.path(), &config).unwrap();
    assert_eq!(study.config.name, "custom");
    assert_eq!(study.naming.prefix("x"), "glioma__x");
}

#[test]
fn test_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = Study::new(&missing, StudyConfig::default()).unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound { .. }));
}
