//! Error types for cg-core

use thiserror::Error;

/// Core error type for cohortgen
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Study configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse study configuration
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: A required input file does not exist
    #[error("[E004] File not found: {path}")]
    FileNotFound { path: String },

    /// E005: CSV row does not have the expected number of columns
    #[error("[E005] Invalid CSV row {line} in {path}: expected {expected} columns, found {found}")]
    CsvRow {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// E006: Malformed value set document
    #[error("[E006] Invalid value set {path}: {message}")]
    ValueSetParse { path: String, message: String },

    /// E014: IO error with file path context
    #[error("[E014] IO error on '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E015: YAML parse error
    #[error("[E015] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E016: CSV read/write error
    #[error("[E016] CSV error on '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
