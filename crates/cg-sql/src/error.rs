//! Error types for cg-sql

use cg_core::CoreError;
use thiserror::Error;

/// SQL generation errors
#[derive(Error, Debug)]
pub enum SqlGenError {
    /// Count statement does not have the shape the view rewrite expects (G001)
    #[error("[G001] Cannot rewrite '{table}' as a view: {reason}")]
    ViewRewrite { table: String, reason: String },

    /// Template render error (G002)
    #[error("[G002] Count template render error: {0}")]
    RenderError(String),

    /// A code list with no entries cannot be rendered as a VALUES list (G003)
    #[error("[G003] Code list for view '{view}' is empty")]
    EmptyCodeList { view: String },

    /// Criteria columns and values differ in length (G004)
    #[error("[G004] Criteria view '{view}' has {columns} columns but {values} values")]
    CriteriaMismatch {
        view: String,
        columns: usize,
        values: usize,
    },

    /// A cube needs at least one grouping column (G005)
    #[error("[G005] Cube on '{source_table}' has no columns")]
    EmptyColumns { source_table: String },

    /// A union needs at least one source view (G006)
    #[error("[G006] Union view '{view}' has no source views")]
    EmptyUnion { view: String },

    /// Invalid explicit table name (G007)
    #[error("[G007] Invalid table name: {0}")]
    InvalidName(String),

    /// Core error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for SqlGenError
pub type SqlGenResult<T> = Result<T, SqlGenError>;

impl From<minijinja::Error> for SqlGenError {
    fn from(err: minijinja::Error) -> Self {
        SqlGenError::RenderError(err.to_string())
    }
}
