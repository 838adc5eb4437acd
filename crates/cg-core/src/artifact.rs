//! Generated SQL artifacts

use crate::table_name::TableName;

/// A generated SQL statement and the table or view it defines.
///
/// The file an artifact is saved to is always `<table_name>.sql`, so a view
/// can be located from its name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlArtifact {
    pub table_name: TableName,
    pub contents: String,
}

impl SqlArtifact {
    pub fn new(table_name: TableName, contents: impl Into<String>) -> Self {
        Self {
            table_name,
            contents: contents.into(),
        }
    }

    /// `<table_name>.sql`
    pub fn file_name(&self) -> String {
        self.table_name.sql_file_name()
    }
}
