//! Strongly-typed name of a generated table or view.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// Name of a generated SQL table or view (e.g. `glioma__cube_patient_casedef`).
    ///
    /// The same value is used inside the generated `CREATE ... VIEW` statement
    /// and as the stem of the `.sql` file it is written to.
    pub struct TableName;
}

impl TableName {
    /// Wrap a name the naming engine has already assembled from a non-empty prefix.
    pub(crate) fn from_joined(name: String) -> Self {
        debug_assert!(!name.is_empty(), "TableName must not be empty");
        Self(name)
    }

    /// File name of the SQL artifact holding this table's definition.
    pub fn sql_file_name(&self) -> String {
        format!("{}.sql", self.0)
    }
}

#[cfg(test)]
#[path = "table_name_test.rs"]
mod tests;
