//! cg-schema - Structured-extraction schema for glioma chart review
//!
//! Serde records for the variables abstracted from clinical notes: tumor
//! pathology, genetic testing, medications and surgery. Each record can
//! describe its fields and check its own consistency.

pub mod annotation;
pub mod describe;
pub mod drugs;
pub mod genes;
pub mod mention;
pub mod pathology;
mod schema_enum;
pub mod surgery;
pub mod validate;

pub use annotation::GliomaCaseAnnotation;
pub use describe::{schema_document, Described, FieldDoc};
pub use mention::SpanMention;
pub use validate::{SchemaViolation, Validate};
