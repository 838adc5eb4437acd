//! cg-core - Core library for cohortgen
//!
//! This crate provides the study configuration, the naming convention
//! engine, value set and code-list transforms, SQL text helpers and the
//! file persistence layer shared by the SQL generators and the CLI.

pub mod artifact;
pub mod coding;
pub mod config;
pub mod error;
pub mod files;
pub mod naming;
mod newtype_string;
pub mod sql_utils;
pub mod study;
pub mod table_name;
pub mod valueset;

pub use artifact::SqlArtifact;
pub use coding::{filter_by_codes, filter_by_codings, Coding};
pub use config::{CountResource, CubeConfig, StudyConfig, UnionConfig};
pub use error::{CoreError, CoreResult};
pub use files::StudyPaths;
pub use naming::{Naming, Role, StudyPrefix};
pub use study::Study;
pub use table_name::TableName;
pub use valueset::{filter_expansion, ContainsEntry, ValueSet, ValueSetFile};
