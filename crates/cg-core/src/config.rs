//! Configuration types and parsing for study.yml

use crate::error::{CoreError, CoreResult};
use crate::naming::{Naming, StudyPrefix, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Config file names looked up in a study directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["study.yml", "study.yaml"];

/// Study configuration from study.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudyConfig {
    /// Study name
    pub name: String,

    /// Prefix of every generated table and view
    #[serde(default = "default_prefix")]
    pub prefix: StudyPrefix,

    /// Directory holding value set JSON and CSV inputs
    #[serde(default = "default_valueset_dir")]
    pub valueset_dir: String,

    /// Directory generated `.sql` files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Minimum distinct subjects per cube cell (small-cell suppression)
    #[serde(default = "default_min_subject")]
    pub min_subject: u32,

    /// Headerless `system,code,display` CSV files converted to value set views by `cg make`
    #[serde(default)]
    pub valuesets: Vec<String>,

    /// Cube tables generated by `cg make`
    #[serde(default)]
    pub cubes: Vec<CubeConfig>,

    /// Union catalogs generated by `cg make`
    #[serde(default)]
    pub unions: Vec<UnionConfig>,
}

/// One cube definition in study.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CubeConfig {
    /// Line-level cohort table the counts are derived from
    pub source: String,

    /// Columns in the CUBE group-by expression
    pub columns: Vec<String>,

    /// Which FHIR resource is counted
    #[serde(default)]
    pub resource: CountResource,

    /// Per-cube override of the study threshold
    #[serde(default)]
    pub min_subject: Option<u32>,

    /// Explicit output name; derived from `source` when absent
    #[serde(default)]
    pub name: Option<String>,

    /// Extra filter clauses applied to the source rows
    #[serde(default, rename = "where")]
    pub where_clauses: Vec<String>,
}

/// One union catalog definition in study.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionConfig {
    /// Output view name, prefixed on write
    pub name: String,

    /// Source value set views
    pub views: Vec<String>,
}

/// FHIR resource whose distinct references a cube counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountResource {
    /// `count(distinct subject_ref)`
    #[default]
    Patient,
    /// `count(distinct encounter_ref)`
    Encounter,
    /// `count(distinct documentreference_ref)`
    #[serde(alias = "documentreference")]
    Document,
}

impl CountResource {
    /// Resource tag used inside the count query.
    pub fn fhir_resource(&self) -> &'static str {
        match self {
            CountResource::Patient => "patient",
            CountResource::Encounter => "encounter",
            CountResource::Document => "documentreference",
        }
    }

    /// Suffix of the cube name. `Document` is `document`, not its resource tag.
    pub fn name_suffix(&self) -> &'static str {
        match self {
            CountResource::Patient => "patient",
            CountResource::Encounter => "encounter",
            CountResource::Document => "document",
        }
    }

    /// Column counted with `count(distinct ...)`.
    pub fn subject_ref(&self) -> &'static str {
        match self {
            CountResource::Patient => "subject_ref",
            CountResource::Encounter => "encounter_ref",
            CountResource::Document => "documentreference_ref",
        }
    }
}

impl fmt::Display for CountResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_suffix())
    }
}

fn default_prefix() -> StudyPrefix {
    Naming::default().study_prefix().clone()
}

fn default_valueset_dir() -> String {
    "valueset".to_string()
}

fn default_output_dir() -> String {
    "athena".to_string()
}

const DEFAULT_MIN_SUBJECT: u32 = 1;

fn default_min_subject() -> u32 {
    DEFAULT_MIN_SUBJECT
}

impl StudyConfig {
    /// Minimal configuration for a study that only uses defaults.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: default_prefix(),
            valueset_dir: default_valueset_dir(),
            output_dir: default_output_dir(),
            min_subject: default_min_subject(),
            valuesets: Vec::new(),
            cubes: Vec::new(),
            unions: Vec::new(),
        }
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: StudyConfig =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                message: format!("{}: {}", path.display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a study directory (study.yml or study.yaml)
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for file_name in CONFIG_FILE_NAMES {
            let candidate = dir.join(file_name);
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }
        Err(CoreError::ConfigNotFound {
            path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
        })
    }

    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Study name cannot be empty".to_string(),
            });
        }

        if self.prefix.contains("__") {
            return Err(CoreError::ConfigInvalid {
                message: format!("Prefix '{}' must not contain '__'", self.prefix),
            });
        }

        for cube in &self.cubes {
            if cube.columns.is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Cube on '{}' has no columns", cube.source),
                });
            }
        }

        for union in &self.unions {
            if union.views.is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Union '{}' has no views", union.name),
                });
            }
        }

        Ok(())
    }

    /// Naming engine for this study's prefix
    pub fn naming(&self) -> Naming {
        Naming::new(self.prefix.clone())
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self::with_name(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
