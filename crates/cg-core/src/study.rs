//! Study loading

use crate::config::StudyConfig;
use crate::error::CoreResult;
use crate::files::StudyPaths;
use crate::naming::Naming;
use std::path::Path;

/// A loaded study: its configuration, naming engine and resolved directories.
#[derive(Debug, Clone)]
pub struct Study {
    /// Study configuration
    pub config: StudyConfig,

    /// Naming engine bound to the configured prefix
    pub naming: Naming,

    /// Value set and output directories, anchored at the study root
    pub paths: StudyPaths,
}

impl Study {
    /// Build a study rooted at `root` from an already-parsed configuration.
    pub fn new(root: &Path, config: StudyConfig) -> CoreResult<Self> {
        let paths = StudyPaths::new(root, &config)?;
        Ok(Self {
            naming: config.naming(),
            paths,
            config,
        })
    }

    /// Load a study from its root directory (study.yml or study.yaml).
    pub fn load(root: &Path) -> CoreResult<Self> {
        let config = StudyConfig::load_from_dir(root)?;
        log::debug!("Loaded study '{}' from {}", config.name, root.display());
        Self::new(root, config)
    }

    /// Load a study from an explicit config file; `root` still anchors all paths.
    pub fn load_with_config(root: &Path, config_path: &Path) -> CoreResult<Self> {
        let config = StudyConfig::load(config_path)?;
        Self::new(root, config)
    }
}

#[cfg(test)]
#[path = "study_test.rs"]
mod tests;
