//! Resource coordinates for the Run custom resource.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Identifies the Run custom resource on the cluster: API group, version,
/// plural and kind.
///
/// These are deployment facts, not behavior, so they are injected into the
/// client rather than hardcoded at call sites. Defaults match the platform's
/// standard CRD registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunResourceConfig {
    pub group: String,
    pub version: String,
    pub plural: String,
    pub kind: String,
}

impl Default for RunResourceConfig {
    fn default() -> Self {
        Self {
            group: "aggregator.runway.io".to_string(),
            version: "v1".to_string(),
            plural: "runs".to_string(),
            kind: "Run".to_string(),
        }
    }
}

impl RunResourceConfig {
    /// The `apiVersion` string used in manifests.
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    /// Load coordinates from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}
