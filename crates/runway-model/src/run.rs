//! The `Run` record: one execution of an experiment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle state of a [`Run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Resource exists but the controller has not assigned a state yet.
    #[default]
    Creating,
    Queued,
    Running,
    Complete,
    Cancelled,
    Failed,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creating => write!(f, "CREATING"),
            Self::Queued => write!(f, "QUEUED"),
            Self::Running => write!(f, "RUNNING"),
            Self::Complete => write!(f, "COMPLETE"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// One execution of an experiment, tracked as a `Run` custom resource.
///
/// Serializing a `Run` produces the CRD `spec` block; field names follow the
/// platform schema (kebab-case). `namespace` and `creation_timestamp` are
/// populated from object metadata on read and are never part of the spec.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Run {
    pub name: String,
    /// Name of the experiment this run belongs to.
    pub experiment_name: String,
    pub state: RunStatus,
    /// Metric key/value pairs reported by the run.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metrics: HashMap<String, String>,
    /// Command-line parameters the run was submitted with.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    pub pod_count: u32,
    /// Label selector for the pods backing this run.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub pod_selector: HashMap<String, String>,
    /// Namespace the record was read from (metadata, not spec).
    #[serde(skip)]
    pub namespace: Option<String>,
    /// Creation time of the cluster object (metadata, not spec).
    #[serde(skip)]
    pub creation_timestamp: Option<DateTime<Utc>>,
}

impl Run {
    pub fn new(name: &str, experiment_name: &str) -> Self {
        Self {
            name: name.to_string(),
            experiment_name: experiment_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: RunStatus) -> Self {
        self.state = state;
        self
    }

    pub fn with_pod_count(mut self, pod_count: u32) -> Self {
        self.pod_count = pod_count;
        self
    }

    pub fn with_metric(mut self, key: &str, value: &str) -> Self {
        self.metrics.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_parameter(mut self, parameter: &str) -> Self {
        self.parameters.push(parameter.to_string());
        self
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.state)
    }
}
