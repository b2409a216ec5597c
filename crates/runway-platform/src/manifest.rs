//! Conversion between typed [`Run`] records and the generic cluster object
//! envelope (kind / apiVersion / metadata / spec).

use crate::config::RunResourceConfig;
use crate::error::PlatformError;
use chrono::{DateTime, Utc};
use runway_model::Run;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The slice of object metadata this client reads and writes. Anything else
/// on the cluster object is left untouched by the merge patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
}

/// Transport envelope for a Run, shaped like any namespaced custom resource.
///
/// Invariant: `metadata.name` always equals `spec.name`; [`RunManifest::new`]
/// is the only constructor and enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: RunMetadata,
    pub spec: Run,
}

impl RunManifest {
    pub fn new(run: &Run, namespace: &str, config: &RunResourceConfig) -> Self {
        Self {
            api_version: config.api_version(),
            kind: config.kind.clone(),
            metadata: RunMetadata {
                name: run.name.clone(),
                namespace: Some(namespace.to_string()),
                creation_timestamp: None,
            },
            spec: run.clone(),
        }
    }

    /// Encode for the wire. All-or-nothing: an encoding failure yields an
    /// error and no envelope at all.
    pub fn to_value(&self) -> Result<Value, PlatformError> {
        serde_json::to_value(self).map_err(PlatformError::Serialization)
    }
}

/// What a listing item must contain to be decodable; unknown fields
/// (`status`, managed fields, annotations, ...) are ignored.
#[derive(Deserialize)]
struct RawObject {
    #[serde(default)]
    metadata: RunMetadata,
    spec: Run,
}

/// Decode one raw cluster record into a typed [`Run`].
///
/// The `spec` block carries the run fields; namespace and creation time come
/// from metadata. A record without a `spec` block is malformed and fails
/// with [`PlatformError::Schema`].
pub fn run_from_object(raw: &Value) -> Result<Run, PlatformError> {
    let object: RawObject = serde_json::from_value(raw.clone()).map_err(PlatformError::Schema)?;
    let mut run = object.spec;
    if run.name.is_empty() {
        run.name = object.metadata.name;
    }
    run.namespace = object.metadata.namespace;
    run.creation_timestamp = object.metadata.creation_timestamp;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_model::RunStatus;
    use serde_json::json;

    fn config() -> RunResourceConfig {
        RunResourceConfig::default()
    }

    #[test]
    fn test_manifest_metadata_name_equals_run_name() {
        let run = Run::new("run-3", "expA").with_state(RunStatus::Cancelled);
        let manifest = RunManifest::new(&run, "team-a", &config());
        assert_eq!(manifest.metadata.name, run.name);
        assert_eq!(manifest.metadata.namespace.as_deref(), Some("team-a"));
        assert_eq!(manifest.kind, "Run");
        assert_eq!(manifest.api_version, "aggregator.runway.io/v1");
    }

    #[test]
    fn test_manifest_wire_shape() {
        let run = Run::new("run-3", "expA").with_state(RunStatus::Cancelled);
        let value = RunManifest::new(&run, "team-a", &config()).to_value().unwrap();
        assert_eq!(value["apiVersion"], "aggregator.runway.io/v1");
        assert_eq!(value["kind"], "Run");
        assert_eq!(value["metadata"]["name"], "run-3");
        assert_eq!(value["spec"]["experiment-name"], "expA");
        assert_eq!(value["spec"]["state"], "CANCELLED");
    }

    #[test]
    fn test_round_trip_reproduces_the_run() {
        let run = Run::new("run-3", "expA")
            .with_state(RunStatus::Running)
            .with_pod_count(2)
            .with_metric("loss", "0.01")
            .with_parameter("--lr=0.1");
        let value = RunManifest::new(&run, "team-a", &config()).to_value().unwrap();
        let decoded = run_from_object(&value).unwrap();

        assert_eq!(decoded.name, run.name);
        assert_eq!(decoded.experiment_name, run.experiment_name);
        assert_eq!(decoded.state, run.state);
        assert_eq!(decoded.metrics, run.metrics);
        assert_eq!(decoded.parameters, run.parameters);
        assert_eq!(decoded.pod_count, run.pod_count);
        // Metadata side effects of the trip, not spec content.
        assert_eq!(decoded.namespace.as_deref(), Some("team-a"));
    }

    #[test]
    fn test_decode_reads_metadata() {
        let raw = json!({
            "apiVersion": "aggregator.runway.io/v1",
            "kind": "Run",
            "metadata": {
                "name": "run-9",
                "namespace": "team-b",
                "creationTimestamp": "2024-03-01T12:00:00Z"
            },
            "spec": {
                "name": "run-9",
                "experiment-name": "expB",
                "state": "QUEUED"
            }
        });
        let run = run_from_object(&raw).unwrap();
        assert_eq!(run.name, "run-9");
        assert_eq!(run.state, RunStatus::Queued);
        assert_eq!(run.namespace.as_deref(), Some("team-b"));
        assert!(run.creation_timestamp.is_some());
    }

    #[test]
    fn test_decode_falls_back_to_metadata_name() {
        let raw = json!({
            "metadata": { "name": "run-9" },
            "spec": { "experiment-name": "expB" }
        });
        let run = run_from_object(&raw).unwrap();
        assert_eq!(run.name, "run-9");
    }

    #[test]
    fn test_decode_without_spec_is_a_schema_error() {
        let raw = json!({ "metadata": { "name": "run-9" } });
        let err = run_from_object(&raw).unwrap_err();
        assert!(matches!(err, PlatformError::Schema(_)));
    }

    #[test]
    fn test_decode_with_invalid_state_is_a_schema_error() {
        let raw = json!({
            "metadata": { "name": "run-9" },
            "spec": { "state": "NOT_A_STATE" }
        });
        assert!(matches!(
            run_from_object(&raw).unwrap_err(),
            PlatformError::Schema(_)
        ));
    }
}
