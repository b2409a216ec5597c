//! The two exposed operations: list runs, update one run.

use crate::api::{CustomResourceApi, KubeResourceApi};
use crate::config::RunResourceConfig;
use crate::error::PlatformError;
use crate::manifest::{run_from_object, RunManifest};
use runway_model::{Run, RunFilterCriteria};
use std::sync::Arc;
use tracing::debug;

/// Client for Run custom resources.
///
/// Holds no connection state of its own: the cluster handle is constructed
/// by the caller and injected, and every operation is exactly one request.
/// There is no retry, caching, or watch machinery here; callers that need
/// timeouts or cancellation wrap the collaborator themselves.
pub struct RunsClient {
    api: Arc<dyn CustomResourceApi>,
    config: RunResourceConfig,
}

impl RunsClient {
    /// Production client over a pre-built [`kube::Client`].
    pub fn new(client: kube::Client, config: RunResourceConfig) -> Self {
        let api = Arc::new(KubeResourceApi::new(client, &config));
        Self { api, config }
    }

    /// Client over any collaborator implementing [`CustomResourceApi`].
    pub fn with_api(api: Arc<dyn CustomResourceApi>, config: RunResourceConfig) -> Self {
        Self { api, config }
    }

    /// List runs, optionally namespace-scoped, reduced by `criteria`.
    ///
    /// The name pattern is validated before the cluster is contacted, so a
    /// malformed pattern never costs a network round trip. Result order is
    /// the order the cluster returned.
    pub async fn list_runs(
        &self,
        namespace: Option<&str>,
        criteria: &RunFilterCriteria,
    ) -> Result<Vec<Run>, PlatformError> {
        let filter = criteria.compile()?;

        debug!(namespace = namespace.unwrap_or("<cluster>"), "listing runs");
        let records = self.api.list_records(namespace).await?;

        let mut runs = Vec::with_capacity(records.len());
        for raw in &records {
            let run = run_from_object(raw)?;
            if filter.matches(&run) {
                runs.push(run);
            }
        }
        debug!(
            total = records.len(),
            matched = runs.len(),
            "run listing complete"
        );
        Ok(runs)
    }

    /// Merge-patch a single run in `namespace` with the record's current
    /// fields. Any failure past encoding is reported as
    /// [`PlatformError::UpdateFailed`] naming the run.
    pub async fn update_run(&self, run: &Run, namespace: &str) -> Result<(), PlatformError> {
        let body = RunManifest::new(run, namespace, &self.config).to_value()?;

        debug!(name = %run.name, namespace, "patching run");
        self.api
            .patch_record(namespace, &run.name, body)
            .await
            .map_err(|source| PlatformError::UpdateFailed {
                name: run.name.clone(),
                source: Box::new(source),
            })?;
        Ok(())
    }
}
