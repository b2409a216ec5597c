//! Cluster collaborator seam: one-shot list and patch of raw records.

use crate::config::RunResourceConfig;
use crate::error::PlatformError;
use async_trait::async_trait;
use kube::api::{Api, DynamicObject, ListParams, Patch, PatchParams};
use kube::core::{ApiResource, GroupVersionKind};
use kube::Client;
use serde_json::Value;

/// Minimal surface the client needs from the cluster API.
///
/// Records cross this boundary as raw JSON objects; typed conversion happens
/// once, in [`crate::manifest`], never deeper in the call chain. Tests
/// substitute an in-process implementation here.
#[async_trait]
pub trait CustomResourceApi: Send + Sync {
    /// List raw records, namespace-scoped if a namespace is given,
    /// cluster-scoped otherwise.
    async fn list_records(&self, namespace: Option<&str>) -> Result<Vec<Value>, PlatformError>;

    /// Merge-patch a single record. Transport failures are propagated
    /// as-is, never retried.
    async fn patch_record(
        &self,
        namespace: &str,
        name: &str,
        body: Value,
    ) -> Result<Value, PlatformError>;
}

/// Production collaborator backed by a caller-owned [`kube::Client`].
///
/// The client handle (and with it authentication and connection lifecycle)
/// is constructed by the caller and injected; this type only scopes it to
/// the configured resource coordinates.
pub struct KubeResourceApi {
    client: Client,
    resource: ApiResource,
}

impl KubeResourceApi {
    pub fn new(client: Client, config: &RunResourceConfig) -> Self {
        let gvk = GroupVersionKind::gvk(&config.group, &config.version, &config.kind);
        let resource = ApiResource::from_gvk_with_plural(&gvk, &config.plural);
        Self { client, resource }
    }

    fn scoped(&self, namespace: Option<&str>) -> Api<DynamicObject> {
        match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &self.resource),
            None => Api::all_with(self.client.clone(), &self.resource),
        }
    }
}

#[async_trait]
impl CustomResourceApi for KubeResourceApi {
    async fn list_records(&self, namespace: Option<&str>) -> Result<Vec<Value>, PlatformError> {
        let list = self.scoped(namespace).list(&ListParams::default()).await?;
        list.items
            .into_iter()
            .map(|obj| serde_json::to_value(obj).map_err(PlatformError::Serialization))
            .collect()
    }

    async fn patch_record(
        &self,
        namespace: &str,
        name: &str,
        body: Value,
    ) -> Result<Value, PlatformError> {
        let patched = self
            .scoped(Some(namespace))
            .patch(name, &PatchParams::default(), &Patch::Merge(&body))
            .await?;
        serde_json::to_value(patched).map_err(PlatformError::Serialization)
    }
}
