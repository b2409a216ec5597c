//! # Runway Platform
//!
//! Cluster-side client for the Runway experiment platform: lists and updates
//! `Run` custom resources through the Kubernetes API.
//!
//! ## Architecture
//!
//! - **[`RunsClient`]**: the two exposed operations, `list_runs` and
//!   `update_run`. Each is a single request with no retry, caching, or
//!   watch machinery; filtering comes from `runway-model`.
//! - **[`CustomResourceApi`]**: the injected cluster collaborator seam.
//!   Production code uses [`KubeResourceApi`] over a caller-owned
//!   [`kube::Client`]; tests substitute an in-process mock.
//! - **[`manifest`]**: conversion between typed [`Run`] records and the
//!   generic kind/apiVersion/metadata/spec envelope the cluster speaks.
//!
//! Resource coordinates (API group, version, plural) are configuration, not
//! behavior: see [`RunResourceConfig`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod manifest;

pub use api::{CustomResourceApi, KubeResourceApi};
pub use client::RunsClient;
pub use config::{ConfigError, RunResourceConfig};
pub use error::PlatformError;
pub use manifest::{run_from_object, RunManifest, RunMetadata};
pub use runway_model::{Run, RunFilterCriteria, RunStatus};
