//! # Runway Model
//!
//! Domain records for the Runway experiment platform: the [`Run`] custom
//! resource and predicate-based filtering over run listings.
//!
//! This crate has no cluster dependencies. Anything that needs to reason
//! about runs without talking to Kubernetes (CLIs, reporting tools, tests)
//! depends on this crate alone; the API client lives in `runway-platform`.

pub mod filter;
pub mod run;

pub use filter::{FilterError, RunFilter, RunFilterCriteria, RunPredicate};
pub use run::{Run, RunStatus};
