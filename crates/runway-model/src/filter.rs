//! Predicate-based filtering for run listings.
//!
//! Each criterion is an independent predicate over a [`Run`]; a listing is
//! reduced by the logical AND of every predicate supplied. Adding a new
//! criterion means adding a predicate type, never touching existing ones.

use crate::run::{Run, RunStatus};
use regex::Regex;
use thiserror::Error;

/// Errors raised while building a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid name filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single independent filter criterion over a [`Run`].
pub trait RunPredicate: Send + Sync {
    fn matches(&self, run: &Run) -> bool;
}

/// Partial (search-anywhere) match of a compiled pattern against the run name.
pub struct NameMatches(pub Regex);

impl RunPredicate for NameMatches {
    fn matches(&self, run: &Run) -> bool {
        self.0.is_match(&run.name)
    }
}

/// Run state equals the given state.
pub struct HasState(pub RunStatus);

impl RunPredicate for HasState {
    fn matches(&self, run: &Run) -> bool {
        run.state == self.0
    }
}

/// Run state differs from the given state.
pub struct NotInState(pub RunStatus);

impl RunPredicate for NotInState {
    fn matches(&self, run: &Run) -> bool {
        run.state != self.0
    }
}

/// Run belongs to the named experiment (exact, case-sensitive).
pub struct BelongsToExperiment(pub String);

impl RunPredicate for BelongsToExperiment {
    fn matches(&self, run: &Run) -> bool {
        run.experiment_name == self.0
    }
}

/// Optional, independent criteria for a run listing.
///
/// Every supplied criterion must hold for a run to be kept; absent criteria
/// are vacuously true. An empty set of criteria matches everything.
#[derive(Debug, Clone, Default)]
pub struct RunFilterCriteria {
    /// Regular expression matched anywhere within the run name.
    pub name_pattern: Option<String>,
    /// Keep only runs in this state.
    pub state: Option<RunStatus>,
    /// Drop runs in this state.
    pub excluded_state: Option<RunStatus>,
    /// Keep only runs belonging to this experiment.
    pub experiment_name: Option<String>,
}

impl RunFilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_pattern(mut self, pattern: &str) -> Self {
        self.name_pattern = Some(pattern.to_string());
        self
    }

    pub fn with_state(mut self, state: RunStatus) -> Self {
        self.state = Some(state);
        self
    }

    pub fn without_state(mut self, state: RunStatus) -> Self {
        self.excluded_state = Some(state);
        self
    }

    pub fn with_experiment(mut self, experiment_name: &str) -> Self {
        self.experiment_name = Some(experiment_name.to_string());
        self
    }

    /// Compile the criteria into a predicate list.
    ///
    /// The name pattern is validated here, exactly once, before any record
    /// is evaluated; a malformed pattern fails the whole operation up front.
    pub fn compile(&self) -> Result<RunFilter, FilterError> {
        let mut predicates: Vec<Box<dyn RunPredicate>> = Vec::new();
        if let Some(ref pattern) = self.name_pattern {
            let regex = Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            predicates.push(Box::new(NameMatches(regex)));
        }
        if let Some(state) = self.state {
            predicates.push(Box::new(HasState(state)));
        }
        if let Some(state) = self.excluded_state {
            predicates.push(Box::new(NotInState(state)));
        }
        if let Some(ref experiment_name) = self.experiment_name {
            predicates.push(Box::new(BelongsToExperiment(experiment_name.clone())));
        }
        Ok(RunFilter { predicates })
    }
}

/// Compiled AND-composition of predicates. Empty means match everything.
pub struct RunFilter {
    predicates: Vec<Box<dyn RunPredicate>>,
}

impl std::fmt::Debug for RunFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunFilter")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl RunFilter {
    /// Pure membership test; no side effects, never fails.
    pub fn matches(&self, run: &Run) -> bool {
        self.predicates.iter().all(|p| p.matches(run))
    }

    /// Stable sub-sequence of `runs`: original relative order, no duplication.
    pub fn filter_all(&self, runs: Vec<Run>) -> Vec<Run> {
        runs.into_iter().filter(|run| self.matches(run)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
