//! Error taxonomy for the platform client.
//!
//! No error is swallowed or logged-and-continued: every failure aborts the
//! current operation and carries enough context to diagnose it (the original
//! pattern text, the offending run name, or the wrapped transport error).

use runway_model::FilterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    /// Malformed name-filter pattern. Raised before any network call.
    #[error(transparent)]
    InvalidPattern(#[from] FilterError),

    /// A raw cluster record did not match the expected Run schema.
    #[error("malformed Run resource: {0}")]
    Schema(#[source] serde_json::Error),

    /// A Run could not be encoded into a manifest. All-or-nothing: no
    /// partial envelope is ever sent.
    #[error("failed to encode Run manifest: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The cluster API call itself failed (network, auth, not-found,
    /// conflict). Status codes are not interpreted here and nothing is
    /// retried.
    #[error("cluster API request failed: {0}")]
    Transport(#[from] kube::Error),

    /// Patching a single run failed.
    #[error("failed to update run '{name}': {source}")]
    UpdateFailed {
        name: String,
        #[source]
        source: Box<PlatformError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_keeps_pattern_text() {
        let err = runway_model::RunFilterCriteria::new()
            .with_name_pattern("[unclosed")
            .compile()
            .unwrap_err();
        let err = PlatformError::from(err);
        assert!(err.to_string().contains("[unclosed"));
    }

    #[test]
    fn test_update_failed_names_the_run() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = PlatformError::UpdateFailed {
            name: "run-7".to_string(),
            source: Box::new(PlatformError::Schema(inner)),
        };
        assert!(err.to_string().contains("run-7"));
    }
}
