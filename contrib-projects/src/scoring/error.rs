//! Scoring error types.

use thiserror::Error;

/// Errors that can occur while scoring contributions.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A record carried a timestamp that is not RFC 3339.
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
