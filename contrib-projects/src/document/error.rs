//! Document update error types.

use thiserror::Error;

/// Errors that can occur while updating the marked document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document does not exist.
    #[error("Document not found at '{path}'")]
    Missing { path: String },

    /// The document exists but could not be read.
    #[error("Failed to read document '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A sentinel marker is absent.
    #[error("Required marker '{marker}' not found in '{path}'")]
    MissingMarker { path: String, marker: String },

    /// The end marker only appears before the start marker.
    #[error("Marker '{end}' does not follow '{start}' in '{path}'")]
    MarkersOutOfOrder {
        path: String,
        start: String,
        end: String,
    },

    /// The updated document could not be written.
    #[error("Failed to write document '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
