//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was not supplied or was blank.
    #[error("Missing required configuration value: {name}")]
    Missing { name: &'static str },

    /// A supplied value failed validation.
    #[error("Invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}
