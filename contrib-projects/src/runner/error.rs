//! Runner error types.

/// Errors that can occur during a run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Contribution fetch errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Scoring errors.
    #[error(transparent)]
    Scoring(#[from] crate::scoring::ScoringError),

    /// Card rendering errors.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),

    /// Document update errors.
    #[error(transparent)]
    Document(#[from] crate::document::DocumentError),
}
