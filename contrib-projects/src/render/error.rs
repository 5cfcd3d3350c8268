//! Card rendering error types.

/// Card rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// The badge service URL could not be built.
    #[error("Invalid badge URL: {0}")]
    BadgeUrl(#[from] url::ParseError),
}
