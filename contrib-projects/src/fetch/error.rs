//! Contribution fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching contributions.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub client or transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The API rejected the credential.
    #[error("GitHub API rejected the token with status {status}: {body}")]
    Unauthorized { status: u16, body: String },

    /// The API answered with a non-success status.
    #[error("GitHub API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The GraphQL envelope carried a top-level `errors` list.
    #[error("GraphQL errors: {errors}")]
    GraphQl { errors: String },

    /// The response held no user object for the login.
    #[error("No user data found in GitHub API response for '{login}'")]
    UserNotFound { login: String },

    /// The response body was not the expected JSON envelope.
    #[error("Failed to decode GitHub API response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}
