//! GitHub credentials.

use super::ConfigError;
use std::fmt;

/// Login and token pair used to query the GitHub API.
#[derive(Clone)]
pub struct GitHubCredentials {
    login: String,
    token: String,
}

impl GitHubCredentials {
    /// Validates and builds the credential pair.
    ///
    /// Absent or whitespace-only values are rejected so the failure is reported
    /// before any request is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first value that is absent.
    pub fn new(login: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let login = require(login, "USERNAME")?;
        let token = require(token, "GITHUB_TOKEN")?;
        Ok(Self { login, token })
    }

    /// Returns the GitHub login whose contributions are scored.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the API token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

// Keeps the token out of logs.
impl fmt::Debug for GitHubCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubCredentials")
            .field("login", &self.login)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn require(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing { name }),
    }
}
