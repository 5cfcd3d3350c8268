//! Contribution fetching through the GitHub GraphQL API.
//!
//! A single query returns the user's 100 most recently created pull requests
//! and issues, each annotated with the metadata scoring needs about its
//! target repository.

mod error;
mod records;

pub use error::FetchError;
pub use records::{
    Connection, ContributionKind, ContributionRecord, ContributionState, IssueNode,
    PullRequestNode, RepositoryOwner, RepositoryRef, UserContributions,
};

use crate::config::GitHubCredentials;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, info_span, Instrument};

/// Contributions query; both collections are capped at one page of 100.
pub const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    pullRequests(first: 100, orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        repository {
          name
          owner {
            login
          }
          stargazerCount
          isArchived
          isFork
        }
        state
        merged
        createdAt
      }
    }
    issues(first: 100, orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        repository {
          name
          owner {
            login
          }
          stargazerCount
          isArchived
          isFork
        }
        state
        createdAt
      }
    }
  }
}
"#;

/// GraphQL endpoint path, relative to the API base URI.
const GRAPHQL_ROUTE: &str = "/graphql";

/// Fetches a user's recent contributions.
pub struct ContributionFetcher {
    octocrab: Octocrab,
    login: String,
}

impl ContributionFetcher {
    /// Builds an authenticated fetcher for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::GitHubError`] if the HTTP client cannot be built.
    pub fn new(credentials: &GitHubCredentials) -> Result<Self, FetchError> {
        let octocrab = Octocrab::builder()
            .personal_token(credentials.token().to_string())
            .build()?;
        Ok(Self {
            octocrab,
            login: credentials.login().to_string(),
        })
    }

    /// Returns the login whose contributions are fetched.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Issues the contributions query and returns the raw user object.
    ///
    /// Individual records are not validated here; timestamps and repository
    /// references are checked during scoring.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-success status,
    /// GraphQL-level errors, or a response without a user object.
    pub async fn fetch(&self) -> Result<UserContributions, FetchError> {
        let span = info_span!("fetch_contributions", user = %self.login);

        async {
            info!("Fetching contributions");

            let body = request_body(&self.login);
            let response = self.octocrab._post(GRAPHQL_ROUTE, Some(&body)).await?;
            let status = response.status().as_u16();
            let text = self.octocrab.body_to_string(response).await?;
            debug!(status, bytes = text.len(), "Received GraphQL response");

            let contributions = decode_response(&self.login, status, &text)?;

            info!(count = contributions.pull_requests.len(), "Found pull requests");
            info!(count = contributions.issues.len(), "Found issues");
            Ok(contributions)
        }
        .instrument(span)
        .await
    }
}

/// Builds the `{query, variables}` request body.
fn request_body(login: &str) -> Value {
    json!({
        "query": CONTRIBUTIONS_QUERY,
        "variables": { "username": login }
    })
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
    errors: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    user: Option<UserContributions>,
}

/// Interprets a raw GraphQL HTTP response.
///
/// # Errors
///
/// * [`FetchError::Unauthorized`] for 401 and 403 responses.
/// * [`FetchError::Http`] for any other non-2xx status.
/// * [`FetchError::Decode`] if the body is not a GraphQL envelope.
/// * [`FetchError::GraphQl`] if the envelope has a top-level `errors` list.
/// * [`FetchError::UserNotFound`] if `data.user` is missing or null.
pub fn decode_response(
    login: &str,
    status: u16,
    body: &str,
) -> Result<UserContributions, FetchError> {
    match status {
        200..=299 => {}
        401 | 403 => {
            return Err(FetchError::Unauthorized {
                status,
                body: body.to_string(),
            })
        }
        _ => {
            return Err(FetchError::Http {
                status,
                body: body.to_string(),
            })
        }
    }

    let envelope: Envelope =
        serde_json::from_str(body).map_err(|source| FetchError::Decode { source })?;

    if let Some(errors) = envelope.errors {
        return Err(FetchError::GraphQl {
            errors: Value::Array(errors).to_string(),
        });
    }

    envelope
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| FetchError::UserNotFound {
            login: login.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_query_and_username() {
        let body = request_body("octocat");

        assert_eq!(body["variables"]["username"], "octocat");
        assert_eq!(body["query"], CONTRIBUTIONS_QUERY);
    }

    #[test]
    fn query_requests_one_page_of_each_collection() {
        assert!(CONTRIBUTIONS_QUERY.contains("pullRequests(first: 100"));
        assert!(CONTRIBUTIONS_QUERY.contains("issues(first: 100"));
        assert!(CONTRIBUTIONS_QUERY.contains("direction: DESC"));
    }

    #[test]
    fn decodes_user_object() {
        let body = r#"{
            "data": {
                "user": {
                    "pullRequests": { "nodes": [{
                        "repository": {
                            "name": "serde",
                            "owner": { "login": "serde-rs" },
                            "stargazerCount": 9000,
                            "isArchived": false,
                            "isFork": false
                        },
                        "state": "OPEN",
                        "merged": false,
                        "createdAt": "2025-09-01T00:00:00Z"
                    }]},
                    "issues": { "nodes": [] }
                }
            }
        }"#;

        let user = decode_response("octocat", 200, body).unwrap();

        assert_eq!(user.pull_requests.len(), 1);
        assert!(user.issues.is_empty());
    }

    #[test]
    fn unauthorized_status_includes_status_and_body() {
        let body = r#"{"message":"Bad credentials"}"#;
        let err = decode_response("octocat", 401, body).unwrap_err();

        assert!(matches!(err, FetchError::Unauthorized { status: 401, .. }));
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Bad credentials"));
    }

    #[test]
    fn server_error_is_http_error() {
        let err = decode_response("octocat", 502, "upstream unavailable").unwrap_err();

        assert!(matches!(err, FetchError::Http { status: 502, .. }));
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn graphql_errors_are_reported_with_payload() {
        let body = r#"{
            "data": { "user": null },
            "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to a User" }]
        }"#;
        let err = decode_response("ghost-user", 200, body).unwrap_err();

        match err {
            FetchError::GraphQl { errors } => {
                assert!(errors.contains("NOT_FOUND"));
                assert!(errors.contains("Could not resolve to a User"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_user_is_not_found() {
        let err = decode_response("ghost-user", 200, r#"{"data":{"user":null}}"#).unwrap_err();

        assert!(matches!(err, FetchError::UserNotFound { ref login } if login == "ghost-user"));
    }

    #[test]
    fn missing_data_is_not_found() {
        let err = decode_response("octocat", 200, "{}").unwrap_err();
        assert!(matches!(err, FetchError::UserNotFound { .. }));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = decode_response("octocat", 200, "<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
