//! Contribution records returned by the GraphQL query.

use serde::Deserialize;

/// The `data.user` object of the contributions query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContributions {
    /// Most recently created pull requests authored by the user.
    #[serde(default)]
    pub pull_requests: Connection<PullRequestNode>,

    /// Most recently created issues authored by the user.
    #[serde(default)]
    pub issues: Connection<IssueNode>,
}

impl UserContributions {
    /// Iterates every pull request, then every issue, as uniform records.
    ///
    /// Null list entries are skipped.
    pub fn records(&self) -> impl Iterator<Item = ContributionRecord<'_>> {
        let pull_requests = self
            .pull_requests
            .nodes
            .iter()
            .flatten()
            .map(|pr| ContributionRecord {
                kind: ContributionKind::PullRequest,
                created_at: &pr.created_at,
                repository: pr.repository.as_ref(),
                state: pr.state,
                merged: pr.merged,
            });

        let issues = self
            .issues
            .nodes
            .iter()
            .flatten()
            .map(|issue| ContributionRecord {
                kind: ContributionKind::Issue,
                created_at: &issue.created_at,
                repository: issue.repository.as_ref(),
                state: issue.state,
                merged: false,
            });

        pull_requests.chain(issues)
    }
}

/// A GraphQL connection holding a single page of nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    /// Page entries; GitHub may return `null` for entries it cannot resolve.
    #[serde(default = "Vec::new")]
    pub nodes: Vec<Option<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> Connection<T> {
    /// Number of entries returned by the API, including `null` ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the API returned no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A pull request node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    /// Target repository, absent if it was deleted or is inaccessible.
    pub repository: Option<RepositoryRef>,

    /// Pull request state.
    pub state: ContributionState,

    /// Whether the pull request was merged.
    #[serde(default)]
    pub merged: bool,

    /// ISO-8601 creation timestamp, e.g. `2025-03-01T12:00:00Z`.
    pub created_at: String,
}

/// An issue node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNode {
    /// Target repository, absent if it was deleted or is inaccessible.
    pub repository: Option<RepositoryRef>,

    /// Issue state.
    pub state: ContributionState,

    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Repository metadata embedded in each record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    /// Repository name.
    pub name: String,

    /// Owning user or organization.
    pub owner: RepositoryOwner,

    /// Number of stars.
    #[serde(default)]
    pub stargazer_count: u64,

    /// Whether the repository is archived.
    #[serde(default)]
    pub is_archived: bool,

    /// Whether the repository is a fork.
    #[serde(default)]
    pub is_fork: bool,
}

impl RepositoryRef {
    /// Returns the owner login.
    #[must_use]
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }

    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// Repository owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryOwner {
    /// Owner login.
    pub login: String,
}

/// State of a pull request or issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionState {
    Open,
    Closed,
    Merged,
    #[serde(other)]
    Unknown,
}

/// Whether a record is a pull request or an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    PullRequest,
    Issue,
}

/// Uniform view over a pull request or an issue.
#[derive(Debug, Clone, Copy)]
pub struct ContributionRecord<'a> {
    /// Record kind.
    pub kind: ContributionKind,
    /// Raw creation timestamp.
    pub created_at: &'a str,
    /// Target repository, if resolvable.
    pub repository: Option<&'a RepositoryRef>,
    /// Record state.
    pub state: ContributionState,
    /// Merge flag; always false for issues.
    pub merged: bool,
}
