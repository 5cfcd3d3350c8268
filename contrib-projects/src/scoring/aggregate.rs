//! Per-repository contribution tallies.

use super::policy::{
    ISSUE_POINTS, MAX_POPULARITY_BONUS, MERGED_PULL_REQUEST_POINTS, POINTS_PER_STAR,
    PULL_REQUEST_POINTS,
};

/// Running counts for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAggregate {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Star count as first seen during the run.
    pub stars: u64,
    /// Authored pull requests.
    pub pr_count: u64,
    /// Authored pull requests that were merged.
    pub merged_pr_count: u64,
    /// Authored issues.
    pub issue_count: u64,
}

impl ProjectAggregate {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new(owner: &str, name: &str, stars: u64) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            stars,
            pr_count: 0,
            merged_pr_count: 0,
            issue_count: 0,
        }
    }

    /// Score earned from the user's own activity.
    #[must_use]
    pub fn contribution_score(&self) -> u64 {
        self.pr_count * PULL_REQUEST_POINTS
            + self.merged_pr_count * MERGED_PULL_REQUEST_POINTS
            + self.issue_count * ISSUE_POINTS
    }

    /// Small star-based bonus, capped at [`MAX_POPULARITY_BONUS`].
    #[must_use]
    pub fn popularity_bonus(&self) -> f64 {
        (self.stars as f64 * POINTS_PER_STAR).min(MAX_POPULARITY_BONUS)
    }

    /// Finalizes the aggregate into a scored project.
    #[must_use]
    pub fn into_scored(self) -> ScoredProject {
        let contribution_score = self.contribution_score();
        let popularity_bonus = self.popularity_bonus();
        ScoredProject {
            owner: self.owner,
            name: self.name,
            total_score: contribution_score as f64 + popularity_bonus,
            contribution_score,
            popularity_bonus,
            stars: self.stars,
            pr_count: self.pr_count,
            merged_pr_count: self.merged_pr_count,
            issue_count: self.issue_count,
        }
    }
}

/// A ranked repository with its score breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProject {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Contribution score plus popularity bonus.
    pub total_score: f64,
    /// Score from pull requests, merges and issues.
    pub contribution_score: u64,
    /// Star-based bonus.
    pub popularity_bonus: f64,
    /// Star count used for the bonus.
    pub stars: u64,
    /// Authored pull requests.
    pub pr_count: u64,
    /// Merged pull requests.
    pub merged_pr_count: u64,
    /// Authored issues.
    pub issue_count: u64,
}

impl ScoredProject {
    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
