//! Contribution scoring.
//!
//! Folds pull requests and issues into per-repository tallies, scores them,
//! and returns the best-ranked projects.

mod aggregate;
mod error;
mod policy;

pub use aggregate::{ProjectAggregate, ScoredProject};
pub use error::ScoringError;
pub use policy::{
    ScoringPolicy, DEFAULT_MAX_PROJECTS, DEFAULT_MIN_CONTRIBUTION_SCORE, DEFAULT_WINDOW_DAYS,
    ISSUE_POINTS, MAX_POPULARITY_BONUS, MERGED_PULL_REQUEST_POINTS, POINTS_PER_STAR,
    PULL_REQUEST_POINTS,
};

use crate::fetch::{ContributionKind, ContributionRecord, RepositoryRef, UserContributions};
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Scores the repositories a user contributed to.
///
/// Records at or beyond the window edge, without a repository, or targeting
/// repositories that are owned by `login`, archived, or forks are ignored.
/// Projects under the minimum contribution score are dropped; the rest are
/// ordered by total score (ties by owner, then name) and capped.
///
/// # Arguments
///
/// * `contributions` - Raw fetch result
/// * `login` - The user whose contributions are scored
/// * `now` - Reference time for the window
/// * `policy` - Window, floor and cap
///
/// # Errors
///
/// Returns [`ScoringError::InvalidTimestamp`] if a record's creation time
/// cannot be parsed.
pub fn score_projects(
    contributions: &UserContributions,
    login: &str,
    now: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Result<Vec<ScoredProject>, ScoringError> {
    let cutoff = now - Duration::days(i64::from(policy.window_days));
    let aggregates = aggregate_contributions(contributions.records(), login, cutoff)?;

    let mut scored: Vec<ScoredProject> = aggregates
        .into_values()
        .filter(|aggregate| aggregate.contribution_score() >= policy.min_contribution_score)
        .map(ProjectAggregate::into_scored)
        .collect();

    for project in &scored {
        info!(
            repo = %project.full_name(),
            prs = project.pr_count,
            merged = project.merged_pr_count,
            issues = project.issue_count,
            score = %format!("{:.1}", project.total_score),
            "Scored project"
        );
    }

    scored.sort_by(rank_order);
    scored.truncate(policy.max_projects);
    Ok(scored)
}

/// Groups qualifying records by repository.
///
/// The first record seen for a repository fixes its star count.
fn aggregate_contributions<'a>(
    records: impl Iterator<Item = ContributionRecord<'a>>,
    login: &str,
    cutoff: DateTime<Utc>,
) -> Result<BTreeMap<(String, String), ProjectAggregate>, ScoringError> {
    let mut aggregates: BTreeMap<(String, String), ProjectAggregate> = BTreeMap::new();

    for record in records {
        let created_at = parse_timestamp(record.created_at)?;
        if created_at <= cutoff {
            continue;
        }

        let Some(repository) = record.repository else {
            continue;
        };
        if !qualifies(repository, login) {
            debug!(repo = %repository.full_name(), "Skipping repository");
            continue;
        }

        let key = (repository.owner_login().to_string(), repository.name.clone());
        let aggregate = aggregates.entry(key).or_insert_with(|| {
            ProjectAggregate::new(
                repository.owner_login(),
                &repository.name,
                repository.stargazer_count,
            )
        });

        match record.kind {
            ContributionKind::PullRequest => {
                aggregate.pr_count += 1;
                if record.merged {
                    aggregate.merged_pr_count += 1;
                }
            }
            ContributionKind::Issue => aggregate.issue_count += 1,
        }
    }

    Ok(aggregates)
}

/// Own repositories, archived repositories and forks never count.
fn qualifies(repository: &RepositoryRef, login: &str) -> bool {
    repository.owner_login() != login && !repository.is_archived && !repository.is_fork
}

/// Parses an RFC 3339 timestamp (`Z` or numeric offset) into UTC.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ScoringError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|source| ScoringError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Highest total score first, then owner and name ascending.
fn rank_order(a: &ScoredProject, b: &ScoredProject) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| a.owner.cmp(&b.owner))
        .then_with(|| a.name.cmp(&b.name))
}
