//! Scoring thresholds.

/// Only records newer than this many days count.
pub const DEFAULT_WINDOW_DAYS: u32 = 365;

/// Minimum contribution score (before the popularity bonus) to be listed.
pub const DEFAULT_MIN_CONTRIBUTION_SCORE: u64 = 10;

/// Maximum number of projects listed.
pub const DEFAULT_MAX_PROJECTS: usize = 16;

/// Points per authored pull request.
pub const PULL_REQUEST_POINTS: u64 = 10;

/// Extra points per merged pull request.
pub const MERGED_PULL_REQUEST_POINTS: u64 = 15;

/// Points per authored issue.
pub const ISSUE_POINTS: u64 = 5;

/// Popularity bonus per star.
pub const POINTS_PER_STAR: f64 = 0.001;

/// Upper bound of the popularity bonus.
pub const MAX_POPULARITY_BONUS: f64 = 5.0;

/// Window, floor and cap applied when ranking projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringPolicy {
    /// Trailing window in days.
    pub window_days: u32,
    /// Minimum contribution score.
    pub min_contribution_score: u64,
    /// Maximum number of ranked projects.
    pub max_projects: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            min_contribution_score: DEFAULT_MIN_CONTRIBUTION_SCORE,
            max_projects: DEFAULT_MAX_PROJECTS,
        }
    }
}

impl ScoringPolicy {
    /// Sets the maximum number of ranked projects.
    #[must_use]
    pub fn with_max_projects(mut self, max_projects: usize) -> Self {
        self.max_projects = max_projects;
        self
    }
}
