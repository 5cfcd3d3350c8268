//! Orchestrates a contribution-cards run.

mod error;

pub use error::RunnerError;

use crate::config::RunnerConfig;
use crate::document::{preview_document, update_document};
use crate::fetch::{ContributionFetcher, UserContributions};
use crate::render::CardRenderer;
use crate::scoring::score_projects;
use crate::summary::RunSummary;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Fetches, scores, renders and writes once.
pub struct Runner {
    config: RunnerConfig,
    fetcher: ContributionFetcher,
    renderer: CardRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let fetcher = ContributionFetcher::new(config.credentials())?;
        let renderer = CardRenderer::new(config.card_style().clone());
        Ok(Self {
            config,
            fetcher,
            renderer,
        })
    }

    /// Executes the full pipeline against the live API.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunnerError`] raised by any stage; the document is
    /// left untouched in that case.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        info!(user = %self.fetcher.login(), "Starting contribution analysis");
        let contributions = self.fetcher.fetch().await?;
        publish(&self.config, &self.renderer, &contributions, Utc::now())
    }
}

/// Scores already-fetched contributions and updates the document.
///
/// # Errors
///
/// Returns [`RunnerError`] if scoring, rendering or the document update fails.
pub fn publish(
    config: &RunnerConfig,
    renderer: &CardRenderer,
    contributions: &UserContributions,
    now: DateTime<Utc>,
) -> Result<RunSummary, RunnerError> {
    let login = config.credentials().login();
    let projects = score_projects(contributions, login, now, config.scoring())?;

    if projects.is_empty() {
        warn!("No projects meet the minimum score threshold");
    } else {
        info!(count = projects.len(), "Found significant contribution projects");
        for (rank, project) in projects.iter().enumerate() {
            info!(
                rank = rank + 1,
                repo = %project.full_name(),
                score = %format!("{:.1}", project.total_score),
                "Ranked project"
            );
        }
    }

    let fragment = renderer.render(&projects)?;
    let path = config.document_path();

    let document = if config.dry_run() {
        let status = preview_document(path, &fragment, config.markers())?;
        print_dry_run_preview(path, &fragment, status.as_str());
        status
    } else {
        update_document(path, &fragment, config.markers())?
    };

    Ok(RunSummary {
        login: login.to_string(),
        pull_requests_fetched: contributions.pull_requests.len(),
        issues_fetched: contributions.issues.len(),
        projects,
        document,
        dry_run: config.dry_run(),
    })
}

fn print_dry_run_preview(path: &std::path::Path, fragment: &str, status: &str) {
    println!("\n[DRY RUN] Document: {} ({status})", path.display());
    println!("  Fragment:\n");
    for line in fragment.lines() {
        println!("    {line}");
    }
    println!();
}
