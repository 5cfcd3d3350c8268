//! Run configuration.
//!
//! The CLI collects raw values from flags and the environment; this module
//! validates them into a [`RunnerConfig`] that the pipeline consumes.

mod credentials;
mod error;

pub use credentials::GitHubCredentials;
pub use error::ConfigError;

use crate::document::Markers;
use crate::render::CardStyle;
use crate::scoring::ScoringPolicy;
use std::path::{Path, PathBuf};

/// Default document rewritten by a run.
pub const DEFAULT_DOCUMENT_PATH: &str = "README.md";

/// Configuration for a single contribution-cards run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Login and token for the GitHub API.
    credentials: GitHubCredentials,
    /// Markdown document containing the marked region.
    document_path: PathBuf,
    /// Sentinel markers delimiting the rewritten region.
    markers: Markers,
    /// Card appearance.
    card_style: CardStyle,
    /// Scoring window, floor and cap.
    scoring: ScoringPolicy,
    /// Whether to preview the change without writing the document.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration with default markers, style and scoring policy.
    pub fn new(credentials: GitHubCredentials, document_path: PathBuf, dry_run: bool) -> Self {
        Self {
            credentials,
            document_path,
            markers: Markers::default(),
            card_style: CardStyle::default(),
            scoring: ScoringPolicy::default(),
            dry_run,
        }
    }

    /// Sets custom sentinel markers.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Sets a custom card style.
    pub fn with_card_style(mut self, card_style: CardStyle) -> Self {
        self.card_style = card_style;
        self
    }

    /// Sets a custom scoring policy.
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Returns the GitHub credentials.
    pub fn credentials(&self) -> &GitHubCredentials {
        &self.credentials
    }

    /// Returns the document path.
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Returns the sentinel markers.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Returns the card style.
    pub fn card_style(&self) -> &CardStyle {
        &self.card_style
    }

    /// Returns the scoring policy.
    pub fn scoring(&self) -> &ScoringPolicy {
        &self.scoring
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
