//! Run summary.

use crate::document::DocumentStatus;
use crate::scoring::ScoredProject;

/// Summary of a complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Login whose contributions were scored.
    pub login: String,

    /// Number of pull requests returned by the API.
    pub pull_requests_fetched: usize,

    /// Number of issues returned by the API.
    pub issues_fetched: usize,

    /// Projects written to the document, best first.
    pub projects: Vec<ScoredProject>,

    /// What happened to the document.
    pub document: DocumentStatus,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Returns true if at least one project passed the score floor.
    #[must_use]
    pub fn has_projects(&self) -> bool {
        !self.projects.is_empty()
    }

    /// Returns true if the document content changed on disk.
    #[must_use]
    pub fn document_changed(&self) -> bool {
        self.document == DocumentStatus::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_reports_no_projects() {
        let summary = RunSummary {
            login: "octocat".to_string(),
            pull_requests_fetched: 3,
            issues_fetched: 1,
            projects: Vec::new(),
            document: DocumentStatus::Unchanged,
            dry_run: false,
        };

        assert!(!summary.has_projects());
        assert!(!summary.document_changed());
    }
}
