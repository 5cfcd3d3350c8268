use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use contrib_projects::{
    decode_response, publish, CardRenderer, DocumentStatus, GitHubCredentials, RunnerConfig,
    RunnerError, UserContributions, NO_CONTRIBUTIONS_PLACEHOLDER,
};
use tempfile::TempDir;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_contributions() -> UserContributions {
    let body = fs::read_to_string(fixtures_root().join("graphql_response.json")).unwrap();
    decode_response("octocat", 200, &body).unwrap()
}

fn readme_copy(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("README.md");
    fs::copy(fixtures_root().join("README.md"), &path).unwrap();
    path
}

fn config(path: &Path, dry_run: bool) -> RunnerConfig {
    let credentials =
        GitHubCredentials::new(Some("octocat".to_string()), Some("ghp_test".to_string()))
            .unwrap();
    RunnerConfig::new(credentials, path.to_path_buf(), dry_run)
}

fn card(owner: &str, name: &str) -> String {
    format!(
        "<a href=\"https://github.com/{owner}/{name}\">\n  \
         <img align=\"center\" src=\"https://readme-stats-fast.vercel.app/api/pin/?username={owner}&repo={name}&theme=github_dark&hide_border=true\" />\n\
         </a>"
    )
}

#[test]
fn publishes_ranked_cards_into_readme() {
    let dir = TempDir::new().unwrap();
    let path = readme_copy(&dir);
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let summary = publish(
        &config(&path, false),
        &CardRenderer::default(),
        &fixture_contributions(),
        now,
    )
    .unwrap();

    assert_eq!(summary.pull_requests_fetched, 6);
    // The null issue entry is still counted as returned.
    assert_eq!(summary.issues_fetched, 3);
    assert_eq!(summary.document, DocumentStatus::Updated);

    let ranked: Vec<String> = summary.projects.iter().map(|p| p.full_name()).collect();
    assert_eq!(ranked, vec!["tokio-rs/tokio", "serde-rs/serde"]);
    assert!((summary.projects[0].total_score - 45.0).abs() < 1e-9);
    assert!((summary.projects[1].total_score - 26.0).abs() < 1e-9);

    let expected = format!(
        "# Hi, I'm octocat\n\n## Projects I contribute to\n\n\
         <!-- CONTRIB-PROJECTS:START -->\n\
         <div align=\"center\">\n{}\n{}\n</div>\n\
         <!-- CONTRIB-PROJECTS:END -->\n\nThanks for visiting!\n",
        card("tokio-rs", "tokio"),
        card("serde-rs", "serde"),
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn rerun_with_same_data_leaves_readme_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = readme_copy(&dir);
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let config = config(&path, false);
    let renderer = CardRenderer::default();
    let contributions = fixture_contributions();

    let first = publish(&config, &renderer, &contributions, now).unwrap();
    let second = publish(&config, &renderer, &contributions, now).unwrap();

    assert!(first.document_changed());
    assert_eq!(second.document, DocumentStatus::Unchanged);
}

#[test]
fn stale_contributions_render_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = readme_copy(&dir);
    let original = fs::read_to_string(&path).unwrap();
    // Two years later every fixture record is outside the window.
    let now = Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap();

    let summary = publish(
        &config(&path, false),
        &CardRenderer::default(),
        &fixture_contributions(),
        now,
    )
    .unwrap();

    assert!(!summary.has_projects());
    // The fixture already holds the placeholder.
    assert_eq!(summary.document, DocumentStatus::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert!(original.contains(NO_CONTRIBUTIONS_PLACEHOLDER));
}

#[test]
fn dry_run_does_not_touch_readme() {
    let dir = TempDir::new().unwrap();
    let path = readme_copy(&dir);
    let original = fs::read_to_string(&path).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let summary = publish(
        &config(&path, true),
        &CardRenderer::default(),
        &fixture_contributions(),
        now,
    )
    .unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.document, DocumentStatus::Pending);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn readme_without_markers_fails_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");
    let original = "# No markers here\n";
    fs::write(&path, original).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let result = publish(
        &config(&path, false),
        &CardRenderer::default(),
        &fixture_contributions(),
        now,
    );

    assert!(matches!(result, Err(RunnerError::Document(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
