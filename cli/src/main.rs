//! CLI for contrib-projects.
//!
//! Scores the repositories a GitHub user contributed to over the last year and
//! rewrites the marked section of their profile README with project cards.

use clap::Parser;
use contrib_projects::{
    CardStyle, GitHubCredentials, Markers, RunSummary, Runner, RunnerConfig, RunnerError,
    ScoringPolicy, DEFAULT_END_MARKER, DEFAULT_START_MARKER,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Contrib Projects - Refresh the contributed-projects section of a profile README.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub login whose contributions are scored.
    #[arg(long, env = "USERNAME")]
    username: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to the README to update.
    #[arg(long, default_value = contrib_projects::DEFAULT_DOCUMENT_PATH)]
    readme: PathBuf,

    /// Print the generated section without writing the README.
    #[arg(long)]
    dry_run: bool,

    /// Card theme passed to the badge service.
    #[arg(long, default_value = contrib_projects::render::DEFAULT_THEME)]
    theme: String,

    /// Maximum number of projects listed.
    #[arg(long, default_value_t = contrib_projects::scoring::DEFAULT_MAX_PROJECTS)]
    max_projects: usize,

    /// Marker opening the generated section.
    #[arg(long, default_value = DEFAULT_START_MARKER)]
    start_marker: String,

    /// Marker closing the generated section.
    #[arg(long, default_value = DEFAULT_END_MARKER)]
    end_marker: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab's rustls client needs a process-wide crypto provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Script failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Compact single-line output without targets; `RUST_LOG` overrides the
/// default `info` level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Validates the arguments and runs the pipeline.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let credentials = GitHubCredentials::new(args.username, args.token)?;
    let markers = Markers::new(args.start_marker, args.end_marker)?;
    if args.max_projects == 0 {
        return Err(contrib_projects::ConfigError::Invalid {
            name: "max-projects",
            message: "must be at least 1".to_string(),
        }
        .into());
    }

    let config = RunnerConfig::new(credentials, args.readme, args.dry_run)
        .with_markers(markers)
        .with_card_style(CardStyle::with_theme(args.theme))
        .with_scoring(ScoringPolicy::default().with_max_projects(args.max_projects));

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  User: {}", summary.login);
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Pull requests fetched: {}", summary.pull_requests_fetched);
    println!("  Issues fetched: {}", summary.issues_fetched);
    println!("  Projects listed: {}", summary.projects.len());
    for (i, project) in summary.projects.iter().enumerate() {
        println!(
            "    {}. {} (total score: {:.1})",
            i + 1,
            project.full_name(),
            project.total_score
        );
    }
    println!("  README: {}", summary.document.as_str());
}
