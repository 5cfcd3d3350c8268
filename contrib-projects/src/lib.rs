#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod document;
pub mod fetch;
pub mod render;
pub mod runner;
pub mod scoring;
pub mod summary;

pub use config::{ConfigError, GitHubCredentials, RunnerConfig, DEFAULT_DOCUMENT_PATH};
pub use document::{
    preview_document, replace_marked_region, update_document, DocumentError, DocumentStatus,
    Markers, DEFAULT_END_MARKER, DEFAULT_START_MARKER,
};
pub use fetch::{
    decode_response, ContributionFetcher, ContributionKind, ContributionRecord, FetchError,
    RepositoryRef, UserContributions,
};
pub use render::{CardRenderer, CardStyle, RenderError, NO_CONTRIBUTIONS_PLACEHOLDER};
pub use runner::{publish, Runner, RunnerError};
pub use scoring::{score_projects, ProjectAggregate, ScoredProject, ScoringError, ScoringPolicy};
pub use summary::RunSummary;
