#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod migrate;
pub mod models;
pub mod rate_limit;
pub mod status;
pub mod summary;
pub mod telemetry;

pub use client::{ClientError, ErrorKind, GitHubClient, IssueTracker};
pub use config::{
    ApiRoot, ConfigError, EntitySelection, MigrationConfig, MigrationRequest, StatusConfig,
};
pub use migrate::{
    migrate_issues, migrate_labels, migrate_milestones, run_migration, DestinationIndex,
    EntityKind, ItemOutcome, ItemStatus, MigrateError,
};
pub use models::{Issue, IssueQuery, ItemState, Label, Milestone, RepoRef, StateFilter};
pub use status::{
    collect_status, render_checklist, render_summary_table, MilestoneStatus, StatusError,
};
pub use summary::{KindTally, RunSummary};
