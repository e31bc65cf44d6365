//! Migrate milestones, labels and issues between two GitHub repositories.
//!
//! To migrate a subset of elements, use the element specific flags
//! (`--milestones`, `--labels`, `--issues`). Providing no flags migrates
//! every element type.

use clap::Parser;
use git_mover::config::DEFAULT_API_ROOT;
use git_mover::{
    run_migration, EntityKind, EntitySelection, GitHubClient, MigrateError, MigrationConfig,
    MigrationRequest, RunSummary, StateFilter,
};
use std::process::ExitCode;
use tracing::error;

/// Migrate Milestones, Labels, and Issues between two GitHub repositories.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Multi-letter flags take two dashes: --dt, --dun, --sr and --dr (not -dt, -dun, -sr, -dr)."
)]
struct Args {
    /// Your GitHub (public or enterprise) username: name@email.com
    user_name: String,

    /// Your GitHub (public or enterprise) personal access token.
    token: String,

    /// The team and repo to migrate from: <team_name>/<repo_name>
    source_repo: String,

    /// The team and repo to migrate to: <team_name>/<repo_name>
    destination_repo: String,

    /// Personal access token for the destination account, if you are migrating between GitHub installations.
    /// Also accepted as `--dt`.
    #[arg(long = "destinationToken", visible_alias = "dt", env = "GIT_MOVER_DESTINATION_TOKEN")]
    destination_token: Option<String>,

    /// Username for the destination account, if you are migrating between GitHub installations.
    /// Also accepted as `--dun`.
    #[arg(long = "destinationUserName", visible_alias = "dun")]
    destination_user_name: Option<String>,

    /// The GitHub domain to migrate from. For GitHub Enterprise, enter the domain of your installation.
    /// Also accepted as `--sr`.
    #[arg(long = "sourceRoot", visible_alias = "sr", default_value = DEFAULT_API_ROOT)]
    source_root: String,

    /// The GitHub domain to migrate to. For GitHub Enterprise, enter the domain of your installation.
    /// Also accepted as `--dr`.
    #[arg(long = "destinationRoot", visible_alias = "dr", default_value = DEFAULT_API_ROOT)]
    destination_root: String,

    /// Toggle on Milestone migration.
    #[arg(short = 'm', long)]
    milestones: bool,

    /// Toggle on Label migration.
    #[arg(short = 'l', long)]
    labels: bool,

    /// Toggle on Issue migration.
    #[arg(short = 'i', long)]
    issues: bool,

    /// Toggle on Update Existing.
    #[arg(short = 'u', long)]
    update: bool,

    /// Which milestones and issues to copy: open, closed or all.
    #[arg(long, default_value_t = StateFilter::Open)]
    state: StateFilter,
}

impl From<Args> for MigrationRequest {
    fn from(args: Args) -> Self {
        let mut request = MigrationRequest::new(
            args.user_name,
            args.token,
            args.source_repo,
            args.destination_repo,
        );
        request.destination_token = args.destination_token;
        request.destination_user_name = args.destination_user_name;
        request.source_root = args.source_root;
        request.destination_root = args.destination_root;
        request.selection = EntitySelection {
            milestones: args.milestones,
            labels: args.labels,
            issues: args.issues,
        };
        request.update_existing = args.update;
        request.state = args.state;
        request
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    git_mover::telemetry::init_tracing();
    // Both ring and aws-lc-rs may be compiled in; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(MigrateError::Config(e)) => {
            println!("Error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Migration aborted");
            ExitCode::from(2)
        }
    }
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, MigrateError> {
    let config = MigrationConfig::resolve(args.into())?;

    let source = GitHubClient::new(config.source_root(), config.source().token())?;
    let destination = GitHubClient::new(config.destination_root(), config.destination().token())?;

    run_migration(&source, &destination, &config).await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");

    let selected = [
        (EntityKind::Milestone, summary.selection.milestones),
        (EntityKind::Label, summary.selection.labels),
        (EntityKind::Issue, summary.selection.issues),
    ];
    for (kind, enabled) in selected {
        if !enabled {
            continue;
        }
        let tally = summary.tally(kind);
        println!(
            "  {}: {} created, {} already existed, {} need manual attention",
            kind.name(),
            tally.created,
            tally.duplicates,
            tally.invalid_references
        );
    }

    println!(
        "  Total: {} created, {} skipped",
        summary.total_created(),
        summary.total_skipped()
    );
    if summary.has_invalid_references() {
        println!("Some items were skipped. Add them manually if needed.");
    }
}
