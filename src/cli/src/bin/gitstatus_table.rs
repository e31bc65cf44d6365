//! Print a table of up to five milestones with the status of their issues.

use clap::Parser;
use git_mover::config::{DEFAULT_API_ROOT, MAX_REPORTED_MILESTONES};
use git_mover::{
    collect_status, render_checklist, render_summary_table, GitHubClient, StateFilter,
    StatusConfig, StatusError,
};
use std::process::ExitCode;
use tracing::error;

/// Create a table depicting up to 5 milestones with the status of each issue inside them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Your GitHub (public or enterprise) personal access token.
    token: String,

    /// The team and repo to report on: <team_name>/<repo_name>
    repo: String,

    /// The GitHub domain to read from. For GitHub Enterprise, enter the domain of your installation.
    /// Also accepted as `--sr`.
    #[arg(long, visible_alias = "sr", default_value = DEFAULT_API_ROOT)]
    root: String,

    /// Which milestones to show: open, closed or all.
    #[arg(long, default_value_t = StateFilter::Open)]
    state: StateFilter,

    /// Number of milestones to show (at most 5).
    #[arg(long, default_value_t = MAX_REPORTED_MILESTONES)]
    limit: usize,

    /// Also print one column per milestone listing every issue.
    #[arg(long)]
    checklist: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    git_mover::telemetry::init_tracing();
    // Both ring and aws-lc-rs may be compiled in; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(StatusError::Config(e)) => {
            println!("Error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Status report failed");
            ExitCode::from(2)
        }
    }
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), StatusError> {
    let config = StatusConfig::new(args.token, &args.repo, &args.root)?
        .with_state(args.state)
        .with_limit(args.limit)
        .with_checklist(args.checklist);

    let client = GitHubClient::new(config.root(), config.token())?;
    let statuses = collect_status(&client, &config).await?;

    if statuses.is_empty() {
        println!("No milestones found in {}", config.repo());
        return Ok(());
    }

    print!("{}", render_summary_table(&statuses));
    if config.checklist() {
        println!();
        print!("{}", render_checklist(&statuses));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_alias_is_accepted() {
        let args = Args::try_parse_from([
            "gitstatus-table",
            "token",
            "octo/repo",
            "--sr",
            "https://github.example.com",
        ])
        .unwrap();
        assert_eq!(args.root, "https://github.example.com");
        assert_eq!(args.limit, MAX_REPORTED_MILESTONES);
    }
}
