//! Copies milestones, labels and issues between repositories.
//!
//! Entity kinds are migrated in a fixed order: milestones, labels, then
//! issues. Issues reference milestones and labels, so the issue step takes a
//! [`DestinationIndex`] that is loaded after the first two steps have run.
//!
//! Per item, a duplicate or an unresolvable reference is a skip. Any other
//! failure aborts the run, as does failing to list a kind from the source.

mod error;
mod index;
mod issues;
mod labels;
mod milestones;
mod outcome;

pub use error::MigrateError;
pub use index::{DestinationIndex, UnresolvedReference};
pub use issues::migrate_issues;
pub use labels::migrate_labels;
pub use milestones::migrate_milestones;
pub use outcome::{EntityKind, ItemOutcome, ItemStatus};

use crate::client::{ClientError, ErrorKind, IssueTracker};
use crate::config::MigrationConfig;
use crate::models::RepoRef;
use crate::summary::RunSummary;
use tracing::{error, info, warn};

/// Runs every selected migration step.
///
/// # Errors
///
/// Returns [`MigrateError`] if a repository lookup or source listing fails,
/// or if an item fails for a reason other than a duplicate or an invalid
/// reference. Items created before the failure stay in the destination.
pub async fn run_migration(
    source: &dyn IssueTracker,
    destination: &dyn IssueTracker,
    config: &MigrationConfig,
) -> Result<RunSummary, MigrateError> {
    lookup(source, config.source_repo()).await?;
    lookup(destination, config.destination_repo()).await?;

    let selection = config.selection();
    let mut summary = RunSummary::new(selection);

    if selection.milestones {
        summary.record_all(migrate_milestones(source, destination, config).await?);
    }

    if selection.labels {
        summary.record_all(migrate_labels(source, destination, config).await?);
    }

    if selection.issues {
        let repo = config.destination_repo();
        let index = DestinationIndex::load(destination, repo)
            .await
            .map_err(|source| {
                println!("ERROR: Destination milestones and labels failed to be retrieved. Exiting...");
                MigrateError::Index {
                    repo: repo.clone(),
                    source,
                }
            })?;
        summary.record_all(migrate_issues(source, destination, config, &index).await?);
    }

    Ok(summary)
}

async fn lookup(tracker: &dyn IssueTracker, repo: &RepoRef) -> Result<(), MigrateError> {
    let repository = tracker
        .get_repo(repo)
        .await
        .map_err(|source| MigrateError::Lookup {
            repo: repo.clone(),
            source,
        })?;
    if !repository.has_issues {
        warn!(repo = %repository.full_name, "Issues are disabled for this repository");
    }
    Ok(())
}

/// Unpacks a source listing, announcing empty and failed listings.
fn snapshot<T>(
    kind: EntityKind,
    fetched: Result<Vec<T>, ClientError>,
) -> Result<Vec<T>, MigrateError> {
    match fetched {
        Ok(items) if items.is_empty() => {
            info!(kind = %kind, "Source has nothing to migrate");
            println!("No {} found. None migrated", kind.plural());
            Ok(items)
        }
        Ok(items) => {
            info!(kind = %kind, count = items.len(), "Fetched source items");
            Ok(items)
        }
        Err(source) => {
            error!(kind = %kind, error = %source, "Listing failed");
            println!("ERROR: {}s failed to be retrieved. Exiting...", kind.name());
            Err(MigrateError::Fetch { kind, source })
        }
    }
}

/// Maps the result of a create call to an outcome, or a fatal error.
fn settle<T>(
    kind: EntityKind,
    key: &str,
    result: Result<T, ClientError>,
) -> Result<ItemOutcome, MigrateError> {
    match result {
        Ok(_) => Ok(ItemOutcome::created(kind, key)),
        Err(e) => match e.kind() {
            ErrorKind::Conflict => Ok(ItemOutcome::duplicate(kind, key)),
            ErrorKind::InvalidReference => {
                Ok(ItemOutcome::invalid_reference(kind, key, e.message()))
            }
            _ => Err(MigrateError::Create {
                kind,
                key: key.to_string(),
                source: e,
            }),
        },
    }
}

/// Prints and logs one outcome.
fn report(outcome: &ItemOutcome) {
    match &outcome.status {
        ItemStatus::InvalidReference { reason } => {
            warn!(kind = %outcome.kind, key = %outcome.key, reason = %reason, "Skipped");
        }
        status => info!(kind = %outcome.kind, key = %outcome.key, ?status, "Processed"),
    }
    println!("{outcome}");
}
