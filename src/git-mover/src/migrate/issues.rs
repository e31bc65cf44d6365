//! Issue migration step.

use super::{
    report, settle, snapshot, DestinationIndex, EntityKind, ItemOutcome, MigrateError,
};
use crate::client::IssueTracker;
use crate::config::MigrationConfig;
use crate::models::IssueQuery;
use tracing::{info, info_span, Instrument};

/// Copies issues from the source to the destination.
///
/// Each issue's milestone and labels are resolved through `index`. An issue
/// referencing a milestone or label the destination lacks is skipped without
/// a request being made. Issues have no identity key, so running this twice
/// creates them twice.
///
/// # Errors
///
/// Returns [`MigrateError`] if the source listing fails or a creation fails
/// for a reason other than an invalid reference.
pub async fn migrate_issues(
    source: &dyn IssueTracker,
    destination: &dyn IssueTracker,
    config: &MigrationConfig,
    index: &DestinationIndex,
) -> Result<Vec<ItemOutcome>, MigrateError> {
    let span = info_span!(
        "migrate_issues",
        source = %config.source_repo(),
        destination = %config.destination_repo()
    );

    async {
        info!("Migrating issues");
        let query = IssueQuery {
            state: config.state(),
            milestone: None,
        };
        let fetched = source.list_issues(config.source_repo(), &query).await;
        let issues = snapshot(EntityKind::Issue, fetched)?;

        let mut outcomes = Vec::with_capacity(issues.len());
        for issue in &issues {
            let outcome = match index.resolve(issue) {
                Ok(new_issue) => {
                    let created = destination
                        .create_issue(config.destination_repo(), &new_issue)
                        .await;
                    settle(EntityKind::Issue, &issue.title, created)?
                }
                Err(unresolved) => ItemOutcome::invalid_reference(
                    EntityKind::Issue,
                    &issue.title,
                    unresolved.to_string(),
                ),
            };
            report(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
    .instrument(span)
    .await
}
