//! Milestone migration step.

use super::{report, settle, snapshot, EntityKind, ItemOutcome, ItemStatus, MigrateError};
use crate::client::IssueTracker;
use crate::config::MigrationConfig;
use crate::models::NewMilestone;
use tracing::{info, info_span, Instrument};

/// Copies milestones from the source to the destination.
///
/// Title, state, description and due date are copied. Existing milestones
/// are never modified; with `update_existing` set they are reported as not
/// yet updatable instead of as duplicates.
///
/// # Errors
///
/// Returns [`MigrateError`] if the source listing fails or a creation fails
/// for a reason other than a duplicate or an invalid reference.
pub async fn migrate_milestones(
    source: &dyn IssueTracker,
    destination: &dyn IssueTracker,
    config: &MigrationConfig,
) -> Result<Vec<ItemOutcome>, MigrateError> {
    let span = info_span!(
        "migrate_milestones",
        source = %config.source_repo(),
        destination = %config.destination_repo()
    );

    async {
        info!("Migrating milestones");
        let fetched = source
            .list_milestones(config.source_repo(), config.state())
            .await;
        let milestones = snapshot(EntityKind::Milestone, fetched)?;

        let mut outcomes = Vec::with_capacity(milestones.len());
        for milestone in &milestones {
            let draft = NewMilestone::from(milestone);
            let created = destination
                .create_milestone(config.destination_repo(), &draft)
                .await;

            let mut outcome = settle(EntityKind::Milestone, &milestone.title, created)?;
            if outcome.status == ItemStatus::Duplicate && config.update_existing() {
                outcome = ItemOutcome::update_unsupported(EntityKind::Milestone, &milestone.title);
            }

            report(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
    .instrument(span)
    .await
}
