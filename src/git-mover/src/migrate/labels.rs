//! Label migration step.

use super::{report, settle, snapshot, EntityKind, ItemOutcome, MigrateError};
use crate::client::IssueTracker;
use crate::config::MigrationConfig;
use tracing::{info, info_span, Instrument};

/// Copies labels (name, color, description) from the source to the
/// destination.
///
/// # Errors
///
/// Returns [`MigrateError`] if the source listing fails or a creation fails
/// for a reason other than a duplicate or an invalid reference.
pub async fn migrate_labels(
    source: &dyn IssueTracker,
    destination: &dyn IssueTracker,
    config: &MigrationConfig,
) -> Result<Vec<ItemOutcome>, MigrateError> {
    let span = info_span!(
        "migrate_labels",
        source = %config.source_repo(),
        destination = %config.destination_repo()
    );

    async {
        info!("Migrating labels");
        let labels = snapshot(
            EntityKind::Label,
            source.list_labels(config.source_repo()).await,
        )?;

        let mut outcomes = Vec::with_capacity(labels.len());
        for label in &labels {
            let created = destination
                .create_label(config.destination_repo(), label)
                .await;
            let outcome = settle(EntityKind::Label, &label.name, created)?;
            report(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
    .instrument(span)
    .await
}
