//! Run summary types.

use crate::config::EntitySelection;
use crate::migrate::{EntityKind, ItemOutcome, ItemStatus};

/// Created and skipped counts for one entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindTally {
    /// Items created in the destination.
    pub created: usize,

    /// Items skipped as duplicates.
    pub duplicates: usize,

    /// Items skipped because a reference could not be resolved.
    pub invalid_references: usize,
}

impl KindTally {
    /// Total items skipped for any reason.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.duplicates + self.invalid_references
    }
}

/// Summary of a complete migration run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Entity kinds the run was asked to migrate.
    pub selection: EntitySelection,

    /// Milestone counts.
    pub milestones: KindTally,

    /// Label counts.
    pub labels: KindTally,

    /// Issue counts.
    pub issues: KindTally,

    /// Every outcome, in processing order.
    pub outcomes: Vec<ItemOutcome>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(selection: EntitySelection) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    /// Updates the summary with an outcome.
    pub fn record(&mut self, outcome: ItemOutcome) {
        let tally = match outcome.kind {
            EntityKind::Milestone => &mut self.milestones,
            EntityKind::Label => &mut self.labels,
            EntityKind::Issue => &mut self.issues,
        };
        match outcome.status {
            ItemStatus::Created => tally.created += 1,
            ItemStatus::Duplicate | ItemStatus::UpdateUnsupported => tally.duplicates += 1,
            ItemStatus::InvalidReference { .. } => tally.invalid_references += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Records several outcomes.
    pub fn record_all(&mut self, outcomes: impl IntoIterator<Item = ItemOutcome>) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }

    /// Counts for one entity kind.
    #[must_use]
    pub fn tally(&self, kind: EntityKind) -> KindTally {
        match kind {
            EntityKind::Milestone => self.milestones,
            EntityKind::Label => self.labels,
            EntityKind::Issue => self.issues,
        }
    }

    /// Items created across all kinds.
    #[must_use]
    pub fn total_created(&self) -> usize {
        self.milestones.created + self.labels.created + self.issues.created
    }

    /// Items skipped across all kinds.
    #[must_use]
    pub fn total_skipped(&self) -> usize {
        self.milestones.skipped() + self.labels.skipped() + self.issues.skipped()
    }

    /// Returns true if any item needs manual attention.
    #[must_use]
    pub fn has_invalid_references(&self) -> bool {
        self.milestones.invalid_references
            + self.labels.invalid_references
            + self.issues.invalid_references
            > 0
    }
}
