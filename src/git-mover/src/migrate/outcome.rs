//! Per-item migration outcomes.

use std::fmt;

/// Kind of entity being migrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Milestone,
    Label,
    Issue,
}

impl EntityKind {
    /// Capitalized singular name, as used in console messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Milestone => "Milestone",
            Self::Label => "Label",
            Self::Issue => "Issue",
        }
    }

    /// Lowercase plural name.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Milestone => "milestones",
            Self::Label => "labels",
            Self::Issue => "issues",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened to one source item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Created in the destination.
    Created,

    /// The destination already has an item with the same identity key.
    Duplicate,

    /// The item exists and an update was requested, which is not supported.
    UpdateUnsupported,

    /// The item references something the destination cannot resolve.
    InvalidReference {
        /// What could not be resolved.
        reason: String,
    },
}

/// Outcome of migrating a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    /// Entity kind.
    pub kind: EntityKind,

    /// Identity key: milestone title, label name or issue title.
    pub key: String,

    /// Result.
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn created(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::new(kind, key, ItemStatus::Created)
    }

    pub fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::new(kind, key, ItemStatus::Duplicate)
    }

    pub fn update_unsupported(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::new(kind, key, ItemStatus::UpdateUnsupported)
    }

    pub fn invalid_reference(
        kind: EntityKind,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(
            kind,
            key,
            ItemStatus::InvalidReference {
                reason: reason.into(),
            },
        )
    }

    fn new(kind: EntityKind, key: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            kind,
            key: key.into(),
            status,
        }
    }

    /// Returns true if the item was created.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.status == ItemStatus::Created
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, key) = (self.kind, &self.key);
        match &self.status {
            ItemStatus::Created => write!(f, "Created {kind}: {key}"),
            ItemStatus::Duplicate => write!(f, "{kind} {key} already exists. Skipping."),
            ItemStatus::UpdateUnsupported => write!(
                f,
                "Ability to update {kind} {key} coming in next version. Skipping."
            ),
            ItemStatus::InvalidReference { .. } => {
                write!(f, "Skipping {kind}: {key}. Add manually if needed.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_format_console_lines() {
        assert_eq!(
            ItemOutcome::created(EntityKind::Milestone, "v1").to_string(),
            "Created Milestone: v1"
        );
        assert_eq!(
            ItemOutcome::duplicate(EntityKind::Milestone, "v1").to_string(),
            "Milestone v1 already exists. Skipping."
        );
        assert_eq!(
            ItemOutcome::update_unsupported(EntityKind::Milestone, "v1").to_string(),
            "Ability to update Milestone v1 coming in next version. Skipping."
        );
        assert_eq!(
            ItemOutcome::invalid_reference(EntityKind::Issue, "Crash", "milestone 'v9'")
                .to_string(),
            "Skipping Issue: Crash. Add manually if needed."
        );
    }
}
