//! Selection of entity kinds to migrate.

/// Which entity kinds a migration copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntitySelection {
    pub milestones: bool,
    pub labels: bool,
    pub issues: bool,
}

impl EntitySelection {
    /// Selects every kind.
    #[must_use]
    pub fn all() -> Self {
        Self {
            milestones: true,
            labels: true,
            issues: true,
        }
    }

    /// Returns true if no kind is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.milestones || self.labels || self.issues)
    }

    /// An empty selection means a full migration.
    #[must_use]
    pub fn or_all(self) -> Self {
        if self.is_empty() {
            Self::all()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_means_all() {
        assert_eq!(EntitySelection::default().or_all(), EntitySelection::all());
    }

    #[test]
    fn explicit_selection_is_kept() {
        let labels_only = EntitySelection {
            labels: true,
            ..Default::default()
        };
        assert_eq!(labels_only.or_all(), labels_only);
    }
}
