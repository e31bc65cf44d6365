//! Destination milestone and label lookup used to resolve issue references.

use crate::client::{ClientError, IssueTracker};
use crate::models::{Issue, Label, Milestone, NewIssue, RepoRef, StateFilter};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// A reference an issue makes that the destination cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedReference {
    #[error("milestone '{0}' does not exist in the destination")]
    Milestone(String),

    #[error("labels {0:?} do not exist in the destination")]
    Labels(Vec<String>),
}

/// Milestones and labels present in the destination repository.
///
/// Issues reference milestones by number, which differs between
/// repositories, so source titles are translated through this index.
/// Label names are matched case-insensitively, as the tracker does.
#[derive(Debug, Clone, Default)]
pub struct DestinationIndex {
    milestones: HashMap<String, u64>,
    labels: HashSet<String>,
}

impl DestinationIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from already known milestones and labels.
    pub fn from_parts<'a>(
        milestones: impl IntoIterator<Item = &'a Milestone>,
        labels: impl IntoIterator<Item = &'a Label>,
    ) -> Self {
        let mut index = Self::new();
        for milestone in milestones {
            index.insert_milestone(&milestone.title, milestone.number);
        }
        for label in labels {
            index.insert_label(&label.name);
        }
        index
    }

    /// Loads every milestone, open or closed, and every label of `repo`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClientError`] from either listing.
    pub async fn load(tracker: &dyn IssueTracker, repo: &RepoRef) -> Result<Self, ClientError> {
        let milestones = tracker.list_milestones(repo, StateFilter::All).await?;
        let labels = tracker.list_labels(repo).await?;
        debug!(
            repo = %repo,
            milestones = milestones.len(),
            labels = labels.len(),
            "Indexed destination"
        );
        Ok(Self::from_parts(&milestones, &labels))
    }

    /// Records a milestone.
    pub fn insert_milestone(&mut self, title: &str, number: u64) {
        self.milestones.insert(title.to_string(), number);
    }

    /// Records a label.
    pub fn insert_label(&mut self, name: &str) {
        self.labels.insert(name.to_lowercase());
    }

    /// Destination number of the milestone titled `title`.
    #[must_use]
    pub fn milestone_number(&self, title: &str) -> Option<u64> {
        self.milestones.get(title).copied()
    }

    /// Returns true if a label named `name` exists.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.contains(&name.to_lowercase())
    }

    /// Translates a source issue into a creation request for the destination.
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvedReference`] if the issue's milestone or any of its
    /// labels is missing from the destination.
    pub fn resolve(&self, issue: &Issue) -> Result<NewIssue, UnresolvedReference> {
        let milestone = match &issue.milestone {
            Some(title) => Some(
                self.milestone_number(title)
                    .ok_or_else(|| UnresolvedReference::Milestone(title.clone()))?,
            ),
            None => None,
        };

        let missing: Vec<String> = issue
            .labels
            .iter()
            .filter(|name| !self.has_label(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(UnresolvedReference::Labels(missing));
        }

        Ok(NewIssue {
            title: issue.title.clone(),
            body: issue.body.clone(),
            assignees: issue.assignees.clone(),
            milestone,
            labels: issue.labels.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemState;

    fn issue(milestone: Option<&str>, labels: &[&str]) -> Issue {
        Issue {
            number: 12,
            title: "Crash on start".to_string(),
            body: Some("Steps to reproduce".to_string()),
            state: ItemState::Open,
            assignees: vec!["octocat".to_string()],
            milestone: milestone.map(str::to_string),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn resolves_milestone_to_destination_number() {
        let mut index = DestinationIndex::new();
        index.insert_milestone("v1", 41);
        index.insert_label("Bug");

        let new_issue = index.resolve(&issue(Some("v1"), &["bug"])).unwrap();

        assert_eq!(new_issue.milestone, Some(41));
        assert_eq!(new_issue.labels, vec!["bug".to_string()]);
        assert_eq!(new_issue.assignees, vec!["octocat".to_string()]);
    }

    #[test]
    fn issue_without_references_resolves() {
        let index = DestinationIndex::new();
        let new_issue = index.resolve(&issue(None, &[])).unwrap();
        assert_eq!(new_issue.milestone, None);
    }

    #[test]
    fn missing_milestone_is_unresolved() {
        let index = DestinationIndex::new();
        assert_eq!(
            index.resolve(&issue(Some("v2"), &[])),
            Err(UnresolvedReference::Milestone("v2".to_string()))
        );
    }

    #[test]
    fn missing_labels_are_listed() {
        let mut index = DestinationIndex::new();
        index.insert_label("bug");
        assert_eq!(
            index.resolve(&issue(None, &["bug", "ux", "docs"])),
            Err(UnresolvedReference::Labels(vec![
                "ux".to_string(),
                "docs".to_string()
            ]))
        );
    }
}
