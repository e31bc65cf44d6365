//! Issue records.

use super::{ItemState, StateFilter};
use serde::Serialize;

/// An issue, with its milestone and labels referenced by identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Tracker-assigned number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Optional body text.
    pub body: Option<String>,

    /// Open or closed.
    pub state: ItemState,

    /// Logins of the assigned users.
    pub assignees: Vec<String>,

    /// Title of the milestone the issue belongs to.
    pub milestone: Option<String>,

    /// Names of the attached labels.
    pub labels: Vec<String>,
}

/// Fields sent when creating an issue.
///
/// The milestone is referenced by number in the target repository, so a
/// [`NewIssue`] can only be built once the destination milestones are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Filter for issue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssueQuery {
    /// Which issue states to return.
    pub state: StateFilter,

    /// Restrict to a single milestone, by number.
    pub milestone: Option<u64>,
}

impl IssueQuery {
    /// Issues of any state belonging to one milestone.
    #[must_use]
    pub fn in_milestone(number: u64) -> Self {
        Self {
            state: StateFilter::All,
            milestone: Some(number),
        }
    }
}
