//! Milestone records.

use super::ItemState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A milestone as stored by the tracker.
///
/// The title is the identity key within a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Tracker-assigned number, used when referencing the milestone from issues.
    pub number: u64,

    /// Milestone title.
    pub title: String,

    /// Open or closed.
    pub state: ItemState,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional due date.
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,

    /// Number of open issues, as reported by the tracker.
    #[serde(default)]
    pub open_issues: u64,

    /// Number of closed issues, as reported by the tracker.
    #[serde(default)]
    pub closed_issues: u64,

    /// Web page of the milestone, when the tracker provides one.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// The fields copied when creating a milestone in another repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMilestone {
    pub title: String,
    pub state: ItemState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
}

impl From<&Milestone> for NewMilestone {
    fn from(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            state: milestone.state,
            description: milestone.description.clone(),
            due_on: milestone.due_on,
        }
    }
}
