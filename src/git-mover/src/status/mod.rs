//! Read-only milestone status reports.
//!
//! A report lists up to [`MAX_REPORTED_MILESTONES`] milestones with the open
//! and closed issues in each. Nothing is written to the tracker.
//!
//! [`MAX_REPORTED_MILESTONES`]: crate::config::MAX_REPORTED_MILESTONES

mod error;
mod table;

pub use error::StatusError;
pub use table::{render_checklist, render_summary_table};

use crate::client::IssueTracker;
use crate::config::StatusConfig;
use crate::models::{Issue, IssueQuery, ItemState, Milestone};
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{info, info_span, Instrument};

/// Maximum concurrent per-milestone issue listings.
const ISSUE_FETCH_CONCURRENCY: usize = 4;

/// A milestone and the issues assigned to it.
#[derive(Debug, Clone)]
pub struct MilestoneStatus {
    /// The milestone.
    pub milestone: Milestone,

    /// Its issues, open and closed.
    pub issues: Vec<Issue>,
}

impl MilestoneStatus {
    /// Number of open issues.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.count(ItemState::Open)
    }

    /// Number of closed issues.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.count(ItemState::Closed)
    }

    /// Share of closed issues as a whole percentage, or `None` without issues.
    #[must_use]
    pub fn progress_percent(&self) -> Option<u8> {
        let total = self.issues.len();
        if total == 0 {
            return None;
        }
        let percent = self.closed_count() * 100 / total;
        Some(percent as u8)
    }

    fn count(&self, state: ItemState) -> usize {
        self.issues.iter().filter(|i| i.state == state).count()
    }
}

/// Fetches the milestones to report and their issues.
///
/// Milestones keep the tracker's listing order. Issue listings for
/// different milestones run concurrently.
///
/// # Errors
///
/// Returns [`StatusError`] if the repository lookup or any listing fails.
pub async fn collect_status(
    tracker: &dyn IssueTracker,
    config: &StatusConfig,
) -> Result<Vec<MilestoneStatus>, StatusError> {
    let repo = config.repo();
    let span = info_span!("collect_status", repo = %repo);

    async {
        tracker
            .get_repo(repo)
            .await
            .map_err(|source| StatusError::Lookup {
                repo: repo.clone(),
                source,
            })?;

        let mut milestones = tracker
            .list_milestones(repo, config.state())
            .await
            .map_err(|source| StatusError::Fetch {
                what: "milestones".to_string(),
                source,
            })?;
        milestones.truncate(config.limit());
        info!(count = milestones.len(), "Collecting milestone status");

        stream::iter(milestones)
            .map(move |milestone| async move {
                let query = IssueQuery::in_milestone(milestone.number);
                let issues = tracker.list_issues(repo, &query).await.map_err(|source| {
                    StatusError::Fetch {
                        what: format!("issues for milestone '{}'", milestone.title),
                        source,
                    }
                })?;
                Ok::<_, StatusError>(MilestoneStatus { milestone, issues })
            })
            .buffered(ISSUE_FETCH_CONCURRENCY)
            .try_collect::<Vec<_>>()
            .await
    }
    .instrument(span)
    .await
}
