//! Issue tracker client abstraction.
//!
//! Migration and reporting code talk to the tracker exclusively through
//! [`IssueTracker`]. [`GitHubClient`] is the production implementation.

mod error;
mod github;

pub use error::{classify, ClientError, ErrorKind};
pub use github::GitHubClient;

use crate::models::{
    Issue, IssueQuery, Label, Milestone, NewIssue, NewMilestone, RepoRef, Repository, StateFilter,
};
use async_trait::async_trait;

/// Operations needed from an issue tracker.
///
/// Listing calls return the full, paginated collection. Creation calls
/// report duplicates and unresolvable references through
/// [`ErrorKind::Conflict`] and [`ErrorKind::InvalidReference`].
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Looks up a repository.
    async fn get_repo(&self, repo: &RepoRef) -> Result<Repository, ClientError>;

    /// Lists milestones in the given states.
    async fn list_milestones(
        &self,
        repo: &RepoRef,
        state: StateFilter,
    ) -> Result<Vec<Milestone>, ClientError>;

    /// Lists all labels.
    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>, ClientError>;

    /// Lists issues, excluding pull requests.
    async fn list_issues(
        &self,
        repo: &RepoRef,
        query: &IssueQuery,
    ) -> Result<Vec<Issue>, ClientError>;

    /// Creates a milestone.
    async fn create_milestone(
        &self,
        repo: &RepoRef,
        milestone: &NewMilestone,
    ) -> Result<Milestone, ClientError>;

    /// Creates a label.
    async fn create_label(&self, repo: &RepoRef, label: &Label) -> Result<Label, ClientError>;

    /// Creates an issue.
    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<Issue, ClientError>;
}
