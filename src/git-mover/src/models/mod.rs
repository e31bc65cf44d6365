//! Records exchanged with the issue tracker.
//!
//! These types describe what the migration and reporting code needs to know
//! about milestones, labels, issues and repositories. They are deliberately
//! independent of any particular client library so the same logic can run
//! against GitHub or an in-memory tracker.

mod issue;
mod label;
mod milestone;
mod repository;
mod state;

pub use issue::{Issue, IssueQuery, NewIssue};
pub use label::Label;
pub use milestone::{Milestone, NewMilestone};
pub use repository::{RepoRef, RepoRefError, Repository};
pub use state::{ItemState, StateFilter, StateFilterError};
