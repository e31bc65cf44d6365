//! Status report configuration.

use super::{ApiRoot, ConfigError};
use crate::models::{RepoRef, StateFilter};

/// Most milestones a status report shows.
pub const MAX_REPORTED_MILESTONES: usize = 5;

/// Configuration for a milestone status report.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    repo: RepoRef,
    root: ApiRoot,
    token: String,
    state: StateFilter,
    limit: usize,
    checklist: bool,
}

impl StatusConfig {
    /// Creates a configuration reporting on `repo` at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the repository or root is malformed.
    pub fn new(token: impl Into<String>, repo: &str, root: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            repo: repo.parse()?,
            root: ApiRoot::parse(root)?,
            token: token.into(),
            state: StateFilter::default(),
            limit: MAX_REPORTED_MILESTONES,
            checklist: false,
        })
    }

    /// Sets which milestone states are reported.
    pub fn with_state(mut self, state: StateFilter) -> Self {
        self.state = state;
        self
    }

    /// Sets how many milestones are reported, capped at
    /// [`MAX_REPORTED_MILESTONES`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_REPORTED_MILESTONES);
        self
    }

    /// Enables the per-issue checklist table.
    pub fn with_checklist(mut self, checklist: bool) -> Self {
        self.checklist = checklist;
        self
    }

    /// Repository to report on.
    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// API root of the installation.
    pub fn root(&self) -> &ApiRoot {
        &self.root
    }

    /// Personal access token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Milestone states to report.
    pub fn state(&self) -> StateFilter {
        self.state
    }

    /// Number of milestones to report.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the per-issue checklist table is rendered.
    pub fn checklist(&self) -> bool {
        self.checklist
    }
}
