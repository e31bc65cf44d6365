//! In-memory issue tracker used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use git_mover::models::{NewIssue, NewMilestone, Repository};
use git_mover::{
    ClientError, ErrorKind, Issue, IssueQuery, IssueTracker, ItemState, Label, Milestone,
    MigrationConfig, MigrationRequest, RepoRef, StateFilter,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const SOURCE: &str = "octo/source";
pub const DESTINATION: &str = "octo/destination";

#[derive(Default)]
struct RepoState {
    milestones: Vec<Milestone>,
    labels: Vec<Label>,
    issues: Vec<Issue>,
}

/// Tracker holding repositories in memory.
///
/// Milestone and issue numbers start at `first_number`, so numbers differ
/// between a source and a destination tracker.
pub struct InMemoryTracker {
    repos: Mutex<HashMap<String, RepoState>>,
    failing_listings: Mutex<HashSet<&'static str>>,
    known_users: Option<HashSet<String>>,
    next_number: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryTracker {
    pub fn new(first_number: usize) -> Self {
        Self {
            repos: Mutex::new(HashMap::new()),
            failing_listings: Mutex::new(HashSet::new()),
            known_users: None,
            next_number: AtomicUsize::new(first_number),
            writes: AtomicUsize::new(0),
        }
    }

    /// Tracker with a single empty repository.
    pub fn with_repo(repo: &str, first_number: usize) -> Self {
        let tracker = Self::new(first_number);
        tracker.repos.lock().unwrap().insert(repo.to_string(), RepoState::default());
        tracker
    }

    /// Only these logins are accepted as assignees.
    pub fn with_known_users(mut self, users: &[&str]) -> Self {
        self.known_users = Some(users.iter().map(|u| u.to_string()).collect());
        self
    }

    /// Makes listings of `resource` ("milestones", "labels", "issues") fail.
    pub fn fail_listing(&self, resource: &'static str) {
        self.failing_listings.lock().unwrap().insert(resource);
    }

    pub fn add_milestone(&self, repo: &str, title: &str, state: ItemState) -> u64 {
        let number = self.next_number();
        self.repo_mut(repo, |r| {
            r.milestones.push(Milestone {
                number,
                title: title.to_string(),
                state,
                description: None,
                due_on: None,
                open_issues: 0,
                closed_issues: 0,
                html_url: None,
            })
        });
        number
    }

    pub fn put_milestone(&self, repo: &str, milestone: Milestone) {
        self.repo_mut(repo, |r| r.milestones.push(milestone));
    }

    pub fn add_label(&self, repo: &str, name: &str, color: &str, description: Option<&str>) {
        self.repo_mut(repo, |r| {
            r.labels.push(Label {
                name: name.to_string(),
                color: color.to_string(),
                description: description.map(str::to_string),
            })
        });
    }

    pub fn add_issue(
        &self,
        repo: &str,
        title: &str,
        state: ItemState,
        milestone: Option<&str>,
        labels: &[&str],
        assignees: &[&str],
    ) {
        let number = self.next_number();
        self.repo_mut(repo, |r| {
            r.issues.push(Issue {
                number,
                title: title.to_string(),
                body: Some(format!("Body of {title}")),
                state,
                assignees: assignees.iter().map(|a| a.to_string()).collect(),
                milestone: milestone.map(str::to_string),
                labels: labels.iter().map(|l| l.to_string()).collect(),
            })
        });
    }

    pub fn milestones(&self, repo: &str) -> Vec<Milestone> {
        self.repos.lock().unwrap()[repo].milestones.clone()
    }

    pub fn labels(&self, repo: &str) -> Vec<Label> {
        self.repos.lock().unwrap()[repo].labels.clone()
    }

    pub fn issues(&self, repo: &str) -> Vec<Issue> {
        self.repos.lock().unwrap()[repo].issues.clone()
    }

    /// Number of successful create calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn next_number(&self) -> u64 {
        self.next_number.fetch_add(1, Ordering::SeqCst) as u64
    }

    fn repo_mut<T>(&self, repo: &str, f: impl FnOnce(&mut RepoState) -> T) -> T {
        let mut repos = self.repos.lock().unwrap();
        f(repos.entry(repo.to_string()).or_default())
    }

    fn with_existing<T>(
        &self,
        repo: &RepoRef,
        f: impl FnOnce(&mut RepoState) -> Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        let mut repos = self.repos.lock().unwrap();
        let state = repos
            .get_mut(&repo.to_string())
            .ok_or_else(|| ClientError::new(ErrorKind::NotFound, "Not Found"))?;
        f(state)
    }

    fn check_listing(&self, resource: &str) -> Result<(), ClientError> {
        if self.failing_listings.lock().unwrap().contains(resource) {
            return Err(ClientError::new(ErrorKind::Other, "Server Error"));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

fn validation_failed(code: &str) -> ClientError {
    let kind = if code == "already_exists" {
        ErrorKind::Conflict
    } else {
        ErrorKind::InvalidReference
    };
    ClientError::new(kind, format!("Validation Failed: {code}"))
}

#[async_trait]
impl IssueTracker for InMemoryTracker {
    async fn get_repo(&self, repo: &RepoRef) -> Result<Repository, ClientError> {
        self.with_existing(repo, |_| {
            Ok(Repository {
                full_name: repo.to_string(),
                has_issues: true,
            })
        })
    }

    async fn list_milestones(
        &self,
        repo: &RepoRef,
        state: StateFilter,
    ) -> Result<Vec<Milestone>, ClientError> {
        self.check_listing("milestones")?;
        self.with_existing(repo, |r| {
            Ok(r.milestones
                .iter()
                .filter(|m| state.matches(m.state))
                .cloned()
                .collect())
        })
    }

    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>, ClientError> {
        self.check_listing("labels")?;
        self.with_existing(repo, |r| Ok(r.labels.clone()))
    }

    async fn list_issues(
        &self,
        repo: &RepoRef,
        query: &IssueQuery,
    ) -> Result<Vec<Issue>, ClientError> {
        self.check_listing("issues")?;
        self.with_existing(repo, |r| {
            let milestone_title = match query.milestone {
                Some(number) => Some(
                    r.milestones
                        .iter()
                        .find(|m| m.number == number)
                        .map(|m| m.title.clone())
                        .ok_or_else(|| ClientError::new(ErrorKind::NotFound, "Not Found"))?,
                ),
                None => None,
            };
            Ok(r.issues
                .iter()
                .filter(|i| query.state.matches(i.state))
                .filter(|i| milestone_title.is_none() || i.milestone == milestone_title)
                .cloned()
                .collect())
        })
    }

    async fn create_milestone(
        &self,
        repo: &RepoRef,
        milestone: &NewMilestone,
    ) -> Result<Milestone, ClientError> {
        let number = self.next_number();
        let created = self.with_existing(repo, |r| {
            if r.milestones.iter().any(|m| m.title == milestone.title) {
                return Err(validation_failed("already_exists"));
            }
            let created = Milestone {
                number,
                title: milestone.title.clone(),
                state: milestone.state,
                description: milestone.description.clone(),
                due_on: milestone.due_on,
                open_issues: 0,
                closed_issues: 0,
                html_url: None,
            };
            r.milestones.push(created.clone());
            Ok(created)
        })?;
        self.record_write();
        Ok(created)
    }

    async fn create_label(&self, repo: &RepoRef, label: &Label) -> Result<Label, ClientError> {
        let created = self.with_existing(repo, |r| {
            if r
                .labels
                .iter()
                .any(|l| l.name.eq_ignore_ascii_case(&label.name))
            {
                return Err(validation_failed("already_exists"));
            }
            r.labels.push(label.clone());
            Ok(label.clone())
        })?;
        self.record_write();
        Ok(created)
    }

    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<Issue, ClientError> {
        if let Some(known) = &self.known_users {
            if issue.assignees.iter().any(|a| !known.contains(a)) {
                return Err(validation_failed("invalid"));
            }
        }

        let number = self.next_number();
        let created = self.with_existing(repo, |r| {
            let milestone = match issue.milestone {
                Some(number) => Some(
                    r.milestones
                        .iter()
                        .find(|m| m.number == number)
                        .map(|m| m.title.clone())
                        .ok_or_else(|| validation_failed("invalid"))?,
                ),
                None => None,
            };
            let created = Issue {
                number,
                title: issue.title.clone(),
                body: issue.body.clone(),
                state: ItemState::Open,
                assignees: issue.assignees.clone(),
                milestone,
                labels: issue.labels.clone(),
            };
            r.issues.push(created.clone());
            Ok(created)
        })?;
        self.record_write();
        Ok(created)
    }
}

/// Migration configuration between [`SOURCE`] and [`DESTINATION`].
pub fn config(adjust: impl FnOnce(&mut MigrationRequest)) -> MigrationConfig {
    let mut request = MigrationRequest::new("octocat", "token", SOURCE, DESTINATION);
    adjust(&mut request);
    MigrationConfig::resolve(request).unwrap()
}
