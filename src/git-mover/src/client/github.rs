//! [`IssueTracker`] backed by the GitHub REST API.

use super::{ClientError, ErrorKind, IssueTracker};
use crate::config::ApiRoot;
use crate::models::{
    Issue, IssueQuery, ItemState, Label, Milestone, NewIssue, NewMilestone, RepoRef, Repository,
    StateFilter,
};
use crate::rate_limit::{
    ensure_core_rate_limit, retry_config, wait_for_reset, MAX_RETRIES, SECONDARY_LIMIT_WAIT,
};
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, Page};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Results per page for listings.
const RESULTS_PER_PAGE: u8 = 100;

/// GitHub client for one installation and one credential.
///
/// Reads and keyed creates (milestones, labels) go through octocrab's
/// rate-limit aware retry layer. A replayed keyed create comes back as a
/// conflict, never as a second copy. Issue creation has no identity key, so
/// it is sent without transport retries and only repeated after a rate
/// limit rejection, which guarantees nothing was written.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    single_shot: Octocrab,
    min_wait: Duration,
}

impl GitHubClient {
    /// Builds an authenticated client for `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client cannot be built.
    pub fn new(root: &ApiRoot, token: &str) -> Result<Self, ClientError> {
        Self::with_min_wait(root, token, SECONDARY_LIMIT_WAIT)
    }

    /// Like [`GitHubClient::new`], waiting `min_wait` after a rate limit
    /// rejection that carries no reset time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client cannot be built.
    pub fn with_min_wait(
        root: &ApiRoot,
        token: &str,
        min_wait: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            octocrab: build(root, token, retry_config(min_wait))?,
            single_shot: build(root, token, RetryConfig::None)?,
            min_wait,
        })
    }

    /// Fetches the first page of a listing and follows `next` links.
    async fn list_all<T, P>(&self, route: &str, params: &P) -> Result<Vec<T>, ClientError>
    where
        T: serde::de::DeserializeOwned,
        P: Serialize + ?Sized,
    {
        debug!(route, "Listing");
        let page: Page<T> = self.octocrab.get(route, Some(params)).await?;
        let items = self.octocrab.all_pages(page).await?;
        debug!(route, count = items.len(), "Listed");
        Ok(items)
    }

    /// Creates an entity whose identity key makes a replay harmless.
    async fn create_keyed<B, T>(&self, route: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        ensure_core_rate_limit(&self.octocrab).await;
        Ok(self.octocrab.post(route, Some(body)).await?)
    }
}

fn build(root: &ApiRoot, token: &str, retry: RetryConfig) -> Result<Octocrab, ClientError> {
    Ok(Octocrab::builder()
        .add_retry_config(retry)
        .base_uri(root.as_str())?
        .personal_token(token.to_string())
        .build()?)
}

#[derive(Serialize)]
struct ListParams {
    state: &'static str,
    per_page: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    milestone: Option<String>,
}

impl ListParams {
    fn new(state: StateFilter) -> Self {
        Self {
            state: state.as_str(),
            per_page: RESULTS_PER_PAGE,
            milestone: None,
        }
    }
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
}

/// Issue as returned by the REST API.
#[derive(Deserialize)]
struct IssuePayload {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    state: ItemState,
    #[serde(default)]
    assignees: Vec<UserPayload>,
    #[serde(default)]
    milestone: Option<MilestoneRefPayload>,
    #[serde(default)]
    labels: Vec<LabelRefPayload>,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Deserialize)]
struct MilestoneRefPayload {
    title: String,
}

#[derive(Deserialize)]
struct LabelRefPayload {
    name: String,
}

impl IssuePayload {
    fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl From<IssuePayload> for Issue {
    fn from(payload: IssuePayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title,
            body: payload.body,
            state: payload.state,
            assignees: payload.assignees.into_iter().map(|u| u.login).collect(),
            milestone: payload.milestone.map(|m| m.title),
            labels: payload.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

fn repo_route(repo: &RepoRef, resource: &str) -> String {
    format!("/repos/{}/{}/{resource}", repo.owner(), repo.name())
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn get_repo(&self, repo: &RepoRef) -> Result<Repository, ClientError> {
        let route = format!("/repos/{}/{}", repo.owner(), repo.name());
        let repository: Repository = self.octocrab.get(route, None::<&()>).await?;
        Ok(repository)
    }

    async fn list_milestones(
        &self,
        repo: &RepoRef,
        state: StateFilter,
    ) -> Result<Vec<Milestone>, ClientError> {
        self.list_all(&repo_route(repo, "milestones"), &ListParams::new(state))
            .await
    }

    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>, ClientError> {
        let params = PageParams {
            per_page: RESULTS_PER_PAGE,
        };
        self.list_all(&repo_route(repo, "labels"), &params).await
    }

    async fn list_issues(
        &self,
        repo: &RepoRef,
        query: &IssueQuery,
    ) -> Result<Vec<Issue>, ClientError> {
        let mut params = ListParams::new(query.state);
        params.milestone = query.milestone.map(|number| number.to_string());

        let payloads: Vec<IssuePayload> =
            self.list_all(&repo_route(repo, "issues"), &params).await?;
        Ok(payloads
            .into_iter()
            .filter(|payload| !payload.is_pull_request())
            .map(Issue::from)
            .collect())
    }

    async fn create_milestone(
        &self,
        repo: &RepoRef,
        milestone: &NewMilestone,
    ) -> Result<Milestone, ClientError> {
        self.create_keyed(&repo_route(repo, "milestones"), milestone)
            .await
    }

    async fn create_label(&self, repo: &RepoRef, label: &Label) -> Result<Label, ClientError> {
        self.create_keyed(&repo_route(repo, "labels"), label).await
    }

    async fn create_issue(&self, repo: &RepoRef, issue: &NewIssue) -> Result<Issue, ClientError> {
        let route = repo_route(repo, "issues");
        let mut retries = 0;
        loop {
            ensure_core_rate_limit(&self.octocrab).await;

            let sent: Result<IssuePayload, octocrab::Error> =
                self.single_shot.post(&route, Some(issue)).await;
            match sent.map_err(ClientError::from) {
                Err(e) if e.kind() == ErrorKind::RateLimited && retries < MAX_RETRIES => {
                    retries += 1;
                    warn!(title = %issue.title, retries, error = %e, "Issue creation rate limited");
                    wait_for_reset(&self.octocrab, self.min_wait).await;
                }
                result => return result.map(Issue::from),
            }
        }
    }
}
