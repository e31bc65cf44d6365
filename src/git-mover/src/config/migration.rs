//! Migration run configuration.

use super::{ApiRoot, ConfigError, EntitySelection, DEFAULT_API_ROOT};
use crate::models::{RepoRef, StateFilter};
use tracing::info;

/// Raw migration settings, as collected from the command line.
#[derive(Debug, Clone)]
pub struct MigrationRequest {
    /// Source account user name.
    pub user_name: String,
    /// Source account personal access token.
    pub token: String,
    /// Repository to migrate from, `owner/name`.
    pub source_repo: String,
    /// Repository to migrate to, `owner/name`.
    pub destination_repo: String,
    /// Token for the destination account, when it differs from the source.
    pub destination_token: Option<String>,
    /// User name for the destination account.
    pub destination_user_name: Option<String>,
    /// API root of the source installation.
    pub source_root: String,
    /// API root of the destination installation.
    pub destination_root: String,
    /// Entity kinds to migrate. Empty means all.
    pub selection: EntitySelection,
    /// Whether existing milestones should be updated.
    pub update_existing: bool,
    /// Which milestone and issue states to read from the source.
    pub state: StateFilter,
}

impl MigrationRequest {
    /// Creates a request for a full migration between repositories on the
    /// public service.
    pub fn new(
        user_name: impl Into<String>,
        token: impl Into<String>,
        source_repo: impl Into<String>,
        destination_repo: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            token: token.into(),
            source_repo: source_repo.into(),
            destination_repo: destination_repo.into(),
            destination_token: None,
            destination_user_name: None,
            source_root: DEFAULT_API_ROOT.to_string(),
            destination_root: DEFAULT_API_ROOT.to_string(),
            selection: EntitySelection::default(),
            update_existing: false,
            state: StateFilter::default(),
        }
    }
}

/// Account used against one installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    user_name: String,
    token: String,
}

impl Credentials {
    /// Account user name.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Personal access token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Validated configuration for a migration run.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    source_repo: RepoRef,
    destination_repo: RepoRef,
    source_root: ApiRoot,
    destination_root: ApiRoot,
    source: Credentials,
    destination: Credentials,
    selection: EntitySelection,
    update_existing: bool,
    state: StateFilter,
}

impl MigrationConfig {
    /// Validates a request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDestinationToken`] when the roots differ
    /// and no destination token was given, and other [`ConfigError`]s for
    /// malformed roots or repository coordinates.
    pub fn resolve(request: MigrationRequest) -> Result<Self, ConfigError> {
        let source_root = ApiRoot::parse(&request.source_root)?;
        let destination_root = ApiRoot::parse(&request.destination_root)?;

        let destination_token = request
            .destination_token
            .filter(|token| !token.trim().is_empty());

        if source_root != destination_root && destination_token.is_none() {
            return Err(ConfigError::MissingDestinationToken);
        }

        let destination_user_name = match request.destination_user_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                println!(
                    "No destination User Name provided, defaulting to source User Name: {}",
                    request.user_name
                );
                request.user_name.clone()
            }
        };

        let source_repo: RepoRef = request.source_repo.parse()?;
        let destination_repo: RepoRef = request.destination_repo.parse()?;

        let config = Self {
            source_repo,
            destination_repo,
            source_root,
            destination_root,
            destination: Credentials {
                user_name: destination_user_name,
                token: destination_token.unwrap_or_else(|| request.token.clone()),
            },
            source: Credentials {
                user_name: request.user_name,
                token: request.token,
            },
            selection: request.selection.or_all(),
            update_existing: request.update_existing,
            state: request.state,
        };

        info!(
            source = %config.source_repo,
            source_root = %config.source_root,
            destination = %config.destination_repo,
            destination_root = %config.destination_root,
            "Resolved migration configuration"
        );
        Ok(config)
    }

    /// Repository to migrate from.
    pub fn source_repo(&self) -> &RepoRef {
        &self.source_repo
    }

    /// Repository to migrate to.
    pub fn destination_repo(&self) -> &RepoRef {
        &self.destination_repo
    }

    /// API root of the source installation.
    pub fn source_root(&self) -> &ApiRoot {
        &self.source_root
    }

    /// API root of the destination installation.
    pub fn destination_root(&self) -> &ApiRoot {
        &self.destination_root
    }

    /// Source account.
    pub fn source(&self) -> &Credentials {
        &self.source
    }

    /// Destination account.
    pub fn destination(&self) -> &Credentials {
        &self.destination
    }

    /// Entity kinds to migrate; never empty.
    pub fn selection(&self) -> EntitySelection {
        self.selection
    }

    /// Whether existing milestones should be updated.
    pub fn update_existing(&self) -> bool {
        self.update_existing
    }

    /// Which milestone and issue states are read from the source.
    pub fn state(&self) -> StateFilter {
        self.state
    }
}
