//! Migration error types.

use super::EntityKind;
use crate::client::ClientError;
use crate::config::ConfigError;
use crate::models::RepoRef;
use thiserror::Error;

/// Errors that abort a migration run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Client construction failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A repository could not be looked up.
    #[error("Failed to look up repository {repo}: {source}")]
    Lookup {
        repo: RepoRef,
        #[source]
        source: ClientError,
    },

    /// Listing an entity kind from the source failed.
    #[error("Failed to retrieve {}: {source}", .kind.plural())]
    Fetch {
        kind: EntityKind,
        #[source]
        source: ClientError,
    },

    /// Loading the destination's milestones and labels failed.
    #[error("Failed to index destination repository {repo}: {source}")]
    Index {
        repo: RepoRef,
        #[source]
        source: ClientError,
    },

    /// Creating an item failed in a way that is not a skip.
    #[error("Failed to create {kind} '{key}': {source}")]
    Create {
        kind: EntityKind,
        key: String,
        #[source]
        source: ClientError,
    },
}
