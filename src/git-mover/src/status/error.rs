//! Status report error types.

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::models::RepoRef;
use thiserror::Error;

/// Errors that can occur while building a status report.
#[derive(Debug, Error)]
pub enum StatusError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Client construction failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The repository could not be looked up.
    #[error("Failed to look up repository {repo}: {source}")]
    Lookup {
        repo: RepoRef,
        #[source]
        source: ClientError,
    },

    /// Listing milestones or issues failed.
    #[error("Failed to retrieve {what}: {source}")]
    Fetch {
        what: String,
        #[source]
        source: ClientError,
    },
}
