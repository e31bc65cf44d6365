//! Configuration error types.

use crate::models::RepoRefError;
use thiserror::Error;

/// Errors that can occur while building a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A repository coordinate is malformed.
    #[error(transparent)]
    Repository(#[from] RepoRefError),

    /// An API root is not a valid URL.
    #[error("Invalid API root '{root}': {source}")]
    InvalidRoot {
        root: String,
        #[source]
        source: url::ParseError,
    },

    /// Source and destination live on different installations but only one
    /// credential was supplied.
    #[error(
        "Source and Destination Roots are different but no token was supplied for the destination repo."
    )]
    MissingDestinationToken,
}
