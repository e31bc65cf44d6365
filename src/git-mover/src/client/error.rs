//! Client error types.

use std::fmt;
use thiserror::Error;

/// Coarse classification of a failed tracker call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An entity with the same identity key already exists.
    Conflict,
    /// The request referenced a milestone, label or user the tracker rejected.
    InvalidReference,
    /// The repository or resource does not exist.
    NotFound,
    /// Bad or insufficient credentials.
    Unauthorized,
    /// Rejected by a primary or secondary rate limit; nothing was written.
    RateLimited,
    /// Server error; the request may or may not have taken effect.
    Transient,
    /// Anything else, including transport and decoding failures.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Conflict => "conflict",
            Self::InvalidReference => "invalid reference",
            Self::NotFound => "not found",
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "rate limited",
            Self::Transient => "transient",
            Self::Other => "error",
        };
        f.write_str(name)
    }
}

/// A failed tracker call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ClientError {
    kind: ErrorKind,
    message: String,
}

impl ClientError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable detail.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<octocrab::Error> for ClientError {
    fn from(error: octocrab::Error) -> Self {
        match &error {
            octocrab::Error::GitHub { source, .. } => {
                let codes: Vec<&str> = source
                    .errors
                    .iter()
                    .flatten()
                    .filter_map(|entry| entry.get("code").and_then(serde_json::Value::as_str))
                    .collect();
                let kind = classify(source.status_code.as_u16(), &source.message, &codes);
                Self::new(kind, source.message.clone())
            }
            _ => Self::new(ErrorKind::Other, error.to_string()),
        }
    }
}

/// Classifies a GitHub REST error response.
///
/// `codes` are the `code` fields of the response's `errors` entries.
#[must_use]
pub fn classify(status: u16, message: &str, codes: &[&str]) -> ErrorKind {
    match status {
        422 if codes.contains(&"already_exists") => ErrorKind::Conflict,
        422 => ErrorKind::InvalidReference,
        404 => ErrorKind::NotFound,
        401 => ErrorKind::Unauthorized,
        403 if message.to_lowercase().contains("rate limit") => ErrorKind::RateLimited,
        403 => ErrorKind::Unauthorized,
        429 => ErrorKind::RateLimited,
        500..=599 => ErrorKind::Transient,
        _ => ErrorKind::Other,
    }
}
