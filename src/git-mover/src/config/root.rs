//! Service API roots.

use super::ConfigError;
use std::fmt;
use url::Url;

/// API root of the public service.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Path appended to enterprise installation roots.
pub const ENTERPRISE_API_SUFFIX: &str = "/api/v3";

/// A normalized API base URL.
///
/// The public root is used as-is. Any other root is an enterprise
/// installation and gets [`ENTERPRISE_API_SUFFIX`] appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiRoot(String);

impl ApiRoot {
    /// Parses and normalizes a root such as `https://github.example.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRoot`] if the root is not a URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ConfigError::InvalidRoot {
            root: raw.to_string(),
            source,
        })?;

        if trimmed == DEFAULT_API_ROOT || trimmed.ends_with(ENTERPRISE_API_SUFFIX) {
            Ok(Self(trimmed.to_string()))
        } else {
            Ok(Self(format!("{trimmed}{ENTERPRISE_API_SUFFIX}")))
        }
    }

    /// The base URL requests are issued against.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiRoot {
    fn default() -> Self {
        Self(DEFAULT_API_ROOT.to_string())
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
