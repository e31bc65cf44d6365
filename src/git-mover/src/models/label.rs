//! Label records.

use serde::{Deserialize, Serialize};

/// A label. The name is the identity key within a repository.
///
/// The same shape is used for reading and creating labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,

    /// Hex color, without the leading `#`.
    pub color: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
