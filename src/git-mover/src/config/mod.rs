//! Run configuration.
//!
//! Command-line input is validated into explicit configuration values that
//! are passed to the migration and reporting entry points.

mod error;
mod migration;
mod root;
mod selection;
mod status;

pub use error::ConfigError;
pub use migration::{Credentials, MigrationConfig, MigrationRequest};
pub use root::{ApiRoot, DEFAULT_API_ROOT, ENTERPRISE_API_SUFFIX};
pub use selection::EntitySelection;
pub use status::{StatusConfig, MAX_REPORTED_MILESTONES};
