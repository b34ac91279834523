//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod auth;
mod database;
mod logging;
mod pagination;
mod server;

pub use auth::FileAuthConfig;
pub use database::FileDatabaseConfig;
pub use logging::FileLoggingConfig;
pub use pagination::FilePaginationConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use trivia_application::ListingParams;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key
    pub field: &'static str,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// SQLite store settings
    pub database: FileDatabaseConfig,
    /// Page size for question listings
    pub pagination: FilePaginationConfig,
    /// Log filter and optional log file
    pub logging: FileLoggingConfig,
    /// Bearer tokens for the gated drink operations
    pub auth: FileAuthConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The bind address parses as a socket address
    /// 2. The page size is non-zero
    /// 3. A database location can be determined
    /// 4. Token grants name known permissions
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Bind address
        if self.server.bind.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "server.bind",
                message: format!(
                    "server.bind: '{}' is not a valid host:port address",
                    self.server.bind
                ),
            });
        }

        // 2. Page size
        issues.extend(self.pagination.to_page_size().1);

        // 3. Database location
        if !self.database.in_memory && self.database.resolved_path().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "database.path",
                message: "database.path is not set and no data directory could be determined"
                    .to_string(),
            });
        }

        // 4. Token grants
        issues.extend(self.auth.to_grants().1);

        issues
    }

    /// Listing parameters for the application layer.
    pub fn listing_params(&self) -> ListingParams {
        ListingParams::default().with_questions_per_page(self.pagination.to_page_size().0)
    }
}
