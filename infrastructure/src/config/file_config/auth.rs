//! Access configuration from TOML (`[auth]` section)
//!
//! ```toml
//! [auth.tokens]
//! "barista-token" = ["get:drinks-detail"]
//! "manager-token" = ["get:drinks-detail", "post:drinks", "patch:drinks", "delete:drinks"]
//! ```

use super::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trivia_domain::Permission;

/// Raw access configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Bearer token to the permission names it grants
    pub tokens: BTreeMap<String, Vec<String>>,
}

impl FileAuthConfig {
    /// Parse the permission names. Unknown names and blank tokens are skipped
    /// with a warning.
    pub fn to_grants(&self) -> (Vec<(String, Vec<Permission>)>, Vec<ConfigIssue>) {
        let mut grants = Vec::new();
        let mut issues = Vec::new();

        for (token, names) in &self.tokens {
            if token.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    field: "auth.tokens",
                    message: "auth.tokens: ignoring a blank token".to_string(),
                });
                continue;
            }
            let mut permissions = Vec::new();
            for name in names {
                match name.parse::<Permission>() {
                    Ok(permission) => permissions.push(permission),
                    Err(e) => issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        field: "auth.tokens",
                        message: format!("auth.tokens: {e}; ignoring it"),
                    }),
                }
            }
            grants.push((token.clone(), permissions));
        }

        (grants, issues)
    }
}
