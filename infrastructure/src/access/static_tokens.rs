//! [`PermissionChecker`] backed by a fixed token table from configuration.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use trivia_application::{AccessDenied, Credentials, PermissionChecker};
use trivia_domain::Permission;

/// Grants each configured bearer token a fixed set of permissions.
///
/// With no tokens configured every gated operation is refused as
/// unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenPermissions {
    grants: HashMap<String, HashSet<Permission>>,
}

impl StaticTokenPermissions {
    pub fn new(grants: impl IntoIterator<Item = (String, Vec<Permission>)>) -> Self {
        let mut table: HashMap<String, HashSet<Permission>> = HashMap::new();
        for (token, permissions) in grants {
            table.entry(token).or_default().extend(permissions);
        }
        Self { grants: table }
    }

    pub fn token_count(&self) -> usize {
        self.grants.len()
    }
}

#[async_trait]
impl PermissionChecker for StaticTokenPermissions {
    async fn check(
        &self,
        credentials: &Credentials,
        required: Permission,
    ) -> Result<(), AccessDenied> {
        let token = match credentials {
            Credentials::Bearer(token) => token,
            Credentials::Anonymous => {
                return Err(AccessDenied::Unauthenticated(
                    "authorization header is expected".to_string(),
                ));
            }
            Credentials::Malformed => {
                return Err(AccessDenied::Unauthenticated(
                    "authorization header must be a bearer token".to_string(),
                ));
            }
        };

        let granted = self
            .grants
            .get(token)
            .ok_or_else(|| AccessDenied::Unauthenticated("unknown token".to_string()))?;
        if granted.contains(&required) {
            Ok(())
        } else {
            debug!("Token lacks {}", required);
            Err(AccessDenied::Forbidden(required))
        }
    }
}
