//! Permission checking port.
//!
//! The application never inspects tokens itself. The transport turns the
//! request's `Authorization` header into [`Credentials`] and an adapter
//! decides whether they grant a [`Permission`].

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::Permission;

/// What the caller presented, as read from an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No header at all.
    Anonymous,
    /// `Bearer <token>`.
    Bearer(String),
    /// A header that is not a single bearer token.
    Malformed,
}

impl Credentials {
    /// Parse a raw header value. The scheme is matched case-insensitively.
    pub fn from_authorization_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Credentials::Anonymous;
        };
        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Credentials::Bearer(token.to_string())
            }
            _ => Credentials::Malformed,
        }
    }
}

/// Why a permission check failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// The caller could not be identified.
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    /// The caller is known but lacks the permission.
    #[error("Permission {0} not granted")]
    Forbidden(Permission),
}

/// Port for authorizing gated operations.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    /// Succeeds only if `credentials` carry `required`.
    async fn check(
        &self,
        credentials: &Credentials,
        required: Permission,
    ) -> Result<(), AccessDenied>;
}
