//! Category identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a category.
///
/// The reserved value `0` ([`CategoryId::ALL`]) never names a stored category;
/// in quiz requests it means "no category filter". It is also the default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Sentinel meaning "all categories".
    pub const ALL: CategoryId = CategoryId(0);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns true for the "all categories" sentinel.
    pub const fn is_all(self) -> bool {
        self.0 == Self::ALL.0
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
