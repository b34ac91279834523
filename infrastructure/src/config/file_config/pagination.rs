//! Pagination configuration from TOML (`[pagination]` section)

use super::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use trivia_domain::{DEFAULT_PAGE_SIZE, PageSize};

/// Raw pagination configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaginationConfig {
    pub questions_per_page: usize,
}

impl Default for FilePaginationConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilePaginationConfig {
    /// Convert to a [`PageSize`], falling back to the default for `0`.
    pub fn to_page_size(&self) -> (PageSize, Vec<ConfigIssue>) {
        match PageSize::new(self.questions_per_page) {
            Some(size) => (size, Vec::new()),
            None => (
                PageSize::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    field: "pagination.questions_per_page",
                    message: format!(
                        "pagination.questions_per_page must be at least 1, falling back to {}",
                        DEFAULT_PAGE_SIZE
                    ),
                }],
            ),
        }
    }
}
