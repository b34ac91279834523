//! Fixed-size page windows over ordered sequences.
//!
//! Page `n` of size `p` covers `[(n-1)*p, n*p)` clipped to the sequence.
//! A page past the end is simply empty; whether that is a failure is up to
//! the caller.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Default number of questions per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// Returns `None` for page 0.
    pub fn new(page: usize) -> Option<Self> {
        NonZeroUsize::new(page).map(Self)
    }

    /// Parse a raw `page` parameter.
    ///
    /// Absent, non-numeric, zero, or negative input all fall back to page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Number of items per page (never zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Slice one page out of `items`, keeping the caller's order.
pub fn paginate<T>(items: &[T], page: PageNumber, size: PageSize) -> &[T] {
    let start = (page.get() - 1).saturating_mul(size.get());
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size.get()).min(items.len());
    &items[start..end]
}
