//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`error::ValidationError`]: rejected creation payloads
//! - [`error::RepositoryError`]: failures reported by storage adapters
//! - [`lenient`]: integer fields that also accept numeric strings

pub mod error;
pub mod lenient;
