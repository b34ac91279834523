//! Access control vocabulary.
//!
//! The domain only names the permissions; checking them is left to an
//! application port.

pub mod permission;
