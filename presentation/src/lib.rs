//! Presentation layer for trivia-api
//!
//! This crate contains the command-line definition and the HTTP surface
//! (router, request/response bodies, error responses).

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, Ports, build_router};
