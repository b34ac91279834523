//! JSON-over-HTTP interface
//!
//! Routes map one-to-one onto the application use cases. See [`router`] for
//! the route table and [`error`] for how failures become status codes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, Ports};
