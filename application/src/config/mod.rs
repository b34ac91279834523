//! Application-level configuration.
//!
//! - [`ListingParams`]: page size for paginated question lists

pub mod listing_params;

pub use listing_params::ListingParams;
