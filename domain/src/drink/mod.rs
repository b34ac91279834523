//! Drink catalog domain.
//!
//! - [`entities::Drink`]: a catalog entry with its recipe
//! - [`entities::DrinkSummary`] / [`entities::DrinkDetail`]: the public and
//!   the permission-gated projections
//! - [`validation`]: rules for new drinks and partial updates
//! - [`repository::DrinkRepository`]: trait for drink persistence

pub mod entities;
pub mod repository;
pub mod validation;
pub mod value_objects;
