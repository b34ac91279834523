//! Category domain.
//!
//! - [`entities::Category`]: a seeded question category
//! - [`entities::CategoryIndex`]: ordered `id -> label` mapping
//! - [`repository::CategoryRepository`]: trait for category lookup

pub mod entities;
pub mod repository;
pub mod value_objects;
