//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the API updates the entity, an update DTO

pub mod log;
pub mod member;
pub mod project;
pub mod sample;
pub mod user;
