//! Domain layer shared by the database and API crates.
//!
//! This crate has no internal dependencies so both the repository layer and
//! any future CLI tooling can use it.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;
