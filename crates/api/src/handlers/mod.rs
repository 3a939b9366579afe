//! Request handlers, grouped by resource.

pub mod auth;
pub mod log;
pub mod member;
pub mod project;
pub mod sample;
