//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. All values reach SQL as
//! bound parameters; dynamic WHERE clauses are assembled in `filter`.

pub mod filter;
pub mod log_repo;
pub mod member_repo;
pub mod project_repo;
pub mod sample_repo;
pub mod user_repo;

pub use log_repo::LogRepo;
pub use member_repo::MemberRepo;
pub use project_repo::ProjectRepo;
pub use sample_repo::SampleRepo;
pub use user_repo::UserRepo;
