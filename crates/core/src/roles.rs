//! Well-known role name constants and the pure role authorizer.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260301000001_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_RESEARCHER: &str = "researcher";
pub const ROLE_VIEWER: &str = "viewer";

/// All roles accepted by the `users.role` column.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_RESEARCHER, ROLE_VIEWER];

/// Roles permitted to create and mutate projects, members, and samples.
pub const CONTRIBUTOR_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_RESEARCHER];

/// Pure role check: allow iff `role` is a member of `allowed`.
///
/// Runs strictly after token validation; callers with no validated claims
/// must be denied before reaching this point.
pub fn is_allowed(role: &str, allowed: &[&str]) -> bool {
    allowed.contains(&role)
}

/// Check whether a string is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
