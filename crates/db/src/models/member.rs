//! Project membership entity model and DTOs.

use labtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A membership row from the `project_members` table.
///
/// One row per (project, user) pair, enforced by
/// `uq_project_members_project_user`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub role: String,
    pub contribution_percentage: f64,
    pub joined_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Membership row joined with the member's user record, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberWithUser {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub department: Option<String>,
    pub role: String,
    pub contribution_percentage: f64,
    pub joined_at: Timestamp,
}

/// DTO for adding a member to an existing project.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMember {
    pub user_id: DbId,
    pub role: String,
    pub contribution_percentage: f64,
}

/// DTO for updating a member's role or contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMember {
    pub role: Option<String>,
    pub contribution_percentage: Option<f64>,
}
