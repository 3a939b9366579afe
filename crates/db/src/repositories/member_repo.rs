//! Repository for the `project_members` table.

use labtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{AddMember, MemberWithUser, ProjectMember, UpdateMember};

const COLUMNS: &str =
    "id, project_id, user_id, role, contribution_percentage, joined_at, updated_at";

/// Provides membership operations scoped to a project.
pub struct MemberRepo;

impl MemberRepo {
    /// List all members of a project together with their user record,
    /// newest membership first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MemberWithUser>, sqlx::Error> {
        sqlx::query_as::<_, MemberWithUser>(
            "SELECT pm.id, pm.project_id, pm.user_id, u.username, u.email, \
                    u.department, pm.role, pm.contribution_percentage, pm.joined_at \
             FROM project_members pm \
             JOIN users u ON u.id = pm.user_id \
             WHERE pm.project_id = $1 \
             ORDER BY pm.joined_at DESC, pm.id DESC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Add a member to a project.
    ///
    /// The `uq_project_members_project_user` constraint rejects a second row
    /// for the same (project, user) pair; callers surface that as a conflict.
    pub async fn add(
        pool: &PgPool,
        project_id: DbId,
        input: &AddMember,
    ) -> Result<ProjectMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_members \
                (project_id, user_id, role, contribution_percentage) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(input.user_id)
            .bind(&input.role)
            .bind(input.contribution_percentage)
            .fetch_one(pool)
            .await
    }

    /// Update a membership's role and/or contribution. Only non-`None`
    /// fields are applied.
    ///
    /// Returns `None` when no membership exists for the (project, user)
    /// pair.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<ProjectMember>, sqlx::Error> {
        let query = format!(
            "UPDATE project_members SET
                role = COALESCE($3, role),
                contribution_percentage = COALESCE($4, contribution_percentage),
                updated_at = now()
             WHERE project_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(&input.role)
            .bind(input.contribution_percentage)
            .fetch_optional(pool)
            .await
    }
}
