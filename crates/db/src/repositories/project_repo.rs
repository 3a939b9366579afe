//! Repository for the `research_projects` table.

use labtrack_core::pagination::PageParams;
use labtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, ProjectFilter, ResearchProject, UpdateProject};
use crate::repositories::filter::{bind_values, bind_values_scalar, BindValue, FilterBuilder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, description, status, start_date, end_date, budget, \
    confidentiality_level, lead_researcher_id, created_at, updated_at";

/// Provides CRUD and filtered listing for research projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a project together with its initial member list as a single
    /// atomic unit.
    ///
    /// Runs in one transaction on one acquired connection: if any member
    /// insert fails (e.g. a duplicate (project, user) pair), the project row
    /// rolls back with it. The transaction guard releases the connection on
    /// every exit path.
    pub async fn create_with_members(
        pool: &PgPool,
        lead_researcher_id: DbId,
        input: &CreateProject,
    ) -> Result<ResearchProject, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO research_projects \
                (title, description, status, start_date, end_date, budget, \
                 confidentiality_level, lead_researcher_id) \
             VALUES ($1, $2, COALESCE($3, 'planning'), $4, $5, $6, \
                     COALESCE($7, 'internal'), $8) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, ResearchProject>(&insert_query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.confidentiality_level)
            .bind(lead_researcher_id)
            .fetch_one(&mut *tx)
            .await?;

        for member in &input.team_members {
            sqlx::query(
                "INSERT INTO project_members \
                    (project_id, user_id, role, contribution_percentage) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(project.id)
            .bind(member.user_id)
            .bind(&member.role)
            .bind(member.contribution_percentage)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ResearchProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM research_projects WHERE id = $1");
        sqlx::query_as::<_, ResearchProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of projects matching the filter.
    ///
    /// The WHERE fragment is shared with [`Self::count`] so the page and the
    /// pagination total always describe the same row set.
    pub async fn list_page(
        pool: &PgPool,
        filter: &ProjectFilter,
        params: PageParams,
    ) -> Result<Vec<ResearchProject>, sqlx::Error> {
        let f = build_project_filter(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM research_projects {} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${} OFFSET ${}",
            f.where_clause(),
            f.next_idx(),
            f.next_idx() + 1
        );

        let q = bind_values(sqlx::query_as::<_, ResearchProject>(&query), f.values());
        q.bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await
    }

    /// Count projects matching the filter (for pagination metadata).
    ///
    /// Reflects the filters but never the pagination window.
    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        let f = build_project_filter(filter);
        let query = format!(
            "SELECT COUNT(*)::BIGINT FROM research_projects {}",
            f.where_clause()
        );
        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), f.values());
        q.fetch_one(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<ResearchProject>, sqlx::Error> {
        let query = format!(
            "UPDATE research_projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                budget = COALESCE($7, budget),
                confidentiality_level = COALESCE($8, confidentiality_level),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResearchProject>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget)
            .bind(&input.confidentiality_level)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Member and sample rows cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM research_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the shared WHERE fragment for project listing and counting.
///
/// Absent filter fields contribute nothing (no predicate, not a wildcard).
fn build_project_filter(filter: &ProjectFilter) -> FilterBuilder {
    let mut f = FilterBuilder::new();
    if let Some(ref status) = filter.status {
        f.push("status = ${}", BindValue::Text(status.clone()));
    }
    if let Some(ref confidentiality) = filter.confidentiality {
        f.push(
            "confidentiality_level = ${}",
            BindValue::Text(confidentiality.clone()),
        );
    }
    f
}
