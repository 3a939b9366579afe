//! Repository for the `research_logs` table.
//!
//! Logs are append-only from the tooling side and read-only through the
//! API. The listing, its count, and the per-activity-type summary all share
//! one WHERE fragment so they describe the same filtered set.

use labtrack_core::pagination::PageParams;
use labtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::log::{ActivityHours, CreateLog, LogFilter, LogWithUser};
use crate::repositories::filter::{bind_values, bind_values_scalar, BindValue, FilterBuilder};

/// Provides log queries scoped to a project.
pub struct LogRepo;

impl LogRepo {
    /// Insert a log row (seed and test tooling only).
    pub async fn create(pool: &PgPool, input: &CreateLog) -> Result<LogWithUser, sqlx::Error> {
        sqlx::query_as::<_, LogWithUser>(
            "WITH inserted AS (
                INSERT INTO research_logs \
                    (project_id, user_id, activity_type, hours_spent, log_date, notes) \
                VALUES ($1, $2, $3, $4, $5, $6) \
                RETURNING *
             )
             SELECT i.id, i.project_id, i.user_id, u.username, i.activity_type, \
                    i.hours_spent, i.log_date, i.notes, i.created_at \
             FROM inserted i JOIN users u ON u.id = i.user_id",
        )
        .bind(input.project_id)
        .bind(input.user_id)
        .bind(&input.activity_type)
        .bind(input.hours_spent)
        .bind(input.log_date)
        .bind(&input.notes)
        .fetch_one(pool)
        .await
    }

    /// Fetch one page of logs for a project, joined with the author's
    /// username.
    ///
    /// Ordered by `log_date DESC, id DESC`; callers must never rely on
    /// storage order.
    pub async fn list_page(
        pool: &PgPool,
        project_id: DbId,
        filter: &LogFilter,
        params: PageParams,
    ) -> Result<Vec<LogWithUser>, sqlx::Error> {
        let f = build_log_filter(project_id, filter);
        let query = format!(
            "SELECT l.id, l.project_id, l.user_id, u.username, l.activity_type, \
                    l.hours_spent, l.log_date, l.notes, l.created_at \
             FROM research_logs l \
             JOIN users u ON u.id = l.user_id \
             {} \
             ORDER BY l.log_date DESC, l.id DESC \
             LIMIT ${} OFFSET ${}",
            f.where_clause(),
            f.next_idx(),
            f.next_idx() + 1
        );

        let q = bind_values(sqlx::query_as::<_, LogWithUser>(&query), f.values());
        q.bind(params.limit)
            .bind(params.offset())
            .fetch_all(pool)
            .await
    }

    /// Count logs matching the filter (for pagination metadata).
    pub async fn count(
        pool: &PgPool,
        project_id: DbId,
        filter: &LogFilter,
    ) -> Result<i64, sqlx::Error> {
        let f = build_log_filter(project_id, filter);
        let query = format!(
            "SELECT COUNT(*)::BIGINT FROM research_logs l {}",
            f.where_clause()
        );
        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), f.values());
        q.fetch_one(pool).await
    }

    /// Hours per activity type over the full filtered set.
    ///
    /// Shares the WHERE fragment with [`Self::list_page`] and
    /// [`Self::count`]: the summary reflects every filtered row, not just
    /// the current page.
    pub async fn activity_summary(
        pool: &PgPool,
        project_id: DbId,
        filter: &LogFilter,
    ) -> Result<Vec<ActivityHours>, sqlx::Error> {
        let f = build_log_filter(project_id, filter);
        let query = format!(
            "SELECT l.activity_type, \
                    SUM(l.hours_spent)::DOUBLE PRECISION AS type_hours \
             FROM research_logs l \
             {} \
             GROUP BY l.activity_type \
             ORDER BY l.activity_type",
            f.where_clause()
        );
        let q = bind_values(sqlx::query_as::<_, ActivityHours>(&query), f.values());
        q.fetch_all(pool).await
    }
}

/// Build the WHERE fragment shared by the page, count, and summary queries.
///
/// The project predicate is always present; each optional filter field adds
/// one ANDed predicate. Date bounds are inclusive on both ends.
fn build_log_filter(project_id: DbId, filter: &LogFilter) -> FilterBuilder {
    let mut f = FilterBuilder::new();
    f.push("l.project_id = ${}", BindValue::BigInt(project_id));
    if let Some(start) = filter.start_date {
        f.push("l.log_date >= ${}", BindValue::Date(start));
    }
    if let Some(end) = filter.end_date {
        f.push("l.log_date <= ${}", BindValue::Date(end));
    }
    if let Some(ref activity_type) = filter.activity_type {
        f.push("l.activity_type = ${}", BindValue::Text(activity_type.clone()));
    }
    if let Some(user_id) = filter.user_id {
        f.push("l.user_id = ${}", BindValue::BigInt(user_id));
    }
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_predicate_is_always_present() {
        let f = build_log_filter(42, &LogFilter::default());
        assert_eq!(f.where_clause(), "WHERE l.project_id = $1");
        assert_eq!(f.next_idx(), 2);
    }

    #[test]
    fn all_filters_stack_in_order() {
        let filter = LogFilter {
            start_date: Some("2026-01-01".parse().unwrap()),
            end_date: Some("2026-06-30".parse().unwrap()),
            activity_type: Some("experiment".into()),
            user_id: Some(7),
        };
        let f = build_log_filter(1, &filter);
        assert_eq!(
            f.where_clause(),
            "WHERE l.project_id = $1 AND l.log_date >= $2 AND l.log_date <= $3 \
             AND l.activity_type = $4 AND l.user_id = $5"
        );
        assert_eq!(f.next_idx(), 6);
    }
}
