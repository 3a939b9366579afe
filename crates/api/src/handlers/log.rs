//! Handlers for research activity logs.

use axum::extract::{Path, Query, State};
use labtrack_core::pagination::{PageParams, Pagination};
use labtrack_core::types::{Date, DbId};
use labtrack_db::models::log::{ActivityHours, LogFilter, LogWithUser};
use labtrack_db::repositories::LogRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::project::fetch_project;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for `GET /projects/{id}/logs`. Date bounds are
/// inclusive.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogListQuery {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub activity_type: Option<String>,
    pub user_id: Option<DbId>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Hour totals across the full filtered set (never just the page).
#[derive(Debug, Serialize)]
pub struct LogSummary {
    pub total_hours: f64,
    pub activity_breakdown: Vec<ActivityHours>,
}

/// Paged log listing payload.
#[derive(Debug, Serialize)]
pub struct LogListData {
    pub logs: Vec<LogWithUser>,
    pub summary: LogSummary,
    pub pagination: Pagination,
}

/// GET /api/projects/{project_id}/logs
///
/// Returns one page of logs plus a summary and pagination metadata. The
/// page, the count, and the summary are all computed over the same filtered
/// set.
pub async fn list_logs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<DbId>,
    Query(query): Query<LogListQuery>,
) -> AppResult<Envelope<LogListData>> {
    fetch_project(&state.pool, project_id).await?;

    let filter = LogFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        activity_type: query.activity_type,
        user_id: query.user_id,
    };
    let params = PageParams::from_query(query.page, query.limit);

    let logs = LogRepo::list_page(&state.pool, project_id, &filter, params).await?;
    let total = LogRepo::count(&state.pool, project_id, &filter).await?;
    let activity_breakdown = LogRepo::activity_summary(&state.pool, project_id, &filter).await?;

    let total_hours = activity_breakdown.iter().map(|a| a.type_hours).sum();

    Ok(Envelope::ok(
        LogListData {
            logs,
            summary: LogSummary {
                total_hours,
                activity_breakdown,
            },
            pagination: Pagination::new(total, params),
        },
        "Logs fetched",
    ))
}
