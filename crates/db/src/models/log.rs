//! Research activity log model and query types.

use labtrack_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A log row from the `research_logs` table, joined with the author's
/// username. Logs are read-only from the API's perspective.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogWithUser {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub activity_type: String,
    pub hours_spent: f64,
    pub log_date: Date,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting log rows (seed and test tooling only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLog {
    pub project_id: DbId,
    pub user_id: DbId,
    pub activity_type: String,
    pub hours_spent: f64,
    pub log_date: Date,
    pub notes: Option<String>,
}

/// Optional filters for the log listing. All predicates are ANDed.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// Inclusive lower bound on `log_date`.
    pub start_date: Option<Date>,
    /// Inclusive upper bound on `log_date`.
    pub end_date: Option<Date>,
    pub activity_type: Option<String>,
    pub user_id: Option<DbId>,
}

/// Per-activity-type hour totals over the full filtered set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityHours {
    pub activity_type: String,
    pub type_hours: f64,
}
