//! Research project entity model and DTOs.

use labtrack_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `research_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResearchProject {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    pub confidentiality_level: String,
    pub lead_researcher_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project, optionally with an initial member list.
///
/// `lead_researcher_id` is not accepted from the client; it is always the
/// authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"planning"` if omitted.
    pub status: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    /// Defaults to `"internal"` if omitted.
    pub confidentiality_level: Option<String>,
    #[serde(default)]
    pub team_members: Vec<CreateProjectMember>,
}

/// Initial member entry inside [`CreateProject`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectMember {
    pub user_id: DbId,
    pub role: String,
    pub contribution_percentage: f64,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub budget: Option<f64>,
    pub confidentiality_level: Option<String>,
}

/// Optional equality filters for the project listing.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub confidentiality: Option<String>,
}
