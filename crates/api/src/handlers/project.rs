//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use labtrack_core::error::CoreError;
use labtrack_core::pagination::{PageParams, Pagination};
use labtrack_core::types::DbId;
use labtrack_db::models::project::{
    CreateProject, CreateProjectMember, ProjectFilter, ResearchProject, UpdateProject,
};
use labtrack_db::repositories::ProjectRepo;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult, FieldError};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireContributor};
use crate::response::Envelope;
use crate::state::AppState;

/// Values accepted by the `status` column and filter.
pub const PROJECT_STATUSES: &[&str] = &["planning", "active", "completed", "cancelled"];

/// Values accepted by the `confidentiality_level` column and filter.
pub const CONFIDENTIALITY_LEVELS: &[&str] = &["public", "internal", "restricted"];

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub status: Option<String>,
    pub confidentiality: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Paged project listing payload.
#[derive(Debug, Serialize)]
pub struct ProjectListData {
    pub projects: Vec<ResearchProject>,
    pub pagination: Pagination,
}

/// GET /api/projects
///
/// List projects with optional status/confidentiality filters. The
/// pagination total counts the whole filtered set, not the returned page.
pub async fn list_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ProjectListQuery>,
) -> AppResult<Envelope<ProjectListData>> {
    validate_filter_values(query.status.as_deref(), query.confidentiality.as_deref())?;

    let filter = ProjectFilter {
        status: query.status,
        confidentiality: query.confidentiality,
    };
    let params = PageParams::from_query(query.page, query.limit);

    let projects = ProjectRepo::list_page(&state.pool, &filter, params).await?;
    let total = ProjectRepo::count(&state.pool, &filter).await?;

    Ok(Envelope::ok(
        ProjectListData {
            projects,
            pagination: Pagination::new(total, params),
        },
        "Projects fetched",
    ))
}

/// POST /api/projects
///
/// Create a project, optionally with an initial member list. The project
/// insert and all member inserts run in one transaction: if any member is
/// rejected (duplicate pair, unknown user), nothing persists. The lead
/// researcher is always the authenticated caller.
pub async fn create_project(
    State(state): State<AppState>,
    RequireContributor(user): RequireContributor,
    Json(input): Json<CreateProject>,
) -> AppResult<Envelope<ResearchProject>> {
    validate_create_project(&input)?;

    let project = ProjectRepo::create_with_members(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        project_id = project.id,
        lead_researcher_id = user.user_id,
        members = input.team_members.len(),
        "Project created"
    );

    Ok(Envelope::created(project, "Project created"))
}

/// GET /api/projects/{project_id}
pub async fn get_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Envelope<ResearchProject>> {
    let project = fetch_project(&state.pool, project_id).await?;
    Ok(Envelope::ok(project, "Project fetched"))
}

/// PUT /api/projects/{project_id}
///
/// Partial update: only fields present in the body are changed.
pub async fn update_project(
    State(state): State<AppState>,
    RequireContributor(_user): RequireContributor,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Envelope<ResearchProject>> {
    validate_update_project(&input)?;

    let project = ProjectRepo::update(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    Ok(Envelope::ok(project, "Project updated"))
}

/// DELETE /api/projects/{project_id}
///
/// Admin only. Members, samples, and logs cascade.
pub async fn delete_project(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Envelope<()>> {
    let deleted = ProjectRepo::delete(&state.pool, project_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    tracing::info!(project_id, "Project deleted");
    Ok(Envelope::ok((), "Project deleted"))
}

/// Fetch a project or return 404. Shared with the member/sample/log
/// handlers so listing a sub-resource of a missing project is a 404, not an
/// empty list.
pub async fn fetch_project(pool: &PgPool, project_id: DbId) -> AppResult<ResearchProject> {
    ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
}

/// Validate a member entry's role and contribution bounds.
pub fn validate_member_fields(
    errors: &mut Vec<FieldError>,
    field_prefix: &str,
    role: &str,
    contribution_percentage: f64,
) {
    if role.trim().is_empty() {
        errors.push(FieldError::new(
            format!("{field_prefix}role"),
            "Role must not be empty",
        ));
    }
    if !(0.0..=100.0).contains(&contribution_percentage) {
        errors.push(FieldError::new(
            format!("{field_prefix}contribution_percentage"),
            "Contribution percentage must be between 0 and 100",
        ));
    }
}

fn validate_filter_values(
    status: Option<&str>,
    confidentiality: Option<&str>,
) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if let Some(status) = status {
        if !PROJECT_STATUSES.contains(&status) {
            errors.push(FieldError::new(
                "status",
                format!("Status must be one of: {}", PROJECT_STATUSES.join(", ")),
            ));
        }
    }
    if let Some(level) = confidentiality {
        if !CONFIDENTIALITY_LEVELS.contains(&level) {
            errors.push(FieldError::new(
                "confidentiality",
                format!(
                    "Confidentiality level must be one of: {}",
                    CONFIDENTIALITY_LEVELS.join(", ")
                ),
            ));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn validate_create_project(input: &CreateProject) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if input.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if let Some(ref status) = input.status {
        if !PROJECT_STATUSES.contains(&status.as_str()) {
            errors.push(FieldError::new(
                "status",
                format!("Status must be one of: {}", PROJECT_STATUSES.join(", ")),
            ));
        }
    }
    if let Some(ref level) = input.confidentiality_level {
        if !CONFIDENTIALITY_LEVELS.contains(&level.as_str()) {
            errors.push(FieldError::new(
                "confidentiality_level",
                format!(
                    "Confidentiality level must be one of: {}",
                    CONFIDENTIALITY_LEVELS.join(", ")
                ),
            ));
        }
    }
    for (i, member) in input.team_members.iter().enumerate() {
        validate_team_member(&mut errors, i, member);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn validate_team_member(errors: &mut Vec<FieldError>, index: usize, member: &CreateProjectMember) {
    validate_member_fields(
        errors,
        &format!("team_members[{index}]."),
        &member.role,
        member.contribution_percentage,
    );
}

fn validate_update_project(input: &UpdateProject) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if let Some(ref title) = input.title {
        if title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title must not be empty"));
        }
    }
    if let Some(ref status) = input.status {
        if !PROJECT_STATUSES.contains(&status.as_str()) {
            errors.push(FieldError::new(
                "status",
                format!("Status must be one of: {}", PROJECT_STATUSES.join(", ")),
            ));
        }
    }
    if let Some(ref level) = input.confidentiality_level {
        if !CONFIDENTIALITY_LEVELS.contains(&level.as_str()) {
            errors.push(FieldError::new(
                "confidentiality_level",
                format!(
                    "Confidentiality level must be one of: {}",
                    CONFIDENTIALITY_LEVELS.join(", ")
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
