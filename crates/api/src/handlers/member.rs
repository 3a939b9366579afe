//! Handlers for project membership.

use axum::extract::{Path, State};
use axum::Json;
use labtrack_core::error::CoreError;
use labtrack_core::types::DbId;
use labtrack_db::models::member::{AddMember, MemberWithUser, ProjectMember, UpdateMember};
use labtrack_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult, FieldError};
use crate::handlers::project::{fetch_project, validate_member_fields};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireContributor;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/projects/{project_id}/members
///
/// 404 when the project itself is missing, not an empty list.
pub async fn list_members(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Envelope<Vec<MemberWithUser>>> {
    fetch_project(&state.pool, project_id).await?;
    let members = MemberRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Envelope::ok(members, "Members fetched"))
}

/// POST /api/projects/{project_id}/members
///
/// 409 when the user is already a member of the project.
pub async fn add_member(
    State(state): State<AppState>,
    RequireContributor(_user): RequireContributor,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddMember>,
) -> AppResult<Envelope<ProjectMember>> {
    fetch_project(&state.pool, project_id).await?;

    let mut errors: Vec<FieldError> = Vec::new();
    validate_member_fields(&mut errors, "", &input.role, input.contribution_percentage);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let member = MemberRepo::add(&state.pool, project_id, &input).await?;

    tracing::info!(project_id, user_id = input.user_id, "Member added");
    Ok(Envelope::created(member, "Member added"))
}

/// PUT /api/projects/{project_id}/members/{user_id}
///
/// Updates role and/or contribution; 404 when no membership row matches the
/// (project, user) pair.
pub async fn update_member(
    State(state): State<AppState>,
    RequireContributor(_user): RequireContributor,
    Path((project_id, user_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMember>,
) -> AppResult<Envelope<ProjectMember>> {
    let mut errors: Vec<FieldError> = Vec::new();
    if let Some(ref role) = input.role {
        if role.trim().is_empty() {
            errors.push(FieldError::new("role", "Role must not be empty"));
        }
    }
    if let Some(contribution) = input.contribution_percentage {
        if !(0.0..=100.0).contains(&contribution) {
            errors.push(FieldError::new(
                "contribution_percentage",
                "Contribution percentage must be between 0 and 100",
            ));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let member = MemberRepo::update(&state.pool, project_id, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project member",
            id: user_id,
        }))?;

    Ok(Envelope::ok(member, "Member updated"))
}
