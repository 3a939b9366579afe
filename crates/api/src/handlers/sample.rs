//! Handlers for sample metadata.

use axum::extract::{Path, State};
use labtrack_core::error::CoreError;
use labtrack_core::types::DbId;
use labtrack_db::models::sample::SampleWithUploader;
use labtrack_db::repositories::SampleRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::fetch_project;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireContributor;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/projects/{project_id}/samples
pub async fn list_samples(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Envelope<Vec<SampleWithUploader>>> {
    fetch_project(&state.pool, project_id).await?;
    let samples = SampleRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Envelope::ok(samples, "Samples fetched"))
}

/// DELETE /api/projects/{project_id}/samples/{sample_id}
///
/// Deleting zero rows is a 404, including a valid sample id under the wrong
/// project.
pub async fn delete_sample(
    State(state): State<AppState>,
    RequireContributor(_user): RequireContributor,
    Path((project_id, sample_id)): Path<(DbId, DbId)>,
) -> AppResult<Envelope<()>> {
    let deleted = SampleRepo::delete(&state.pool, project_id, sample_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Sample",
            id: sample_id,
        }));
    }

    tracing::info!(project_id, sample_id, "Sample deleted");
    Ok(Envelope::ok((), "Sample deleted"))
}
