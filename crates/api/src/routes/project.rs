//! Route definitions for projects and their sub-resources.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{log, member, project, sample};
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list_projects
/// POST   /                                  -> create_project
/// GET    /{project_id}                      -> get_project
/// PUT    /{project_id}                      -> update_project
/// DELETE /{project_id}                      -> delete_project
/// GET    /{project_id}/members              -> list_members
/// POST   /{project_id}/members              -> add_member
/// PUT    /{project_id}/members/{user_id}    -> update_member
/// GET    /{project_id}/samples              -> list_samples
/// DELETE /{project_id}/samples/{sample_id}  -> delete_sample
/// GET    /{project_id}/logs                 -> list_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::list_projects).post(project::create_project),
        )
        .route(
            "/{project_id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/{project_id}/members",
            get(member::list_members).post(member::add_member),
        )
        .route(
            "/{project_id}/members/{user_id}",
            put(member::update_member),
        )
        .route("/{project_id}/samples", get(sample::list_samples))
        .route(
            "/{project_id}/samples/{sample_id}",
            delete(sample::delete_sample),
        )
        .route("/{project_id}/logs", get(log::list_logs))
}
