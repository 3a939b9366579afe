pub mod auth;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/me                                     current user (auth)
///
/// /projects                                    list (auth), create (contributor)
/// /projects/{projectId}                        get (auth), update (contributor),
///                                              delete (admin)
/// /projects/{projectId}/members                list (auth), add (contributor)
/// /projects/{projectId}/members/{userId}       update (contributor)
/// /projects/{projectId}/samples                list (auth)
/// /projects/{projectId}/samples/{sampleId}     delete (contributor)
/// /projects/{projectId}/logs                   list + summary (auth)
/// ```
///
/// Authorization is enforced by handler extractors, not route layers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
}
