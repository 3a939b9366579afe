//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Authentication is always checked first, so
//! a missing or invalid token yields 401 before any role comparison; a valid
//! token with an insufficient role yields 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use labtrack_core::error::CoreError;
use labtrack_core::roles::{is_allowed, CONTRIBUTOR_ROLES, ROLE_ADMIN};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Envelope<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Envelope::ok((), "ok"))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_allowed(&user.role, &[ROLE_ADMIN]) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires `researcher` or `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn mutate(RequireContributor(user): RequireContributor) -> AppResult<Envelope<()>> {
///     Ok(Envelope::ok((), "ok"))
/// }
/// ```
pub struct RequireContributor(pub AuthUser);

impl FromRequestParts<AppState> for RequireContributor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_allowed(&user.role, CONTRIBUTOR_ROLES) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Researcher or Admin role required".into(),
            )));
        }
        Ok(RequireContributor(user))
    }
}
