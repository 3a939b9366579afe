//! Handlers for the `/auth` resource (login, current user).

use axum::extract::State;
use axum::Json;
use labtrack_core::error::CoreError;
use labtrack_db::models::user::UserResponse;
use labtrack_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication payload returned by login.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub user: UserResponse,
    pub token: String,
    /// Token lifetime in seconds.
    #[serde(rename = "tokenExpiration")]
    pub token_expiration: i64,
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Returns the user and an access
/// token. Unknown usernames and wrong passwords produce the same 401
/// response; the distinction exists only in the server logs.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Envelope<LoginData>> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::InvalidCredential(input.username.clone())))?;

    // 2. Verify password off the async runtime; Argon2 is CPU bound and a
    //    burst of logins must not stall unrelated requests.
    let password = input.password;
    let stored_hash = user.password_hash.clone();
    let password_valid = tokio::task::spawn_blocking(move || {
        verify_password(&password, &stored_hash)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {e}")))?
    .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredential(user.username)));
    }

    // 3. Issue the access token.
    let token = generate_access_token(user.id, &user.username, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Envelope::ok(
        LoginData {
            user: user.into(),
            token,
            token_expiration: state.config.jwt.access_token_expiry_secs,
        },
        "Login successful",
    ))
}

/// GET /api/auth/me
///
/// Return the authenticated user's current record. 401 if the user behind
/// the token no longer exists.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Envelope<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Envelope::ok(user.into(), "Authenticated user"))
}
