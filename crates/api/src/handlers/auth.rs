//! Handlers for the `/auth` resource (login, current admin).

use axum::extract::State;
use axum::{Form, Json};
use chrono::Utc;
use esdeco_core::admin::{LOCK_DURATION_MINS, MAX_FAILED_ATTEMPTS};
use esdeco_core::error::CoreError;
use esdeco_db::models::admin::AdminResponse;
use esdeco_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /auth/login`, in OAuth2 password-grant shape.
/// `username` carries the admin's email.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Five consecutive failures lock the
/// account for fifteen minutes.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    // 1. Find admin by email.
    let admin = AdminRepo::find_by_email(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    // 2. Check if the account is active.
    if !admin.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Check if the account is temporarily locked.
    if let Some(locked_until) = admin.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    // 4. Verify password.
    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failures = AdminRepo::increment_failed_login(&state.pool, admin.id).await?;
        if failures >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            AdminRepo::lock_account(&state.pool, admin.id, lock_until).await?;
            tracing::warn!(admin_id = admin.id, failures, "Admin account locked");
        }
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 5. On success: reset failed count, set last_login_at.
    AdminRepo::record_successful_login(&state.pool, admin.id).await?;

    let access_token = generate_access_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}

/// GET /api/v1/auth/me
///
/// Profile of the admin the token was issued to.
pub async fn me(State(state): State<AppState>, auth: AuthAdmin) -> AppResult<Json<AdminResponse>> {
    let admin = AdminRepo::find_by_id(&state.pool, auth.admin_id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin", auth.admin_id))?;
    Ok(Json(AdminResponse::from(&admin)))
}
