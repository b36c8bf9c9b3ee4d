//! Handlers for the `/admins` resource (back-office account management).
//!
//! All handlers require an authenticated admin via [`AuthAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::admin::{AdminChanges, NewAdmin};
use esdeco_core::error::CoreError;
use esdeco_core::types::DbId;
use esdeco_db::models::admin::{AdminResponse, CreateAdmin, UpdateAdmin};
use esdeco_db::repositories::AdminRepo;

use crate::auth::password::hash_password;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

const DUPLICATE_EMAIL: &str = "Admin with this email already exists";

/// Map a unique violation on the email index to the friendly 409.
fn email_conflict(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err, "uq_admins_email") {
        AppError::Core(CoreError::Conflict(DUPLICATE_EMAIL.into()))
    } else {
        AppError::Database(err)
    }
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// GET /api/v1/admins
pub async fn list_admins(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> AppResult<Json<Vec<AdminResponse>>> {
    let admins = AdminRepo::list(&state.pool).await?;
    Ok(Json(admins.iter().map(AdminResponse::from).collect()))
}

/// POST /api/v1/admins
///
/// Add a new admin. Returns 201 with the safe [`AdminResponse`].
pub async fn create_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(input): Json<NewAdmin>,
) -> AppResult<(StatusCode, Json<AdminResponse>)> {
    let input = input.validate()?;

    if AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(DUPLICATE_EMAIL.into())));
    }

    let create_dto = CreateAdmin {
        name: input.name,
        email: input.email,
        password_hash: hash(&input.password)?,
    };
    let admin = AdminRepo::create(&state.pool, &create_dto)
        .await
        .map_err(email_conflict)?;

    tracing::info!(admin_id = admin.id, created_by = auth.admin_id, "Admin created");
    Ok((StatusCode::CREATED, Json(AdminResponse::from(&admin))))
}

/// PATCH /api/v1/admins/{id}
///
/// Change name, email or password. At least one field must be present.
pub async fn update_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AdminChanges>,
) -> AppResult<Json<AdminResponse>> {
    let input = input.validate()?;

    if let Some(email) = input.email.as_deref() {
        if let Some(existing) = AdminRepo::find_by_email(&state.pool, email).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(DUPLICATE_EMAIL.into())));
            }
        }
    }

    let password_hash = match input.new_password.as_deref() {
        Some(p) => Some(hash(p)?),
        None => None,
    };
    let update_dto = UpdateAdmin {
        name: input.name,
        email: input.email,
        password_hash,
    };

    let admin = AdminRepo::update(&state.pool, id, &update_dto)
        .await
        .map_err(email_conflict)?
        .ok_or_else(|| AppError::not_found("Admin", id))?;

    Ok(Json(AdminResponse::from(&admin)))
}

/// DELETE /api/v1/admins/{id}
///
/// Soft-deactivate an admin. Admins cannot deactivate themselves.
pub async fn deactivate_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if id == auth.admin_id {
        return Err(AppError::BadRequest(
            "You cannot deactivate your own account".into(),
        ));
    }
    if !AdminRepo::deactivate(&state.pool, id).await? {
        return Err(AppError::not_found("Admin", id));
    }
    tracing::info!(admin_id = id, deactivated_by = auth.admin_id, "Admin deactivated");
    Ok(Json(MessageResponse::new("Admin deactivated successfully")))
}
