//! Handlers for the `/latest-works` showcase.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esdeco_core::latest_work::LatestWorkDraft;
use esdeco_core::types::DbId;
use esdeco_db::models::latest_work::LatestWork;
use esdeco_db::repositories::LatestWorkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/latest-works
pub async fn list_latest_works(State(state): State<AppState>) -> AppResult<Json<Vec<LatestWork>>> {
    Ok(Json(LatestWorkRepo::list(&state.pool).await?))
}

/// POST /api/v1/latest-works
pub async fn create_latest_work(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<LatestWorkDraft>,
) -> AppResult<(StatusCode, Json<LatestWork>)> {
    let draft = input.validate()?;
    let work = LatestWorkRepo::create(&state.pool, &draft).await?;
    Ok((StatusCode::CREATED, Json(work)))
}

/// PUT /api/v1/latest-works/{id}
pub async fn update_latest_work(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<LatestWorkDraft>,
) -> AppResult<Json<LatestWork>> {
    let draft = input.validate()?;
    let work = LatestWorkRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::not_found("Latest work", id))?;
    Ok(Json(work))
}

/// DELETE /api/v1/latest-works/{id}
pub async fn delete_latest_work(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !LatestWorkRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Latest work", id));
    }
    Ok(Json(MessageResponse::new("Latest work deleted successfully")))
}
